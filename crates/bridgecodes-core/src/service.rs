// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;

use crate::error::ProvisioningError;
use crate::record::AccountRecord;

/// The capability the batch workflow needs from the remote platform.
///
/// Implementations authenticate once, then accept records one at a time;
/// every submission in a batch rides the same authenticated session. Each
/// call is treated as synchronous and blocking by the orchestrator — there
/// is no internal timeout or retry here, that belongs to the transport.
#[async_trait]
pub trait ProvisioningService: Send + Sync {
	/// Signs in to the remote platform. Must succeed before any `submit`.
	async fn authenticate(&self) -> Result<(), ProvisioningError>;

	/// Creates one account and returns the platform-assigned identifier.
	async fn submit(&self, record: &AccountRecord) -> Result<String, ProvisioningError>;
}
