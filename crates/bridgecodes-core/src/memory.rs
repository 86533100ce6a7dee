// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! In-memory [`ProvisioningService`] for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ProvisioningError;
use crate::record::AccountRecord;
use crate::service::ProvisioningService;

/// Records every submission and echoes the record's external ID back as the
/// assigned account identifier. Failures can be injected per call index.
///
/// Exported (not `cfg(test)`) so downstream crates can substitute it for
/// the real Bridge client in their own tests.
#[derive(Debug, Default)]
pub struct MemoryProvisioningService {
	submitted: Mutex<Vec<AccountRecord>>,
	calls: AtomicUsize,
	fail_on: Option<usize>,
	fail_authentication: bool,
}

impl MemoryProvisioningService {
	pub fn new() -> Self {
		Self::default()
	}

	/// Makes the `n`-th submission (1-indexed) fail with
	/// [`ProvisioningError::SubmissionFailed`].
	pub fn fail_on(mut self, n: usize) -> Self {
		self.fail_on = Some(n);
		self
	}

	/// Makes `authenticate` fail.
	pub fn fail_authentication(mut self) -> Self {
		self.fail_authentication = true;
		self
	}

	/// Every record submitted so far, including the one a failure was
	/// injected for, in call order.
	pub fn submitted(&self) -> Vec<AccountRecord> {
		self.submitted.lock().expect("lock poisoned").clone()
	}

	/// Number of `submit` calls observed, successful or not.
	pub fn submission_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl ProvisioningService for MemoryProvisioningService {
	async fn authenticate(&self) -> Result<(), ProvisioningError> {
		if self.fail_authentication {
			return Err(ProvisioningError::AuthenticationFailed(
				"injected authentication failure".to_string(),
			));
		}
		Ok(())
	}

	async fn submit(&self, record: &AccountRecord) -> Result<String, ProvisioningError> {
		let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
		self.submitted
			.lock()
			.expect("lock poisoned")
			.push(record.clone());

		if self.fail_on == Some(call) {
			return Err(ProvisioningError::SubmissionFailed(format!(
				"injected failure on submission {call}"
			)));
		}

		record
			.external_id()
			.map(str::to_string)
			.ok_or_else(|| ProvisioningError::SubmissionFailed("record has no external ID".to_string()))
	}
}
