// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Bridge REST client for the `bridgecodes` tool.
//!
//! Implements the [`bridgecodes_core::ProvisioningService`] boundary against
//! the real platform: a one-time admin sign-in
//! (`POST /v3/auth/signIn`) followed by one participant creation
//! (`POST /v3/participants`) per validation code, all on the same session.

mod client;
mod secret;
mod types;

pub use client::{BridgeClient, BridgeConfig, DEFAULT_BASE_URL};
pub use secret::SecretString;
