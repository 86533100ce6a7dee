// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Validation code generation and batch provisioning for Bridge.
//!
//! This crate is the workflow behind the `bridgecodes` tool: it generates
//! single-use numeric validation codes, shapes each one into a
//! platform-compliant account record (password policy, attribute limits,
//! no-sharing flag, test-user tagging), and submits them one at a time
//! through a [`ProvisioningService`], failing fast on the first error.
//!
//! The real Bridge client lives in `bridgecodes-client`;
//! [`MemoryProvisioningService`] is the in-memory substitute for tests.

mod batch;
mod code;
mod error;
mod memory;
mod record;
pub mod report;
mod sanitize;
mod service;

pub use batch::{BatchEntry, BatchOrchestrator, BatchReport};
pub use code::{CodeGenerator, ValidationCode, DEFAULT_CODE_LENGTH};
pub use error::{BatchError, CodeError, ProvisioningError, Result};
pub use memory::MemoryProvisioningService;
pub use record::{
	AccountRecord, AccountRecordBuilder, SharingScope, ATTRIBUTE_CONSUMED, ATTRIBUTE_VALUE_FALSE,
	HYBRID_VALIDATION_STUDY_ID, PASSWORD_SUFFIX, TEST_USER_DATA_GROUP,
};
pub use sanitize::{sanitize_attributes, ATTRIBUTE_LENGTH_MAX};
pub use service::ProvisioningService;
