// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for code generation and batch provisioning.

use thiserror::Error;

use crate::batch::BatchReport;
use crate::code::ValidationCode;

/// Errors producing or parsing validation codes.
#[derive(Debug, Error)]
pub enum CodeError {
	/// The OS entropy source could not be read.
	#[error("entropy source unavailable: {0}")]
	EntropyUnavailable(#[source] rand::Error),

	/// Input was not a non-empty string of decimal digits.
	#[error("invalid validation code {0:?}: must be decimal digits")]
	InvalidCode(String),

	/// A code must contain at least one digit.
	#[error("invalid code length {0}: must be at least 1")]
	InvalidLength(usize),
}

/// Errors surfaced by a [`ProvisioningService`](crate::ProvisioningService)
/// implementation.
#[derive(Debug, Error)]
pub enum ProvisioningError {
	/// Initial sign-in to the remote platform failed.
	#[error("authentication failed: {0}")]
	AuthenticationFailed(String),

	/// `submit` was called before `authenticate` succeeded.
	#[error("not authenticated: authenticate before submitting records")]
	NotAuthenticated,

	/// An individual account-creation call failed (network error, duplicate
	/// external ID, validation rejection by the remote platform).
	#[error("submission failed: {0}")]
	SubmissionFailed(String),
}

/// Errors aborting a provisioning batch.
///
/// A batch fails fast: accounts already created remotely are not rolled
/// back, and no further codes are generated or submitted.
#[derive(Debug, Error)]
pub enum BatchError {
	/// The requested code count must be greater than zero.
	#[error("invalid code count {0}: must be greater than zero")]
	InvalidCount(u32),

	#[error(transparent)]
	Code(#[from] CodeError),

	/// A submission failed partway through the batch. `completed` holds the
	/// report of every submission that succeeded before the abort.
	#[error("submitting code {code} failed after {} successful submissions: {source}", .completed.len())]
	Submission {
		code: ValidationCode,
		completed: BatchReport,
		#[source]
		source: ProvisioningError,
	},
}

/// Result type alias for batch provisioning operations.
pub type Result<T> = std::result::Result<T, BatchError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_submission_error_reports_completed_count() {
		let mut completed = BatchReport::new();
		completed.push(ValidationCode::new("11112222").unwrap(), "acc-1".to_string());
		let err = BatchError::Submission {
			code: ValidationCode::new("33334444").unwrap(),
			completed,
			source: ProvisioningError::SubmissionFailed("409: duplicate".to_string()),
		};
		let message = err.to_string();
		assert!(message.contains("33334444"));
		assert!(message.contains("1 successful submissions"));
	}

	#[test]
	fn test_invalid_count_message() {
		assert_eq!(
			BatchError::InvalidCount(0).to_string(),
			"invalid code count 0: must be greater than zero"
		);
	}
}
