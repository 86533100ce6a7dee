// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Sequential batch provisioning of validation codes.

use tracing::{debug, info, instrument};

use crate::code::{CodeGenerator, ValidationCode};
use crate::error::{BatchError, Result};
use crate::record::AccountRecordBuilder;
use crate::service::ProvisioningService;

/// One successful submission: a code and the account it became.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchEntry {
	pub code: ValidationCode,
	pub account_id: String,
}

/// Ordered record of the submissions that succeeded in one batch run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
	entries: Vec<BatchEntry>,
}

impl BatchReport {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, code: ValidationCode, account_id: String) {
		self.entries.push(BatchEntry { code, account_id });
	}

	pub fn entries(&self) -> &[BatchEntry] {
		&self.entries
	}

	/// Codes in generation (and submission) order.
	pub fn codes(&self) -> impl Iterator<Item = &ValidationCode> {
		self.entries.iter().map(|entry| &entry.code)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Drives the generate → build → submit loop against a
/// [`ProvisioningService`].
///
/// Submissions are strictly sequential: the remote duplicate-external-ID
/// check and the report ordering both depend on it, and the batches this
/// tool targets are tens of codes, not thousands.
pub struct BatchOrchestrator<'a> {
	service: &'a dyn ProvisioningService,
	builder: AccountRecordBuilder,
	generator: CodeGenerator,
}

impl<'a> BatchOrchestrator<'a> {
	pub fn new(service: &'a dyn ProvisioningService, builder: AccountRecordBuilder) -> Self {
		Self {
			service,
			builder,
			generator: CodeGenerator::new(),
		}
	}

	/// Provisions `count` codes of `code_length` digits.
	///
	/// Fails fast: the first submission error aborts the batch. Accounts
	/// already created remotely are not rolled back, and no further codes
	/// are generated or submitted; the returned
	/// [`BatchError::Submission`] carries the report of what did succeed.
	#[instrument(skip(self))]
	pub async fn run(&self, count: u32, code_length: usize) -> Result<BatchReport> {
		if count == 0 {
			return Err(BatchError::InvalidCount(count));
		}

		let mut report = BatchReport::new();
		for _ in 0..count {
			let code = self.generator.next_code(code_length)?;
			let record = self.builder.build(&code);
			debug!(code = %code, "submitting validation code");
			match self.service.submit(&record).await {
				Ok(account_id) => {
					info!(account_id = %account_id, "Adding {code} to Bridge");
					report.push(code, account_id);
				}
				Err(source) => {
					return Err(BatchError::Submission {
						code,
						completed: report,
						source,
					});
				}
			}
		}

		info!(added = report.len(), "batch complete");
		Ok(report)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::memory::MemoryProvisioningService;

	#[tokio::test]
	async fn test_zero_count_is_rejected_without_submitting() {
		let service = MemoryProvisioningService::new();
		let orchestrator = BatchOrchestrator::new(&service, AccountRecordBuilder::default());

		let result = orchestrator.run(0, 8).await;

		assert!(matches!(result, Err(BatchError::InvalidCount(0))));
		assert_eq!(service.submission_count(), 0);
	}

	#[tokio::test]
	async fn test_successful_batch_reports_every_code() {
		let service = MemoryProvisioningService::new();
		let orchestrator = BatchOrchestrator::new(&service, AccountRecordBuilder::default());

		let report = orchestrator.run(3, 8).await.unwrap();

		assert_eq!(report.len(), 3);
		assert_eq!(service.submission_count(), 3);
		for entry in report.entries() {
			assert_eq!(entry.code.len(), 8);
			// The stub echoes the external ID back as the identifier.
			assert_eq!(entry.account_id, entry.code.as_str());
		}
	}

	#[tokio::test]
	async fn test_report_preserves_submission_order() {
		let service = MemoryProvisioningService::new();
		let orchestrator = BatchOrchestrator::new(&service, AccountRecordBuilder::default());

		let report = orchestrator.run(5, 8).await.unwrap();

		let reported: Vec<String> = report.codes().map(ToString::to_string).collect();
		let submitted: Vec<String> = service
			.submitted()
			.iter()
			.map(|record| record.external_id().unwrap().to_string())
			.collect();
		assert_eq!(reported, submitted);
	}

	// If the k-th submission fails, exactly k-1 submissions succeeded and
	// nothing beyond the k-th was generated or submitted.
	#[tokio::test]
	async fn test_fail_fast_aborts_on_first_error() {
		let service = MemoryProvisioningService::new().fail_on(3);
		let orchestrator = BatchOrchestrator::new(&service, AccountRecordBuilder::default());

		let err = orchestrator.run(5, 8).await.unwrap_err();

		match err {
			BatchError::Submission {
				completed, source, ..
			} => {
				assert_eq!(completed.len(), 2);
				assert!(matches!(
					source,
					crate::ProvisioningError::SubmissionFailed(_)
				));
			}
			other => panic!("expected Submission error, got {other:?}"),
		}
		// The 3rd call was attempted, the 4th and 5th never happened.
		assert_eq!(service.submission_count(), 3);
	}

	#[tokio::test]
	async fn test_failure_on_first_submission_completes_nothing() {
		let service = MemoryProvisioningService::new().fail_on(1);
		let orchestrator = BatchOrchestrator::new(&service, AccountRecordBuilder::default());

		let err = orchestrator.run(2, 8).await.unwrap_err();

		match err {
			BatchError::Submission { completed, .. } => assert!(completed.is_empty()),
			other => panic!("expected Submission error, got {other:?}"),
		}
		assert_eq!(service.submission_count(), 1);
	}

	#[tokio::test]
	async fn test_submitted_records_are_fully_shaped() {
		let service = MemoryProvisioningService::new();
		let orchestrator =
			BatchOrchestrator::new(&service, AccountRecordBuilder::new("pilot_study"));

		orchestrator.run(1, 8).await.unwrap();

		let submitted = service.submitted();
		let record = &submitted[0];
		let code = record.external_ids["pilot_study"].clone();
		assert_eq!(record.password, format!("{code}Hybrid!"));
		assert_eq!(record.attributes["consumed"], "false");
	}
}
