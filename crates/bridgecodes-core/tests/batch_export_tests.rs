// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! End-to-end batch scenarios: orchestrator + in-memory service + export.

use bridgecodes_core::{
	report, AccountRecordBuilder, BatchError, BatchOrchestrator, MemoryProvisioningService,
	ProvisioningService,
};

#[tokio::test]
async fn successful_batch_of_three_exports_header_and_codes() {
	let service = MemoryProvisioningService::new();
	service.authenticate().await.unwrap();
	let orchestrator = BatchOrchestrator::new(&service, AccountRecordBuilder::default());

	let batch = orchestrator.run(3, 8).await.unwrap();

	assert_eq!(batch.len(), 3);
	assert_eq!(service.submission_count(), 3);
	for entry in batch.entries() {
		assert_eq!(entry.code.len(), 8);
		assert_eq!(entry.account_id, entry.code.as_str());
	}

	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("codes.txt");
	report::write(&path, &batch).unwrap();

	let contents = std::fs::read_to_string(&path).unwrap();
	let lines: Vec<&str> = contents.lines().collect();
	assert_eq!(lines.len(), 4);
	assert_eq!(lines[0], report::REPORT_HEADER);
	let exported: Vec<String> = batch.codes().map(ToString::to_string).collect();
	assert_eq!(&lines[1..], exported.as_slice());
}

// The no-export-on-failure policy itself is exercised at the CLI layer,
// where the export step lives.
#[tokio::test]
async fn failing_batch_leaves_exactly_two_successes() {
	let service = MemoryProvisioningService::new().fail_on(3);
	service.authenticate().await.unwrap();
	let orchestrator = BatchOrchestrator::new(&service, AccountRecordBuilder::default());

	let err = orchestrator.run(5, 8).await.unwrap_err();

	let completed = match err {
		BatchError::Submission { completed, .. } => completed,
		other => panic!("expected Submission error, got {other:?}"),
	};
	assert_eq!(completed.len(), 2);
	assert_eq!(service.submission_count(), 3);
}
