// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! `bridgecodes` - provisions single-use hybrid validation codes as
//! external-ID-backed accounts in Bridge.
//!
//! Each run signs in once with the admin credentials, then generates and
//! submits `count` random numeric codes one at a time, failing fast on the
//! first error. Codes already created on Bridge are never rolled back.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bridgecodes_client::{BridgeClient, BridgeConfig, SecretString, DEFAULT_BASE_URL};
use bridgecodes_core::{
	report, AccountRecordBuilder, BatchOrchestrator, BatchReport, ProvisioningService,
	DEFAULT_CODE_LENGTH, HYBRID_VALIDATION_STUDY_ID,
};

/// Provision a batch of hybrid validation codes in Bridge.
#[derive(Parser, Debug)]
#[command(name = "bridgecodes", version, about)]
struct Args {
	/// Bridge admin account email
	#[arg(env = "BR_EMAIL")]
	email: String,

	/// Bridge admin account password
	#[arg(env = "BR_PW", hide_env_values = true)]
	password: String,

	/// Bridge app (project) identifier
	#[arg(env = "BR_ID")]
	app_id: String,

	/// Number of new validation codes to provision
	count: u32,

	/// Length in digits of each generated code
	#[arg(long, default_value_t = DEFAULT_CODE_LENGTH)]
	code_length: usize,

	/// Study identifier used as the external ID namespace
	#[arg(long, default_value = HYBRID_VALIDATION_STUDY_ID)]
	study_id: String,

	/// Base URL of the Bridge server
	#[arg(long, env = "BR_SERVER_URL", default_value = DEFAULT_BASE_URL)]
	server_url: String,

	/// Write a single-column report of the generated codes to this file
	#[arg(long, value_name = "PATH")]
	export: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();

	let args = Args::parse();
	run(args).await
}

async fn run(args: Args) -> Result<()> {
	let config = BridgeConfig::new(
		args.server_url,
		args.app_id,
		args.email,
		SecretString::new(args.password),
	);
	let client = BridgeClient::new(config);
	client
		.authenticate()
		.await
		.context("failed to sign in to Bridge")?;

	let builder = AccountRecordBuilder::new(&args.study_id);
	let batch = provision_and_export(
		&client,
		builder,
		args.count,
		args.code_length,
		args.export.as_deref(),
	)
	.await?;

	println!("Successfully added {} new codes to Bridge", batch.len());
	Ok(())
}

/// Runs the batch and, only once every submission has succeeded, writes the
/// export file. An aborted batch never produces a report file; a write
/// failure still exits non-zero but leaves the created accounts in place.
async fn provision_and_export(
	service: &dyn ProvisioningService,
	builder: AccountRecordBuilder,
	count: u32,
	code_length: usize,
	export: Option<&Path>,
) -> Result<BatchReport> {
	let orchestrator = BatchOrchestrator::new(service, builder);
	let batch = orchestrator
		.run(count, code_length)
		.await
		.context("batch aborted")?;

	if let Some(path) = export {
		export_report(path, &batch)?;
	}
	Ok(batch)
}

fn export_report(path: &Path, batch: &BatchReport) -> Result<()> {
	report::write(path, batch)
		.with_context(|| format!("failed to write report to {}", path.display()))?;
	info!(path = %path.display(), codes = batch.len(), "wrote validation code report");
	Ok(())
}
