// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! One-shot export of a batch report to a text file.

use std::io;
use std::path::Path;

use crate::batch::BatchReport;

/// Single-column header of the exported report.
pub const REPORT_HEADER: &str = "Validation Code";

/// Renders the report body: header line, then one code per line in
/// generation order, with a trailing newline.
///
/// Lines are accumulated and joined once rather than appended to a growing
/// string.
pub fn render(report: &BatchReport) -> String {
	let mut lines = Vec::with_capacity(report.len() + 1);
	lines.push(REPORT_HEADER.to_string());
	for code in report.codes() {
		lines.push(code.to_string());
	}
	let mut body = lines.join("\n");
	body.push('\n');
	body
}

/// Writes the rendered report to `path` in a single write.
///
/// Write failure does not un-create accounts already provisioned remotely;
/// the caller reports it and exits non-zero.
pub fn write(path: &Path, report: &BatchReport) -> io::Result<()> {
	std::fs::write(path, render(report))
}
