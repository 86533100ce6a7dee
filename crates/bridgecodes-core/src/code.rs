// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Validation code type and generator.

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::CodeError;

/// Default number of digits in a generated validation code.
pub const DEFAULT_CODE_LENGTH: usize = 8;

/// A single-use validation code: a fixed-length string of decimal digits.
///
/// Codes double as credentials (the external ID and the password prefix of
/// the provisioned account), so they are generated from OS entropy rather
/// than a statistical PRNG. Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ValidationCode(String);

impl ValidationCode {
	/// Constructs a code from untrusted input, validating that it is
	/// non-empty and consists only of decimal digits.
	pub fn new(code: impl Into<String>) -> Result<Self, CodeError> {
		let code = code.into();
		if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
			return Err(CodeError::InvalidCode(code));
		}
		Ok(Self(code))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Number of digits in the code.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for ValidationCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Generates validation codes from the operating system's entropy source.
///
/// Generated codes are not deduplicated, within a run or across runs; a
/// collision surfaces as a duplicate-external-ID rejection from the remote
/// platform. At 10^8 possible codes and batches of tens, that is accepted
/// rather than papered over with local uniqueness checks.
#[derive(Debug, Default)]
pub struct CodeGenerator;

impl CodeGenerator {
	pub fn new() -> Self {
		Self
	}

	/// Produces a code of exactly `length` digits, each drawn independently
	/// and uniformly from `0`–`9`. `length` must be at least 1, matching the
	/// non-empty invariant [`ValidationCode::new`] enforces.
	///
	/// Bytes are rejection-sampled below 250 so that `byte % 10` is unbiased.
	/// Fails with [`CodeError::EntropyUnavailable`] if the OS entropy source
	/// cannot be read; the caller is expected to abort the whole batch.
	pub fn next_code(&self, length: usize) -> Result<ValidationCode, CodeError> {
		if length == 0 {
			return Err(CodeError::InvalidLength(length));
		}
		let mut digits = String::with_capacity(length);
		let mut buf = [0u8; 16];
		while digits.len() < length {
			OsRng
				.try_fill_bytes(&mut buf)
				.map_err(CodeError::EntropyUnavailable)?;
			for byte in buf {
				if digits.len() == length {
					break;
				}
				// 250 is the largest multiple of 10 that fits in a byte.
				if byte < 250 {
					digits.push(char::from(b'0' + byte % 10));
				}
			}
		}
		Ok(ValidationCode(digits))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generated_code_has_default_length() {
		let code = CodeGenerator::new().next_code(DEFAULT_CODE_LENGTH).unwrap();
		assert_eq!(code.len(), DEFAULT_CODE_LENGTH);
	}

	#[test]
	fn test_generated_code_is_all_digits() {
		let code = CodeGenerator::new().next_code(32).unwrap();
		assert!(code.as_str().bytes().all(|b| b.is_ascii_digit()));
	}

	#[test]
	fn test_zero_length_is_rejected() {
		// The generator must never manufacture an empty code the validated
		// constructor would refuse.
		let result = CodeGenerator::new().next_code(0);
		assert!(matches!(result, Err(CodeError::InvalidLength(0))));
	}

	#[test]
	fn test_new_rejects_non_digits() {
		assert!(ValidationCode::new("1234a678").is_err());
		assert!(ValidationCode::new("1234 678").is_err());
		assert!(ValidationCode::new("").is_err());
	}

	#[test]
	fn test_new_accepts_digits() {
		let code = ValidationCode::new("00112233").unwrap();
		assert_eq!(code.as_str(), "00112233");
		assert_eq!(code.to_string(), "00112233");
	}
}
