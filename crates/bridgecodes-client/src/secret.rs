// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Secret wrapper preventing accidental logging of the admin password.

use std::fmt;

use zeroize::Zeroize;

/// A string that redacts itself in `Debug` output and zeroizes its memory
/// on drop. Access the value explicitly through [`SecretString::expose`].
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the underlying secret. Call sites should be the only places
	/// the raw value ever appears.
	pub fn expose(&self) -> &str {
		&self.0
	}
}

impl From<String> for SecretString {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("SecretString(<redacted>)")
	}
}

impl Drop for SecretString {
	fn drop(&mut self) {
		self.0.zeroize();
	}
}
