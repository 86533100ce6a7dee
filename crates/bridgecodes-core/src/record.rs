// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Account record shaping for hybrid validation codes.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::code::ValidationCode;
use crate::sanitize::sanitize_attributes;

/// Default external ID namespace for hybrid validation code accounts.
pub const HYBRID_VALIDATION_STUDY_ID: &str = "hybrid_validation_study";

/// Appended to every code to satisfy Bridge's password policy: at least one
/// uppercase letter, one lowercase letter, and one symbol.
pub const PASSWORD_SUFFIX: &str = "Hybrid!";

/// Data group marking these synthetic accounts so they can be filtered out
/// of real-study reporting downstream.
pub const TEST_USER_DATA_GROUP: &str = "test_user";

/// Attribute tracking whether a code has been redeemed by a participant.
pub const ATTRIBUTE_CONSUMED: &str = "consumed";
pub const ATTRIBUTE_VALUE_FALSE: &str = "false";

/// Bridge's participant data-sharing flag, in its snake_case wire form.
///
/// Validation code accounts are always provisioned with
/// [`SharingScope::NoSharing`]: they must never contribute data to the
/// research data repository.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SharingScope {
	NoSharing,
	SponsorsAndPartners,
	AllQualifiedResearchers,
}

/// One provisioning request: an external-ID-backed account ready to submit.
///
/// Serializes to the camelCase JSON Bridge expects for a `SignUp` body.
/// Constructed fresh per code and discarded after submission.
#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
	pub external_ids: BTreeMap<String, String>,
	pub password: String,
	pub data_groups: Vec<String>,
	pub sharing_scope: SharingScope,
	pub attributes: BTreeMap<String, String>,
}

// The password is a credential; keep it out of logs and panic messages.
impl fmt::Debug for AccountRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AccountRecord")
			.field("external_ids", &self.external_ids)
			.field("password", &"<redacted>")
			.field("data_groups", &self.data_groups)
			.field("sharing_scope", &self.sharing_scope)
			.field("attributes", &self.attributes)
			.finish()
	}
}

impl AccountRecord {
	/// The external ID value, i.e. the validation code this record carries.
	pub fn external_id(&self) -> Option<&str> {
		self.external_ids.values().next().map(String::as_str)
	}
}

/// Builds one [`AccountRecord`] per generated code.
///
/// Pure construction: deterministic given the code and the configured
/// external ID namespace (fixed per deployment).
#[derive(Clone, Debug)]
pub struct AccountRecordBuilder {
	study_id: String,
}

impl AccountRecordBuilder {
	/// `study_id` is the external ID namespace the codes are filed under.
	pub fn new(study_id: impl Into<String>) -> Self {
		Self {
			study_id: study_id.into(),
		}
	}

	pub fn build(&self, code: &ValidationCode) -> AccountRecord {
		let mut attributes = BTreeMap::new();
		attributes.insert(
			ATTRIBUTE_CONSUMED.to_string(),
			ATTRIBUTE_VALUE_FALSE.to_string(),
		);
		let attributes = sanitize_attributes(attributes);

		let mut external_ids = BTreeMap::new();
		external_ids.insert(self.study_id.clone(), code.to_string());

		AccountRecord {
			external_ids,
			password: format!("{code}{PASSWORD_SUFFIX}"),
			data_groups: vec![TEST_USER_DATA_GROUP.to_string()],
			sharing_scope: SharingScope::NoSharing,
			attributes,
		}
	}
}

impl Default for AccountRecordBuilder {
	fn default() -> Self {
		Self::new(HYBRID_VALIDATION_STUDY_ID)
	}
}
