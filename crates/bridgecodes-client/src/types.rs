// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Bridge REST wire types.
//!
//! Bridge tags every body with a `type` discriminator; responses are parsed
//! only for the fields this tool needs.

use bridgecodes_core::AccountRecord;
use serde::{Deserialize, Serialize};

/// Body of `POST /v3/auth/signIn`. No `Debug` derive: carries the password.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignIn<'a> {
	pub app_id: &'a str,
	pub email: &'a str,
	pub password: &'a str,
	#[serde(rename = "type")]
	pub type_: &'static str,
}

impl<'a> SignIn<'a> {
	pub fn new(app_id: &'a str, email: &'a str, password: &'a str) -> Self {
		Self {
			app_id,
			email,
			password,
			type_: "SignIn",
		}
	}
}

/// The slice of Bridge's `UserSessionInfo` response this tool consumes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserSessionInfo {
	pub session_token: String,
}

/// Envelope turning an [`AccountRecord`] into a Bridge `SignUp` body.
#[derive(Serialize)]
pub(crate) struct SignUp<'a> {
	#[serde(flatten)]
	pub record: &'a AccountRecord,
	#[serde(rename = "type")]
	pub type_: &'static str,
}

impl<'a> SignUp<'a> {
	pub fn new(record: &'a AccountRecord) -> Self {
		Self {
			record,
			type_: "SignUp",
		}
	}
}

/// Response of `POST /v3/participants`.
#[derive(Debug, Deserialize)]
pub(crate) struct IdentifierHolder {
	pub identifier: String,
}
