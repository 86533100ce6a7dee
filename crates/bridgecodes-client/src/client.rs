// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP client for the Bridge study-management platform.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::StatusCode;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use bridgecodes_core::{AccountRecord, ProvisioningError, ProvisioningService};

use crate::secret::SecretString;
use crate::types::{IdentifierHolder, SignIn, SignUp, UserSessionInfo};

/// Production Bridge server.
pub const DEFAULT_BASE_URL: &str = "https://webservices.sagebridge.org";

/// Header carrying the authenticated session token on every API call.
const SESSION_HEADER: &str = "Bridge-Session";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Admin credentials and server coordinates, configured once at startup.
#[derive(Clone, Debug)]
pub struct BridgeConfig {
	pub base_url: String,
	pub app_id: String,
	pub email: String,
	pub password: SecretString,
}

impl BridgeConfig {
	pub fn new(
		base_url: impl Into<String>,
		app_id: impl Into<String>,
		email: impl Into<String>,
		password: SecretString,
	) -> Self {
		Self {
			base_url: base_url.into(),
			app_id: app_id.into(),
			email: email.into(),
			password,
		}
	}
}

/// [`ProvisioningService`] backed by the Bridge REST API.
///
/// `authenticate` performs the one-time sign-in and stores the session
/// token; every subsequent `submit` rides that session. No retry or backoff
/// here: each call is a single blocking request and failures propagate.
pub struct BridgeClient {
	http: reqwest::Client,
	config: BridgeConfig,
	session: RwLock<Option<String>>,
}

impl BridgeClient {
	pub fn new(config: BridgeConfig) -> Self {
		Self {
			http: http_client(),
			config,
			session: RwLock::new(None),
		}
	}

	fn url(&self, path: &str) -> String {
		format!("{}{path}", self.config.base_url.trim_end_matches('/'))
	}
}

#[async_trait]
impl ProvisioningService for BridgeClient {
	async fn authenticate(&self) -> Result<(), ProvisioningError> {
		let url = self.url("/v3/auth/signIn");
		let body = SignIn::new(
			&self.config.app_id,
			&self.config.email,
			self.config.password.expose(),
		);

		debug!(url = %url, app_id = %self.config.app_id, "signing in to Bridge");
		let resp = self
			.http
			.post(&url)
			.json(&body)
			.send()
			.await
			.map_err(|e| ProvisioningError::AuthenticationFailed(e.to_string()))?;

		let status = resp.status();
		if !status.is_success() {
			let body = resp.text().await.unwrap_or_default();
			warn!(status = %status, "Bridge sign-in rejected");
			return Err(ProvisioningError::AuthenticationFailed(format!(
				"{status}: {body}"
			)));
		}

		let session: UserSessionInfo = resp
			.json()
			.await
			.map_err(|e| ProvisioningError::AuthenticationFailed(e.to_string()))?;
		*self.session.write().await = Some(session.session_token);
		info!(email = %self.config.email, "authenticated with Bridge");
		Ok(())
	}

	async fn submit(&self, record: &AccountRecord) -> Result<String, ProvisioningError> {
		let token = self
			.session
			.read()
			.await
			.clone()
			.ok_or(ProvisioningError::NotAuthenticated)?;

		let url = self.url("/v3/participants");
		let resp = self
			.http
			.post(&url)
			.header(SESSION_HEADER, token)
			.json(&SignUp::new(record))
			.send()
			.await
			.map_err(|e| ProvisioningError::SubmissionFailed(e.to_string()))?;

		let status = resp.status();
		if !status.is_success() {
			let body = resp.text().await.unwrap_or_default();
			warn!(status = %status, "participant creation rejected");
			return Err(ProvisioningError::SubmissionFailed(describe_rejection(
				status, &body,
			)));
		}

		let holder: IdentifierHolder = resp
			.json()
			.await
			.map_err(|e| ProvisioningError::SubmissionFailed(e.to_string()))?;
		Ok(holder.identifier)
	}
}

/// Conflict responses are almost always a duplicate external ID (a code
/// collision); name that in the message the operator sees.
fn describe_rejection(status: StatusCode, body: &str) -> String {
	if status == StatusCode::CONFLICT {
		format!("{status} (likely duplicate external ID): {body}")
	} else {
		format!("{status}: {body}")
	}
}

fn http_client() -> reqwest::Client {
	let mut headers = HeaderMap::new();
	headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en"));
	reqwest::Client::builder()
		.user_agent(user_agent())
		.default_headers(headers)
		.timeout(REQUEST_TIMEOUT)
		.build()
		.expect("failed to build HTTP client")
}

fn user_agent() -> String {
	format!("bridgecodes/{}", env!("CARGO_PKG_VERSION"))
}
