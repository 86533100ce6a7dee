// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Attribute sanitization for Bridge account records.
//!
//! Bridge rejects participant attributes longer than a fixed limit, so
//! oversized values are silently truncated before submission. Truncation is
//! a defensive normalization, not a validation error path.

use std::collections::BTreeMap;

/// Maximum character count Bridge accepts for a user attribute value.
pub const ATTRIBUTE_LENGTH_MAX: usize = 255;

/// Truncates every attribute value to at most [`ATTRIBUTE_LENGTH_MAX`]
/// characters. Keys are left untouched and no entries are dropped.
pub fn sanitize_attributes(attributes: BTreeMap<String, String>) -> BTreeMap<String, String> {
	attributes
		.into_iter()
		.map(|(key, value)| (key, truncate(value)))
		.collect()
}

fn truncate(mut value: String) -> String {
	if let Some((idx, _)) = value.char_indices().nth(ATTRIBUTE_LENGTH_MAX) {
		value.truncate(idx);
	}
	value
}
