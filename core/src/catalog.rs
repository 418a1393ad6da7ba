// SPDX-FileCopyrightText: 2026 Jonathan Steele <hello@jonathansteele.net>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::Path;

use tokio::fs;

use crate::holiday::HolidayDefinition;

/// Reads and decodes a `holidays.json` catalog: a JSON array of holiday
/// records with fields `name, month?, day?, note?, emoji?`. Unknown keys
/// are ignored by the decoder. Decode errors are reported to the caller;
/// per-record problems surface later, at resolution time.
#[tracing::instrument]
pub async fn load_holidays(path: &Path) -> Result<Vec<HolidayDefinition>, Box<dyn Error>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read holiday catalog at {}: {e}", path.display()))?;

    let holidays: Vec<HolidayDefinition> = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to decode holiday catalog: {e}"))?;

    tracing::debug!(count = holidays.len(), "loaded holiday catalog");
    Ok(holidays)
}
