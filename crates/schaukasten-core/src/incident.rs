use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result};

/// One police-report-derived record, as exported by the upstream scraper.
///
/// The scraper's field names are kept as serde aliases so its JSON loads
/// unchanged. Every field defaults: a record missing its keyword list is a
/// record with no keywords, not a load failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Incident {
    /// Free-text body of the report.
    #[serde(default, alias = "Text")]
    pub body: String,

    /// Extracted district, when the report names one.
    #[serde(default, alias = "ExtractedDistrict")]
    pub district: Option<String>,

    /// Raw keyword tokens found in the text, possibly inflected or misspelled.
    #[serde(default, alias = "KeywordMatch")]
    pub keywords: Vec<String>,

    /// Raw demographic tokens (e.g. "frau", "jugendliche").
    #[serde(default, alias = "ExtractedGender")]
    pub genders: Vec<String>,

    /// `HH:MM`-like time strings mentioned in the report.
    #[serde(default, alias = "ExtractedTime")]
    pub times: Vec<String>,

    /// Canonical extracted date. Takes precedence over `date_raw`.
    #[serde(default, alias = "ExtractedDate")]
    pub date_extracted: Option<String>,

    /// Raw date string from the source page.
    #[serde(default, alias = "Date")]
    pub date_raw: Option<String>,

    /// Link to the source report.
    #[serde(default, alias = "URL")]
    pub url: Option<String>,
}

impl Incident {
    /// The date string that identifies this incident in time: the extracted
    /// date when present, the raw one otherwise.
    pub fn primary_date(&self) -> Option<&str> {
        self.date_extracted
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(self.date_raw.as_deref())
    }
}

/// Parses a JSON array of incident records.
///
/// Elements that fail to deserialize degrade to `Incident::default()` instead
/// of failing the load; only a non-array document or broken JSON is an error.
pub fn load_incidents(json: &str) -> Result<Vec<Incident>> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        return Err(Error::DatasetShape);
    };

    let total = items.len();
    let mut out = Vec::with_capacity(total);
    let mut degraded = 0usize;
    for item in items {
        match serde_json::from_value::<Incident>(item) {
            Ok(incident) => out.push(incident),
            Err(_) => {
                degraded += 1;
                out.push(Incident::default());
            }
        }
    }

    tracing::debug!(total, degraded, "loaded incident dataset");
    Ok(out)
}
