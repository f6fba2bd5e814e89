use crate::enrich::{enrich, EnrichedRecord};
use crate::error::RecordError;
use crate::record::{decode_records, RawRecord};
use crate::summary::{summarize, Summary};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub records: Vec<EnrichedRecord>,
    pub summary: Summary,
}

impl AssessmentResult {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn alive_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_alive()).count()
    }
}

/// Enriches every record in input order and counts them per category.
/// An absent collection assesses the same as an empty one.
pub fn assess(records: Option<&[RawRecord]>) -> AssessmentResult {
    let records: Vec<EnrichedRecord> = records.unwrap_or_default().iter().map(enrich).collect();
    let summary = summarize(&records);

    debug!(
        records = records.len(),
        categories = summary.len(),
        "assessment complete"
    );

    AssessmentResult { records, summary }
}

/// Decodes a loose JSON collection and assesses it.
pub fn assess_value(value: &Value) -> Result<AssessmentResult, RecordError> {
    let records = decode_records(value)?;
    Ok(assess(records.as_deref()))
}
