use crate::enrich::EnrichedRecord;
use std::collections::BTreeMap;

/// Record count per category. Only categories that occur are present.
pub type Summary = BTreeMap<String, usize>;

pub fn summarize(records: &[EnrichedRecord]) -> Summary {
    let mut summary = Summary::new();
    for record in records {
        *summary.entry(record.category().to_owned()).or_insert(0) += 1;
    }
    summary
}
