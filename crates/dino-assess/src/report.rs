use crate::input::Source;
use anyhow::Result;
use chrono::Utc;
use dino_core::AssessmentResult;
use dino_metrics_bridge::AssessmentMetrics;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub date: String,
    pub source: String,
    #[serde(flatten)]
    pub result: &'a AssessmentResult,
}

impl<'a> Report<'a> {
    pub fn new(source: &Source, result: &'a AssessmentResult) -> Self {
        Self {
            date: Utc::now().format("%Y-%m-%d").to_string(),
            source: source.to_string(),
            result,
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Everything written to stdout: the JSON report line, then the Prometheus
/// exposition when `metrics` is set.
pub fn render_output(
    source: &Source,
    result: &AssessmentResult,
    pretty: bool,
    metrics: bool,
) -> Result<String> {
    let mut out = Report::new(source, result).to_json(pretty)?;
    out.push('\n');

    if metrics {
        let gauges = AssessmentMetrics::new()?;
        gauges.observe(result);
        out.push_str(&gauges.render()?);
    }

    Ok(out)
}
