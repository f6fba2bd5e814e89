pub mod metrics;

pub use metrics::AssessmentMetrics;
