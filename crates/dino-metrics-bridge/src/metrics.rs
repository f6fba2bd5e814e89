use dino_core::{AssessmentResult, Status};
use prometheus::{Encoder, IntGaugeVec, Opts, Registry, TextEncoder};

/// Gauges describing one assessment, held on a private registry so several
/// instances can coexist in one process.
pub struct AssessmentMetrics {
    registry: Registry,
    pub category_count: IntGaugeVec,
    pub status_count: IntGaugeVec,
    pub health: IntGaugeVec,
}

impl AssessmentMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let category_count = IntGaugeVec::new(
            Opts::new("dino_category_count", "Assessed records per category"),
            &["category"],
        )?;
        registry.register(Box::new(category_count.clone()))?;

        let status_count = IntGaugeVec::new(
            Opts::new("dino_status_count", "Assessed records per status"),
            &["status"],
        )?;
        registry.register(Box::new(status_count.clone()))?;

        let health = IntGaugeVec::new(
            Opts::new("dino_health", "Derived health per record"),
            &["index", "name"],
        )?;
        registry.register(Box::new(health.clone()))?;

        Ok(Self {
            registry,
            category_count,
            status_count,
            health,
        })
    }

    /// Replaces every gauge with the values of `result`.
    pub fn observe(&self, result: &AssessmentResult) {
        self.category_count.reset();
        self.status_count.reset();
        self.health.reset();

        for (category, count) in &result.summary {
            self.category_count
                .with_label_values(&[category.as_str()])
                .set(saturating_i64(*count));
        }

        let alive = result.alive_count();
        self.status_count
            .with_label_values(&[Status::Alive.as_str()])
            .set(saturating_i64(alive));
        self.status_count
            .with_label_values(&[Status::Dead.as_str()])
            .set(saturating_i64(result.len() - alive));

        for (index, record) in result.records.iter().enumerate() {
            let index = index.to_string();
            self.health
                .with_label_values(&[index.as_str(), record.raw.name.as_str()])
                .set(record.health);
        }
    }

    /// Text exposition of everything observed so far.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

fn saturating_i64(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}
