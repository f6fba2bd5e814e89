pub mod assessment;
pub mod enrich;
pub mod error;
pub mod record;
pub mod summary;

pub use assessment::{assess, assess_value, AssessmentResult};
pub use enrich::{age_metric, enrich, health, EnrichedRecord, Status};
pub use error::RecordError;
pub use record::{decode_records, sample_records, RawRecord};
pub use summary::{summarize, Summary};
