use crate::record::RawRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

pub const HERBIVORE: &str = "herbivore";
pub const CARNIVORE: &str = "carnivore";
pub const PLANTS: &str = "plants";
pub const MEAT: &str = "meat";

const FULL_HEALTH: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Alive,
    Dead,
}

impl Status {
    pub fn from_health(health: i64) -> Self {
        if health > 0 {
            Status::Alive
        } else {
            Status::Dead
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Alive => "Alive",
            Status::Dead => "Dead",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub raw: RawRecord,
    pub health: i64,
    pub status: Status,
    pub age_metric: i64,
}

impl EnrichedRecord {
    pub fn raw(&self) -> &RawRecord {
        &self.raw
    }

    pub fn category(&self) -> &str {
        &self.raw.category
    }

    pub fn is_alive(&self) -> bool {
        self.status == Status::Alive
    }
}

/// Health derived from age, category and diet.
///
/// Non-positive ages and unrecognized categories score 0. A recognized
/// category eating its preferred diet scores `100 - age`, anything else
/// scores half of that. Ages above 100 go negative and are kept as-is.
///
/// Halving uses floor division (rounding toward negative infinity), so
/// `(100 - 151) / 2` is `-26`, not `-25`. Non-negative quotients are the
/// same under either convention.
pub fn health(age: i64, category: &str, diet: &str) -> i64 {
    if age <= 0 {
        return 0;
    }

    let preferred_diet = match category {
        HERBIVORE => PLANTS,
        CARNIVORE => MEAT,
        _ => return 0,
    };

    let base = FULL_HEALTH - age;
    if diet == preferred_diet {
        base
    } else {
        base.div_euclid(2)
    }
}

/// Half the age for living records older than 1, otherwise 0.
pub fn age_metric(age: i64, status: Status) -> i64 {
    match status {
        Status::Alive if age > 1 => age / 2,
        _ => 0,
    }
}

pub fn enrich(record: &RawRecord) -> EnrichedRecord {
    let health = health(record.age, &record.category, &record.diet);
    let status = Status::from_health(health);
    let age_metric = age_metric(record.age, status);

    trace!(
        name = %record.name,
        category = %record.category,
        health,
        %status,
        age_metric,
        "enriched record"
    );

    EnrichedRecord {
        raw: record.clone(),
        health,
        status,
        age_metric,
    }
}
