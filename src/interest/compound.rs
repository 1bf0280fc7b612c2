use serde::{Deserialize, Serialize};

use super::effective_rate;

/// compounding frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompoundingFrequency {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
}

impl CompoundingFrequency {
    /// get number of compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Daily => 365,
            CompoundingFrequency::Weekly => 52,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::SemiAnnual => 2,
            CompoundingFrequency::Annual => 1,
        }
    }
}

/// effective rate for a named compounding frequency
pub fn effective_rate_for(nominal_rate: f64, frequency: CompoundingFrequency) -> f64 {
    effective_rate(nominal_rate, frequency.periods_per_year())
}
