//! Area statistics (crime, income, education, housing).

use super::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// Granularity of the `area` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaType {
    Zipcode,
    City,
    State,
}

/// Stored statistic snapshot for one area and year.
///
/// Looked up by `area` rather than by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    pub id: RecordId,
    pub area: String,
    pub area_type: AreaType,
    pub crime_rate: u32,
    pub median_income: u64,
    pub education_score: u32,
    pub housing_cost: u64,
    pub population: u64,
    pub year: i32,
}

/// Insert shape for `Statistic`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStatistic {
    pub area: String,
    pub area_type: AreaType,
    pub crime_rate: u32,
    pub median_income: u64,
    pub education_score: u32,
    pub housing_cost: u64,
    pub population: u64,
    pub year: i32,
}

impl Statistic {
    pub(crate) fn from_new(id: RecordId, input: NewStatistic) -> Self {
        Self {
            id,
            area: input.area,
            area_type: input.area_type,
            crime_rate: input.crime_rate,
            median_income: input.median_income,
            education_score: input.education_score,
            housing_cost: input.housing_cost,
            population: input.population,
            year: input.year,
        }
    }
}

impl Record for Statistic {
    const KIND: &'static str = "statistic";

    fn id(&self) -> &str {
        &self.id
    }
}
