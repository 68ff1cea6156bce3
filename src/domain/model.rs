use serde::{Deserialize, Serialize};
use std::fmt;

/// A single directory record. Owned by the repository and never mutated by a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: Degree,
    pub specialties: Vec<String>,
    pub years_of_experience: u32,
    pub phone_number: PhoneNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Degree {
    #[serde(rename = "MD")]
    Md,
    #[serde(rename = "PhD")]
    PhD,
    #[serde(rename = "MSW")]
    Msw,
}

impl Degree {
    pub const ALL: [Degree; 3] = [Degree::Md, Degree::PhD, Degree::Msw];

    pub fn as_str(&self) -> &'static str {
        match self {
            Degree::Md => "MD",
            Degree::PhD => "PhD",
            Degree::Msw => "MSW",
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Degree {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Degree::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("unknown degree '{}'", s))
    }
}

/// Phone number exactly as the dataset supplied it, either a JSON number or a string.
/// Serialized back in the same shape it arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhoneNumber {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneNumber::Numeric(n) => write!(f, "{}", n),
            PhoneNumber::Text(s) => f.write_str(s),
        }
    }
}

/// A validated search request. Built only by the query orchestrator from raw parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Case-insensitive substring; `None` when absent or empty.
    pub specialty: Option<String>,
    /// `None` when absent or zero.
    pub min_years: Option<usize>,
    /// Exact degree to match; `None` when absent or the "any" sentinel.
    pub degree: Option<String>,
    pub cursor: usize,
    pub limit: usize,
}

/// One page of an ordered result set plus the offsets to reach its neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub next_cursor: Option<usize>,
    pub prev_cursor: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitiesResponse {
    pub cities: Vec<String>,
}
