use crate::core::{filter, paginator, sort};
use crate::domain::model::{Advocate, CitiesResponse, Page, SearchQuery};
use crate::domain::ports::Repository;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{parse_non_negative, parse_positive};

pub const DEFAULT_LIMIT: usize = 10;
pub const DEFAULT_MAX_LIMIT: usize = 100;
pub const ANY_DEGREE: &str = "Any";

/// Untrusted request parameters, exactly as the client sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub specialty: Option<String>,
    pub min_years: Option<String>,
    pub degree: Option<String>,
    pub cursor: Option<String>,
    pub limit: Option<String>,
}

impl QueryParams {
    /// Parses an `application/x-www-form-urlencoded` query string, with or without a leading `?`.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()))
    }

    /// Recognised keys are `specialty`, `minYears`, `degree`, `cursor` and `limit`.
    /// For repeated keys the last value wins; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "specialty" => &mut params.specialty,
                "minYears" => &mut params.min_years,
                "degree" => &mut params.degree,
                "cursor" => &mut params.cursor,
                "limit" => &mut params.limit,
                other => {
                    tracing::debug!("Ignoring unknown query parameter: {}", other);
                    continue;
                }
            };
            *slot = Some(value.into());
        }
        params
    }

    /// Fields set in `overrides` replace the ones in `self`.
    pub fn merge(self, overrides: QueryParams) -> Self {
        Self {
            specialty: overrides.specialty.or(self.specialty),
            min_years: overrides.min_years.or(self.min_years),
            degree: overrides.degree.or(self.degree),
            cursor: overrides.cursor.or(self.cursor),
            limit: overrides.limit.or(self.limit),
        }
    }

    /// Turns raw parameters into a typed query or a validation error. Never coerces.
    pub fn parse(&self, settings: &QuerySettings) -> Result<SearchQuery> {
        let cursor = parse_non_negative("cursor", self.cursor.as_deref())?.unwrap_or(0);
        let limit = parse_positive("limit", self.limit.as_deref())?.unwrap_or(settings.default_limit);

        if limit > settings.max_limit {
            return Err(DirectoryError::invalid_parameter(
                "limit",
                self.limit.as_deref().unwrap_or_default(),
                format!("must not exceed {}", settings.max_limit),
            ));
        }

        // 0 或空值表示不限年資
        let raw_min_years = self.min_years.as_deref().filter(|s| !s.is_empty());
        let min_years = parse_non_negative("minYears", raw_min_years)?.filter(|&n| n > 0);

        let specialty = self.specialty.clone().filter(|s| !s.is_empty());

        let degree = self
            .degree
            .clone()
            .filter(|d| *d != settings.any_degree);

        Ok(SearchQuery {
            specialty,
            min_years,
            degree,
            cursor,
            limit,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySettings {
    pub default_limit: usize,
    pub max_limit: usize,
    /// Degree value meaning "no degree filter".
    pub any_degree: String,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: DEFAULT_MAX_LIMIT,
            any_degree: ANY_DEGREE.to_string(),
        }
    }
}

/// Runs the filter, sort and paginate stages against a fresh repository snapshot.
///
/// Holds no per-client state: every call is reproducible from its parameters and the
/// repository contents at the time of the call.
pub struct DirectoryService<R: Repository> {
    repository: R,
    settings: QuerySettings,
}

impl<R: Repository> DirectoryService<R> {
    pub fn new(repository: R) -> Self {
        Self::with_settings(repository, QuerySettings::default())
    }

    pub fn with_settings(repository: R, settings: QuerySettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    pub fn search(&self, params: &QueryParams) -> Result<Page<Advocate>> {
        let query = params.parse(&self.settings).inspect_err(|e| {
            tracing::warn!("❌ Rejected query: {}", e);
        })?;
        Ok(self.execute(&query))
    }

    /// Runs an already validated query.
    pub fn execute(&self, query: &SearchQuery) -> Page<Advocate> {
        let snapshot = self.repository.fetch_all();

        let mut matched = filter::apply(&snapshot, query);
        tracing::debug!(
            "Filtered {} of {} advocates (specialty={:?}, min_years={:?}, degree={:?})",
            matched.len(),
            snapshot.len(),
            query.specialty,
            query.min_years,
            query.degree
        );

        sort::by_last_name(&mut matched);

        let page = paginator::paginate(&matched, query.cursor, query.limit);
        tracing::debug!(
            "Page cursor={} limit={} returned {} rows, next={:?}, prev={:?}",
            query.cursor,
            query.limit,
            page.data.len(),
            page.next_cursor,
            page.prev_cursor
        );

        Page {
            data: page.data.into_iter().cloned().collect(),
            total: page.total,
            next_cursor: page.next_cursor,
            prev_cursor: page.prev_cursor,
        }
    }

    /// Distinct cities across the whole directory, sorted ascending.
    pub fn cities(&self) -> CitiesResponse {
        let snapshot = self.repository.fetch_all();
        let cities = sort::sorted_unique(snapshot.iter().map(|a| a.city.as_str()));
        tracing::debug!("Found {} distinct cities", cities.len());
        CitiesResponse { cities }
    }
}
