use crate::domain::model::Advocate;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Read-only access to the full, ordered advocate collection.
pub trait Repository: Send + Sync {
    /// Returns an immutable snapshot. Callers must not expect it to track later changes.
    fn fetch_all(&self) -> Arc<[Advocate]>;
}

/// Where the repository's records come from at startup.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Advocate>>;

    fn describe(&self) -> String;
}

pub trait PhoneFormatter: Send + Sync {
    /// National display form; unrecognised input comes back unchanged.
    fn format(&self, raw: &str) -> String;

    fn to_e164(&self, raw: &str) -> Option<String>;
}
