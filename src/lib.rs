pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::DirectoryConfig;

pub use adapters::phone::NanpPhoneFormatter;
pub use adapters::repository::{FileSource, HttpSource, InMemoryRepository};
pub use crate::core::query::{DirectoryService, QueryParams, QuerySettings};
pub use domain::model::{Advocate, CitiesResponse, Degree, Page, PhoneNumber, SearchQuery};
pub use utils::error::{DirectoryError, ErrorResponse, Result};
