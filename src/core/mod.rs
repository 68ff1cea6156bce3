pub mod filter;
pub mod paginator;
pub mod query;
pub mod sort;

pub use crate::domain::model::{Advocate, CitiesResponse, Degree, Page, PhoneNumber, SearchQuery};
pub use crate::domain::ports::{DatasetSource, PhoneFormatter, Repository};
pub use crate::utils::error::Result;
