// Adapters layer: concrete implementations of the domain ports (dataset sources, phone formatting).

pub mod phone;
pub mod repository;
