// Adapters layer: concrete MoldCatalog implementations for external stores.

pub mod csv_catalog;
pub mod rest_catalog;

pub use csv_catalog::CsvCatalog;
pub use rest_catalog::RestCatalog;
