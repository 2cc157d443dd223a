mod persistence;
mod provider;
mod snapshot;

pub use persistence::{load_catalog, load_custom_config, load_keywords, load_plan, save_plan};
pub use provider::{CatalogData, CatalogProvider, InMemoryCatalog, StockProvider};
pub use snapshot::CatalogSnapshot;
