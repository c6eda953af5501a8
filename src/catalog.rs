pub mod request;

mod model;

pub use model::*;
pub use request::{CatalogSource, HttpCatalog};
