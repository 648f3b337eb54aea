//! Thesis registry: REST backend for thesis records, people and lookup tables over PostgreSQL.

pub mod case;
pub mod catalog;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod service;
pub mod settings;
pub mod sql;
pub mod state;

pub use catalog::{Catalog, TableDef};
pub use error::{AppError, ConfigError};
pub use routes::{api_routes, app, common_routes};
pub use service::{CrudService, SearchService};
pub use settings::Settings;
pub use sql::ThesisFilter;
pub use state::AppState;
