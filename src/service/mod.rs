//! CrudService: generic CRUD using the safe SQL builder. SearchService: thesis filters.

mod crud;
mod search;
pub use crud::CrudService;
pub use search::SearchService;
