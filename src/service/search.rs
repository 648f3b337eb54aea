//! Thesis search over the optional filters.

use crate::error::AppError;
use crate::service::crud::CrudService;
use crate::sql::ThesisFilter;
use serde_json::Value;
use sqlx::PgPool;

pub struct SearchService;

impl SearchService {
    /// Theses matching every present filter, in the store's natural order.
    pub async fn theses(pool: &PgPool, filter: &ThesisFilter) -> Result<Vec<Value>, AppError> {
        let query = filter.to_query();
        tracing::debug!(predicates = query.predicates().len(), "thesis search");
        CrudService::query_many(pool, &query.render()).await
    }
}
