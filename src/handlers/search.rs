//! Thesis search handler.

use crate::error::AppError;
use crate::response::rows;
use crate::service::SearchService;
use crate::sql::ThesisFilter;
use crate::state::AppState;
use axum::extract::{Query, State};

/// GET /api/search?title=&authorId=&typeId=&instituteId=&year=
pub async fn search(
    State(state): State<AppState>,
    Query(filter): Query<ThesisFilter>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let data = SearchService::theses(&state.pool, &filter).await?;
    Ok(rows(data))
}
