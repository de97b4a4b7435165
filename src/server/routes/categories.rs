use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::{
    db::Question,
    server::{app::AppState, extractors::Page},
    trivia::{CategoryMap, TriviaService},
};

use super::{ApiError, ApiResponse};

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: CategoryMap,
}

#[derive(Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: CategoryMap,
    page: i64,
}

async fn get_categories(State(trivia): State<TriviaService>) -> ApiResponse<Json<CategoriesResponse>> {
    let categories = trivia.list_categories().await?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

async fn questions_for_category(
    State(trivia): State<TriviaService>,
    category_id: Result<Path<i64>, PathRejection>,
    Page(page): Page,
) -> ApiResponse<Json<CategoryQuestionsResponse>> {
    // a non-integer id does not name any category
    let Path(category_id) = category_id.map_err(|_| ApiError::NotFound)?;
    let listing = trivia.list_by_category(category_id, page).await?;
    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: listing.questions,
        total_questions: listing.total_questions,
        categories: listing.categories,
        page,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route(
            "/categories/{category_id}/questions",
            get(questions_for_category),
        )
        .with_state(state)
}
