use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::{
    db::{NewQuestion, Question},
    server::{app::AppState, extractors::Page},
    trivia::{CategoryMap, TriviaService},
};

use super::{ApiError, ApiResponse};

#[derive(Deserialize)]
struct NewQuestionBody {
    question: String,
    answer: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    category: i64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    difficulty: i64,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: CategoryMap,
    current_category: Option<i64>,
    page: i64,
}

#[derive(Serialize)]
struct CreatedResponse {
    success: bool,
    created: i64,
}

#[derive(Serialize)]
struct DeletedResponse {
    success: bool,
    message: String,
}

#[derive(Serialize)]
struct SearchResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: CategoryMap,
}

async fn get_questions(
    State(trivia): State<TriviaService>,
    Page(page): Page,
) -> ApiResponse<Json<QuestionsResponse>> {
    let listing = trivia.list_questions(page).await?;
    Ok(Json(QuestionsResponse {
        success: true,
        questions: listing.questions,
        total_questions: listing.total_questions,
        categories: listing.categories,
        current_category: None,
        page,
    }))
}

async fn create_question(
    State(trivia): State<TriviaService>,
    body: Result<Json<NewQuestionBody>, JsonRejection>,
) -> ApiResponse<Json<CreatedResponse>> {
    let Json(body) = body?;
    let id = trivia
        .create_question(NewQuestion {
            question: body.question,
            answer: body.answer,
            category: body.category,
            difficulty: body.difficulty,
        })
        .await?;
    Ok(Json(CreatedResponse {
        success: true,
        created: id,
    }))
}

async fn delete_question(
    State(trivia): State<TriviaService>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResponse<Json<DeletedResponse>> {
    let Path(id) = id.map_err(|_| ApiError::NotFound)?;
    trivia.delete_question(id).await?;
    Ok(Json(DeletedResponse {
        success: true,
        message: format!("Question ID {id} has been deleted"),
    }))
}

async fn search_questions(
    State(trivia): State<TriviaService>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> ApiResponse<Json<SearchResponse>> {
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!("Unreadable search body: {}", rejection.body_text());
        ApiError::Unprocessable
    })?;
    let found = trivia.search(body.search_term.as_deref()).await?;
    Ok(Json(SearchResponse {
        success: true,
        questions: found.questions,
        total_questions: found.total_questions,
        categories: found.categories,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(get_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}
