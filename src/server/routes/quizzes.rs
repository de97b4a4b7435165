use std::collections::HashSet;

use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize, Serializer};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::{
    db::Question,
    server::{app::AppState, deserializers::deserialize_ids},
    trivia::TriviaService,
};

use super::ApiResponse;

#[derive(Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
}

#[derive(Deserialize)]
struct QuizBody {
    quiz_category: QuizCategory,
    #[serde(default, deserialize_with = "deserialize_ids")]
    previous_questions: Vec<i64>,
}

#[derive(Serialize)]
struct QuizResponse {
    success: bool,
    #[serde(serialize_with = "question_or_false")]
    question: Option<Question>,
}

// the client expects `"question": false` once the quiz has run out of questions
fn question_or_false<S>(question: &Option<Question>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match question {
        Some(question) => question.serialize(serializer),
        None => serializer.serialize_bool(false),
    }
}

async fn play_quiz(
    State(trivia): State<TriviaService>,
    body: Result<Json<QuizBody>, JsonRejection>,
) -> ApiResponse<Json<QuizResponse>> {
    let Json(body) = body?;
    let previous: HashSet<i64> = body.previous_questions.into_iter().collect();
    let question = trivia
        .next_quiz_question(body.quiz_category.id, &previous)
        .await?;
    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
