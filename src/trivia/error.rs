#[derive(Debug, thiserror::Error)]
pub enum TriviaError {
    #[error("requested resource was not found")]
    NotFound,
    #[error("unprocessable request: {0}")]
    Unprocessable(&'static str),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type TriviaResult<T> = Result<T, TriviaError>;
