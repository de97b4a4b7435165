use prometheus::register_int_counter_vec;
use prometheus::IntCounterVec;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use lazy_static::lazy_static;

use crate::trivia::ALL_CATEGORIES;

lazy_static! {
    pub static ref QUIZ_QUESTIONS_SERVED: IntCounterVec = register_int_counter_vec!(
        "quiz_questions_served_total",
        "Number of questions handed out by the quiz endpoint",
        &["category"]
    )
    .unwrap();
}

/// `category` is `"all"` for quizzes over every category.
pub fn record_quiz_question(category_id: i64) {
    let label = if category_id == ALL_CATEGORIES {
        "all".to_owned()
    } else {
        category_id.to_string()
    };
    QUIZ_QUESTIONS_SERVED.with_label_values(&[label.as_str()]).inc();
}

pub fn init_tracing() {
    let mut fmt_layer = fmt::layer();
    if std::env::var("INCLUDE_SPAN_EVENTS").is_ok_and(|value| value.eq_ignore_ascii_case("true")) {
        fmt_layer = fmt_layer.with_span_events(FmtSpan::NEW | FmtSpan::CLOSE);
    }
    let filter_layer = EnvFilter::try_from_env("LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
