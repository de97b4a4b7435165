use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

pub const FIRST_PAGE: i64 = 1;

/// `?page=N`, 1-based. A missing, non-numeric or unreadable page is the first page, and when
/// `page` is repeated the first occurrence wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(pub i64);

impl Page {
    fn from_pairs(pairs: &[(String, String)]) -> Self {
        let page = pairs
            .iter()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.trim().parse::<i64>().ok())
            .unwrap_or(FIRST_PAGE);
        Page(page)
    }
}

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match Query::<Vec<(String, String)>>::try_from_uri(&parts.uri) {
            Ok(Query(pairs)) => Ok(Page::from_pairs(&pairs)),
            Err(rejection) => {
                tracing::debug!("Unreadable query string: {}", rejection.body_text());
                Ok(Page(FIRST_PAGE))
            }
        }
    }
}
