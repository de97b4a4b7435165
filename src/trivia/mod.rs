//! Trivia rules on top of the store: category lookup, paged listings, search and the quiz draw.
//!
//! [`TriviaService`] is built once per process and only holds the pool, so every call reads
//! fresh data from the store.

mod error;
mod pagination;
mod quiz;

use std::collections::{BTreeMap, HashSet};

use sqlx::SqlitePool;

use crate::db::queries::{categories, questions};
use crate::db::{NewQuestion, Question};
use crate::telemetry;

pub use error::{TriviaError, TriviaResult};
pub use pagination::{paginate, QUESTIONS_PER_PAGE};
pub use quiz::{draw_question, ALL_CATEGORIES};

/// Category id to category name.
pub type CategoryMap = BTreeMap<i64, String>;

#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Size of the whole listing, not of this page.
    pub total_questions: usize,
    pub categories: CategoryMap,
}

#[derive(Clone)]
pub struct TriviaService {
    pool: SqlitePool,
    page_size: usize,
}

impl TriviaService {
    pub fn new(pool: SqlitePool, page_size: usize) -> Self {
        Self { pool, page_size }
    }

    async fn category_map(&self) -> TriviaResult<CategoryMap> {
        Ok(categories::get_all_categories(&self.pool)
            .await?
            .into_iter()
            .map(|c| (c.id, c.kind))
            .collect())
    }

    /// Having no categories at all is reported as [`TriviaError::NotFound`].
    #[tracing::instrument(skip(self))]
    pub async fn list_categories(&self) -> TriviaResult<CategoryMap> {
        let categories = self.category_map().await?;
        if categories.is_empty() {
            tracing::debug!("No categories configured");
            return Err(TriviaError::NotFound);
        }
        Ok(categories)
    }

    /// Only an empty question table is an error, a page past the end is an empty success.
    #[tracing::instrument(skip(self))]
    pub async fn list_questions(&self, page: i64) -> TriviaResult<QuestionPage> {
        let all = questions::get_all_questions(&self.pool).await?;
        if all.is_empty() {
            tracing::debug!("Question table is empty");
            return Err(TriviaError::NotFound);
        }
        Ok(QuestionPage {
            questions: paginate(&all, page, self.page_size).to_vec(),
            total_questions: all.len(),
            categories: self.category_map().await?,
        })
    }

    /// The category is not checked, a question may point at a category that does not exist.
    #[tracing::instrument(skip(self, new_question), fields(category = new_question.category))]
    pub async fn create_question(&self, new_question: NewQuestion) -> TriviaResult<i64> {
        let id = questions::create_question(&self.pool, &new_question).await?;
        tracing::info!(id, "Question created");
        Ok(id)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_question(&self, id: i64) -> TriviaResult<()> {
        if questions::delete_question(&self.pool, id).await? == 0 {
            tracing::debug!("No question to delete");
            return Err(TriviaError::NotFound);
        }
        tracing::info!("Question deleted");
        Ok(())
    }

    /// Unpaginated. `None` means the request carried no search term at all, while a term that
    /// matches nothing is [`TriviaError::NotFound`].
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, term: Option<&str>) -> TriviaResult<QuestionPage> {
        let term = term.ok_or(TriviaError::Unprocessable("searchTerm is required"))?;
        let found = questions::search_questions(&self.pool, term).await?;
        if found.is_empty() {
            return Err(TriviaError::NotFound);
        }
        Ok(QuestionPage {
            total_questions: found.len(),
            questions: found,
            categories: self.category_map().await?,
        })
    }

    /// Unlike [`Self::list_questions`], an empty page is always [`TriviaError::NotFound`],
    /// whether the category has no questions or the page is past the end.
    #[tracing::instrument(skip(self))]
    pub async fn list_by_category(&self, category_id: i64, page: i64) -> TriviaResult<QuestionPage> {
        let in_category = questions::get_questions_for_category(&self.pool, category_id).await?;
        let current = paginate(&in_category, page, self.page_size);
        if current.is_empty() {
            return Err(TriviaError::NotFound);
        }
        Ok(QuestionPage {
            questions: current.to_vec(),
            total_questions: in_category.len(),
            categories: self.category_map().await?,
        })
    }

    /// [`ALL_CATEGORIES`] draws from every question.
    #[tracing::instrument(skip(self, previous), fields(previous = previous.len()))]
    pub async fn next_quiz_question(
        &self,
        category_id: i64,
        previous: &HashSet<i64>,
    ) -> TriviaResult<Option<Question>> {
        let candidates = if category_id == ALL_CATEGORIES {
            questions::get_all_questions(&self.pool).await?
        } else {
            questions::get_questions_for_category(&self.pool, category_id).await?
        };
        let drawn = draw_question(candidates, previous, &mut rand::thread_rng())?;
        match &drawn {
            Some(question) => {
                telemetry::record_quiz_question(category_id);
                tracing::debug!(id = question.id, "Quiz question drawn");
            }
            None => tracing::debug!("Quiz pool exhausted"),
        }
        Ok(drawn)
    }
}
