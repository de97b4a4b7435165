use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::db::Question;

use super::error::{TriviaError, TriviaResult};

/// Category id that selects questions from every category.
pub const ALL_CATEGORIES: i64 = 0;

/// Picks uniformly among `candidates` that were not served before.
///
/// An empty `candidates` pool is [`TriviaError::NotFound`]. A pool that is exhausted by
/// `previous` is `Ok(None)`, which the quiz reports as "no more questions".
pub fn draw_question<R>(
    candidates: Vec<Question>,
    previous: &HashSet<i64>,
    rng: &mut R,
) -> TriviaResult<Option<Question>>
where
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return Err(TriviaError::NotFound);
    }
    let remaining: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();
    Ok(remaining.choose(rng).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: i64) -> Question {
        Question {
            id,
            question: format!("question {id}"),
            answer: "answer".to_owned(),
            category: 1,
            difficulty: 1,
        }
    }

    #[test]
    fn empty_pool_is_not_found() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = draw_question(Vec::new(), &HashSet::new(), &mut rng);
        assert!(matches!(result, Err(TriviaError::NotFound)));
    }

    #[test]
    fn exhausted_pool_yields_none() {
        let mut rng = StdRng::seed_from_u64(7);
        let previous: HashSet<i64> = [1, 2, 3].into();
        let drawn = draw_question(vec![question(1), question(2), question(3)], &previous, &mut rng)
            .unwrap();
        assert!(drawn.is_none());
    }

    #[test]
    fn previous_questions_are_never_drawn() {
        let mut rng = StdRng::seed_from_u64(42);
        let previous: HashSet<i64> = [1, 3].into();
        for _ in 0..50 {
            let pool = vec![question(1), question(2), question(3), question(4)];
            let drawn = draw_question(pool, &previous, &mut rng).unwrap().unwrap();
            assert!(drawn.id == 2 || drawn.id == 4);
        }
    }

    #[test]
    fn every_remaining_question_can_be_drawn() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let pool = vec![question(1), question(2), question(3)];
            let drawn = draw_question(pool, &HashSet::new(), &mut rng).unwrap().unwrap();
            seen.insert(drawn.id);
        }
        assert_eq!(seen, [1, 2, 3].into());
    }

    #[test]
    fn unknown_previous_ids_are_ignored() {
        let mut rng = StdRng::seed_from_u64(3);
        let previous: HashSet<i64> = [99].into();
        let drawn = draw_question(vec![question(5)], &previous, &mut rng).unwrap();
        assert_eq!(drawn.map(|q| q.id), Some(5));
    }
}
