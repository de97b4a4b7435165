pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the `page`-th window (1-based) of `page_size` items. Pages outside the range,
/// including anything below 1, are empty rather than an error.
pub fn paginate<T>(items: &[T], page: i64, page_size: usize) -> &[T] {
    let Ok(index) = usize::try_from(page - 1) else {
        return &[];
    };
    let Some(start) = index.checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: i64) -> Vec<i64> {
        (1..=n).collect()
    }

    #[test]
    fn first_page_holds_first_ten() {
        let items = ids(25);
        assert_eq!(paginate(&items, 1, QUESTIONS_PER_PAGE), &ids(10)[..]);
    }

    #[test]
    fn second_page_holds_eleven_to_twenty() {
        let items = ids(25);
        let expected: Vec<i64> = (11..=20).collect();
        assert_eq!(paginate(&items, 2, QUESTIONS_PER_PAGE), &expected[..]);
    }

    #[test]
    fn last_page_is_partial() {
        let items = ids(25);
        assert_eq!(paginate(&items, 3, QUESTIONS_PER_PAGE), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items = ids(25);
        assert!(paginate(&items, 4, QUESTIONS_PER_PAGE).is_empty());
        assert!(paginate(&items, 0, QUESTIONS_PER_PAGE).is_empty());
        assert!(paginate(&items, -3, QUESTIONS_PER_PAGE).is_empty());
        assert!(paginate(&items, i64::MAX, QUESTIONS_PER_PAGE).is_empty());
    }

    #[test]
    fn empty_input_gives_empty_page() {
        let items: Vec<i64> = Vec::new();
        assert!(paginate(&items, 1, QUESTIONS_PER_PAGE).is_empty());
    }
}
