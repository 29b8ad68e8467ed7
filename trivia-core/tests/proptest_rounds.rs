use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use trivia_core::{paginate, PageRequest, Question, RoundSpec};

fn question(id: i32) -> Question {
    Question {
        id,
        question: format!("Question {}", id),
        answer: "Answer".to_string(),
        category: 1 + id % 6,
        difficulty: 1 + id % 5,
    }
}

proptest! {
    /// Property: total pages is ceil(total / per_page) whatever page is requested
    #[test]
    fn prop_total_pages_from_full_set(total in 0usize..500, per_page in 1usize..50, page in 0usize..60) {
        let result = paginate((0..total).collect::<Vec<_>>(), PageRequest::new(page, per_page));

        prop_assert_eq!(result.total, total);
        prop_assert_eq!(result.total_pages(), (total + per_page - 1) / per_page);
        prop_assert!(result.items.len() <= per_page);
    }

    /// Property: a page holds exactly the window [(page-1)*size, page*size)
    #[test]
    fn prop_page_is_window(total in 0usize..300, per_page in 1usize..40, page in 1usize..20) {
        let result = paginate((0..total).collect::<Vec<_>>(), PageRequest::new(page, per_page));

        let start = (page - 1) * per_page;
        let expected: Vec<usize> = (start..(start + per_page).min(total)).collect();
        prop_assert_eq!(result.items, expected);
    }

    /// Property: rounds never repeat an id and never exceed the candidate count
    #[test]
    fn prop_round_is_duplicate_free(
        ids in prop::collection::vec(1i32..200, 0..60),
        previous in prop::collection::hash_set(1i32..200, 0..30),
        limit in prop::option::of(0usize..40),
        seed in any::<u64>(),
    ) {
        let candidates: Vec<Question> = ids.iter().copied().map(question).collect();
        let plan = RoundSpec::new(previous.iter().copied(), limit);
        let round = plan.draw(&candidates, &mut StdRng::seed_from_u64(seed));

        let drawn: HashSet<i32> = round.iter().map(|q| q.id).collect();
        prop_assert_eq!(drawn.len(), round.len());
        prop_assert!(round.len() <= candidates.len());
        prop_assert!(drawn.is_disjoint(&previous));

        let remaining: HashSet<i32> = ids.iter().copied().filter(|id| !previous.contains(id)).collect();
        let expected = limit.map_or(remaining.len(), |l| l.min(remaining.len()));
        prop_assert_eq!(round.len(), expected);
    }
}
