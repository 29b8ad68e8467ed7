//! Quiz rounds: random draws without replacement

use std::collections::HashSet;

use rand::Rng;

use crate::models::Question;

/// Parameters for one quiz round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundSpec {
    /// Question ids the player has already seen
    pub previous: HashSet<i32>,
    /// Stop after this many questions; None draws every remaining candidate
    pub limit: Option<usize>,
}

impl RoundSpec {
    pub fn new(previous: impl IntoIterator<Item = i32>, limit: Option<usize>) -> Self {
        Self {
            previous: previous.into_iter().collect(),
            limit,
        }
    }

    /// Draw a randomized, duplicate-free round from `candidates`.
    ///
    /// Candidates in `previous` are skipped, as are repeated ids within
    /// `candidates`. Draws uniformly at random until every remaining
    /// candidate (or `limit` of them) has been chosen; an empty pool gives
    /// an empty round.
    pub fn draw<R: Rng>(&self, candidates: &[Question], rng: &mut R) -> Vec<Question> {
        let mut distinct = HashSet::with_capacity(candidates.len());
        let pool: Vec<&Question> = candidates
            .iter()
            .filter(|q| !self.previous.contains(&q.id))
            .filter(|q| distinct.insert(q.id))
            .collect();

        let target = self.limit.map_or(pool.len(), |limit| limit.min(pool.len()));
        let mut visited = HashSet::with_capacity(target);
        let mut round = Vec::with_capacity(target);

        while visited.len() < target {
            let index = rng.gen_range(0..pool.len());
            if visited.insert(index) {
                round.push(pool[index].clone());
            }
        }

        tracing::debug!(
            candidates = candidates.len(),
            excluded = self.previous.len(),
            drawn = round.len(),
            "quiz round drawn"
        );
        round
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: i32, category: i32) -> Question {
        Question {
            id,
            question: format!("Question {}", id),
            answer: format!("Answer {}", id),
            category,
            difficulty: 1,
        }
    }

    fn ids(round: &[Question]) -> Vec<i32> {
        let mut ids: Vec<i32> = round.iter().map(|q| q.id).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn covers_every_candidate_once() {
        let candidates: Vec<_> = (1..=8).map(|id| question(id, 1)).collect();
        let round = RoundSpec::default().draw(&candidates, &mut StdRng::seed_from_u64(7));
        assert_eq!(ids(&round), (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn excludes_previous_questions() {
        let candidates: Vec<_> = (1..=5).map(|id| question(id, 1)).collect();
        let plan = RoundSpec::new([2, 4], None);
        let round = plan.draw(&candidates, &mut StdRng::seed_from_u64(1));
        assert_eq!(ids(&round), vec![1, 3, 5]);
    }

    #[test]
    fn all_previous_gives_empty_round() {
        let candidates: Vec<_> = (1..=3).map(|id| question(id, 1)).collect();
        let plan = RoundSpec::new([1, 2, 3], None);
        assert!(plan.draw(&candidates, &mut StdRng::seed_from_u64(1)).is_empty());
    }

    #[test]
    fn empty_candidates_gives_empty_round() {
        let round = RoundSpec::default().draw(&[], &mut StdRng::seed_from_u64(3));
        assert!(round.is_empty());
    }

    #[test]
    fn duplicate_candidates_drawn_once() {
        let candidates = vec![question(1, 1), question(1, 1), question(2, 1)];
        let round = RoundSpec::default().draw(&candidates, &mut StdRng::seed_from_u64(9));
        assert_eq!(ids(&round), vec![1, 2]);
    }

    #[test]
    fn limit_caps_round() {
        let candidates: Vec<_> = (1..=10).map(|id| question(id, 1)).collect();
        let plan = RoundSpec::new([], Some(3));
        let round = plan.draw(&candidates, &mut StdRng::seed_from_u64(11));
        assert_eq!(round.len(), 3);

        let mut unique = ids(&round);
        unique.dedup();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn limit_larger_than_pool() {
        let candidates: Vec<_> = (1..=2).map(|id| question(id, 1)).collect();
        let plan = RoundSpec::new([], Some(10));
        let round = plan.draw(&candidates, &mut StdRng::seed_from_u64(5));
        assert_eq!(round.len(), 2);
    }
}
