use crate::search::heuristics::{Heuristic, HeuristicValue};
use crate::search::{EncodedState, PlanningError, PlanningProblem};
use lru::LruCache;
use ordered_float::OrderedFloat;
use std::fmt::{self, Debug, Formatter};
use std::num::NonZeroUsize;

const CACHE_SIZE: usize = 8192;

/// The planning-graph level-sum heuristic. Building a graph per state is by
/// far the most expensive step of the search, and the same state is
/// evaluated repeatedly during one run, so results are memoized by encoded
/// state. The cache assumes a single problem per evaluator instance.
///
/// A state from which some goal fluent can never be achieved evaluates to
/// infinity: the search treats it as a dead end instead of artificially
/// close to the goal.
pub struct PgLevelSum {
    cache: LruCache<EncodedState, HeuristicValue>,
}

impl PgLevelSum {
    pub fn new() -> Self {
        Self {
            cache: LruCache::new(NonZeroUsize::new(CACHE_SIZE).expect("cache size is nonzero")),
        }
    }
}

impl Default for PgLevelSum {
    fn default() -> Self {
        Self::new()
    }
}

impl Heuristic for PgLevelSum {
    fn evaluate(
        &mut self,
        state: &EncodedState,
        problem: &PlanningProblem,
    ) -> Result<HeuristicValue, PlanningError> {
        if let Some(&cached) = self.cache.get(state) {
            return Ok(cached);
        }

        let value = match problem.h_pg_levelsum(state) {
            Ok(level_sum) => OrderedFloat(level_sum as f64),
            Err(PlanningError::UnreachableGoalFluent { .. }) => OrderedFloat(f64::INFINITY),
            Err(error) => return Err(error),
        };

        self.cache.put(state.clone(), value);
        Ok(value)
    }
}

impl Debug for PgLevelSum {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("PgLevelSum")
            .field("cached_states", &self.cache.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn levelsum_on_cake_initial_state() {
        let problem = have_cake();
        let mut heuristic = PgLevelSum::new();
        let h = heuristic
            .evaluate(problem.initial_state(), &problem)
            .unwrap();
        assert_eq!(h, HeuristicValue::from(1.0));
    }

    #[test]
    fn repeated_evaluation_is_cached_and_stable() {
        let problem = air_cargo_p1();
        let mut heuristic = PgLevelSum::new();
        let first = heuristic
            .evaluate(problem.initial_state(), &problem)
            .unwrap();
        let second = heuristic
            .evaluate(problem.initial_state(), &problem)
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(first, HeuristicValue::from(4.0));
    }

    #[test]
    fn unreachable_goal_is_infinite() {
        let problem = unreachable_goal_problem();
        let mut heuristic = PgLevelSum::new();
        let h = heuristic
            .evaluate(problem.initial_state(), &problem)
            .unwrap();
        assert_eq!(h, HeuristicValue::from(f64::INFINITY));
    }
}
