//! Greedy best-first search: best-first over h alone. Fast and complete on
//! finite spaces, but plans are not guaranteed optimal.

use crate::search::{
    search_engines::{SearchEngine, SearchNodeStatus, SearchResult, SearchSpace, SearchStatistics},
    GroundAction, Heuristic, PlanningError, PlanningProblem,
};
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

#[derive(Debug, Default)]
pub struct Gbfs {}

impl Gbfs {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for Gbfs {
    fn search(
        &mut self,
        problem: &PlanningProblem,
        mut heuristic: Box<dyn Heuristic>,
    ) -> Result<(SearchResult, SearchStatistics), PlanningError> {
        let mut statistics = SearchStatistics::new();
        let mut queue = PriorityQueue::new();
        let mut space = SearchSpace::new(problem.initial_state().clone());

        let heuristic = heuristic.as_mut();
        let root_id = space.root_id();
        let root_h = heuristic.evaluate(problem.initial_state(), problem)?;
        statistics.increment_evaluated_nodes();
        space.node_mut(root_id).open(0.0, root_h.into_inner());
        queue.push(root_id, Reverse(root_h));

        while let Some((state_id, _)) = queue.pop() {
            if space.node(state_id).status() == SearchNodeStatus::Closed {
                continue;
            }

            let state = space.state(state_id).clone();
            if problem.goal_test(&state)? {
                statistics.finalise_search();
                return Ok((
                    SearchResult::Success(space.extract_plan(state_id)),
                    statistics,
                ));
            }

            space.node_mut(state_id).close();
            let g = space.node(state_id).g();
            statistics.increment_expanded_nodes();

            let applicable: Vec<GroundAction> =
                problem.actions(&state)?.into_iter().cloned().collect();
            statistics.increment_generated_actions(applicable.len());
            if applicable.is_empty() {
                statistics.increment_dead_ends();
                continue;
            }

            for action in applicable {
                let successor = problem.result(&state, &action)?;
                let child_id = space.insert_or_get(successor.clone(), action, state_id);

                if space.node(child_id).status() == SearchNodeStatus::New {
                    let h = heuristic.evaluate(&successor, problem)?;
                    statistics.increment_evaluated_nodes();
                    statistics.increment_generated_nodes(1);
                    space.node_mut(child_id).open(g + 1.0, h.into_inner());
                    queue.push(child_id, Reverse(h));
                }
            }
        }

        statistics.finalise_search();
        Ok((SearchResult::ProvablyUnsolvable, statistics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::heuristics::PgLevelSum;
    use crate::test_utils::*;

    #[test]
    fn reaches_the_goal_on_air_cargo_p1() {
        let problem = air_cargo_p1();
        let mut engine = Gbfs::new();
        let (result, _) = engine
            .search(&problem, Box::new(PgLevelSum::new()))
            .unwrap();

        let SearchResult::Success(plan) = result else {
            panic!("expected a plan");
        };
        assert!(problem.goal_test(&execute(&problem, &plan)).unwrap());
    }
}
