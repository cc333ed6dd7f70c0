//! A* search: best-first over f = g + h, with unit action costs. Optimal
//! for admissible heuristics.

use crate::search::{
    search_engines::{SearchEngine, SearchNodeStatus, SearchResult, SearchSpace, SearchStatistics},
    GroundAction, Heuristic, PlanningError, PlanningProblem,
};
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

#[derive(Debug, Default)]
pub struct Astar {}

impl Astar {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for Astar {
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
        queue.push(root_id, Reverse(OrderedFloat(space.node(root_id).f())));

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
                let child_g = g + 1.0;
                let child_id = space.insert_or_get(successor.clone(), action.clone(), state_id);

                match space.node(child_id).status() {
                    SearchNodeStatus::New => {
                        let h = heuristic.evaluate(&successor, problem)?;
                        statistics.increment_evaluated_nodes();
                        statistics.increment_generated_nodes(1);
                        let child = space.node_mut(child_id);
                        child.open(child_g, h.into_inner());
                        queue.push(child_id, Reverse(OrderedFloat(child.f())));
                    }
                    SearchNodeStatus::Open | SearchNodeStatus::Closed => {
                        if child_g < space.node(child_id).g() {
                            statistics.increment_reopened_nodes();
                            let child = space.node_mut(child_id);
                            child.reopen(child_g, state_id, action);
                            queue.push(child_id, Reverse(OrderedFloat(child.f())));
                        }
                    }
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
    use crate::search::heuristics::{IgnorePreconditions, PgLevelSum};
    use crate::test_utils::*;

    #[test]
    fn solves_have_cake() {
        let problem = have_cake();
        let mut engine = Astar::new();
        let (result, _) = engine
            .search(&problem, Box::new(IgnorePreconditions::new()))
            .unwrap();

        let SearchResult::Success(plan) = result else {
            panic!("expected a plan");
        };
        assert_eq!(plan.len(), 2);
        assert!(problem.goal_test(&execute(&problem, &plan)).unwrap());
    }

    #[test]
    fn solves_air_cargo_p1_optimally() {
        let problem = air_cargo_p1();
        let mut engine = Astar::new();
        let (result, statistics) = engine
            .search(&problem, Box::new(IgnorePreconditions::new()))
            .unwrap();

        let SearchResult::Success(plan) = result else {
            panic!("expected a plan");
        };
        assert_eq!(plan.len(), 6);
        assert!(problem.goal_test(&execute(&problem, &plan)).unwrap());
        assert!(statistics.expanded_nodes() > 0);
    }

    #[test]
    fn solves_air_cargo_p1_with_levelsum() {
        let problem = air_cargo_p1();
        let mut engine = Astar::new();
        let (result, _) = engine
            .search(&problem, Box::new(PgLevelSum::new()))
            .unwrap();

        let SearchResult::Success(plan) = result else {
            panic!("expected a plan");
        };
        assert!(problem.goal_test(&execute(&problem, &plan)).unwrap());
    }

    #[test]
    fn reports_unsolvable_problems() {
        let problem = unreachable_goal_problem();
        let mut engine = Astar::new();
        let (result, _) = engine
            .search(&problem, Box::new(IgnorePreconditions::new()))
            .unwrap();
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
    }
}
