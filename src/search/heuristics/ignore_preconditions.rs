use crate::search::heuristics::{Heuristic, HeuristicValue};
use crate::search::{EncodedState, PlanningError, PlanningProblem};
use ordered_float::OrderedFloat;

/// The relaxed-problem bound from ignoring every action precondition: each
/// unsatisfied goal fluent takes at least one action to achieve. Evaluation
/// is a membership count over the goal fluents and is recomputed on every
/// call, with no memoization.
#[derive(Debug, Default)]
pub struct IgnorePreconditions;

impl IgnorePreconditions {
    pub fn new() -> Self {
        Self
    }
}

impl Heuristic for IgnorePreconditions {
    fn evaluate(
        &mut self,
        state: &EncodedState,
        problem: &PlanningProblem,
    ) -> Result<HeuristicValue, PlanningError> {
        Ok(OrderedFloat(
            problem.h_ignore_preconditions(state)? as f64
        ))
    }
}
