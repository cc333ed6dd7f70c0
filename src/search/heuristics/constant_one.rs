use crate::search::heuristics::{Heuristic, HeuristicValue};
use crate::search::{EncodedState, PlanningError, PlanningProblem};
use ordered_float::OrderedFloat;

/// A constant estimate of 1. Not a true heuristic; useful as a baseline
/// that degrades best-first search towards breadth-first behaviour.
#[derive(Debug, Default)]
pub struct ConstantOne;

impl ConstantOne {
    pub fn new() -> Self {
        Self
    }
}

impl Heuristic for ConstantOne {
    fn evaluate(
        &mut self,
        _state: &EncodedState,
        _problem: &PlanningProblem,
    ) -> Result<HeuristicValue, PlanningError> {
        Ok(OrderedFloat(1.0))
    }
}
