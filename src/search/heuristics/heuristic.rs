use crate::search::heuristics::{ConstantOne, IgnorePreconditions, PgLevelSum};
use crate::search::{EncodedState, PlanningError, PlanningProblem};
use ordered_float::OrderedFloat;
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

/// A state evaluator consumed by the search engines. Evaluation may mutate
/// the evaluator (for memoization) and may fail on codec contract
/// violations, which are surfaced rather than coerced.
pub trait Heuristic: Debug {
    fn evaluate(
        &mut self,
        state: &EncodedState,
        problem: &PlanningProblem,
    ) -> Result<HeuristicValue, PlanningError>;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[clap(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(
        name = "pg-levelsum",
        help = "Planning-graph level-sum heuristic; builds a graph per state."
    )]
    PgLevelSum,
    #[clap(
        name = "ignore-preconditions",
        help = "Counts goal fluents not yet true, ignoring all preconditions."
    )]
    IgnorePreconditions,
    #[clap(name = "constant", help = "Constant estimate of 1, not informed.")]
    ConstantOne,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::PgLevelSum => Box::new(PgLevelSum::new()),
            HeuristicName::IgnorePreconditions => Box::new(IgnorePreconditions::new()),
            HeuristicName::ConstantOne => Box::new(ConstantOne::new()),
        }
    }
}
