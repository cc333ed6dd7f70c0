//! A leveled planning graph with mutual-exclusion analysis, as described in
//! Russell-Norvig 3rd Ed. 10.3. Built fresh for a single root state, queried
//! for its level-sum heuristic, then discarded.

mod graph;
mod mutex;
mod node;

pub use graph::PlanningGraph;
pub use node::{ActionLevel, ActionNode, LiteralKey, LiteralLevel, LiteralNode};

pub(crate) use mutex::{
    ActionMutexContext, LiteralMutexContext, ACTION_MUTEX_RULES, LITERAL_MUTEX_RULES,
};
