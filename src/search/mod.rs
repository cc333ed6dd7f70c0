mod action;
mod air_cargo;
mod errors;
mod fluent;
pub mod heuristics;
mod kb;
mod negatable;
pub mod planning_graph;
mod problem;
pub mod search_engines;
mod state;
mod verbosity;

pub use action::{noop_actions, GroundAction};
pub use air_cargo::{air_cargo_p1, air_cargo_p2, air_cargo_p3, AirCargoDomain};
pub use errors::PlanningError;
pub use fluent::{ArgList, Fluent, Symbol};
pub use heuristics::{Heuristic, HeuristicName, HeuristicValue};
pub use kb::PropKb;
pub use negatable::Negatable;
pub use planning_graph::PlanningGraph;
pub use problem::PlanningProblem;
pub use search_engines::{SearchEngine, SearchEngineName, SearchResult};
pub use state::{decode, encode, EncodedState, FluentState};
pub use verbosity::Verbosity;
