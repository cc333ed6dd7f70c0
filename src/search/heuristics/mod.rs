mod constant_one;
mod heuristic;
mod ignore_preconditions;
mod pg_levelsum;

pub use constant_one::ConstantOne;
pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use ignore_preconditions::IgnorePreconditions;
pub use pg_levelsum::PgLevelSum;
