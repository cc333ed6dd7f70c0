mod astar;
mod gbfs;
mod search_engine;
mod search_node;
mod search_space;
mod search_statistics;

use astar::Astar;
use gbfs::Gbfs;

pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
pub use search_node::{SearchNode, SearchNodeStatus, StateId};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
