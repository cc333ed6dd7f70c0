use crate::search::{
    search_engines::{Astar, Gbfs, SearchStatistics},
    GroundAction, Heuristic, PlanningError, PlanningProblem,
};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    /// A plan reaching the goal, in execution order.
    Success(Vec<GroundAction>),
    /// The frontier was exhausted without reaching the goal.
    ProvablyUnsolvable,
}

pub trait SearchEngine {
    fn search(
        &mut self,
        problem: &PlanningProblem,
        heuristic: Box<dyn Heuristic>,
    ) -> Result<(SearchResult, SearchStatistics), PlanningError>;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "A* search over g + h.")]
    Astar,
    #[clap(help = "Greedy best-first search over h alone.")]
    Gbfs,
}

impl SearchEngineName {
    pub fn create(&self) -> Box<dyn SearchEngine> {
        match self {
            SearchEngineName::Astar => Box::new(Astar::new()),
            SearchEngineName::Gbfs => Box::new(Gbfs::new()),
        }
    }
}
