use clap::Parser;
use groundplan::search::{
    air_cargo_p1, air_cargo_p2, air_cargo_p3, HeuristicName, PlanningError, PlanningProblem,
    SearchEngineName, SearchResult, Verbosity,
};
use tracing::info;

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[clap(rename_all = "kebab-case")]
enum Scenario {
    #[clap(help = "2 cargos, 2 planes, 2 airports.")]
    P1,
    #[clap(help = "3 cargos, 3 planes, 3 airports.")]
    P2,
    #[clap(help = "4 cargos, 2 planes, 4 airports.")]
    P3,
}

impl Scenario {
    fn build(&self) -> Result<PlanningProblem, PlanningError> {
        match self {
            Scenario::P1 => air_cargo_p1(),
            Scenario::P2 => air_cargo_p2(),
            Scenario::P3 => air_cargo_p3(),
        }
    }
}

#[derive(Parser)]
#[command(version)]
/// Solve an air cargo planning problem and print the plan.
struct Cli {
    #[arg(value_enum, help = "The scenario to solve")]
    scenario: Scenario,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        default_value_t = SearchEngineName::Astar
    )]
    engine: SearchEngineName,
    #[arg(
        value_enum,
        help = "The heuristic evaluator to use",
        long = "heuristic",
        default_value_t = HeuristicName::PgLevelSum
    )]
    heuristic: HeuristicName,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
}

fn main() {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    if let Err(error) = plan(&cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn plan(cli: &Cli) -> Result<(), PlanningError> {
    let problem = cli.scenario.build()?;
    info!(
        actions = problem.actions_list().len(),
        fluents = problem.state_map().len(),
        goals = problem.goal().len(),
        "problem grounded"
    );

    let heuristic = cli.heuristic.create();
    let mut engine = cli.engine.create();
    let (result, _statistics) = engine.search(&problem, heuristic)?;

    match result {
        SearchResult::Success(steps) => {
            info!(plan_length = steps.len(), "plan found");
            for step in &steps {
                println!("{step}");
            }
            Ok(())
        }
        SearchResult::ProvablyUnsolvable => {
            eprintln!("no plan exists for this scenario");
            std::process::exit(1);
        }
    }
}
