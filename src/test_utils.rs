use crate::search::{
    EncodedState, Fluent, FluentState, GroundAction, PlanningProblem, Symbol,
};

pub fn fluent(name: &str, args: &[&str]) -> Fluent {
    let args: Vec<Symbol> = args.iter().map(|arg| Symbol::new(arg)).collect();
    Fluent::ground(name, &args)
}

pub fn air_cargo_p1() -> PlanningProblem {
    crate::search::air_cargo_p1().expect("p1 is well-formed")
}

/// The AIMA cake problem: eat the cake and have it too. Small enough that
/// graph levels and mutexes can be checked by hand.
pub fn have_cake() -> PlanningProblem {
    let have = fluent("Have", &["Cake"]);
    let eaten = fluent("Eaten", &["Cake"]);

    let eat = GroundAction::new(
        "Eat",
        &[Symbol::new("Cake")],
        (vec![have.clone()], vec![]),
        (vec![eaten.clone()], vec![have.clone()]),
    );
    let bake = GroundAction::new(
        "Bake",
        &[Symbol::new("Cake")],
        (vec![], vec![have.clone()]),
        (vec![have.clone()], vec![]),
    );

    let initial = FluentState::new(vec![have.clone()], vec![eaten.clone()]);
    PlanningProblem::new(vec![eat, bake], initial, vec![have, eaten])
        .expect("cake problem is well-formed")
}

/// A problem whose goal fluent no action can ever achieve: the graph levels
/// off immediately and the goal never appears.
pub fn unreachable_goal_problem() -> PlanningProblem {
    let have = fluent("Have", &["Cake"]);
    let eaten = fluent("Eaten", &["Cake"]);
    let initial = FluentState::new(vec![have], vec![eaten.clone()]);
    PlanningProblem::new(vec![], initial, vec![eaten])
        .expect("unreachable-goal problem is well-formed")
}

/// Looks up a ground action by its display form, e.g. `Load(C1, P1, SFO)`.
pub fn find_action(problem: &PlanningProblem, name: &str) -> GroundAction {
    problem
        .actions_list()
        .iter()
        .find(|action| action.to_string() == name)
        .unwrap_or_else(|| panic!("no action named {name}"))
        .clone()
}

/// Applies the named actions in order, starting from the initial state.
/// Panics if any step is inapplicable.
pub fn apply_plan(problem: &PlanningProblem, names: &[&str]) -> EncodedState {
    let mut state = problem.initial_state().clone();
    for name in names {
        let action = find_action(problem, name);
        let applicable = problem.actions(&state).expect("decodable state");
        assert!(
            applicable.iter().any(|candidate| *candidate == &action),
            "{name} is not applicable"
        );
        state = problem.result(&state, &action).expect("valid transition");
    }
    state
}

/// Executes an already-extracted plan from the initial state.
pub fn execute(problem: &PlanningProblem, plan: &[GroundAction]) -> EncodedState {
    let mut state = problem.initial_state().clone();
    for action in plan {
        state = problem.result(&state, action).expect("valid transition");
    }
    state
}
