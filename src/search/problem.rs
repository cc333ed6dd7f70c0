use crate::search::{
    decode, encode, noop_actions, EncodedState, Fluent, FluentState, GroundAction, PlanningError,
    PlanningGraph, PropKb,
};
use std::collections::HashSet;
use tracing::trace;

/// A grounded propositional planning problem: the full ground-action list,
/// the problem-wide fluent ordering (`state_map`), the encoded initial state
/// and the goal fluents. The ordering is established once at construction
/// (initial positives followed by initial negatives) and never changes, so
/// encoded states remain comparable for the problem's lifetime.
#[derive(Debug)]
pub struct PlanningProblem {
    actions_list: Vec<GroundAction>,
    noop_list: Vec<GroundAction>,
    state_map: Vec<Fluent>,
    initial: EncodedState,
    goal: Vec<Fluent>,
}

impl PlanningProblem {
    /// Builds a problem from grounded actions, an initial state covering the
    /// whole fluent space, and the goal fluents. Every action is validated
    /// here; a polarity overlap surfaces as
    /// [`PlanningError::MalformedAction`].
    pub fn new(
        actions_list: Vec<GroundAction>,
        initial: FluentState,
        goal: Vec<Fluent>,
    ) -> Result<Self, PlanningError> {
        for action in &actions_list {
            action.validate()?;
        }

        let state_map: Vec<Fluent> = initial
            .pos
            .iter()
            .chain(initial.neg.iter())
            .cloned()
            .collect();
        let encoded = encode(&initial, &state_map)?;
        let noop_list = noop_actions(&state_map);

        Ok(Self {
            actions_list,
            noop_list,
            state_map,
            initial: encoded,
            goal,
        })
    }

    pub fn initial_state(&self) -> &EncodedState {
        &self.initial
    }

    pub fn state_map(&self) -> &[Fluent] {
        &self.state_map
    }

    pub fn goal(&self) -> &[Fluent] {
        &self.goal
    }

    pub fn actions_list(&self) -> &[GroundAction] {
        &self.actions_list
    }

    /// The synthesized persistence actions. Consumed by the planning graph
    /// only; never returned from [`Self::actions`].
    pub(crate) fn persistence_actions(&self) -> &[GroundAction] {
        &self.noop_list
    }

    /// Every ground action applicable in the given state: all positive
    /// preconditions asserted true and no negative precondition asserted
    /// true. An empty result is a dead end, not an error.
    pub fn actions(&self, state: &EncodedState) -> Result<Vec<&GroundAction>, PlanningError> {
        let fs = decode(state, &self.state_map)?;
        let mut kb = PropKb::new();
        kb.tell(&fs.pos);
        trace!(state = %fs.pos_sentence(), "testing applicability");

        let mut possible_actions = vec![];
        for action in &self.actions_list {
            if action.precond_neg().iter().any(|fluent| kb.ask(fluent)) {
                continue;
            }
            if action.precond_pos().iter().all(|fluent| kb.ask(fluent)) {
                possible_actions.push(action);
            }
        }

        Ok(possible_actions)
    }

    /// The state resulting from executing `action` in `state`. Computed by
    /// set algebra on a decoded copy, never by mutating the input, so
    /// sibling successors of the same state cannot observe each other's
    /// effects.
    pub fn result(
        &self,
        state: &EncodedState,
        action: &GroundAction,
    ) -> Result<EncodedState, PlanningError> {
        let old = decode(state, &self.state_map)?;
        let added: HashSet<&Fluent> = action.effect_add().iter().collect();
        let removed: HashSet<&Fluent> = action.effect_rem().iter().collect();

        let mut pos: Vec<Fluent> = old
            .pos
            .iter()
            .filter(|fluent| !removed.contains(*fluent))
            .cloned()
            .collect();
        for fluent in action.effect_add() {
            if !pos.contains(fluent) {
                pos.push(fluent.clone());
            }
        }

        let mut neg: Vec<Fluent> = old
            .neg
            .iter()
            .filter(|fluent| !added.contains(*fluent))
            .cloned()
            .collect();
        for fluent in action.effect_rem() {
            if !neg.contains(fluent) {
                neg.push(fluent.clone());
            }
        }

        encode(&FluentState::new(pos, neg), &self.state_map)
    }

    /// True iff every goal fluent is asserted true. Negative fluents are
    /// never consulted.
    pub fn goal_test(&self, state: &EncodedState) -> Result<bool, PlanningError> {
        let fs = decode(state, &self.state_map)?;
        let mut kb = PropKb::new();
        kb.tell(&fs.pos);
        Ok(self.goal.iter().all(|fluent| kb.ask(fluent)))
    }

    /// Counts the goal fluents not yet true, ignoring all preconditions. A
    /// cheap relaxed-planning lower bound on the remaining plan length.
    pub fn h_ignore_preconditions(&self, state: &EncodedState) -> Result<usize, PlanningError> {
        let fs = decode(state, &self.state_map)?;
        let mut kb = PropKb::new();
        kb.tell(&fs.pos);
        Ok(self.goal.iter().filter(|fluent| !kb.ask(fluent)).count())
    }

    /// Builds a fresh serial planning graph rooted at `state` and reduces it
    /// to the level-sum heuristic. Repeated evaluation of the same state
    /// should go through
    /// [`PgLevelSum`](crate::search::heuristics::PgLevelSum), which memoizes
    /// this call.
    pub fn h_pg_levelsum(&self, state: &EncodedState) -> Result<usize, PlanningError> {
        let mut graph = PlanningGraph::new(self, state, true)?;
        graph.create_graph()?;
        graph.h_levelsum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn state_map_covers_initial_state() {
        let problem = air_cargo_p1();
        assert_eq!(problem.state_map().len(), 12);
        assert_eq!(problem.initial_state().to_string(), "TTTTFFFFFFFF");
    }

    #[test]
    fn applicability_in_initial_state() {
        let problem = air_cargo_p1();
        let applicable = problem.actions(problem.initial_state()).unwrap();
        let names: Vec<String> = applicable.iter().map(|a| a.to_string()).collect();

        assert!(names.contains(&"Load(C1, P1, SFO)".to_owned()));
        assert!(names.contains(&"Load(C2, P2, JFK)".to_owned()));
        // P2 is not at SFO
        assert!(!names.contains(&"Load(C1, P2, SFO)".to_owned()));
        // no cargo is in a plane yet
        assert!(!names.iter().any(|name| name.starts_with("Unload")));
        // both planes can fly to the other airport
        assert!(names.contains(&"Fly(P1, SFO, JFK)".to_owned()));
        assert!(names.contains(&"Fly(P2, JFK, SFO)".to_owned()));
    }

    #[test]
    fn transition_locality() {
        let problem = air_cargo_p1();
        let initial = problem.initial_state().clone();
        let applicable: Vec<GroundAction> = problem
            .actions(&initial)
            .unwrap()
            .into_iter()
            .cloned()
            .collect();
        assert!(applicable.len() >= 2);

        let first = problem.result(&initial, &applicable[0]).unwrap();
        let second = problem.result(&initial, &applicable[1]).unwrap();
        // the base state is unchanged and siblings do not see each other
        assert_eq!(&initial, problem.initial_state());
        let second_again = problem.result(&initial, &applicable[1]).unwrap();
        assert_eq!(second, second_again);
        assert_ne!(first, second);
    }

    #[test]
    fn result_applies_set_algebra() {
        let problem = air_cargo_p1();
        let load = find_action(&problem, "Load(C1, P1, SFO)");
        let next = problem.result(problem.initial_state(), &load).unwrap();
        let fs = decode(&next, problem.state_map()).unwrap();

        assert!(fs.pos.contains(&fluent("In", &["C1", "P1"])));
        assert!(!fs.pos.contains(&fluent("At", &["C1", "SFO"])));
        assert!(fs.neg.contains(&fluent("At", &["C1", "SFO"])));
    }

    #[test]
    fn goal_satisfaction() {
        let problem = air_cargo_p1();
        assert!(!problem.goal_test(problem.initial_state()).unwrap());

        let reached = apply_plan(
            &problem,
            &[
                "Load(C1, P1, SFO)",
                "Fly(P1, SFO, JFK)",
                "Unload(C1, P1, JFK)",
                "Load(C2, P2, JFK)",
                "Fly(P2, JFK, SFO)",
                "Unload(C2, P2, SFO)",
            ],
        );
        assert!(problem.goal_test(&reached).unwrap());

        // only one of the two goals reached
        let halfway = apply_plan(
            &problem,
            &["Load(C1, P1, SFO)", "Fly(P1, SFO, JFK)", "Unload(C1, P1, JFK)"],
        );
        assert!(!problem.goal_test(&halfway).unwrap());
    }

    #[test]
    fn ignore_preconditions_heuristic() {
        let problem = air_cargo_p1();
        assert_eq!(
            problem.h_ignore_preconditions(problem.initial_state()).unwrap(),
            2
        );

        let goal_state = apply_plan(
            &problem,
            &[
                "Load(C1, P1, SFO)",
                "Fly(P1, SFO, JFK)",
                "Unload(C1, P1, JFK)",
                "Load(C2, P2, JFK)",
                "Fly(P2, JFK, SFO)",
                "Unload(C2, P2, SFO)",
            ],
        );
        assert_eq!(problem.h_ignore_preconditions(&goal_state).unwrap(), 0);
    }

    #[test]
    fn malformed_actions_are_rejected_at_construction() {
        let have = fluent("Have", &["Cake"]);
        let broken = GroundAction::new(
            "Broken",
            &[],
            (vec![have.clone()], vec![have.clone()]),
            (vec![], vec![]),
        );
        let initial = FluentState::new(vec![have.clone()], vec![]);
        assert!(matches!(
            PlanningProblem::new(vec![broken], initial, vec![have]),
            Err(PlanningError::MalformedAction { .. })
        ));
    }
}
