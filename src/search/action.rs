use crate::search::{ArgList, Fluent, PlanningError, Symbol};
use std::fmt::{self, Display, Formatter};

/// A fully instantiated STRIPS action: concrete arguments, positive and
/// negative precondition sets, added and removed effect fluents. Immutable
/// once constructed; the planning problem owns the full list for its
/// lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundAction {
    name: Symbol,
    args: ArgList,
    precond_pos: Vec<Fluent>,
    precond_neg: Vec<Fluent>,
    effect_add: Vec<Fluent>,
    effect_rem: Vec<Fluent>,
}

impl GroundAction {
    pub fn new(
        name: &str,
        args: &[Symbol],
        precond: (Vec<Fluent>, Vec<Fluent>),
        effect: (Vec<Fluent>, Vec<Fluent>),
    ) -> Self {
        Self {
            name: Symbol::new(name),
            args: args.iter().copied().collect(),
            precond_pos: precond.0,
            precond_neg: precond.1,
            effect_add: effect.0,
            effect_rem: effect.1,
        }
    }

    #[inline(always)]
    pub fn name(&self) -> Symbol {
        self.name
    }

    #[inline(always)]
    pub fn args(&self) -> &[Symbol] {
        &self.args
    }

    pub fn precond_pos(&self) -> &[Fluent] {
        &self.precond_pos
    }

    pub fn precond_neg(&self) -> &[Fluent] {
        &self.precond_neg
    }

    pub fn effect_add(&self) -> &[Fluent] {
        &self.effect_add
    }

    pub fn effect_rem(&self) -> &[Fluent] {
        &self.effect_rem
    }

    /// Rejects actions that assert the same fluent with both polarities,
    /// either in the preconditions or in the effects. Applicability and
    /// transition semantics are undefined for such actions, so they are
    /// flagged when a problem is constructed rather than silently resolved.
    pub fn validate(&self) -> Result<(), PlanningError> {
        for fluent in &self.precond_pos {
            if self.precond_neg.contains(fluent) {
                return Err(PlanningError::MalformedAction {
                    action: self.to_string(),
                    fluent: fluent.to_string(),
                });
            }
        }
        for fluent in &self.effect_add {
            if self.effect_rem.contains(fluent) {
                return Err(PlanningError::MalformedAction {
                    action: self.to_string(),
                    fluent: fluent.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Display for GroundAction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.args.is_empty() {
            return write!(f, "{}", self.name);
        }
        write!(
            f,
            "{}({})",
            self.name,
            self.args
                .iter()
                .map(|arg| arg.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

/// Synthesizes the persistence (no-op) actions for every fluent of the given
/// ordering: a positive no-op carries an asserted fluent unchanged to the
/// next planning-graph level, a negative no-op carries an unasserted one.
/// These exist only inside the planning graph and are never part of a
/// problem's external action list.
pub fn noop_actions(state_map: &[Fluent]) -> Vec<GroundAction> {
    let mut actions = Vec::with_capacity(state_map.len() * 2);
    for fluent in state_map {
        actions.push(GroundAction::new(
            &format!("Noop_pos({fluent})"),
            &[],
            (vec![fluent.clone()], vec![]),
            (vec![fluent.clone()], vec![]),
        ));
        actions.push(GroundAction::new(
            &format!("Noop_neg({fluent})"),
            &[],
            (vec![], vec![fluent.clone()]),
            (vec![], vec![fluent.clone()]),
        ));
    }
    actions
}
