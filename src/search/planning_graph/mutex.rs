//! Sibling mutual-exclusion tests. Each family of tests is an enumerated
//! rule set evaluated in order with short-circuit OR; the rules are
//! independent predicates, so no dispatch hierarchy is needed.

use crate::search::planning_graph::{ActionLevel, ActionNode, LiteralLevel, LiteralNode};
use crate::search::Fluent;

/// Everything an action-level mutex test may consult besides the pair
/// itself: the serial-planning flag and the parent literal level (for
/// mutexes already established there).
pub(crate) struct ActionMutexContext<'g> {
    pub serial: bool,
    pub previous_literals: &'g LiteralLevel,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum ActionMutexRule {
    /// In a serial graph, two non-persistence actions never coexist.
    SerialExclusion,
    /// One action's added effects intersect the other's removed effects.
    InconsistentEffects,
    /// One action's effect contradicts a precondition of the other.
    Interference,
    /// Some precondition of one is already mutex with some precondition of
    /// the other at the previous literal level.
    CompetingNeeds,
}

pub(crate) const ACTION_MUTEX_RULES: [ActionMutexRule; 4] = [
    ActionMutexRule::SerialExclusion,
    ActionMutexRule::InconsistentEffects,
    ActionMutexRule::Interference,
    ActionMutexRule::CompetingNeeds,
];

fn intersects(left: &[Fluent], right: &[Fluent]) -> bool {
    left.iter().any(|fluent| right.contains(fluent))
}

impl ActionMutexRule {
    pub(crate) fn holds(
        &self,
        context: &ActionMutexContext,
        first: &ActionNode,
        second: &ActionNode,
    ) -> bool {
        match self {
            Self::SerialExclusion => {
                context.serial && !first.is_persistent && !second.is_persistent
            }
            Self::InconsistentEffects => {
                let a = first.action;
                let b = second.action;
                intersects(a.effect_add(), b.effect_rem())
                    || intersects(b.effect_add(), a.effect_rem())
            }
            Self::Interference => {
                let a = first.action;
                let b = second.action;
                intersects(a.effect_add(), b.precond_neg())
                    || intersects(a.effect_rem(), b.precond_pos())
                    || intersects(b.effect_add(), a.precond_neg())
                    || intersects(b.effect_rem(), a.precond_pos())
            }
            Self::CompetingNeeds => first.preconditions.iter().any(|&mine| {
                second
                    .preconditions
                    .iter()
                    .any(|&theirs| context.previous_literals.nodes[mine].is_mutex(theirs))
            }),
        }
    }
}

/// Context for the literal-level tests: the parent action level, for the
/// mutexes among producers.
pub(crate) struct LiteralMutexContext<'g, 'a> {
    pub previous_actions: &'g ActionLevel<'a>,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum LiteralMutexRule {
    /// Same fluent, opposite polarity.
    Negation,
    /// Every producer of one literal is pairwise mutex with every producer
    /// of the other.
    InconsistentSupport,
}

pub(crate) const LITERAL_MUTEX_RULES: [LiteralMutexRule; 2] = [
    LiteralMutexRule::Negation,
    LiteralMutexRule::InconsistentSupport,
];

impl LiteralMutexRule {
    pub(crate) fn holds(
        &self,
        context: &LiteralMutexContext,
        first: &LiteralNode,
        second: &LiteralNode,
    ) -> bool {
        match self {
            Self::Negation => first.literal == second.literal.negated(),
            Self::InconsistentSupport => {
                for &mine in &first.parents {
                    for &theirs in &second.parents {
                        if !context.previous_actions.nodes[mine].is_mutex(theirs) {
                            return false;
                        }
                    }
                }
                true
            }
        }
    }
}
