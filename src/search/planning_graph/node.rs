use crate::search::{Fluent, GroundAction, Negatable};
use std::collections::{HashMap, HashSet};

/// The level-independent identity of a literal node: fluent plus polarity.
/// Node objects are re-created at every level, but nodes with the same key
/// are the same literal, which is what lets graph leveling terminate.
pub type LiteralKey = Negatable<Fluent>;

/// A literal node at some S-level. Parents are the actions at the previous
/// A-level that produce it, children the actions at the next A-level it
/// feeds; both are indices into the sibling [`ActionLevel`] arenas. The
/// mutex set holds same-level sibling indices.
#[derive(Debug)]
pub struct LiteralNode {
    pub(crate) literal: LiteralKey,
    pub(crate) parents: Vec<usize>,
    pub(crate) children: Vec<usize>,
    pub(crate) mutex: HashSet<usize>,
}

impl LiteralNode {
    pub(crate) fn new(literal: LiteralKey) -> Self {
        Self {
            literal,
            parents: vec![],
            children: vec![],
            mutex: HashSet::new(),
        }
    }

    pub fn literal(&self) -> &LiteralKey {
        &self.literal
    }

    pub fn is_mutex(&self, other: usize) -> bool {
        self.mutex.contains(&other)
    }
}

/// An action node at some A-level, wrapping a ground action borrowed from
/// the problem (persistence no-ops included). `prenodes` and `effnodes` are
/// the possible parent and child literals as keys; `preconditions`,
/// `parents` and `children` are the realized links once the node is
/// connected into a specific level.
#[derive(Debug)]
pub struct ActionNode<'a> {
    pub(crate) action: &'a GroundAction,
    pub(crate) is_persistent: bool,
    pub(crate) prenodes: HashSet<LiteralKey>,
    pub(crate) effnodes: HashSet<LiteralKey>,
    /// Indices of this action's own precondition literals at the parent
    /// S-level. Used by the competing-needs mutex test.
    pub(crate) preconditions: Vec<usize>,
    /// Indices of every literal at the parent S-level.
    pub(crate) parents: Vec<usize>,
    /// Indices of this action's effect literals at the child S-level.
    pub(crate) children: Vec<usize>,
    pub(crate) mutex: HashSet<usize>,
}

impl<'a> ActionNode<'a> {
    pub(crate) fn new(action: &'a GroundAction) -> Self {
        let mut prenodes = HashSet::new();
        for fluent in action.precond_pos() {
            prenodes.insert(Negatable::Positive(fluent.clone()));
        }
        for fluent in action.precond_neg() {
            prenodes.insert(Negatable::Negative(fluent.clone()));
        }

        let mut effnodes = HashSet::new();
        for fluent in action.effect_add() {
            effnodes.insert(Negatable::Positive(fluent.clone()));
        }
        for fluent in action.effect_rem() {
            effnodes.insert(Negatable::Negative(fluent.clone()));
        }

        // a persistence action carries its single literal through unchanged
        let is_persistent = prenodes == effnodes;

        Self {
            action,
            is_persistent,
            prenodes,
            effnodes,
            preconditions: vec![],
            parents: vec![],
            children: vec![],
            mutex: HashSet::new(),
        }
    }

    pub fn action(&self) -> &GroundAction {
        self.action
    }

    pub fn is_persistent(&self) -> bool {
        self.is_persistent
    }

    pub fn is_mutex(&self, other: usize) -> bool {
        self.mutex.contains(&other)
    }
}

/// One S-level: an arena of literal nodes plus a key index for membership
/// tests and lookups. Cross-level references are arena indices, so the
/// bidirectional parent/child structure involves no ownership cycles.
#[derive(Debug, Default)]
pub struct LiteralLevel {
    pub(crate) nodes: Vec<LiteralNode>,
    pub(crate) index: HashMap<LiteralKey, usize>,
}

impl LiteralLevel {
    pub(crate) fn get_or_insert(&mut self, key: LiteralKey) -> usize {
        if let Some(&position) = self.index.get(&key) {
            return position;
        }
        let position = self.nodes.len();
        self.index.insert(key.clone(), position);
        self.nodes.push(LiteralNode::new(key));
        position
    }

    pub fn contains(&self, key: &LiteralKey) -> bool {
        self.index.contains_key(key)
    }

    pub(crate) fn position(&self, key: &LiteralKey) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn nodes(&self) -> &[LiteralNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Set equality on the literals present, regardless of mutex content or
    /// link structure. This is the graph's leveling criterion.
    pub(crate) fn same_literals(&self, other: &Self) -> bool {
        self.index.len() == other.index.len()
            && self.index.keys().all(|key| other.index.contains_key(key))
    }
}

/// One A-level: an arena of action nodes.
#[derive(Debug, Default)]
pub struct ActionLevel<'a> {
    pub(crate) nodes: Vec<ActionNode<'a>>,
}

impl<'a> ActionLevel<'a> {
    pub fn nodes(&self) -> &[ActionNode<'a>] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn persistence_detection() {
        let have = fluent("Have", &["Cake"]);
        let noops = crate::search::noop_actions(&[have.clone()]);
        assert!(ActionNode::new(&noops[0]).is_persistent);
        assert!(ActionNode::new(&noops[1]).is_persistent);

        let eat = GroundAction::new(
            "Eat",
            &[],
            (vec![have.clone()], vec![]),
            (vec![fluent("Eaten", &["Cake"])], vec![have.clone()]),
        );
        assert!(!ActionNode::new(&eat).is_persistent);
    }

    #[test]
    fn literal_level_leveling_criterion() {
        let mut first = LiteralLevel::default();
        first.get_or_insert(Negatable::Positive(fluent("Have", &["Cake"])));
        first.get_or_insert(Negatable::Negative(fluent("Eaten", &["Cake"])));

        let mut second = LiteralLevel::default();
        second.get_or_insert(Negatable::Negative(fluent("Eaten", &["Cake"])));
        second.get_or_insert(Negatable::Positive(fluent("Have", &["Cake"])));
        assert!(first.same_literals(&second));

        second.get_or_insert(Negatable::Negative(fluent("Have", &["Cake"])));
        assert!(!first.same_literals(&second));
    }
}
