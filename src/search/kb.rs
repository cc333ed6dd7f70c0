use crate::search::Fluent;
use std::collections::HashSet;

/// Minimal propositional knowledge base over ground fluents: tell a set of
/// literals, ask whether a literal is entailed. Entailment here is plain
/// membership; the planner needs no general inference.
#[derive(Debug, Default)]
pub struct PropKb {
    clauses: HashSet<Fluent>,
}

impl PropKb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asserts a conjunction of fluents.
    pub fn tell(&mut self, fluents: &[Fluent]) {
        for fluent in fluents {
            self.clauses.insert(fluent.clone());
        }
    }

    /// True iff the fluent has been asserted.
    pub fn ask(&self, fluent: &Fluent) -> bool {
        self.clauses.contains(fluent)
    }

    pub fn clauses(&self) -> &HashSet<Fluent> {
        &self.clauses
    }
}
