use crate::search::planning_graph::{
    ActionLevel, ActionMutexContext, ActionNode, LiteralLevel, LiteralMutexContext,
    ACTION_MUTEX_RULES, LITERAL_MUTEX_RULES,
};
use crate::search::{decode, EncodedState, FluentState, Negatable, PlanningError, PlanningProblem};
use itertools::Itertools;
use tracing::debug;

/// A planning graph rooted at one encoded state of a problem. The graph
/// borrows the problem's action and goal lists and owns its own node levels,
/// alternating S0, A0, S1, A1, ... until the literal levels stabilize.
///
/// Lifecycle: construct with [`PlanningGraph::new`], build once with
/// [`PlanningGraph::create_graph`], query [`PlanningGraph::h_levelsum`],
/// discard. Graphs are cheap and are recomputed per search node; a second
/// build attempt on the same instance fails with
/// [`PlanningError::AlreadyBuilt`].
#[derive(Debug)]
pub struct PlanningGraph<'a> {
    problem: &'a PlanningProblem,
    serial: bool,
    root: FluentState,
    literal_levels: Vec<LiteralLevel>,
    action_levels: Vec<ActionLevel<'a>>,
}

impl<'a> PlanningGraph<'a> {
    /// Decodes the root state against the problem's fluent ordering. With
    /// `serial_planning` the graph assumes only one real action can occur
    /// per level, which is the setting the level-sum heuristic expects.
    pub fn new(
        problem: &'a PlanningProblem,
        state: &EncodedState,
        serial_planning: bool,
    ) -> Result<Self, PlanningError> {
        let root = decode(state, problem.state_map())?;
        Ok(Self {
            problem,
            serial: serial_planning,
            root,
            literal_levels: vec![],
            action_levels: vec![],
        })
    }

    /// Builds the graph: S0 from the root state, then alternating action and
    /// literal levels with their mutex passes, until two consecutive literal
    /// levels contain the same literals.
    pub fn create_graph(&mut self) -> Result<(), PlanningError> {
        if !self.literal_levels.is_empty() || !self.action_levels.is_empty() {
            return Err(PlanningError::AlreadyBuilt);
        }

        // S0: one literal node per fluent of the root state. No mutexes at
        // the first level; the values all come from one concrete state.
        let mut s0 = LiteralLevel::default();
        for fluent in &self.root.pos {
            s0.get_or_insert(Negatable::Positive(fluent.clone()));
        }
        for fluent in &self.root.neg {
            s0.get_or_insert(Negatable::Negative(fluent.clone()));
        }
        self.literal_levels.push(s0);

        let mut level = 0;
        loop {
            self.add_action_level(level);
            self.update_action_mutexes(level);

            level += 1;
            self.add_literal_level(level);
            self.update_literal_mutexes(level);

            if self.literal_levels[level].same_literals(&self.literal_levels[level - 1]) {
                break;
            }
        }

        debug!(
            literal_levels = self.literal_levels.len(),
            action_levels = self.action_levels.len(),
            "planning graph leveled off"
        );
        Ok(())
    }

    /// Sums, over all goal fluents, the first literal level at which the
    /// fluent appears positively. A goal fluent that never appears makes the
    /// state a dead end and surfaces as
    /// [`PlanningError::UnreachableGoalFluent`].
    pub fn h_levelsum(&self) -> Result<usize, PlanningError> {
        let mut level_sum = 0;
        for goal in self.problem.goal() {
            let key = Negatable::Positive(goal.clone());
            let level = self
                .literal_levels
                .iter()
                .position(|level| level.contains(&key))
                .ok_or_else(|| PlanningError::UnreachableGoalFluent {
                    fluent: goal.to_string(),
                })?;
            level_sum += level;
        }
        Ok(level_sum)
    }

    pub fn literal_levels(&self) -> &[LiteralLevel] {
        &self.literal_levels
    }

    pub fn action_levels(&self) -> &[ActionLevel<'a>] {
        &self.action_levels
    }

    /// Adds action level `level`: every ground action (no-ops included)
    /// whose possible preconditions are all present at literal level `level`
    /// becomes a node, linked as a child of every literal at that level.
    /// Actions with missing preconditions are simply omitted.
    fn add_action_level(&mut self, level: usize) {
        let problem = self.problem;
        let mut action_level = ActionLevel::default();

        for action in problem
            .actions_list()
            .iter()
            .chain(problem.persistence_actions())
        {
            let mut node = ActionNode::new(action);
            let previous = &mut self.literal_levels[level];

            let Some(preconditions) = node
                .prenodes
                .iter()
                .map(|key| previous.position(key))
                .collect::<Option<Vec<usize>>>()
            else {
                continue;
            };
            node.preconditions = preconditions;

            let index = action_level.nodes.len();
            node.parents = (0..previous.len()).collect();
            for literal in previous.nodes.iter_mut() {
                literal.children.push(index);
            }
            action_level.nodes.push(node);
        }

        self.action_levels.push(action_level);
    }

    /// Adds literal level `level`: the union of all effect literals
    /// reachable from action level `level - 1`, linked back to their
    /// producers.
    fn add_literal_level(&mut self, level: usize) {
        debug_assert_eq!(level, self.literal_levels.len());
        let mut literal_level = LiteralLevel::default();
        let previous = &mut self.action_levels[level - 1];

        for (action_index, action_node) in previous.nodes.iter_mut().enumerate() {
            let effects: Vec<_> = action_node.effnodes.iter().cloned().collect();
            for key in effects {
                let literal_index = literal_level.get_or_insert(key);
                action_node.children.push(literal_index);
                literal_level.nodes[literal_index].parents.push(action_index);
            }
        }

        self.literal_levels.push(literal_level);
    }

    /// Marks every mutex pair at action level `level`, applying the rules
    /// symmetrically.
    fn update_action_mutexes(&mut self, level: usize) {
        let context = ActionMutexContext {
            serial: self.serial,
            previous_literals: &self.literal_levels[level],
        };
        let nodes = &mut self.action_levels[level].nodes;

        for (first, second) in (0..nodes.len()).tuple_combinations() {
            let is_mutex = ACTION_MUTEX_RULES
                .iter()
                .any(|rule| rule.holds(&context, &nodes[first], &nodes[second]));
            if is_mutex {
                nodes[first].mutex.insert(second);
                nodes[second].mutex.insert(first);
            }
        }
    }

    /// Marks every mutex pair at literal level `level`, applying the rules
    /// symmetrically.
    fn update_literal_mutexes(&mut self, level: usize) {
        let context = LiteralMutexContext {
            previous_actions: &self.action_levels[level - 1],
        };
        let nodes = &mut self.literal_levels[level].nodes;

        for (first, second) in (0..nodes.len()).tuple_combinations() {
            let is_mutex = LITERAL_MUTEX_RULES
                .iter()
                .any(|rule| rule.holds(&context, &nodes[first], &nodes[second]));
            if is_mutex {
                nodes[first].mutex.insert(second);
                nodes[second].mutex.insert(first);
            }
        }
    }
}
