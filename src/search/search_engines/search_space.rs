use crate::search::{
    search_engines::{SearchNode, StateId},
    EncodedState, GroundAction,
};
use segvec::{Linear, SegVec};
use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};

/// Registry of every state reached during a search, with one [`SearchNode`]
/// per distinct encoded state. Nodes and states live in segmented vectors
/// indexed by [`StateId`]; deduplication is by the encoded state itself.
pub struct SearchSpace {
    nodes: SegVec<SearchNode, Linear>,
    states: SegVec<EncodedState, Linear>,
    registered: HashMap<EncodedState, StateId>,
}

impl SearchSpace {
    pub fn new(initial_state: EncodedState) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        let mut registered = HashMap::new();

        let root_id = StateId(0);
        nodes.push(SearchNode::new(root_id, None));
        registered.insert(initial_state.clone(), root_id);
        states.push(initial_state);

        Self {
            nodes,
            states,
            registered,
        }
    }

    pub fn root_id(&self) -> StateId {
        StateId(0)
    }

    /// Returns the id for `state`, registering a fresh node reached via
    /// `action` from `parent` if the state is new. An existing node keeps
    /// its current parent link; reopening decides whether to rewire it.
    pub fn insert_or_get(
        &mut self,
        state: EncodedState,
        action: GroundAction,
        parent: StateId,
    ) -> StateId {
        if let Some(&state_id) = self.registered.get(&state) {
            return state_id;
        }

        let state_id = StateId(self.nodes.len());
        self.nodes
            .push(SearchNode::new(state_id, Some((parent, action))));
        self.registered.insert(state.clone(), state_id);
        self.states.push(state);
        state_id
    }

    pub fn node(&self, state_id: StateId) -> &SearchNode {
        self.nodes.get(state_id.0).expect("invalid state id")
    }

    pub fn node_mut(&mut self, state_id: StateId) -> &mut SearchNode {
        self.nodes.get_mut(state_id.0).expect("invalid state id")
    }

    pub fn state(&self, state_id: StateId) -> &EncodedState {
        self.states.get(state_id.0).expect("invalid state id")
    }

    /// Walks the parent links back to the root and returns the plan in
    /// execution order.
    pub fn extract_plan(&self, goal_id: StateId) -> Vec<GroundAction> {
        let mut plan = vec![];
        let mut current = self.node(goal_id);
        while let Some((parent_id, action)) = current.parent() {
            plan.push(action.clone());
            current = self.node(*parent_id);
        }
        plan.reverse();
        plan
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }
}

impl Debug for SearchSpace {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("SearchSpace")
            .field("registered_states", &self.registered.len())
            .finish()
    }
}
