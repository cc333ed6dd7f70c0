use crate::search::GroundAction;

/// Handle into a [`crate::search::search_engines::SearchSpace`]. Ids are
/// dense and assigned in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the open list
    Open,
    /// Node is in the closed list
    Closed,
}

#[derive(Debug, Clone)]
pub struct SearchNode {
    state_id: StateId,
    status: SearchNodeStatus,
    /// Cost to reach this node.
    g: f64,
    /// Heuristic estimate of the remaining cost.
    h: f64,
    /// Parent state and the action that led here; `None` for the root.
    parent: Option<(StateId, GroundAction)>,
}

impl SearchNode {
    pub fn new(state_id: StateId, parent: Option<(StateId, GroundAction)>) -> Self {
        Self {
            state_id,
            status: SearchNodeStatus::New,
            g: f64::INFINITY,
            h: f64::INFINITY,
            parent,
        }
    }

    pub fn open(&mut self, g: f64, h: f64) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
    }

    /// Reopens a node along a cheaper path, rewiring its parent link.
    pub fn reopen(&mut self, g: f64, parent: StateId, action: GroundAction) {
        debug_assert!(g < self.g, "reopening must improve g");
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.parent = Some((parent, action));
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn state_id(&self) -> StateId {
        self.state_id
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn f(&self) -> f64 {
        self.g + self.h
    }

    pub fn parent(&self) -> Option<&(StateId, GroundAction)> {
        self.parent.as_ref()
    }
}
