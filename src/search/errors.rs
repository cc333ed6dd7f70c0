use thiserror::Error;

/// Errors surfaced by the planning core. All of these are local,
/// deterministic and recoverable by the caller; there is no I/O anywhere in
/// the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanningError {
    /// A fluent of the problem's ordering was found in both or neither of a
    /// state's positive and negative sets. Callers must guarantee total
    /// coverage before encoding.
    #[error("inconsistent state: fluent {fluent} must appear in exactly one of the positive and negative sets")]
    InconsistentState { fluent: String },

    /// An encoded state does not match the problem's fluent ordering.
    #[error("length mismatch: encoded state has {actual} slots, fluent ordering has {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// An action asserts the same fluent with both polarities in its
    /// preconditions or in its effects. Detected when a problem is
    /// constructed, not silently resolved.
    #[error("malformed action {action}: {fluent} appears with both polarities")]
    MalformedAction { action: String, fluent: String },

    /// A planning graph may only be built once; graphs are cheap and are
    /// recomputed per search node instead of being reset.
    #[error("planning graph already built; construct a new graph for each root state")]
    AlreadyBuilt,

    /// The graph leveled off without ever producing a goal literal. The
    /// level-sum heuristic reports this instead of pretending the goal is
    /// close.
    #[error("goal fluent {fluent} never appears in any literal level")]
    UnreachableGoalFluent { fluent: String },
}
