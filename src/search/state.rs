use crate::search::{Fluent, PlanningError};
use std::collections::HashSet;
use std::fmt::{self, Debug, Display, Formatter};

/// A structured state: two disjoint literal sets, the fluents asserted true
/// and the fluents asserted false. Together they must cover every fluent of
/// the problem's ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FluentState {
    pub pos: Vec<Fluent>,
    pub neg: Vec<Fluent>,
}

impl FluentState {
    pub fn new(pos: Vec<Fluent>, neg: Vec<Fluent>) -> Self {
        Self { pos, neg }
    }

    /// Renders the positive fluents as a conjunction, e.g.
    /// `At(C1, SFO) & At(P1, SFO)`.
    pub fn pos_sentence(&self) -> String {
        self.pos
            .iter()
            .map(|fluent| fluent.to_string())
            .collect::<Vec<_>>()
            .join(" & ")
    }

    /// Renders the full state as a conjunction, negative fluents prefixed
    /// with `~`.
    pub fn sentence(&self) -> String {
        self.pos
            .iter()
            .map(|fluent| fluent.to_string())
            .chain(self.neg.iter().map(|fluent| format!("~{fluent}")))
            .collect::<Vec<_>>()
            .join(" & ")
    }
}

/// A fixed-width positional encoding of a state: one boolean per fluent in
/// the problem-wide ordering, position `i` is true iff the fluent at
/// `state_map[i]` holds. Cheap to hash and compare, which is what the search
/// space and the heuristic cache key on.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EncodedState(Vec<bool>);

impl EncodedState {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

impl Display for EncodedState {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for &bit in &self.0 {
            write!(f, "{}", if bit { 'T' } else { 'F' })?;
        }
        Ok(())
    }
}

impl Debug for EncodedState {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

/// Encodes a structured state against the given fluent ordering. Fails with
/// [`PlanningError::InconsistentState`] if a fluent of `state_map` is found
/// in both or neither of the state's sets.
pub fn encode(state: &FluentState, state_map: &[Fluent]) -> Result<EncodedState, PlanningError> {
    let positives: HashSet<&Fluent> = state.pos.iter().collect();
    let negatives: HashSet<&Fluent> = state.neg.iter().collect();

    let mut bits = Vec::with_capacity(state_map.len());
    for fluent in state_map {
        match (positives.contains(fluent), negatives.contains(fluent)) {
            (true, false) => bits.push(true),
            (false, true) => bits.push(false),
            _ => {
                return Err(PlanningError::InconsistentState {
                    fluent: fluent.to_string(),
                })
            }
        }
    }

    Ok(EncodedState(bits))
}

/// Decodes an encoded state by partitioning `state_map` on the boolean at
/// each position. Total given matching lengths.
pub fn decode(state: &EncodedState, state_map: &[Fluent]) -> Result<FluentState, PlanningError> {
    if state.len() != state_map.len() {
        return Err(PlanningError::LengthMismatch {
            expected: state_map.len(),
            actual: state.len(),
        });
    }

    let mut fs = FluentState::new(vec![], vec![]);
    for (fluent, &bit) in state_map.iter().zip(state.as_slice()) {
        if bit {
            fs.pos.push(fluent.clone());
        } else {
            fs.neg.push(fluent.clone());
        }
    }

    Ok(fs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn sample_state() -> (FluentState, Vec<Fluent>) {
        let pos = vec![fluent("At", &["C1", "SFO"]), fluent("At", &["P1", "SFO"])];
        let neg = vec![fluent("At", &["C1", "JFK"]), fluent("In", &["C1", "P1"])];
        let state_map: Vec<Fluent> = pos.iter().chain(neg.iter()).cloned().collect();
        (FluentState::new(pos, neg), state_map)
    }

    #[test]
    fn round_trip() {
        let (fs, state_map) = sample_state();
        let encoded = encode(&fs, &state_map).unwrap();
        assert_eq!(encoded.to_string(), "TTFF");
        let decoded = decode(&encoded, &state_map).unwrap();
        assert_eq!(decoded, fs);
    }

    #[test]
    fn round_trip_permuted_ordering() {
        let (fs, mut state_map) = sample_state();
        state_map.reverse();
        let encoded = encode(&fs, &state_map).unwrap();
        assert_eq!(encoded.to_string(), "FFTT");
        let decoded = decode(&encoded, &state_map).unwrap();
        // the partition is the same set-wise, ordered by the permuted map
        assert_eq!(decoded.pos.len(), fs.pos.len());
        assert!(fs.pos.iter().all(|f| decoded.pos.contains(f)));
        assert!(fs.neg.iter().all(|f| decoded.neg.contains(f)));
    }

    #[test]
    fn encode_rejects_uncovered_fluent() {
        let (fs, mut state_map) = sample_state();
        state_map.push(fluent("At", &["P2", "JFK"]));
        assert_eq!(
            encode(&fs, &state_map),
            Err(PlanningError::InconsistentState {
                fluent: "At(P2, JFK)".to_owned()
            })
        );
    }

    #[test]
    fn encode_rejects_double_assertion() {
        let (mut fs, state_map) = sample_state();
        fs.neg.push(fs.pos[0].clone());
        assert!(matches!(
            encode(&fs, &state_map),
            Err(PlanningError::InconsistentState { .. })
        ));
    }

    #[test]
    fn decode_rejects_length_mismatch() {
        let (fs, state_map) = sample_state();
        let encoded = encode(&fs, &state_map).unwrap();
        assert_eq!(
            decode(&encoded, &state_map[..3]),
            Err(PlanningError::LengthMismatch {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn sentences() {
        let (fs, _) = sample_state();
        assert_eq!(fs.pos_sentence(), "At(C1, SFO) & At(P1, SFO)");
        assert_eq!(
            fs.sentence(),
            "At(C1, SFO) & At(P1, SFO) & ~At(C1, JFK) & ~In(C1, P1)"
        );
    }
}
