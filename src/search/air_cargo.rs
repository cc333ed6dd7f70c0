use crate::search::{Fluent, FluentState, GroundAction, PlanningError, PlanningProblem, Symbol};

/// Grounds the air cargo action schemas (AIMA 3rd Ed. 10.1) over concrete
/// cargo, plane and airport identifiers. Grounding enumerates every
/// combination in a stable order; physically unreachable actions are legal
/// members of the set, reachability is a search-time property.
#[derive(Debug, Clone)]
pub struct AirCargoDomain {
    cargos: Vec<Symbol>,
    planes: Vec<Symbol>,
    airports: Vec<Symbol>,
}

fn at(object: Symbol, airport: Symbol) -> Fluent {
    Fluent::ground("At", &[object, airport])
}

fn loaded(cargo: Symbol, plane: Symbol) -> Fluent {
    Fluent::ground("In", &[cargo, plane])
}

impl AirCargoDomain {
    pub fn new(cargos: &[&str], planes: &[&str], airports: &[&str]) -> Self {
        Self {
            cargos: cargos.iter().map(|name| Symbol::new(name)).collect(),
            planes: planes.iter().map(|name| Symbol::new(name)).collect(),
            airports: airports.iter().map(|name| Symbol::new(name)).collect(),
        }
    }

    /// `Load(c, p, a)` for every cargo x plane x airport.
    pub fn ground_load_actions(&self) -> Vec<GroundAction> {
        let mut loads = vec![];
        for &cargo in &self.cargos {
            for &plane in &self.planes {
                for &airport in &self.airports {
                    loads.push(GroundAction::new(
                        "Load",
                        &[cargo, plane, airport],
                        (vec![at(cargo, airport), at(plane, airport)], vec![]),
                        (vec![loaded(cargo, plane)], vec![at(cargo, airport)]),
                    ));
                }
            }
        }
        loads
    }

    /// `Unload(c, p, a)` for every cargo x plane x airport.
    pub fn ground_unload_actions(&self) -> Vec<GroundAction> {
        let mut unloads = vec![];
        for &cargo in &self.cargos {
            for &plane in &self.planes {
                for &airport in &self.airports {
                    unloads.push(GroundAction::new(
                        "Unload",
                        &[cargo, plane, airport],
                        (vec![loaded(cargo, plane), at(plane, airport)], vec![]),
                        (vec![at(cargo, airport)], vec![loaded(cargo, plane)]),
                    ));
                }
            }
        }
        unloads
    }

    /// `Fly(p, from, to)` for every plane and ordered airport pair with
    /// `from != to`.
    pub fn ground_fly_actions(&self) -> Vec<GroundAction> {
        let mut flys = vec![];
        for &from in &self.airports {
            for &to in &self.airports {
                if from == to {
                    continue;
                }
                for &plane in &self.planes {
                    flys.push(GroundAction::new(
                        "Fly",
                        &[plane, from, to],
                        (vec![at(plane, from)], vec![]),
                        (vec![at(plane, to)], vec![at(plane, from)]),
                    ));
                }
            }
        }
        flys
    }

    /// The full ground-action set, loads then unloads then flys.
    pub fn ground_all_actions(&self) -> Vec<GroundAction> {
        let mut actions = self.ground_load_actions();
        actions.extend(self.ground_unload_actions());
        actions.extend(self.ground_fly_actions());
        actions
    }
}

/// Two cargos, two planes, two airports; each cargo must swap coasts.
pub fn air_cargo_p1() -> Result<PlanningProblem, PlanningError> {
    let domain = AirCargoDomain::new(&["C1", "C2"], &["P1", "P2"], &["JFK", "SFO"]);
    let pos = vec![
        Fluent::ground("At", &[Symbol::new("C1"), Symbol::new("SFO")]),
        Fluent::ground("At", &[Symbol::new("C2"), Symbol::new("JFK")]),
        Fluent::ground("At", &[Symbol::new("P1"), Symbol::new("SFO")]),
        Fluent::ground("At", &[Symbol::new("P2"), Symbol::new("JFK")]),
    ];
    let neg = vec![
        Fluent::ground("At", &[Symbol::new("C2"), Symbol::new("SFO")]),
        Fluent::ground("In", &[Symbol::new("C2"), Symbol::new("P1")]),
        Fluent::ground("In", &[Symbol::new("C2"), Symbol::new("P2")]),
        Fluent::ground("At", &[Symbol::new("C1"), Symbol::new("JFK")]),
        Fluent::ground("In", &[Symbol::new("C1"), Symbol::new("P1")]),
        Fluent::ground("In", &[Symbol::new("C1"), Symbol::new("P2")]),
        Fluent::ground("At", &[Symbol::new("P1"), Symbol::new("JFK")]),
        Fluent::ground("At", &[Symbol::new("P2"), Symbol::new("SFO")]),
    ];
    let goal = vec![
        Fluent::ground("At", &[Symbol::new("C1"), Symbol::new("JFK")]),
        Fluent::ground("At", &[Symbol::new("C2"), Symbol::new("SFO")]),
    ];
    PlanningProblem::new(
        domain.ground_all_actions(),
        FluentState::new(pos, neg),
        goal,
    )
}

/// Three cargos, three planes, three airports.
pub fn air_cargo_p2() -> Result<PlanningProblem, PlanningError> {
    let domain = AirCargoDomain::new(
        &["C1", "C2", "C3"],
        &["P1", "P2", "P3"],
        &["JFK", "SFO", "ATL"],
    );
    let cargos = ["C1", "C2", "C3"];
    let planes = ["P1", "P2", "P3"];
    let homes = ["SFO", "JFK", "ATL"];

    let mut pos = vec![];
    let mut neg = vec![];
    for (index, &cargo) in cargos.iter().enumerate() {
        let cargo = Symbol::new(cargo);
        for &airport in &["JFK", "SFO", "ATL"] {
            let fluent = Fluent::ground("At", &[cargo, Symbol::new(airport)]);
            if airport == homes[index] {
                pos.push(fluent);
            } else {
                neg.push(fluent);
            }
        }
        for &plane in &planes {
            neg.push(Fluent::ground("In", &[cargo, Symbol::new(plane)]));
        }
    }
    for (index, &plane) in planes.iter().enumerate() {
        let plane = Symbol::new(plane);
        for &airport in &["JFK", "SFO", "ATL"] {
            let fluent = Fluent::ground("At", &[plane, Symbol::new(airport)]);
            if airport == homes[index] {
                pos.push(fluent);
            } else {
                neg.push(fluent);
            }
        }
    }

    let goal = vec![
        Fluent::ground("At", &[Symbol::new("C1"), Symbol::new("JFK")]),
        Fluent::ground("At", &[Symbol::new("C2"), Symbol::new("SFO")]),
        Fluent::ground("At", &[Symbol::new("C3"), Symbol::new("SFO")]),
    ];
    PlanningProblem::new(
        domain.ground_all_actions(),
        FluentState::new(pos, neg),
        goal,
    )
}

/// Four cargos, two planes, four airports.
pub fn air_cargo_p3() -> Result<PlanningProblem, PlanningError> {
    let domain = AirCargoDomain::new(
        &["C1", "C2", "C3", "C4"],
        &["P1", "P2"],
        &["JFK", "SFO", "ATL", "ORD"],
    );
    let cargos = ["C1", "C2", "C3", "C4"];
    let planes = ["P1", "P2"];
    let cargo_homes = ["SFO", "JFK", "ATL", "ORD"];
    let plane_homes = ["SFO", "JFK"];

    let mut pos = vec![];
    let mut neg = vec![];
    for (index, &cargo) in cargos.iter().enumerate() {
        let cargo = Symbol::new(cargo);
        for &airport in &["JFK", "SFO", "ATL", "ORD"] {
            let fluent = Fluent::ground("At", &[cargo, Symbol::new(airport)]);
            if airport == cargo_homes[index] {
                pos.push(fluent);
            } else {
                neg.push(fluent);
            }
        }
        for &plane in &planes {
            neg.push(Fluent::ground("In", &[cargo, Symbol::new(plane)]));
        }
    }
    for (index, &plane) in planes.iter().enumerate() {
        let plane = Symbol::new(plane);
        for &airport in &["JFK", "SFO", "ATL", "ORD"] {
            let fluent = Fluent::ground("At", &[plane, Symbol::new(airport)]);
            if airport == plane_homes[index] {
                pos.push(fluent);
            } else {
                neg.push(fluent);
            }
        }
    }

    let goal = vec![
        Fluent::ground("At", &[Symbol::new("C1"), Symbol::new("JFK")]),
        Fluent::ground("At", &[Symbol::new("C3"), Symbol::new("JFK")]),
        Fluent::ground("At", &[Symbol::new("C2"), Symbol::new("SFO")]),
        Fluent::ground("At", &[Symbol::new("C4"), Symbol::new("SFO")]),
    ];
    PlanningProblem::new(
        domain.ground_all_actions(),
        FluentState::new(pos, neg),
        goal,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grounding_counts() {
        let domain = AirCargoDomain::new(&["C1", "C2"], &["P1", "P2"], &["JFK", "SFO"]);
        assert_eq!(domain.ground_load_actions().len(), 8);
        assert_eq!(domain.ground_unload_actions().len(), 8);
        assert_eq!(domain.ground_fly_actions().len(), 4);
        assert_eq!(domain.ground_all_actions().len(), 20);
    }

    #[test]
    fn grounding_is_deterministic() {
        let domain = AirCargoDomain::new(&["C1", "C2"], &["P1", "P2"], &["JFK", "SFO"]);
        let first: Vec<String> = domain
            .ground_all_actions()
            .iter()
            .map(|action| action.to_string())
            .collect();
        let second: Vec<String> = domain
            .ground_all_actions()
            .iter()
            .map(|action| action.to_string())
            .collect();
        assert_eq!(first, second);
        assert_eq!(first[0], "Load(C1, P1, JFK)");
    }

    #[test]
    fn fly_excludes_self_loops() {
        let domain = AirCargoDomain::new(&["C1"], &["P1"], &["JFK", "SFO", "ATL"]);
        let flys = domain.ground_fly_actions();
        assert_eq!(flys.len(), 6);
        assert!(flys.iter().all(|fly| fly.args()[1] != fly.args()[2]));
    }

    #[test]
    fn problem_sizes() {
        assert_eq!(air_cargo_p1().unwrap().actions_list().len(), 20);
        // 27 loads + 27 unloads + 18 flys
        assert_eq!(air_cargo_p2().unwrap().actions_list().len(), 72);
        // 32 loads + 32 unloads + 24 flys
        assert_eq!(air_cargo_p3().unwrap().actions_list().len(), 88);
        assert_eq!(air_cargo_p2().unwrap().state_map().len(), 27);
        assert_eq!(air_cargo_p3().unwrap().state_map().len(), 32);
    }
}
