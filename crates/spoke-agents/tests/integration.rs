//! Agents driven against a shared grid, the way the engine steps them.

use spoke_agents::{Agent, MoveOutcome};
use spoke_core::{AgentId, AgentKind, Coord};
use spoke_grid::{GridState, RoadLayout, RoadMask};

fn step_all(agents: &[Agent], grid: &mut GridState) -> Vec<MoveOutcome> {
    agents.iter().map(|a| a.advance(grid)).collect()
}

#[test]
fn mixed_population_on_a_lane() {
    let mask = RoadMask::from_layout(6, &RoadLayout::Row(2)).unwrap();
    let mut grid = GridState::from_mask(mask, &[Coord::new(1, 1)]).unwrap();
    let agents = [
        Agent::bicycle(AgentId(0), 1),
        Agent::bicycle(AgentId(1), 2),
        Agent::person(AgentId(2)),
    ];
    grid.place(AgentId(0), Coord::new(5, 2)).unwrap();
    grid.place(AgentId(1), Coord::new(0, 2)).unwrap();
    grid.place(AgentId(2), Coord::new(0, 2)).unwrap();

    let outcomes = step_all(&agents, &mut grid);
    assert_eq!(
        outcomes,
        vec![
            MoveOutcome::Moved {
                from: Coord::new(5, 2),
                to: Coord::new(0, 2),
            },
            MoveOutcome::Moved {
                from: Coord::new(0, 2),
                to: Coord::new(2, 2),
            },
            MoveOutcome::Stationary,
        ]
    );
    // Bicycle 0 wrapped onto the person's cell; sharing is allowed.
    assert_eq!(
        grid.occupants(Coord::new(0, 2)).as_slice(),
        &[AgentId(0), AgentId(2)]
    );
    assert!(!grid.is_station(Coord::new(0, 2)));
}

#[test]
fn bicycle_stops_for_good_at_a_gap() {
    // Road on row 0 except x = 3.
    let mask = RoadMask::from_fn(5, |c| c.y == 0 && c.x != 3).unwrap();
    let mut grid = GridState::from_mask(mask, &[]).unwrap();
    let bike = Agent::bicycle(AgentId(0), 1);
    grid.place(AgentId(0), Coord::new(0, 0)).unwrap();

    let trail: Vec<u32> = (0..5)
        .map(|_| {
            bike.advance(&mut grid);
            grid.position(AgentId(0)).unwrap().x
        })
        .collect();
    assert_eq!(trail, vec![1, 2, 2, 2, 2]);
}

#[test]
fn agents_report_their_kind() {
    let kinds: Vec<AgentKind> = [Agent::person(AgentId(0)), Agent::bicycle(AgentId(1), 0)]
        .iter()
        .map(Agent::kind)
        .collect();
    assert_eq!(kinds, vec![AgentKind::Person, AgentKind::Bicycle]);
}
