use catch_the_cat_core::{CellCoord, Event, GameState};
use catch_the_cat_system_session::Session;
use catch_the_cat_world::query;

#[test]
fn replaying_the_same_clicks_yields_the_same_game() {
    let first = replay(scripted_clicks());
    let second = replay(scripted_clicks());

    assert_eq!(first, second, "replay diverged between runs");
    assert!(
        first
            .events
            .iter()
            .any(|event| matches!(event, Event::CatMoved { .. })),
        "script should move the cat at least once"
    );
}

#[test]
fn replay_never_leaves_the_cat_on_a_wall() {
    let outcome = replay(scripted_clicks());

    for (index, state) in outcome.cat_trail.iter().enumerate() {
        assert!(
            !outcome.walls_per_turn[index].contains(state),
            "cat stood on a wall after click {index}"
        );
    }
}

fn scripted_clicks() -> Vec<CellCoord> {
    vec![
        CellCoord::new(4, 5),
        CellCoord::new(4, 4),
        CellCoord::new(3, 6),
        CellCoord::new(2, 5),
        CellCoord::new(2, 4),
        CellCoord::new(2, 6),
        CellCoord::new(1, 5),
        CellCoord::new(0, 5),
        CellCoord::new(5, 5),
        CellCoord::new(6, 6),
    ]
}

#[derive(Debug, PartialEq)]
struct ReplayOutcome {
    events: Vec<Event>,
    cat_trail: Vec<CellCoord>,
    walls_per_turn: Vec<Vec<CellCoord>>,
    final_state: GameState,
}

fn replay(clicks: Vec<CellCoord>) -> ReplayOutcome {
    let mut session = Session::new();
    let mut events = Vec::new();
    let mut cat_trail = Vec::new();
    let mut walls_per_turn = Vec::new();

    for cell in clicks {
        let _ = session.on_player_click(cell, &mut events);
        let world = session.world();
        cat_trail.push(query::cat_cell(world));
        walls_per_turn.push(query::grid_view(world).walls().collect());
    }

    ReplayOutcome {
        events,
        cat_trail,
        walls_per_turn,
        final_state: session.state(),
    }
}
