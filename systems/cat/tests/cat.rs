use catch_the_cat_core::{CellCoord, Command, Event, GameState, GridConfig, HexDirection};
use catch_the_cat_system_cat::{Cat, CatDecision};
use catch_the_cat_world::{self as world, query, scaffolding, World};

fn play_turn(world: &mut World, cat: &Cat, cell: CellCoord) -> Vec<Event> {
    let mut log = Vec::new();
    let mut events = Vec::new();
    world::apply(world, Command::BlockCell { cell }, &mut events);
    log.extend_from_slice(&events);

    let mut commands = Vec::new();
    cat.handle(&events, &query::grid_view(world), &mut commands);
    for command in commands {
        let mut generated = Vec::new();
        world::apply(world, command, &mut generated);
        log.extend(generated);
    }
    log
}

#[test]
fn cat_moves_one_step_towards_the_edge_per_turn() {
    let mut world = World::with_config(GridConfig::new(9, 9)).expect("valid configuration");
    let cat = Cat::new();
    let start = query::cat_cell(&world);

    let events = play_turn(&mut world, &cat, CellCoord::new(8, 8));

    let moved = events
        .iter()
        .find_map(|event| match event {
            Event::CatMoved { from, to } => Some((*from, *to)),
            _ => None,
        })
        .expect("cat should move after a valid wall");
    assert_eq!(moved.0, start);
    assert_eq!(moved.1, start.neighbor(HexDirection::Left));
    assert_eq!(query::cat_cell(&world), moved.1);
}

#[test]
fn identical_clicks_produce_identical_paths() {
    let clicks = [
        CellCoord::new(0, 0),
        CellCoord::new(3, 4),
        CellCoord::new(2, 4),
        CellCoord::new(1, 5),
    ];

    let replay = || {
        let mut world = World::new();
        let cat = Cat::new();
        let mut log = Vec::new();
        for cell in clicks {
            log.extend(play_turn(&mut world, &cat, cell));
        }
        (log, query::cat_cell(&world))
    };

    assert_eq!(replay(), replay());
}

#[test]
fn cat_never_steps_onto_a_wall() {
    let mut world = World::new();
    let cat = Cat::new();
    let clicks = [
        CellCoord::new(4, 5),
        CellCoord::new(3, 5),
        CellCoord::new(3, 4),
        CellCoord::new(2, 3),
        CellCoord::new(2, 6),
    ];

    for cell in clicks {
        let _ = play_turn(&mut world, &cat, cell);
        if query::game_state(&world) != GameState::Playing {
            break;
        }
        let position = query::cat_cell(&world);
        let occupied = query::cell(&world, position).expect("cat stays on the board");
        assert!(!occupied.is_wall, "cat stands on a wall at {position:?}");
    }
}

#[test]
fn cat_on_the_edge_with_no_open_neighbor_concedes() {
    let mut world = World::with_config(GridConfig::new(5, 5)).expect("valid configuration");
    let edge = CellCoord::new(0, 2);
    assert!(scaffolding::place_cat(&mut world, edge));
    for neighbor in edge.neighbors() {
        let _ = scaffolding::place_wall(&mut world, neighbor);
    }

    let decision = Cat::new().step(&query::grid_view(&world), edge);

    assert_eq!(decision, CatDecision::Concede);
}
