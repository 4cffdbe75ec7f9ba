use super::*;
use crate::domain::Direction;
use crate::systems::solver::path_indices;

fn session(size: u32) -> MazeCore {
    MazeCore::with_seed(size, 7).unwrap()
}

#[test]
fn size_is_clamped_to_config_bounds() {
    assert_eq!(MazeCore::with_seed(2, 1).unwrap().size(), 5);
    assert_eq!(MazeCore::with_seed(500, 1).unwrap().size(), 50);

    let core = session(12);
    assert_eq!(core.grid().width(), 12);
    assert_eq!(core.grid().height(), 12);
    assert_eq!(core.grid().open_passage_count(), 12 * 12 - 1);
}

#[test]
fn same_seed_builds_same_maze() {
    let a = MazeCore::with_seed(9, 42).unwrap();
    let b = MazeCore::with_seed(9, 42).unwrap();
    let walls = |c: &MazeCore| c.grid().cells().iter().map(|cell| cell.walls).collect::<Vec<_>>();
    assert_eq!(walls(&a), walls(&b));
}

#[test]
fn bfs_run_finds_path_and_reports() {
    let mut core = session(8);
    core.solve_start(Algorithm::Bfs).unwrap();
    assert!(core.is_solving());

    let outcome = core.solve_to_end().unwrap();
    assert!(outcome.is_found());
    assert!(!core.is_solving());
    assert_eq!(core.last_message(), Some("Path found using BFS!"));
    assert_eq!(core.pop_message().as_deref(), Some("Path found using BFS!"));
    assert_eq!(core.pop_message(), None);

    let stats = core.solve_stats();
    assert!(stats.finished());
    assert!(stats.found());
    assert_eq!(stats.algorithm(), "BFS");
    assert_eq!(stats.path_len() as usize, core.grid().path_len());
    assert!(stats.steps() >= stats.path_len());
    assert!(stats.frames() >= 2);

    let path = path_indices(core.grid());
    assert_eq!(path.first(), Some(&core.grid().start_index()));
    assert_eq!(path.last(), Some(&core.grid().end_index()));
}

#[test]
fn bfs_and_dfs_agree_on_a_perfect_maze() {
    // Spanning tree: the start-end path is unique.
    let mut core = session(10);
    core.solve_start_named("bfs").unwrap();
    core.solve_to_end();
    let bfs = path_indices(core.grid());

    core.solve_start_named("DFS").unwrap();
    core.solve_to_end();
    let dfs = path_indices(core.grid());

    assert_eq!(bfs, dfs);
    assert_eq!(core.last_message(), Some("Path found using DFS!"));
}

#[test]
fn second_solve_is_rejected_while_running() {
    let mut core = session(6);
    core.solve_start(Algorithm::Dfs).unwrap();
    assert_eq!(core.solve_start(Algorithm::Bfs), Err(MazeError::SolveInProgress));
    assert!(core.is_solving());

    core.solve_to_end();
    assert!(core.solve_start(Algorithm::Bfs).is_ok());
}

#[test]
fn unknown_algorithm_is_rejected() {
    let mut core = session(5);
    assert_eq!(
        core.solve_start_named("astar"),
        Err(MazeError::UnknownAlgorithm("astar".to_string()))
    );
    assert!(!core.is_solving());
}

#[test]
fn stop_solution_cancels_and_clears_scratch() {
    let mut core = session(10);
    core.solve_start(Algorithm::Bfs).unwrap();
    assert!(core.solve_step());
    assert!(core.solve_step());
    assert!(core.grid().explored_count() > 0);

    core.stop_solution();
    assert!(!core.is_solving());
    assert!(!core.solve_step());
    assert_eq!(core.grid().explored_count(), 0);
    assert_eq!(core.grid().path_len(), 0);
    assert_eq!(core.last_message(), Some("Solution visualization stopped."));

    let stats = core.solve_stats();
    assert!(stats.canceled());
    assert_eq!(stats.steps(), 2);
    assert!(matches!(core.last_outcome(), Some(SolveOutcome::Canceled { .. })));
}

#[test]
fn external_flag_clear_ends_run_with_cancel_message() {
    let mut core = session(10);
    core.solve_start(Algorithm::Dfs).unwrap();
    core.solve_step();
    core.solve_flag().cancel();

    assert!(!core.solve_step());
    assert_eq!(core.last_message(), Some("Solving canceled."));
    assert_eq!(core.grid().path_len(), 0);
}

#[test]
fn moves_are_ignored_while_solving() {
    let mut core = session(5);
    let dir = if core.grid().start().walls.right { Direction::Bottom } else { Direction::Right };
    let (dx, dy) = dir.offset();

    core.solve_start(Algorithm::Bfs).unwrap();
    assert!(!core.move_player(dx, dy));
    assert_eq!((core.player().x, core.player().y), (0, 0));

    core.stop_solution();
    assert!(core.move_player(dx, dy));
    assert_eq!((core.player().x, core.player().y), (dx as u32, dy as u32));

    // Same rule away from the origin: one more step along an open side.
    let here = core.grid().index(core.player().x, core.player().y);
    let next = core.grid().open_neighbors(here)[0];
    let (nx, ny) = core.grid().coords(next);
    let step = Direction::from_delta(
        nx as i32 - core.player().x as i32,
        ny as i32 - core.player().y as i32,
    )
    .unwrap();
    let (sx, sy) = step.offset();

    core.solve_start(Algorithm::Dfs).unwrap();
    assert!(!core.move_player(sx, sy));
    core.stop_solution();
    assert!(core.move_player(sx, sy));
    assert_eq!((core.player().x, core.player().y), (nx, ny));
}

#[test]
fn keys_map_to_moves() {
    let mut core = session(5);
    let start = core.grid().start();
    let right_open = !start.walls.right;
    let down_open = !start.walls.bottom;

    // Start sits in the top-left corner.
    assert!(!core.handle_key("w"));
    assert!(!core.handle_key("a"));
    assert!(!core.handle_key("q"));

    if right_open {
        assert!(core.handle_key("d"));
        assert_eq!(core.player().x, 1);
    } else {
        assert!(down_open);
        assert!(core.handle_key("s"));
        assert_eq!(core.player().y, 1);
    }
}

#[test]
fn reset_player_returns_home() {
    let mut core = session(5);
    let dir = if core.grid().start().walls.right { Direction::Bottom } else { Direction::Right };
    let (dx, dy) = dir.offset();
    assert!(core.move_player(dx, dy));

    core.reset_player();
    assert_eq!((core.player().x, core.player().y), (0, 0));
    assert_eq!(core.last_message(), Some("Player reset!"));
}

#[test]
fn generate_replaces_maze_and_cancels_run() {
    let mut core = session(5);
    core.solve_start(Algorithm::Bfs).unwrap();
    core.solve_step();

    core.generate(20).unwrap();
    assert!(!core.is_solving());
    assert_eq!(core.size(), 20);
    assert_eq!(core.grid().size(), 400);
    assert_eq!(core.grid().explored_count(), 0);
    assert_eq!((core.player().x, core.player().y), (0, 0));
    assert_eq!(core.extract_cell_flags().len(), 400);
}

#[test]
fn cell_flags_encode_walls_and_markers() {
    let mut core = session(5);
    core.solve_start(Algorithm::Bfs).unwrap();
    core.solve_to_end();

    let end = core.grid().end_index();
    let flags = core.extract_cell_flags().to_vec();
    assert_eq!(flags.len(), 25);

    // Outer walls never open.
    assert_eq!(flags[0] & (WALL_TOP | WALL_LEFT), WALL_TOP | WALL_LEFT);
    assert_eq!(flags[end] & (WALL_BOTTOM | WALL_RIGHT), WALL_BOTTOM | WALL_RIGHT);

    assert_ne!(flags[0] & FLAG_START, 0);
    assert_ne!(flags[0] & FLAG_PATH, 0);
    assert_ne!(flags[end] & FLAG_END, 0);
    assert_ne!(flags[end] & FLAG_EXPLORED, 0);

    let path_cells = flags.iter().filter(|f| *f & FLAG_PATH != 0).count();
    assert_eq!(path_cells, core.grid().path_len());
    assert_eq!(core.cell_flags_len(), 25);
}

#[test]
fn snapshot_serializes_frame_state() {
    let core = session(5);
    let json = core.snapshot_json().unwrap();
    assert!(json.contains("\"width\":5"));
    assert!(json.contains("\"cellSize\":30.0"));
    assert!(json.contains("\"player\":[0,0]"));
    assert!(json.contains("\"solving\":false"));
    assert_eq!(core.snapshot().cells.len(), 25);
}

#[test]
fn config_json_round_trip_and_validation() {
    let mut core = session(5);
    core.load_config_json(r#"{"delayMs": 5, "maxSize": 30}"#).unwrap();
    assert_eq!(core.delay_ms(), 5);
    assert!(core.config_json().contains("\"maxSize\":30"));

    core.generate(45).unwrap();
    assert_eq!(core.size(), 30);

    let err = core.load_config_json(r#"{"minSize": 40, "maxSize": 10}"#).unwrap_err();
    assert!(matches!(err, MazeError::Config(_)));
    assert_eq!(core.delay_ms(), 5);
}

#[test]
fn with_config_accepts_valid_and_rejects_invalid() {
    let config = MazeConfig {
        min_size: 3,
        max_size: 12,
        default_size: 6,
        delay_ms: 0,
        ..MazeConfig::default()
    };
    let core = MazeCore::with_config(config.clone(), 2, 5).unwrap();
    assert_eq!(core.size(), 3);
    assert_eq!(core.delay_ms(), 0);
    assert_eq!(core.config(), &config);

    let big = MazeCore::with_config(config, 99, 5).unwrap();
    assert_eq!(big.size(), 12);

    let inverted = MazeConfig {
        min_size: 20,
        max_size: 10,
        ..MazeConfig::default()
    };
    assert!(matches!(
        MazeCore::with_config(inverted, 15, 5),
        Err(MazeError::Config(_))
    ));

    let zero_min = MazeConfig {
        min_size: 0,
        ..MazeConfig::default()
    };
    assert!(matches!(MazeCore::with_config(zero_min, 15, 5), Err(MazeError::Config(_))));
}
