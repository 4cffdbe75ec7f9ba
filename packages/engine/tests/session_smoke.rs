use maze_engine::simulation::{FLAG_PATH, FLAG_START};
use maze_engine::{MazeCore, MazeError};

#[test]
fn session_smoke_solve_and_stats() {
    let mut core = MazeCore::with_seed(15, 2024).unwrap();
    assert_eq!(core.delay_ms(), 20);

    core.solve_start_named("bfs").unwrap();
    assert_eq!(core.solve_start_named("dfs"), Err(MazeError::SolveInProgress));
    assert!(!core.handle_key("d"));

    let mut ticks = 0;
    while core.solve_step() {
        ticks += 1;
        assert!(ticks <= 15 * 15, "solve did not terminate");
    }

    let stats = core.solve_stats();
    assert!(stats.found());
    assert!(stats.elapsed_ms() >= 0.0);
    assert!(stats.explored() >= stats.path_len());
    assert_eq!(core.pop_message().as_deref(), Some("Path found using BFS!"));

    let flags = core.extract_cell_flags();
    assert!(flags[0] & FLAG_START != 0);
    assert_eq!(flags.iter().filter(|f| **f & FLAG_PATH != 0).count() as u32, stats.path_len());
}

#[test]
fn session_smoke_custom_config() {
    let mut core = MazeCore::with_seed(10, 1).unwrap();
    core.load_config_json(r#"{"minSize": 3, "maxSize": 8, "defaultSize": 4, "colors": {"player": "blue"}}"#)
        .unwrap();

    core.generate(2).unwrap();
    assert_eq!(core.size(), 3);
    assert_eq!(core.config().colors.player, "blue");
    assert_eq!(core.config().colors.explored, "#10b981");

    assert!(core.load_config_json("not json").is_err());
}
