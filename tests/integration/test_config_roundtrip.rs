//! Integration tests for configuration loading and saving

use boardlink::{BoardId, Config, ConfigLoader};

#[test]
fn default_config_round_trips_through_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("boardlink.toml");

    let config = Config::default();
    let loader = ConfigLoader::new();
    loader.save_to_path(&config, &path).unwrap();

    let reloaded = ConfigLoader::load_from_path(&path).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn customized_config_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("boardlink.toml");

    let mut config = Config::default();
    config.device.port = Some("/dev/ttyACM2".to_string());
    config.device.baud_rate = 9600;
    config.device.extra_boards.push(BoardId::new(0x2E8A, 0x0005));
    config.capabilities.run_action = false;

    let loader = ConfigLoader::new();
    loader.save_to_path(&config, &path).unwrap();

    let reloaded = ConfigLoader::load_from_path(&path).unwrap();
    assert_eq!(reloaded, config);
    assert!(!reloaded.capabilities.run_action);
}

#[test]
fn capability_flag_selects_the_mode_variant() {
    use boardlink::BoardMode;

    let mode = BoardMode::pyboard();

    let both = Config::default();
    let names: Vec<String> = mode
        .actions(&both.capabilities)
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, vec!["run", "repl"]);

    let mut repl_only = Config::default();
    repl_only.capabilities.run_action = false;
    let names: Vec<String> = mode
        .actions(&repl_only.capabilities)
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, vec!["repl"]);
}

#[test]
fn init_with_config_reads_the_given_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[device]\nbaud_rate = 57600\n").unwrap();

    let config = boardlink::init_with_config(&path).unwrap();
    assert_eq!(config.device.baud_rate, 57600);
}
