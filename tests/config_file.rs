//! Loading and writing the TOML config file.

use mazecrawl::config::Config;
use tempfile::tempdir;

#[tokio::test]
async fn create_then_load_round_trips_defaults() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("mazecrawl.toml");
    let path = path.to_str().unwrap();
    Config::create_default(path).await.unwrap();
    let loaded = Config::load(path).await.unwrap();
    assert_eq!(loaded, Config::default());
}

#[tokio::test]
async fn missing_file_gives_defaults_but_load_errors() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("absent.toml");
    let path = path.to_str().unwrap();
    assert_eq!(Config::load_or_default(path).await.unwrap(), Config::default());
    let err = Config::load(path).await.unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[tokio::test]
async fn overrides_and_validation() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("custom.toml");
    std::fs::write(
        &path,
        "[player]\nname = \"Ada\"\nhealth = 50\nattack_power = 7\n\n[maze]\nsize = 14\nwall_chance = 10\nseed = 77\n",
    )
    .unwrap();
    let cfg = Config::load(path.to_str().unwrap()).await.unwrap();
    assert_eq!(cfg.player.name, "Ada");
    assert_eq!(cfg.maze.size, 14);
    assert_eq!(cfg.maze.seed, Some(77));
    assert_eq!(cfg.logging.level, "info");

    std::fs::write(&path, "[maze]\nsize = 1\nwall_chance = 10\n").unwrap();
    assert!(Config::load(path.to_str().unwrap()).await.is_err());

    std::fs::write(&path, "[maze\nsize = ").unwrap();
    let err = Config::load_or_default(path.to_str().unwrap()).await.unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[tokio::test]
async fn seed_only_maze_section_loads() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("seeded.toml");
    std::fs::write(&path, "[maze]\nseed = 42\n").unwrap();
    let cfg = Config::load(path.to_str().unwrap()).await.unwrap();
    assert_eq!(cfg.maze.seed, Some(42));
    assert_eq!(cfg.maze.size, 10);
    assert_eq!(cfg.maze.wall_chance, 25);
}

#[tokio::test]
async fn oversized_maze_is_rejected_on_load() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("huge.toml");
    std::fs::write(&path, "[maze]\nsize = 100000\n").unwrap();
    let err = Config::load(path.to_str().unwrap()).await.unwrap_err();
    assert!(err.to_string().contains("maze.size must be between 3 and 100"));
}
