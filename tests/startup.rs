use std::time::Duration;

use martial_games::config::Startup;
use martial_games::models::{Language, ScreenKind};
use martial_games::navigation::{Event, MainState, Navigator, Screen, Transition};
use martial_games::settings::SETTINGS_FILE;
use martial_games::DataLoadError;
use tempfile::tempdir;

#[tokio::test]
async fn test_startup_stops_on_malformed_catalog() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("data_G.txt"), "this is not json").unwrap();

    let result = Startup::load(dir.path()).await;
    assert!(matches!(result, Err(DataLoadError::Malformed(_))));
}

#[tokio::test]
async fn test_startup_reads_configured_data_file() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join(SETTINGS_FILE),
        r#"{ "data_file": "games.json", "splash_millis": 500 }"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("games.json"),
        r#"[ { "name": { "en": "Bear Crawl" } } ]"#,
    )
    .unwrap();

    let startup = Startup::load(dir.path()).await.unwrap();
    assert_eq!(startup.catalog.len(), 1);
    assert_eq!(startup.config.splash_duration, Duration::from_millis(500));
    assert_eq!(startup.config.data_path, dir.path().join("games.json"));
}

#[test]
fn test_full_navigation_cycle() {
    let mut nav = Navigator::new(Duration::from_millis(1));
    nav.handle(Event::SplashFinished).unwrap();

    for language in Language::all() {
        let moved = nav.handle(Event::LanguageChosen(*language)).unwrap();
        assert_eq!(
            moved,
            Transition::Moved {
                from: ScreenKind::Main,
                to: ScreenKind::Detail
            }
        );
        nav.handle(Event::Back).unwrap();
        assert_eq!(nav.current(), &Screen::Main(MainState));
    }

    assert!(nav.handle(Event::SplashFinished).is_err());
    assert_eq!(nav.handle(Event::Exit), Ok(Transition::Quit));
}
