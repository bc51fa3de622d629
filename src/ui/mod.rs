pub mod details;
pub mod home;
pub mod msg;
pub mod splash;
pub mod widgets;

pub use msg::AppMsg;

use std::time::{Duration, Instant};

use iced::widget::scrollable;
use iced::{Element, Subscription, Task};
use tracing::{debug, warn};

use crate::assets::{resolve_image, resolve_logo, ImageSlot};
use crate::catalog::Catalog;
use crate::config::{AppConfig, Startup};
use crate::models::{GameRecord, Theme};
use crate::navigation::{Event, Navigator, Screen, Transition};
use crate::ui::details::{games_scroll_id, view_details};
use crate::ui::home::view_home;
use crate::ui::splash::view_splash;

const FRAME: Duration = Duration::from_millis(16);

pub struct AppModel {
    config: AppConfig,
    catalog: Catalog,
    navigator: Navigator,
    logo: ImageSlot,
    splash_logo: ImageSlot,
    // One slot per game of the configured category, resolved once.
    pictures: Vec<ImageSlot>,
    last_tick: Option<Instant>,
}

impl AppModel {
    pub fn new(startup: Startup) -> Self {
        let Startup { config, catalog } = startup;
        let logo = resolve_logo(&config.assets_dir, &config.logo);
        let splash_logo = resolve_logo(&config.assets_dir, &config.splash_logo);
        let pictures = catalog
            .games_or_first(&config.category)
            .iter()
            .map(|game| resolve_image(&config.assets_dir, game.picture.as_deref()))
            .collect();
        let navigator = Navigator::new(config.splash_duration);

        Self {
            config,
            catalog,
            navigator,
            logo,
            splash_logo,
            pictures,
            last_tick: None,
        }
    }

    pub fn title(&self) -> String {
        "Martial Arts Games".to_string()
    }

    pub fn games(&self) -> &[GameRecord] {
        self.catalog.games_or_first(&self.config.category)
    }

    pub fn screen(&self) -> &Screen {
        self.navigator.current()
    }

    fn navigate(&mut self, event: Event) -> Task<AppMsg> {
        match self.navigator.handle(event) {
            Ok(Transition::Quit) => iced::exit(),
            Ok(Transition::Moved { .. }) => {
                self.last_tick = None;
                Task::none()
            }
            Err(e) => {
                warn!(error = %e, "ignored navigation event");
                Task::none()
            }
        }
    }

    pub fn update(&mut self, message: AppMsg) -> Task<AppMsg> {
        match message {
            AppMsg::SplashTick(now) => {
                let delta = self
                    .last_tick
                    .map(|last| now.saturating_duration_since(last))
                    .unwrap_or(Duration::ZERO);
                self.last_tick = Some(now);
                let finished = match self.navigator.current_mut() {
                    Screen::Splash(splash) => splash.advance(delta),
                    _ => false,
                };
                if finished {
                    self.navigate(Event::SplashFinished)
                } else {
                    Task::none()
                }
            }
            AppMsg::LanguageChosen(language) => {
                let task = self.navigate(Event::LanguageChosen(language));
                task.chain(scrollable::scroll_to(
                    games_scroll_id(),
                    scrollable::AbsoluteOffset { x: 0.0, y: 0.0 },
                ))
            }
            AppMsg::BackToMain => self.navigate(Event::Back),
            AppMsg::Exit => self.navigate(Event::Exit),
            AppMsg::Scrolled(viewport) => {
                if let Screen::Detail(detail) = self.navigator.current_mut() {
                    detail.scroll_offset = viewport.absolute_offset().y;
                }
                Task::none()
            }
            AppMsg::ScrollToTop => {
                debug!("scrolling game list to top");
                scrollable::scroll_to(
                    games_scroll_id(),
                    scrollable::AbsoluteOffset { x: 0.0, y: 0.0 },
                )
            }
        }
    }

    pub fn view(&self) -> Element<'_, AppMsg> {
        match self.navigator.current() {
            Screen::Splash(splash) => view_splash(splash, &self.splash_logo),
            Screen::Main(_) => view_home(&self.logo),
            Screen::Detail(detail) => view_details(detail, self.games(), &self.pictures),
        }
    }

    pub fn subscription(&self) -> Subscription<AppMsg> {
        match self.navigator.current() {
            Screen::Splash(_) => iced::time::every(FRAME).map(AppMsg::SplashTick),
            _ => Subscription::none(),
        }
    }

    pub fn theme(&self) -> iced::Theme {
        match self.config.theme {
            Theme::Dark => iced::Theme::Dark,
            Theme::Light => iced::Theme::Light,
            Theme::System => iced::Theme::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Language, ScreenKind};
    use crate::settings::Settings;
    use std::path::Path;

    fn model(splash_millis: u64) -> AppModel {
        let settings = Settings {
            splash_millis,
            ..Settings::default()
        };
        let config = AppConfig::from_settings(Path::new("/nonexistent"), &settings);
        let catalog = Catalog::from_json_str(
            r#"{ "GAMES_IN_FULL_CONTACT_SPORTS": [ { "English_N": "Tiger Tag" }, { "Picture": "x.png" } ] }"#,
        )
        .unwrap();
        AppModel::new(Startup { config, catalog })
    }

    #[test]
    fn splash_ticks_lead_to_main() {
        let mut app = model(50);
        let start = Instant::now();
        let _ = app.update(AppMsg::SplashTick(start));
        assert_eq!(app.screen().kind(), ScreenKind::Splash);
        let _ = app.update(AppMsg::SplashTick(start + Duration::from_millis(60)));
        assert_eq!(app.screen().kind(), ScreenKind::Main);
    }

    #[test]
    fn language_round_trip_resets_detail() {
        let mut app = model(0);
        let _ = app.update(AppMsg::SplashTick(Instant::now()));
        let _ = app.update(AppMsg::LanguageChosen(Language::Arabic));
        assert!(matches!(app.screen(), Screen::Detail(d) if d.language == Language::Arabic));
        let _ = app.update(AppMsg::BackToMain);
        assert_eq!(app.screen().kind(), ScreenKind::Main);
    }

    #[test]
    fn pictures_are_resolved_per_game() {
        let app = model(0);
        assert_eq!(app.games().len(), 2);
        assert_eq!(app.pictures.len(), 2);
        assert!(matches!(app.pictures[0], ImageSlot::Absent { .. }));
        assert!(matches!(app.pictures[1], ImageSlot::Missing { .. }));
        assert!(matches!(app.logo, ImageSlot::Missing { .. }));
        assert!(matches!(app.splash_logo, ImageSlot::Missing { .. }));
    }

    #[test]
    fn list_pictures_are_resolved_under_images_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("images")).unwrap();
        std::fs::write(dir.path().join("images").join("crane.png"), b"png").unwrap();
        std::fs::write(dir.path().join("images").join("logo.png"), b"png").unwrap();

        let config = AppConfig::from_settings(dir.path(), &Settings::default());
        let catalog = Catalog::from_json_str(
            r#"[ { "id": 1, "image": "crane.png", "name": { "en": "Crane" } }, { "id": 2, "image": "bear.png" } ]"#,
        )
        .unwrap();
        let app = AppModel::new(Startup { config, catalog });

        assert_eq!(
            app.pictures[0],
            ImageSlot::Found(dir.path().join(".").join("images/crane.png"))
        );
        assert_eq!(
            app.pictures[1].label(),
            Some("Image file 'images/bear.png' not found")
        );
        assert!(matches!(app.splash_logo, ImageSlot::Found(_)));
        assert!(matches!(app.logo, ImageSlot::Missing { .. }));
    }
}
