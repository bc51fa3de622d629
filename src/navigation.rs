// navigation.rs - Screen state machine: Splash -> Main <-> Detail
//
// Each screen owns its transient state and gets on_enter/on_exit
// callbacks when the navigator switches to or away from it.

use std::time::Duration;
use tracing::info;

use crate::error::NavigationError;
use crate::models::{Language, ScreenKind};

pub trait ScreenHooks {
    fn on_enter(&mut self) {}
    fn on_exit(&mut self) {}
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplashState {
    pub elapsed: Duration,
    pub duration: Duration,
}

impl SplashState {
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// Fade-in progress in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Advances the animation; returns true once it has run its course.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.elapsed = (self.elapsed + delta).min(self.duration);
        self.elapsed >= self.duration
    }
}

impl ScreenHooks for SplashState {
    fn on_enter(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MainState;

impl ScreenHooks for MainState {}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    pub language: Language,
    pub scroll_offset: f32,
}

impl DetailState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            scroll_offset: 0.0,
        }
    }
}

impl ScreenHooks for DetailState {
    fn on_enter(&mut self) {
        self.scroll_offset = 0.0;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Splash(SplashState),
    Main(MainState),
    Detail(DetailState),
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Splash(_) => ScreenKind::Splash,
            Screen::Main(_) => ScreenKind::Main,
            Screen::Detail(_) => ScreenKind::Detail,
        }
    }

    fn hooks(&mut self) -> &mut dyn ScreenHooks {
        match self {
            Screen::Splash(s) => s,
            Screen::Main(s) => s,
            Screen::Detail(s) => s,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    SplashFinished,
    LanguageChosen(Language),
    Back,
    Exit,
}

impl Event {
    fn name(&self) -> &'static str {
        match self {
            Event::SplashFinished => "splash finished",
            Event::LanguageChosen(_) => "language chosen",
            Event::Back => "back",
            Event::Exit => "exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved { from: ScreenKind, to: ScreenKind },
    /// The application should close.
    Quit,
}

#[derive(Debug)]
pub struct Navigator {
    current: Screen,
    previous: Option<ScreenKind>,
}

impl Navigator {
    pub fn new(splash_duration: Duration) -> Self {
        let mut splash = Screen::Splash(SplashState::new(splash_duration));
        splash.hooks().on_enter();
        Self {
            current: splash,
            previous: None,
        }
    }

    /// Starts directly on the main screen.
    pub fn at_main() -> Self {
        Self {
            current: Screen::Main(MainState),
            previous: None,
        }
    }

    pub fn current(&self) -> &Screen {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut Screen {
        &mut self.current
    }

    /// The screen shown before the current one. Only one level is kept.
    pub fn previous(&self) -> Option<ScreenKind> {
        self.previous
    }

    pub fn handle(&mut self, event: Event) -> Result<Transition, NavigationError> {
        let next = match (&self.current, event) {
            (Screen::Splash(_), Event::SplashFinished) => Screen::Main(MainState),
            (Screen::Main(_), Event::LanguageChosen(language)) => {
                Screen::Detail(DetailState::new(language))
            }
            (Screen::Detail(_), Event::Back) => Screen::Main(MainState),
            (Screen::Main(_), Event::Exit) => {
                info!("exit requested from main screen");
                return Ok(Transition::Quit);
            }
            (current, event) => {
                return Err(NavigationError::InvalidTransition {
                    from: current.kind(),
                    event: event.name(),
                });
            }
        };
        Ok(self.switch_to(next))
    }

    fn switch_to(&mut self, mut next: Screen) -> Transition {
        let from = self.current.kind();
        let to = next.kind();
        self.current.hooks().on_exit();
        next.hooks().on_enter();
        self.current = next;
        self.previous = Some(from);
        info!(%from, %to, "screen changed");
        Transition::Moved { from, to }
    }
}
