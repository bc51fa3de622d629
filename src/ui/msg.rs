use std::time::Instant;

use iced::widget::scrollable;

use crate::models::Language;

#[derive(Debug, Clone)]
pub enum AppMsg {
    SplashTick(Instant),
    LanguageChosen(Language),
    BackToMain,
    ScrollToTop,
    Scrolled(scrollable::Viewport),
    Exit,
}
