use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    French,
    Arabic,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::French, Language::Arabic]
    }

    /// Prefix of the flat `<Prefix>_N` / `<Prefix>_D` keys.
    pub fn key_prefix(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::Arabic => "Arabic",
        }
    }

    /// ISO 639-1 code, used as key in nested name/description maps.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Arabic => "ar",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Arabic)
    }

    /// Accepts either the ISO code or the flat-key prefix.
    pub fn from_key(key: &str) -> Option<Language> {
        Language::all()
            .iter()
            .copied()
            .find(|l| l.code().eq_ignore_ascii_case(key) || l.key_prefix().eq_ignore_ascii_case(key))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key_prefix())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
}

impl Field {
    pub fn key_suffix(&self) -> &'static str {
        match self {
            Field::Name => "_N",
            Field::Description => "_D",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameRecord {
    pub id: Option<u32>,
    pub picture: Option<String>,
    pub names: HashMap<Language, String>,
    pub descriptions: HashMap<Language, String>,
    pub rating: Option<u8>,
}

impl GameRecord {
    pub fn text(&self, language: Language, field: Field) -> Option<&str> {
        let map = match field {
            Field::Name => &self.names,
            Field::Description => &self.descriptions,
        };
        map.get(&language).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub games: Vec<GameRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Splash,
    Main,
    Detail,
}

impl std::fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenKind::Splash => write!(f, "splash"),
            ScreenKind::Main => write!(f, "main"),
            ScreenKind::Detail => write!(f, "game_details"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub enum Theme {
    Dark,
    Light,
    System,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::System
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "Dark"),
            Theme::Light => write!(f, "Light"),
            Theme::System => write!(f, "System"),
        }
    }
}
