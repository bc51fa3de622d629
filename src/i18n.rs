// i18n.rs - Localized text: per-record fields and the fixed UI strings

use crate::models::{Field, GameRecord, Language};

pub const NAME_FALLBACK: &str = "Name not available in this language";
pub const DESCRIPTION_FALLBACK: &str = "Description not available";

pub const APP_TITLE: &str = "Specific Games \n for Martial Arts Sports";
pub const BACK_LABEL: &str = "Back to Main";
pub const EXIT_LABEL: &str = "Exit";
pub const TOP_LABEL: &str = "↑";

/// Font family used for Arabic text at render time.
pub const ARABIC_FONT: &str = "Noto Naskh Arabic";

pub fn fallback(field: Field) -> &'static str {
    match field {
        Field::Name => NAME_FALLBACK,
        Field::Description => DESCRIPTION_FALLBACK,
    }
}

/// Text of `field` in `language`, or the fixed fallback when the record has none.
/// An empty stored string still counts as present.
pub fn resolve(record: &GameRecord, language: Language, field: Field) -> &str {
    record.text(language, field).unwrap_or_else(|| fallback(field))
}

/// Label of the main-menu button that opens the catalog in `language`.
pub fn language_button_label(language: Language) -> &'static str {
    match language {
        Language::English => "Continue in English",
        Language::French => "French",
        Language::Arabic => "عربي",
    }
}

pub fn uses_arabic_font(language: Language) -> bool {
    language.is_rtl()
}
