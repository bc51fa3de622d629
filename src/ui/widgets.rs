use iced::widget::{button, container, image, row, text, Text};
use iced::{alignment, Background, Border, Color, ContentFit, Element, Font, Length, Theme};

use crate::assets::{stars, ImageSlot};
use crate::i18n::{uses_arabic_font, ARABIC_FONT};
use crate::models::Language;
use crate::ui::msg::AppMsg;

pub const TITLE_COLOR: Color = Color::from_rgb(0.529, 0.906, 0.941);
pub const GOLD: Color = Color::from_rgba(0.922, 0.835, 0.584, 0.922);
pub const STAR_COLOR: Color = Color::from_rgb(0.95, 0.75, 0.1);

pub fn button_color(language: Language) -> Color {
    match language {
        Language::English => Color::from_rgba(0.447, 0.761, 0.353, 0.922),
        Language::French => Color::from_rgba(0.408, 0.584, 0.871, 0.922),
        Language::Arabic => Color::from_rgba(0.58, 0.227, 0.11, 0.922),
    }
}

pub fn arabic_font() -> Font {
    Font::with_name(ARABIC_FONT)
}

/// Text that switches to the Arabic font when `language` needs it.
pub fn localized_text<'a>(content: &'a str, language: Language) -> Text<'a> {
    let label = text(content).align_x(alignment::Horizontal::Center).width(Length::Fill);
    if uses_arabic_font(language) {
        label.font(arabic_font())
    } else {
        label
    }
}

pub fn tinted(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Color { a: 1.0, ..color },
            button::Status::Disabled => Color { a: 0.4, ..color },
            button::Status::Active => color,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: Color::WHITE,
            border: Border {
                radius: 8.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

pub fn image_slot<'a>(slot: &ImageSlot, height: f32) -> Element<'a, AppMsg> {
    match slot {
        ImageSlot::Found(path) => image(image::Handle::from_path(path.clone()))
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Contain)
            .into(),
        ImageSlot::Missing { label } | ImageSlot::Absent { label } => container(text(label.clone()))
            .center_x(Length::Fill)
            .padding(10)
            .into(),
    }
}

pub fn star_row<'a>(rating: u8) -> Element<'a, AppMsg> {
    let mut stars_row = row![].spacing(4);
    for filled in stars(rating) {
        let glyph = if filled { "★" } else { "☆" };
        stars_row = stars_row.push(text(glyph).size(24).color(STAR_COLOR));
    }
    container(stars_row).center_x(Length::Fill).into()
}
