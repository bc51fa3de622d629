use iced::widget::{button, column, container, text, Column};
use iced::{alignment, Color, Element, Length};

use crate::assets::ImageSlot;
use crate::i18n::{language_button_label, uses_arabic_font, APP_TITLE, EXIT_LABEL};
use crate::models::Language;
use crate::ui::msg::AppMsg;
use crate::ui::widgets::{arabic_font, button_color, image_slot, tinted};

fn language_button<'a>(language: Language) -> Element<'a, AppMsg> {
    let mut label = text(language_button_label(language))
        .size(32)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill);
    if uses_arabic_font(language) {
        label = label.font(arabic_font());
    }

    button(label)
        .width(Length::Fill)
        .padding(16)
        .style(tinted(button_color(language)))
        .on_press(AppMsg::LanguageChosen(language))
        .into()
}

pub fn view_home<'a>(logo: &ImageSlot) -> Element<'a, AppMsg> {
    let title = text(APP_TITLE)
        .size(44)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill);

    let buttons = Language::all()
        .iter()
        .fold(Column::new().spacing(24), |col, language| {
            col.push(language_button(*language))
        })
        .push(
            button(text(EXIT_LABEL).size(24).align_x(alignment::Horizontal::Center).width(Length::Fill))
                .width(Length::Fill)
                .padding(12)
                .style(tinted(Color::from_rgb(1.0, 0.3, 0.3)))
                .on_press(AppMsg::Exit),
        )
        .padding(40);

    let content = column![title, image_slot(logo, 400.0), buttons]
        .spacing(10)
        .padding(10)
        .max_width(640);

    container(content)
        .center_x(Length::Fill)
        .height(Length::Fill)
        .into()
}
