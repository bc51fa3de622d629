use iced::widget::{column, container, progress_bar, text};
use iced::{Color, Element, Length};

use crate::assets::ImageSlot;
use crate::navigation::SplashState;
use crate::ui::msg::AppMsg;
use crate::ui::widgets::{image_slot, TITLE_COLOR};

pub fn view_splash<'a>(state: &SplashState, logo: &ImageSlot) -> Element<'a, AppMsg> {
    let progress = state.progress();

    let caption = text("Educational Games in Martial Arts Sports")
        .size(28)
        .color(Color { a: progress, ..TITLE_COLOR });

    let content = column![
        image_slot(logo, 320.0),
        caption,
        progress_bar(0.0..=1.0, progress).height(Length::Fixed(6.0)),
    ]
    .spacing(24)
    .padding(40)
    .width(Length::Fixed(420.0));

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
