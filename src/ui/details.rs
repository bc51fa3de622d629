use iced::widget::{button, container, horizontal_space, row, scrollable, stack, text, Column};
use iced::{alignment, Element, Length};

use crate::assets::ImageSlot;
use crate::i18n::{resolve, BACK_LABEL, TOP_LABEL};
use crate::models::{Field, GameRecord, Language};
use crate::navigation::DetailState;
use crate::ui::msg::AppMsg;
use crate::ui::widgets::{image_slot, localized_text, star_row, tinted, GOLD, TITLE_COLOR};

pub fn games_scroll_id() -> scrollable::Id {
    scrollable::Id::new("games")
}

fn game_card<'a>(game: &'a GameRecord, picture: &ImageSlot, language: Language) -> Element<'a, AppMsg> {
    let mut card = Column::new()
        .spacing(10)
        .padding(10)
        .push(
            localized_text(resolve(game, language, Field::Name), language)
                .size(32)
                .color(TITLE_COLOR),
        )
        .push(image_slot(picture, 500.0));

    if let Some(id) = game.id {
        card = card.push(
            text(format!("ID: {}", id))
                .align_x(alignment::Horizontal::Center)
                .width(Length::Fill),
        );
    }
    if let Some(rating) = game.rating {
        card = card.push(star_row(rating));
    }

    card.push(localized_text(resolve(game, language, Field::Description), language).size(18))
        .into()
}

pub fn view_details<'a>(
    state: &DetailState,
    games: &'a [GameRecord],
    pictures: &[ImageSlot],
) -> Element<'a, AppMsg> {
    let list = if games.is_empty() {
        Column::new().push(text("No games in this catalog").width(Length::Fill))
    } else {
        games
            .iter()
            .zip(pictures)
            .fold(Column::new().spacing(30), |col, (game, picture)| {
                col.push(game_card(game, picture, state.language))
            })
    };

    let scroll = scrollable(container(list.padding(20)).width(Length::Fill))
        .id(games_scroll_id())
        .on_scroll(AppMsg::Scrolled)
        .height(Length::Fill);

    let controls = row![
        button(text(BACK_LABEL).size(20))
            .padding(16)
            .style(tinted(GOLD))
            .on_press(AppMsg::BackToMain),
        horizontal_space(),
        button(text(TOP_LABEL).size(24))
            .padding(16)
            .style(tinted(GOLD))
            .on_press(AppMsg::ScrollToTop),
    ]
    .padding(24);

    let overlay = container(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Bottom);

    stack![scroll, overlay].into()
}
