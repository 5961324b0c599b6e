use iced::widget::{Row, Space, button, column, container, text};
use iced::{Element, Length, Theme};
use ui_widgets_core::{TabBar, TabBarItem};

const BORDER_HEIGHT: f32 = 2.0;

fn tab_bar_item<'a, Message: Clone + 'a>(
    item: &'a TabBarItem,
    on_press: Message,
) -> Element<'a, Message> {
    let active = item.active;
    let border = container(Space::new(Length::Fill, Length::Fixed(BORDER_HEIGHT)))
        .width(Length::Fill)
        .style(move |theme: &Theme| container::Style {
            background: active.then(|| theme.extended_palette().primary.base.color.into()),
            ..Default::default()
        });

    button(column![text(item.label.as_str()), border].spacing(4))
        .style(button::text)
        .on_press(on_press)
        .into()
}

pub fn tab_bar<'a, Message: Clone + 'a>(
    bar: &'a TabBar,
    on_select: impl Fn(usize) -> Message,
) -> Element<'a, Message> {
    bar.items
        .iter()
        .enumerate()
        .fold(Row::new().spacing(4), |row, (index, item)| {
            row.push(tab_bar_item(item, on_select(index)))
        })
        .into()
}
