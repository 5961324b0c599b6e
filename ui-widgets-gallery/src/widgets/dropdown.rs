use iced::widget::{Column, button, container, horizontal_rule, opaque, row, text};
use iced::{Element, Length};
use ui_widgets_core::Dropdown;

/// Render the dropdown. Presses anywhere inside it come back captured, so a
/// host listening for uncaptured presses only sees clicks outside.
pub fn dropdown<'a, Message: Clone + 'a>(
    dropdown: &'a Dropdown,
    on_toggle: Message,
    on_select: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let width = Length::Fixed(dropdown.width as f32);
    let mut content = Column::new().spacing(6);

    if let Some(label) = dropdown.label() {
        content = content.push(text(label).size(14));
    }

    let chevron = if dropdown.is_open() { "▴" } else { "▾" };
    let toggle = button(row![text(dropdown.button_text()).width(Length::Fill), text(chevron)].spacing(8))
        .width(width)
        .padding(8)
        .style(button::secondary)
        .on_press_maybe(if dropdown.disabled {
            None
        } else {
            Some(on_toggle)
        });
    content = content.push(toggle);

    if dropdown.is_open() {
        let mut options = Column::new().spacing(2);
        for option in &dropdown.options {
            let item: Element<'a, Message> = if option.is_divider() {
                horizontal_rule(1).into()
            } else {
                button(text(option.value.as_str()))
                    .width(Length::Fill)
                    .style(if dropdown.is_selected(option) {
                        button::primary
                    } else {
                        button::text
                    })
                    .on_press(on_select(option.key.clone()))
                    .into()
            };
            options = options.push(item);
        }

        content = content.push(
            container(options)
                .width(width)
                .padding(4)
                .style(container::rounded_box),
        );
    }

    opaque(content)
}
