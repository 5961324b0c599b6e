use iced::alignment::Vertical;
use iced::widget::{Row, button, container, text};
use iced::Element;
use ui_widgets_core::{NavigationIntent, Pagination, Slot};

const SLOT_TEXT_SIZE: u16 = 14;

/// Render the pagination control for `pagination`.
///
/// Every enabled button maps its activation through `on_navigate`. Disabled
/// arrows get no press handler, which iced shows as the disabled status. The
/// selected page uses the primary style.
pub fn pagination<'a, Message: Clone + 'a>(
    pagination: Pagination,
    on_navigate: impl Fn(NavigationIntent) -> Message + 'a,
) -> Element<'a, Message> {
    let mut controls = Row::new().spacing(6).align_y(Vertical::Center);

    for slot in pagination.slots() {
        let element: Element<'a, Message> = match slot {
            Slot::Ellipsis => container(text(slot.label()).size(SLOT_TEXT_SIZE))
                .padding([4, 10])
                .into(),
            _ => button(text(slot.label()).size(SLOT_TEXT_SIZE))
                .padding([4, 10])
                .style(if slot.is_selected() {
                    button::primary
                } else {
                    button::secondary
                })
                .on_press_maybe(pagination.activate(&slot).map(&on_navigate))
                .into(),
        };
        controls = controls.push(element);
    }

    controls.into()
}
