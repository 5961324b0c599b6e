use iced::alignment::Vertical;
use iced::widget::{Column, Row, container, image, text};
use iced::{Element, Length};
use std::path::Path;
use ui_widgets_core::ListItem;

pub fn list_item<'a, Message: 'a>(item: &'a ListItem) -> Element<'a, Message> {
    let mut content = Row::new().spacing(12).align_y(Vertical::Center);

    // Sources are local paths; a missing primary file switches to the fallback
    if let Some(picture) = item.image() {
        if let Some(src) = picture.resolve(|src| Path::new(src).exists()) {
            content = content.push(
                image(image::Handle::from_path(src)).height(Length::Fixed(picture.height as f32)),
            );
        }
    }

    let mut body = Column::new().spacing(2);
    if let Some(headline) = item.headline() {
        body = body.push(text(headline).size(if item.is_small() { 14 } else { 16 }));
    }
    if let Some(subhead) = item.subhead() {
        body = body.push(text(subhead).size(12));
    }
    content = content.push(body);

    container(content)
        .padding(if item.is_small() { 6 } else { 12 })
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}
