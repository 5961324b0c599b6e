use crate::widgets;
use iced::event::{self, Event};
use iced::widget::{Column, column, container, scrollable, text};
use iced::{Element, Length, Subscription, Task, mouse, window};
use std::path::{Path, PathBuf};
use ui_widgets_core::{
    Dropdown, GalleryConfig, ListItem, NavigationIntent, Pagination, TabBar, format_slots,
};

/// Overrides the gallery configuration file location
const CONFIG_PATH_ENV: &str = "UI_WIDGETS_GALLERY_CONFIG";

#[derive(Debug, Clone)]
pub enum Message {
    // Pagination
    Navigate(NavigationIntent),

    // Dropdown
    DropdownToggled,
    DropdownSelected(String),
    DropdownDismissed,

    // Tabs
    TabSelected(usize),
}

/// The gallery is the host of every widget: it owns the current page, the
/// dropdown selection and the active tab, and re-renders after each change.
pub struct Gallery {
    pagination: Pagination,
    dropdown: Dropdown,
    list_items: Vec<ListItem>,
    tabs: TabBar,
    last_event: Option<String>,
    error_message: Option<String>,
}

impl Gallery {
    pub fn from_config(config: &GalleryConfig) -> Self {
        Self {
            pagination: config.pagination.pagination(),
            dropdown: config.dropdown.dropdown(),
            list_items: config.list_items.clone(),
            tabs: config.tab_bar(),
            last_event: None,
            error_message: None,
        }
    }

    /// Start from the configuration at `path` (or the default location),
    /// falling back to the built-in gallery when it cannot be loaded.
    pub fn load(path: Option<&Path>) -> Self {
        match GalleryConfig::load_or_default(path) {
            Ok(config) => Self::from_config(&config),
            Err(e) => {
                log::warn!("Failed to load gallery configuration, using defaults: {}", e);
                let mut gallery = Self::from_config(&GalleryConfig::default());
                gallery.error_message = Some(e.to_string());
                gallery
            }
        }
    }
}

pub fn initialize() -> (Gallery, Task<Message>) {
    let config_path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);

    // Loaded before the first frame so no user change can be overwritten
    (Gallery::load(config_path.as_deref()), Task::none())
}

pub fn update(state: &mut Gallery, message: Message) -> Task<Message> {
    match message {
        Message::Navigate(intent) => {
            state.last_event = Some(format!("pageChange {{ page: {} }}", intent.target_page));
            match state.pagination.navigate(intent) {
                Some(next) => {
                    log::info!(
                        "Page {} -> {} of {}",
                        state.pagination.current_page,
                        next.current_page,
                        next.total_pages
                    );
                    state.pagination = next;
                }
                None => {
                    log::warn!(
                        "Ignoring navigation to page {} (total pages: {})",
                        intent.target_page,
                        state.pagination.total_pages
                    );
                }
            }
        }
        Message::DropdownToggled => {
            state.dropdown.toggle();
        }
        Message::DropdownSelected(key) => {
            let change = state.dropdown.select(key);
            log::info!("Dropdown changed to '{}'", change.key);
            state.last_event = Some(format!("change {{ key: {} }}", change.key));
        }
        Message::DropdownDismissed => {
            state.dropdown.dismiss();
        }
        Message::TabSelected(index) => {
            if state.tabs.activate(index) {
                state.last_event = Some(format!("tab {}", index));
            }
        }
    }

    Task::none()
}

/// Listen for clicks anywhere only while the dropdown is open, so closing it
/// also drops the global listener.
pub fn subscription(state: &Gallery) -> Subscription<Message> {
    if state.dropdown.is_open() {
        event::listen_with(outside_click)
    } else {
        Subscription::none()
    }
}

// The dropdown captures every press inside its bounds, so an uncaptured
// primary press landed outside it
fn outside_click(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    match (event, status) {
        (Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)), event::Status::Ignored) => {
            Some(Message::DropdownDismissed)
        }
        _ => None,
    }
}

fn section<'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    column![text(title).size(18), body].spacing(10).into()
}

pub fn view(state: &Gallery) -> Element<'_, Message> {
    let pagination_section = section(
        "Pagination",
        column![
            widgets::pagination(state.pagination, Message::Navigate),
            text(format!(
                "Page {} of {}    {}",
                state.pagination.current_page,
                state.pagination.total_pages,
                format_slots(&state.pagination.slots())
            ))
            .size(12)
            .font(iced::Font::MONOSPACE),
        ]
        .spacing(8)
        .into(),
    );

    let dropdown_section = section(
        "Dropdown",
        widgets::dropdown(
            &state.dropdown,
            Message::DropdownToggled,
            Message::DropdownSelected,
        ),
    );

    let list_section = section(
        "List items",
        state
            .list_items
            .iter()
            .fold(Column::new().spacing(8), |list, item| {
                list.push(widgets::list_item(item))
            })
            .into(),
    );

    let tabs_section = section("Tabs", widgets::tab_bar(&state.tabs, Message::TabSelected));

    let mut content = column![
        pagination_section,
        dropdown_section,
        list_section,
        tabs_section,
    ]
    .spacing(30)
    .padding(20);

    if let Some(event) = &state.last_event {
        content = content.push(text(format!("Last event: {}", event)).size(14));
    }
    if let Some(error) = &state.error_message {
        content = content.push(
            text(format!("Configuration error: {}", error))
                .size(14)
                .color(iced::Color::from_rgb(0.8, 0.2, 0.2)),
        );
    }

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
