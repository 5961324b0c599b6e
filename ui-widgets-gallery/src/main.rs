mod app;
mod widgets;

fn init_logging() {
    // Initialize tracing with configurable filtering
    tracing_subscriber::fmt()
        .with_env_filter(
            // Default to info level, but allow override via RUST_LOG
            // Example: RUST_LOG=ui_widgets_core::pagination=debug
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ui_widgets_core=info,ui_widgets_gallery=info".into()),
        )
        .init();
}

fn main() -> iced::Result {
    init_logging();

    iced::application("UI Widgets Gallery", app::update, app::view)
        .subscription(app::subscription)
        .run_with(app::initialize)
}
