use std::fmt;

#[derive(Debug)]
pub enum WidgetError {
    Json(serde_json::Error),
    Config(String),
    Io(std::io::Error),
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetError::Json(e) => write!(f, "JSON parsing error: {}", e),
            WidgetError::Config(e) => write!(f, "Configuration error: {}", e),
            WidgetError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for WidgetError {}

impl From<serde_json::Error> for WidgetError {
    fn from(err: serde_json::Error) -> Self {
        WidgetError::Json(err)
    }
}

impl From<std::io::Error> for WidgetError {
    fn from(err: std::io::Error) -> Self {
        WidgetError::Io(err)
    }
}
