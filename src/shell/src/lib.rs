pub mod config;
pub mod http_client;
pub mod panel;
pub mod screen;

pub use config::AppConfig;
pub use panel::{Panel, PanelCommand};
pub use screen::Screen;
