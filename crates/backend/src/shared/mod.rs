pub mod config;
pub mod logging;
pub mod page_shell;
pub mod request_logger;
pub mod state;
