pub mod api_utils;
pub mod bootstrap;
pub mod components;
pub mod debounce;
pub mod icons;
pub mod list_utils;
pub mod location;
pub mod page_frame;
