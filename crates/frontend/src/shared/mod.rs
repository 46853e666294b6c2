pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod icons;
pub mod image_fallback;
pub mod notifications;
pub mod page_frame;
pub mod page_standard;
