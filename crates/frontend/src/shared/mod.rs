pub mod components;
pub mod config;
pub mod page_frame;
pub mod page_standard;
