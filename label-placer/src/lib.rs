pub mod align;
pub mod config;
pub mod drawing;
pub mod error;
pub mod font;
pub mod globals;
pub mod layout;
pub mod log;
pub mod place;
pub mod toolkit;
pub mod transform_stack;
pub mod widget;

pub use place::place_label;
pub use toolkit::Toolkit;

// re-exported libs
pub use cosmic_text;
pub use taffy;
