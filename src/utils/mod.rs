pub mod logging;
pub mod text;

pub use text::{take_chars, truncate_text};
