pub mod config;
pub mod datemath;
pub mod error;
pub mod input;
pub mod render;

pub use error::{Error, ErrorKind, Result};
pub use render::CalendarRenderer;
