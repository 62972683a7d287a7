//! HTML rendering for the calculator page
//!
//! The display mode is passed in with each render call; nothing here
//! holds state between requests.

mod page;
mod theme;

pub use page::{render_page, Outcome, PageView, INVALID_INPUT_MESSAGE};
pub use theme::DisplayMode;
