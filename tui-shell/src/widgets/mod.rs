//! Reusable widgets shared by both apps
//!
//! Widgets implement [`Component`](crate::Component) and emit actions via
//! callback constructors passed through props.

mod select_list;
mod text_input;

pub use select_list::{SelectList, SelectListProps};
pub use text_input::{TextInput, TextInputProps};
