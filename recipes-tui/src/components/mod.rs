//! Screen components
//!
//! Each screen renders from read-only props and emits actions from
//! `handle_event`. Layout: search bar on top, the routed screen below, a
//! one-line help bar at the bottom.

mod detail;
mod help_bar;
mod home;
mod results;
mod search_bar;

pub use detail::{Detail, DetailProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use home::{Home, HomeProps};
pub use results::{Results, ResultsProps};
pub use search_bar::{SearchBar, SearchBarProps};
