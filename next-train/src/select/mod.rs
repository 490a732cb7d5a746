//! Interactive route, stop and direction selection.
//!
//! Each step lists the available names, reads one line, and resolves it.
//! Unrecognised input is reported and the step is asked again until a valid
//! name arrives or input runs out.

mod error;
mod menu;

pub use error::SelectionError;
pub use menu::Menu;
