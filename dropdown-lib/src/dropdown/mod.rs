//! Dropdown widget - searchable, virtualized, single or multi select.

pub mod events;
mod state;

pub use events::{Msg, PointerTarget};
pub use state::{ChangeHandler, Dropdown, NO_RESULTS, PLACEHOLDER};
