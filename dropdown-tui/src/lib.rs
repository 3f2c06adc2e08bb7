//! Terminal front-end for the virtualized dropdown.
//!
//! Renders a [`dropdown_lib::Dropdown`] into a cell buffer, flushes the
//! buffer through crossterm, and turns terminal input back into dropdown
//! messages.

pub mod app;
pub mod buffer;
pub mod error;
pub mod event;
pub mod rect;
pub mod sample;
pub mod text;
pub mod theme;
pub mod types;
pub mod units;
pub mod widget;

mod terminal;

pub use app::App;
pub use buffer::{Buffer, Cell};
pub use error::TuiError;
pub use event::{Event, Key, Modifiers, MouseButton};
pub use rect::Rect;
pub use terminal::Terminal;
pub use types::{Rgb, TextStyle};
pub use units::Scale;
