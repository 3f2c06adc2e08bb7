//! Virtualized dropdown core
//!
//! Headless state for a searchable single/multi-select dropdown over a large
//! list. Only a growing prefix of the list is "loaded" at a time, and only
//! the rows inside the viewport are ever handed to a renderer.

pub mod config;
pub mod dropdown;
pub mod error;
pub mod filter;
pub mod item;
pub mod layout;
pub mod selection;
pub mod virtual_list;
pub mod window;

pub use config::{DropdownConfig, Length};
pub use dropdown::{ChangeHandler, Dropdown, Msg, PointerTarget};
pub use item::{Item, Key};
pub use layout::{Bounds, Dimensions, HostMetrics};
pub use selection::{Selection, SelectionMode};
pub use virtual_list::{ScrollRequest, VirtualList, VisibleRange};
pub use window::DataWindow;
