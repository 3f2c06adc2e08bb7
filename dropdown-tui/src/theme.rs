//! Colors of the dropdown, a light panel on the terminal background.

use crate::types::Rgb;

/// Terminal background outside the widget.
pub const SCREEN: Rgb = Rgb::new(0, 0, 0);
/// Default foreground on the terminal background.
pub const TEXT: Rgb = Rgb::new(230, 230, 230);

pub const PANEL_BG: Rgb = Rgb::new(255, 255, 255);
pub const PANEL_TEXT: Rgb = Rgb::new(36, 41, 46);
pub const PANEL_BORDER: Rgb = Rgb::new(0xe1, 0xe4, 0xe8);
pub const MUTED: Rgb = Rgb::new(0x66, 0x66, 0x66);

pub const CHIP_BG: Rgb = Rgb::new(0xe3, 0xe3, 0xe3);

/// Selected row background in multi-select mode.
pub const SELECTED_MULTI: Rgb = Rgb::new(0xf1, 0xf8, 0xff);
/// Selected row background in single-select mode.
pub const SELECTED_SINGLE: Rgb = Rgb::new(0xe6, 0xf3, 0xff);
