//! Terminal input to dropdown messages.

use dropdown_lib::{Dropdown, Msg, PointerTarget, ScrollRequest};

use super::hit::{HitMap, Region};
use crate::event::{Event, Key, MouseButton};

/// Rows moved per wheel notch.
pub const WHEEL_ROWS: i32 = 3;

/// Translate one event against the last drawn frame.
///
/// Every mouse press first reports where it landed, so the dropdown can
/// close on outside clicks, then the action of whatever was hit. Resize
/// events yield nothing; the host re-measures and sends
/// [`Msg::Resized`] itself.
pub fn translate(event: &Event, dropdown: &Dropdown, hits: &HitMap) -> Vec<Msg> {
    match event {
        Event::MouseDown { x, y, button } => mouse_down(*x, *y, *button, dropdown, hits),
        Event::Scroll { x, y, delta_y } => {
            let over_panel = hits.hit(*x, *y).is_some_and(|r| r.in_panel());
            if dropdown.is_open() && over_panel {
                vec![Msg::Scroll(ScrollRequest::Rows(*delta_y as i32 * WHEEL_ROWS))]
            } else {
                Vec::new()
            }
        }
        Event::Key { key, modifiers } => {
            if modifiers.ctrl || modifiers.alt {
                return Vec::new();
            }
            key_press(*key, dropdown)
        }
        Event::Resize { .. } => Vec::new(),
    }
}

fn mouse_down(x: u16, y: u16, button: MouseButton, dropdown: &Dropdown, hits: &HitMap) -> Vec<Msg> {
    let Some(region) = hits.hit(x, y) else {
        return vec![Msg::PointerDown(PointerTarget::Outside)];
    };

    // The chip sits beside the input, not in it: pressing it counts as an
    // outside click.
    let target = match region {
        Region::ClearSelection => PointerTarget::Outside,
        r if r.in_panel() => PointerTarget::Panel,
        _ => PointerTarget::Input,
    };
    let mut msgs = vec![Msg::PointerDown(target)];
    if button != MouseButton::Left {
        return msgs;
    }

    match region {
        Region::Input => msgs.push(Msg::InputClicked),
        Region::ClearSelection => msgs.push(Msg::ClearSelection),
        Region::SelectAll => msgs.push(Msg::ToggleSelectAll(!dropdown.is_all_selected())),
        Region::Row(index) => msgs.push(Msg::ToggleItem {
            index,
            selected: !dropdown.is_row_selected(index),
        }),
        Region::Panel => {}
    }
    msgs
}

fn key_press(key: Key, dropdown: &Dropdown) -> Vec<Msg> {
    let scroll = |request| {
        if dropdown.is_open() {
            vec![Msg::Scroll(request)]
        } else {
            Vec::new()
        }
    };

    match key {
        Key::Char(c) => {
            let mut text = dropdown.input_text();
            text.push(c);
            vec![Msg::QueryChanged(text)]
        }
        Key::Backspace => {
            let mut text = dropdown.input_text();
            if text.pop().is_some() {
                vec![Msg::QueryChanged(text)]
            } else {
                Vec::new()
            }
        }
        Key::Enter => vec![Msg::InputClicked],
        Key::Escape => vec![Msg::PointerDown(PointerTarget::Outside)],
        Key::Up => scroll(ScrollRequest::Rows(-1)),
        Key::Down => scroll(ScrollRequest::Rows(1)),
        Key::PageUp => scroll(ScrollRequest::PageUp),
        Key::PageDown => scroll(ScrollRequest::PageDown),
        Key::Home => scroll(ScrollRequest::Home),
        Key::End => scroll(ScrollRequest::End),
        _ => Vec::new(),
    }
}
