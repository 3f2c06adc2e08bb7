use dropdown_lib::Dropdown;
use dropdown_lib::dropdown::NO_RESULTS;

use super::hit::{HitMap, Region};
use super::{DropdownView, MIN_COLS};
use crate::buffer::Buffer;
use crate::rect::Rect;
use crate::text::{display_width, tail_to_width, truncate_to_width};
use crate::theme;
use crate::types::{Rgb, TextStyle};

const SELECT_ALL: &str = "Select All";

impl DropdownView {
    /// Draw `dropdown` into `buf` and return what was drawn where.
    ///
    /// The panel only shows rows from the dropdown's visible range, each at
    /// the terminal row its scroll position maps to.
    pub fn render(&self, dropdown: &Dropdown, buf: &mut Buffer) -> HitMap {
        let mut hits = HitMap::new();
        let area = buf.area();
        let container = self.container(dropdown.config(), area).intersect(area);
        if container.is_empty() {
            return hits;
        }

        self.draw_input(dropdown, buf, area, &mut hits);
        if dropdown.is_open() {
            self.draw_panel(dropdown, buf, container, &mut hits);
        }
        hits
    }

    fn draw_input(&self, dropdown: &Dropdown, buf: &mut Buffer, area: Rect, hits: &mut HitMap) {
        let rect = self.input_rect(dropdown.config(), area).intersect(area);
        let border = dropdown
            .config()
            .input_rgb()
            .map(Rgb::from)
            .unwrap_or(theme::PANEL_BORDER);
        buf.fill(rect, theme::PANEL_BG);
        buf.border(rect, border);
        hits.push(rect, Region::Input);

        let inner = rect.inner();
        if inner.is_empty() {
            return;
        }
        let line = inner.row(inner.height.saturating_sub(1) / 2);
        let mut text_cols = line.width;

        if let Some(summary) = dropdown.selection_summary() {
            let chip = format!(" {} × ", summary);
            let chip_cols = display_width(&chip) as u16;
            // Only when a few columns of input stay visible next to it.
            if chip_cols + 4 <= line.width {
                let chip_rect = Rect::new(line.right() - chip_cols, line.y, chip_cols, 1);
                buf.fill(chip_rect, theme::CHIP_BG);
                buf.put_str(
                    chip_rect.x,
                    line.y,
                    &chip,
                    chip_cols,
                    theme::PANEL_TEXT,
                    TextStyle::new(),
                );
                hits.push(
                    Rect::new(chip_rect.right() - 3, line.y, 3, 1),
                    Region::ClearSelection,
                );
                text_cols = chip_rect.x - line.x - 1;
            }
        }

        let text = dropdown.input_text();
        let cursor_x = if text.is_empty() {
            buf.put_str(
                line.x,
                line.y,
                dropdown.placeholder(),
                text_cols,
                theme::MUTED,
                TextStyle::new().italic(),
            );
            line.x
        } else {
            let room = text_cols.saturating_sub(1) as usize;
            let shown = tail_to_width(&text, room);
            line.x + buf.put_str(line.x, line.y, shown, text_cols, theme::PANEL_TEXT, TextStyle::new())
        };

        if dropdown.is_open()
            && cursor_x < line.x + text_cols
            && let Some(cell) = buf.get_mut(cursor_x, line.y)
        {
            cell.fg = theme::PANEL_BG;
            cell.bg = theme::PANEL_TEXT;
        }
    }

    fn draw_panel(&self, dropdown: &Dropdown, buf: &mut Buffer, container: Rect, hits: &mut HitMap) {
        let scale = self.scale();
        let dims = dropdown.dimensions();
        let multi = dropdown.is_multiple();
        let list_rows = scale.rows(dims.height).max(1);
        let header_rows = if multi { 2 } else { 0 };
        let width = scale.cols(dims.width).max(MIN_COLS);

        let panel = Rect::new(
            container.x,
            container.bottom(),
            width,
            list_rows + header_rows + 2,
        )
        .intersect(buf.area());
        if panel.is_empty() {
            return;
        }
        buf.fill(panel, theme::PANEL_BG);
        buf.border(panel, theme::PANEL_BORDER);
        hits.push(panel, Region::Panel);

        let inner = panel.inner();
        if multi {
            let header = inner.row(0).intersect(inner);
            let mark = if dropdown.is_all_selected() { "[x] " } else { "[ ] " };
            let label = format!("{}{}", mark, SELECT_ALL);
            buf.put_str(
                header.x + 1,
                header.y,
                &label,
                header.width.saturating_sub(2),
                theme::PANEL_TEXT,
                TextStyle::new().bold(),
            );
            hits.push(header, Region::SelectAll);
            if inner.height > 1 {
                buf.hline(inner, inner.y + 1, theme::PANEL_BORDER);
            }
        }

        let list = Rect::new(inner.x, inner.y + header_rows, inner.width, list_rows).intersect(inner);
        if list.is_empty() {
            return;
        }

        if dropdown.filtered_len() == 0 {
            buf.put_str(
                list.x + 1,
                list.y,
                NO_RESULTS,
                list.width.saturating_sub(2),
                theme::MUTED,
                TextStyle::new(),
            );
            return;
        }

        let Some(range) = dropdown.visible_range() else {
            return;
        };
        for index in range.rendered() {
            let top = dropdown.list().item_top(index) / scale.cell_height;
            if top < 0.0 {
                continue;
            }
            let dy = top.floor() as u16;
            if dy >= list.height {
                break;
            }
            let row = list.row(dy);
            draw_row(dropdown, buf, row, index);
            hits.push(row, Region::Row(index));
        }
    }
}

fn draw_row(dropdown: &Dropdown, buf: &mut Buffer, row: Rect, index: usize) {
    let multi = dropdown.is_multiple();
    let selected = dropdown.is_row_selected(index);
    let bg = match (selected, multi) {
        (true, true) => theme::SELECTED_MULTI,
        (true, false) => theme::SELECTED_SINGLE,
        (false, _) => theme::PANEL_BG,
    };
    buf.fill(row, bg);

    let avail = row.width.saturating_sub(2);
    let mut used = 0;
    if multi {
        let mark = if selected { "[x] " } else { "[ ] " };
        used = buf.put_str(row.x + 1, row.y, mark, avail, theme::PANEL_TEXT, TextStyle::new());
    }

    let room = avail.saturating_sub(used);
    let label = dropdown.row_label(index).unwrap_or_default();
    let label = truncate_to_width(&label, room as usize);
    buf.put_str(
        row.x + 1 + used,
        row.y,
        &label,
        room,
        theme::PANEL_TEXT,
        TextStyle::new(),
    );
}
