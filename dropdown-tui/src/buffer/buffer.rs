use super::Cell;
use crate::rect::Rect;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    /// Paint the background of every cell in `rect`, blanking its content.
    pub fn fill(&mut self, rect: Rect, bg: Rgb) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                self.set(x, y, Cell::new(' ').with_bg(bg));
            }
        }
    }

    /// Write `text` starting at (x, y), clipped to `max_width` columns.
    ///
    /// Keeps the existing background. Returns the number of columns
    /// written.
    pub fn put_str(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        max_width: u16,
        fg: Rgb,
        style: TextStyle,
    ) -> u16 {
        let mut col = 0u16;
        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if col + w > max_width {
                break;
            }
            let cx = x.saturating_add(col);
            let bg = self.get(cx, y).map(|c| c.bg).unwrap_or_default();
            self.set(cx, y, Cell::new(ch).with_fg(fg).with_bg(bg).with_style(style));
            if w == 2
                && let Some(next) = self.get_mut(cx.saturating_add(1), y)
            {
                next.wide_continuation = true;
                next.bg = bg;
            }
            col += w;
        }
        col
    }

    /// Draw a single-line rounded border on the edge of `rect`.
    pub fn border(&mut self, rect: Rect, fg: Rgb) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let (tl, tr, bl, br, h, v) = ('╭', '╮', '╰', '╯', '─', '│');

        self.set_char(rect.x, rect.y, tl, fg);
        self.set_char(rect.right() - 1, rect.y, tr, fg);
        self.set_char(rect.x, rect.bottom() - 1, bl, fg);
        self.set_char(rect.right() - 1, rect.bottom() - 1, br, fg);

        for x in (rect.x + 1)..(rect.right() - 1) {
            self.set_char(x, rect.y, h, fg);
            self.set_char(x, rect.bottom() - 1, h, fg);
        }
        for y in (rect.y + 1)..(rect.bottom() - 1) {
            self.set_char(rect.x, y, v, fg);
            self.set_char(rect.right() - 1, y, v, fg);
        }
    }

    /// Draw a horizontal rule across `rect`'s width at row `y`.
    pub fn hline(&mut self, rect: Rect, y: u16, fg: Rgb) {
        for x in rect.x..rect.right() {
            self.set_char(x, y, '─', fg);
        }
    }

    fn set_char(&mut self, x: u16, y: u16, ch: char, fg: Rgb) {
        if let Some(cell) = self.get_mut(x, y) {
            cell.char = ch;
            cell.fg = fg;
            cell.wide_continuation = false;
        }
    }

    /// The characters of row `y`, continuation cells skipped.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }
}
