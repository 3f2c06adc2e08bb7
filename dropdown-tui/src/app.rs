//! Event loop around one dropdown.

use std::time::Duration;

use dropdown_lib::{Dropdown, Msg, VisibleRange};

use crate::buffer::Buffer;
use crate::error::TuiError;
use crate::event::{Event, Key};
use crate::rect::Rect;
use crate::terminal::Terminal;
use crate::units::Scale;
use crate::widget::{DropdownView, HitMap, translate};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Owns the dropdown and runs it on the terminal.
pub struct App {
    dropdown: Dropdown,
    view: DropdownView,
    hits: HitMap,
    /// Range last reported through `ItemsRendered`, reset when the panel closes.
    reported: Option<VisibleRange>,
    running: bool,
}

impl App {
    pub fn new(dropdown: Dropdown) -> Self {
        let view = DropdownView::new(Scale::for_config(dropdown.config())).at(2, 1);
        Self {
            dropdown,
            view,
            hits: HitMap::new(),
            reported: None,
            running: true,
        }
    }

    pub fn dropdown(&self) -> &Dropdown {
        &self.dropdown
    }

    pub fn view(&self) -> &DropdownView {
        &self.view
    }

    /// Regions of the last drawn frame.
    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run until Ctrl+C or Ctrl+Q.
    pub fn run(mut self) -> Result<(), TuiError> {
        let mut terminal = Terminal::new()?;
        let (width, height) = terminal.size();
        self.resize(width, height);
        log::info!("[App::run] started at {}x{}", width, height);

        while self.running {
            terminal.draw(|buf| self.draw(buf))?;
            if self.report_rendered() {
                // The window grew; draw the new rows before waiting.
                continue;
            }

            for raw in terminal.poll(POLL_INTERVAL)? {
                if let Some(event) = Event::from_crossterm(raw) {
                    self.handle(event);
                }
            }
        }

        log::info!("[App::run] exit");
        Ok(())
    }

    /// Draw a frame and keep its hit regions for the next input.
    pub fn draw(&mut self, buf: &mut Buffer) {
        self.hits = self.view.render(&self.dropdown, buf);
    }

    /// Tell the dropdown which rows the last frame showed, if that changed.
    /// Returns true when the display window grew as a result.
    pub fn report_rendered(&mut self) -> bool {
        if !self.dropdown.is_open() {
            self.reported = None;
            return false;
        }
        let range = self.dropdown.visible_range();
        if range == self.reported {
            return false;
        }
        self.reported = range;
        match range {
            Some(range) => self.dropdown.items_rendered(range),
            None => false,
        }
    }

    /// React to one input event.
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Key { key, modifiers }
                if modifiers.ctrl && matches!(key, Key::Char('c') | Key::Char('q')) =>
            {
                self.running = false;
            }
            Event::Resize { width, height } => self.resize(width, height),
            event => {
                for msg in translate(&event, &self.dropdown, &self.hits) {
                    self.dropdown.update(msg);
                }
            }
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        let metrics = self
            .view
            .metrics(self.dropdown.config(), Rect::from_size(width, height));
        self.dropdown.update(Msg::Resized(metrics));
    }
}
