mod quiz;
mod result;
pub mod theme;

use ratatui::{prelude::*, widgets::Block};

use crate::app::QuizController;
use crate::models::QuizState;

pub use theme::{Theme, ThemeName};

/// Scroll positions and other things only the screens care about. Lives
/// beside the controller, never inside the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    result_scroll: usize,
}

impl ViewState {
    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    /// Scroll the result breakdown down one row, stopping at its last row.
    pub fn scroll_results_down(&mut self, rows: usize) {
        let max_scroll = rows.saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub fn render(frame: &mut Frame, app: &QuizController, view: &ViewState, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(theme.background), area);

    match app.state() {
        QuizState::InProgress(_) => quiz::render(frame, area, app, theme),
        QuizState::Finished => result::render(frame, area, app, view, theme),
    }
}
