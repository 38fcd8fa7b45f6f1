//! # knowledge-quiz
//!
//! A small multiple-choice quiz for the terminal. One [`QuizController`]
//! holds the whole session; the screens in [`ui`] only read it, and a
//! [`Theme`] decides the colors.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use knowledge_quiz::{Quiz, QuizError, Theme};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Built-in questions, blue palette
//!     let quiz = Quiz::new().with_theme(Theme::ocean());
//!
//!     // Take over the terminal until the user quits
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The controller can also be driven directly:
//!
//! ```rust
//! use knowledge_quiz::{QuizController, QuizState};
//!
//! let mut quiz = QuizController::new();
//! quiz.select_option("Meow-Meow").unwrap();
//! quiz.advance();
//! assert_eq!(quiz.state(), QuizState::InProgress(1));
//! assert_eq!(quiz.score(), 1);
//! ```

mod app;
pub mod config;
mod data;
pub mod logging;
mod models;
pub mod terminal;
pub mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tracing::{debug, info};

pub use app::{QuizController, SelectError};
pub use config::{ConfigError, Settings};
pub use data::{LoadError, default_questions, load_questions_from_json, parse_questions, validate_bank};
pub use models::{Question, QuestionError, QuizSession, QuizState};
pub use ui::{Theme, ThemeName, ViewState};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz that can be run in the terminal.
pub struct Quiz {
    app: QuizController,
    theme: Theme,
}

impl Quiz {
    /// A quiz over the built-in questions.
    pub fn new() -> Self {
        Self {
            app: QuizController::new(),
            theme: Theme::default(),
        }
    }

    /// A quiz over a custom question bank.
    pub fn with_questions(questions: Vec<Question>) -> Result<Self, QuizError> {
        Ok(Self {
            app: QuizController::with_questions(questions)?,
            theme: Theme::default(),
        })
    }

    /// Load the question bank from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use knowledge_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        Self::with_questions(questions)
    }

    /// Build a quiz from resolved settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, QuizError> {
        let quiz = match &settings.questions {
            Some(path) => Self::from_json(path)?,
            None => Self::new(),
        };
        Ok(quiz.with_theme(settings.theme.theme()))
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Run the quiz in the terminal.
    ///
    /// Takes over the terminal and returns when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        info!(questions = self.app.total_questions(), "starting quiz");
        let mut term = terminal::MountedTerminal::mount()?;
        let mut view = ViewState::default();
        run_event_loop(&mut term, &mut self.app, &mut view, &self.theme)
    }

    pub fn app(&self) -> &QuizController {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut QuizController {
        &mut self.app
    }
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new()
    }
}

fn run_event_loop(
    terminal: &mut terminal::QuizTerminal,
    app: &mut QuizController,
    view: &mut ViewState,
    theme: &Theme,
) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app, view, theme))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, view, key.code) {
                break;
            }
        }
    }

    info!("quiz closed");
    Ok(())
}

/// What a key press asks the quiz to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select the option at this 0-based position.
    Select(usize),
    /// Move the highlight by this many options.
    Cycle(isize),
    /// Commit the highlighted option and go to the next question.
    Advance,
    /// Go back to the previous question.
    Retreat,
    /// Scroll the result breakdown up one row.
    ScrollUp,
    /// Scroll the result breakdown down one row.
    ScrollDown,
    /// Throw away all answers and start from question 1.
    Restart,
    /// Leave the quiz.
    Quit,
}

/// Map a key to a command for the given state. Keys that mean nothing
/// there map to `None`.
pub fn command_for(state: QuizState, key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        _ => match state {
            QuizState::InProgress(_) => quiz_command(key),
            QuizState::Finished => result_command(key),
        },
    }
}

fn quiz_command(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Char(c @ '1'..='9') => Some(Command::Select(c as usize - '1' as usize)),
        KeyCode::Up | KeyCode::Char('k') => Some(Command::Cycle(-1)),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::Cycle(1)),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter | KeyCode::Char(' ') => {
            Some(Command::Advance)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(Command::Retreat),
        _ => None,
    }
}

fn result_command(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Restart),
        KeyCode::Up | KeyCode::Char('k') => Some(Command::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::ScrollDown),
        _ => None,
    }
}

/// Apply one command. Returns true if the app should exit.
pub fn apply_command(app: &mut QuizController, view: &mut ViewState, command: Command) -> bool {
    match command {
        Command::Select(position) => {
            // stray keys are harmless, the rejection is already logged
            if let Err(err) = app.select_option_at(position) {
                debug!(error = %err, "selection key ignored");
            }
        }
        Command::Cycle(step) => app.cycle_selection(step),
        Command::Advance => {
            app.advance();
        }
        Command::Retreat => {
            app.retreat();
        }
        Command::ScrollUp => view.scroll_results_up(),
        Command::ScrollDown => view.scroll_results_down(app.total_questions()),
        Command::Restart => {
            app.restart();
            view.reset();
        }
        Command::Quit => return true,
    }
    false
}

/// Returns true if the app should exit.
fn handle_input(app: &mut QuizController, view: &mut ViewState, key: KeyCode) -> bool {
    match command_for(app.state(), key) {
        Some(command) => apply_command(app, view, command),
        None => false,
    }
}
