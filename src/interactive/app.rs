//! TUI application state and logic

use crate::commands::{InputError, Outcome, Progress, apply, parse_input};
use crate::output::display::error_hint;
use crate::solver::Solver;
use crate::wordlists::{Game, loader::words_from_slice};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 6;

/// Application state
pub struct App {
    pub solver: Option<Solver>,
    pub input_mode: InputMode,
    pub selected_game: usize,
    pub input_buffer: String,
    pub candidates: Vec<String>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    GameSelect,
    Guessing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Start with a ready solver, or on the game menu when there is none
    #[must_use]
    pub fn new(solver: Option<Solver>) -> Self {
        let mut app = Self {
            input_mode: InputMode::GameSelect,
            solver: None,
            selected_game: 0,
            input_buffer: String::new(),
            candidates: Vec::new(),
            messages: Vec::new(),
            should_quit: false,
        };

        match solver {
            Some(solver) => app.start(solver),
            None => app.add_message("Which game are you playing?", MessageStyle::Info),
        }
        app
    }

    fn start(&mut self, solver: Solver) {
        self.add_message(
            &format!(
                "{} words of {} letters. Enter guesses like 'apple-ciiim'.",
                solver.dictionary().len(),
                solver.word_length()
            ),
            MessageStyle::Info,
        );
        self.solver = Some(solver);
        self.input_mode = InputMode::Guessing;
        self.refresh_candidates();
    }

    /// Build the solver for a game picked from the menu
    pub fn select_game(&mut self, game: Game) {
        debug!("game selected: {game}");
        match Solver::new(words_from_slice(game.words())) {
            Ok(solver) => self.start(solver),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Parse and apply the input line
    pub fn submit(&mut self) {
        let line = std::mem::take(&mut self.input_buffer);
        let Some(solver) = self.solver.as_mut() else {
            return;
        };
        if line.trim().is_empty() {
            return;
        }

        let result = parse_input(&line)
            .and_then(|parsed| apply(solver, parsed).map_err(InputError::from));
        let word_length = solver.word_length();

        match result {
            Ok(outcome) => self.after(&outcome),
            Err(error) => {
                self.add_message(&format!("Invalid input: {error}"), MessageStyle::Error);
                self.add_message(&error_hint(&error, word_length), MessageStyle::Info);
                // Leave the rejected line in place for editing
                self.input_buffer = line;
            }
        }
    }

    fn after(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Quit => {
                self.should_quit = true;
                return;
            }
            Outcome::Help => {
                self.add_message(
                    "Commands: undo, remove <word>, clear, quit",
                    MessageStyle::Info,
                );
                return;
            }
            Outcome::NothingToUndo => {
                self.add_message("Nothing to undo!", MessageStyle::Error);
                return;
            }
            Outcome::Guessed(guess) => {
                self.add_message(&format!("Guessed {guess}"), MessageStyle::Info);
            }
            Outcome::Removed(guess) => {
                self.add_message(&format!("Removed {guess}"), MessageStyle::Info);
            }
            Outcome::Undone(guess) => {
                self.add_message(&format!("Undid {guess}"), MessageStyle::Info);
            }
            Outcome::Cleared => self.add_message("All guesses cleared.", MessageStyle::Info),
        }

        self.refresh_candidates();
        let words: Vec<&str> = self.candidates.iter().map(String::as_str).collect();
        match Progress::of(&words) {
            Progress::NoWordsLeft => {
                self.add_message(
                    "No words left. Something went wrong - press Esc, type 'undo'.",
                    MessageStyle::Error,
                );
            }
            Progress::Found(word) => {
                self.add_message(&format!("Final word: {word}"), MessageStyle::Success);
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
                self.input_mode = InputMode::Finished;
            }
            Progress::Narrowed(count) => {
                self.add_message(&format!("{count} words left."), MessageStyle::Info);
                self.input_mode = InputMode::Guessing;
            }
        }
    }

    /// Forget every guess and keep the same dictionary
    pub fn new_game(&mut self) {
        if let Some(solver) = self.solver.as_mut() {
            solver.clear_guesses();
        }
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
        self.refresh_candidates();
    }

    /// Take back the last guess from the finished screen
    pub fn undo_last(&mut self) {
        let undone = self.solver.as_mut().and_then(Solver::undo);
        match undone {
            Some(guess) => self.after(&Outcome::Undone(guess)),
            None => self.add_message("Nothing to undo!", MessageStyle::Error),
        }
    }

    fn refresh_candidates(&mut self) {
        self.candidates = self
            .solver
            .as_ref()
            .map(|solver| solver.solve().into_iter().map(String::from).collect())
            .unwrap_or_default();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameSelect => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Up => self.selected_game = self.selected_game.saturating_sub(1),
                KeyCode::Down => {
                    self.selected_game = (self.selected_game + 1).min(Game::ALL.len() - 1);
                }
                KeyCode::Char(c) => {
                    let picked = c
                        .to_digit(10)
                        .and_then(|n| (n as usize).checked_sub(1))
                        .and_then(|i| Game::ALL.get(i).copied());
                    if let Some(game) = picked {
                        self.select_game(game);
                    }
                }
                KeyCode::Enter => {
                    if let Some(&game) = Game::ALL.get(self.selected_game) {
                        self.select_game(game);
                    }
                }
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Esc => self.input_buffer.clear(),
                KeyCode::Enter => self.submit(),
                _ => {}
            },
            InputMode::Finished => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
