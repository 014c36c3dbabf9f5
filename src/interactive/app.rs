//! TUI application state and logic

use crate::core::WORD_LEN;
use crate::game::{Game, GameStatus, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub game: Game<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app and start its first game
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot draw a solution.
    pub fn new(mut session: Session<'a>) -> Result<Self> {
        let game = session.new_game()?;
        let mut app = Self {
            session,
            game,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.add_message("Welcome! Guess the 5-letter word in 6 tries.", MessageStyle::Info);
        if app.game.hard_mode() {
            app.add_message("Hard mode: every hint must be reused.", MessageStyle::Info);
        }
        Ok(app)
    }

    pub fn type_letter(&mut self, c: char) {
        if self.input_buffer.len() < WORD_LEN && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn submit_guess(&mut self) {
        if self.input_buffer.len() != WORD_LEN {
            self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
            return;
        }

        let input = std::mem::take(&mut self.input_buffer);
        match self.game.submit_guess(&input) {
            Ok(outcome) => {
                if !outcome.status.is_over() {
                    self.add_message(
                        &format!("{} letters untried", outcome.remaining.len()),
                        MessageStyle::Info,
                    );
                }
                self.check_game_over();
            }
            Err(e) if e.is_recoverable() => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.input_buffer = input;
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn reveal_letter(&mut self) {
        match self.game.reveal_letter() {
            Ok(reveal) => {
                self.add_message(
                    &format!(
                        "Revealed {} at position {}",
                        char::from(reveal.letter.to_ascii_uppercase()),
                        reveal.position + 1
                    ),
                    MessageStyle::Info,
                );
                self.check_game_over();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn eliminate_letter(&mut self) {
        match self.game.eliminate_letter() {
            Ok(letter) => self.add_message(
                &format!("Eliminated {}", char::from(letter.to_ascii_uppercase())),
                MessageStyle::Info,
            ),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn abort(&mut self) {
        if self.game.abort().is_ok() {
            self.check_game_over();
        }
    }

    /// Start the next game of the session
    pub fn new_game(&mut self) {
        match self.session.new_game() {
            Ok(game) => {
                self.game = game;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn check_game_over(&mut self) {
        if !self.game.is_over() {
            return;
        }
        self.session.finish(&self.game);
        self.input_mode = InputMode::GameOver;

        let solution = self
            .game
            .solution()
            .map(|w| w.text().to_uppercase())
            .unwrap_or_default();

        match self.game.status() {
            GameStatus::Won { turns } => {
                let celebration = match turns {
                    1 => "HOLE IN ONE! Extraordinary!",
                    2 => "MAGNIFICENT! Two guesses!",
                    3 => "SPLENDID! Three guesses!",
                    4 => "GREAT JOB! Four guesses!",
                    5 => "NICE WORK! Five guesses!",
                    _ => "PHEW! Got it in six!",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            GameStatus::Revealed => {
                self.add_message(&format!("Word revealed: {solution}"), MessageStyle::Info);
            }
            _ => {
                self.add_message(&format!("The word was {solution}"), MessageStyle::Error);
            }
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.eliminate_letter();
                }
                KeyCode::Tab => self.reveal_letter(),
                KeyCode::Esc => self.abort(),
                KeyCode::Char(c) => self.type_letter(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
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
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
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
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::wordlists::Vocabulary;
    use crate::wordlists::loader::words_from_slice;

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(
            words_from_slice(&["crane"]),
            words_from_slice(&["slate", "moist"]),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_is_capped_at_word_length() {
        let vocab = vocabulary();
        let mut app = App::new(Session::new(&vocab, GameConfig::new(false, Some(1)))).unwrap();
        for c in "sla1tex".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "slate");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "slat");
    }

    #[test]
    fn invalid_guess_keeps_input_and_turn() {
        let vocab = vocabulary();
        let mut app = App::new(Session::new(&vocab, GameConfig::new(false, Some(1)))).unwrap();
        type_word(&mut app, "qwert");
        assert_eq!(app.input_buffer, "qwert");
        assert_eq!(app.game.turn(), 1);
        assert_eq!(app.messages.last().map(|m| m.style.clone()), Some(MessageStyle::Error));
    }

    #[test]
    fn win_then_new_game() {
        let vocab = vocabulary();
        let mut app = App::new(Session::new(&vocab, GameConfig::new(false, Some(1)))).unwrap();
        type_word(&mut app, "slate");
        type_word(&mut app, "crane");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.session.stats().games_won, 1);

        // letters are ignored until a new game starts
        press(&mut app, KeyCode::Char('x'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.game.turn(), 1);
    }

    #[test]
    fn assists_and_abort() {
        let vocab = vocabulary();
        let mut app = App::new(Session::new(&vocab, GameConfig::new(true, Some(1)))).unwrap();

        app.handle_key(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL));
        assert_eq!(app.game.letter_pool().len(), 25);
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.game.board().open_positions().len(), WORD_LEN - 1);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.game.status(), GameStatus::Aborted);
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.session.stats().games_played, 1);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
