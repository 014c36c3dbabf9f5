//! TUI rendering with ratatui
//!
//! Board, hint row, on-screen keyboard, messages and statistics.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Classification, WORD_LEN};
use crate::game::{GameStatus, MAX_TURNS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard, hints, messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn class_style(class: Classification) -> Style {
    match class {
        Classification::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Classification::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Classification::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn tile(letter: Option<u8>, style: Style) -> Span<'static> {
    let ch = letter.map_or('·', |l| char::from(l.to_ascii_uppercase()));
    Span::styled(format!(" {ch} "), style)
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.game.hard_mode() {
        "WORDLE  (hard mode)"
    } else {
        "WORDLE"
    };
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history = app.game.history();
    let mut lines = Vec::with_capacity(MAX_TURNS * 2);

    for row in 0..MAX_TURNS {
        let spans: Vec<Span> = if let Some(attempt) = history.get(row) {
            (0..WORD_LEN)
                .map(|i| {
                    tile(
                        Some(attempt.guess.char_at(i)),
                        class_style(attempt.feedback.get(i)),
                    )
                })
                .collect()
        } else if row == history.len() && app.input_mode == InputMode::Guessing {
            let typed = app.input_buffer.as_bytes();
            (0..WORD_LEN)
                .map(|i| {
                    tile(
                        typed.get(i).copied(),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    )
                })
                .collect()
        } else {
            (0..WORD_LEN)
                .map(|_| tile(None, Style::default().fg(Color::DarkGray)))
                .collect()
        };

        lines.push(Line::from(interleave(spans)));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Turn {}/{MAX_TURNS} ", app.game.turn()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn interleave(spans: Vec<Span<'static>>) -> Vec<Span<'static>> {
    let mut out = Vec::with_capacity(spans.len() * 2);
    for (i, span) in spans.into_iter().enumerate() {
        if i > 0 {
            out.push(Span::raw(" "));
        }
        out.push(span);
    }
    out
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Hint board
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_hints(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let pool = app.game.letter_pool();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans = row
                .bytes()
                .map(|letter| {
                    let style = match app.game.letter_hint(letter) {
                        Some(class) => class_style(class),
                        // Untried but eliminated
                        None if !pool.contains(letter) => {
                            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
                        }
                        None => Style::default().fg(Color::White),
                    };
                    tile(Some(letter), style)
                })
                .collect();
            Line::from(interleave(spans))
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Letters ({} untried) ", pool.len()))
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_hints(f: &mut Frame, app: &App, area: Rect) {
    let spans = app
        .game
        .board()
        .cells()
        .iter()
        .map(|cell| match cell.letter {
            Some(letter) => tile(Some(letter), class_style(cell.class)),
            None => tile(None, Style::default().fg(Color::DarkGray)),
        })
        .collect();

    let hints = Paragraph::new(Line::from(interleave(spans)))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Hints ").borders(Borders::ALL));
    f.render_widget(hints, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match (app.input_mode.clone(), app.game.status()) {
        (InputMode::GameOver, GameStatus::Won { .. }) => (
            " CONGRATULATIONS! | Press 'n' for new game or 'q' to quit ",
            Color::Green,
        ),
        (InputMode::GameOver, _) => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            Color::Red,
        ),
        (InputMode::Guessing, _) => (
            " Type a guess | Enter submit | Tab reveal | Ctrl-E eliminate | Esc give up ",
            Color::Yellow,
        ),
    };

    let content = if app.input_mode == InputMode::GameOver {
        app.game.share_grid().lines().next().unwrap_or_default().to_string()
    } else {
        app.input_buffer.to_uppercase()
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.session.stats();
    let text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {} | Max: {} | Ctrl-C: Quit",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    );

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
