//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Guess, LetterStatus};
use crate::output::formatters::{GRAY, candidate_list, pluralize};
use crate::solver::Constraints;
use crate::wordlists::Game;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

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

    render_header(f, chunks[0]);

    if app.input_mode == InputMode::GameSelect {
        render_game_menu(f, app, chunks[1]);
    } else {
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        render_main_panel(f, app, main_chunks[0]);
        render_info_panel(f, app, main_chunks[1]);
    }

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Background color of a feedback tile
const fn tile_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Incorrect => Color::Rgb(GRAY.0, GRAY.1, GRAY.2),
        LetterStatus::Miss => Color::Yellow,
    }
}

fn guess_line(index: usize, guess: &Guess) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{index:>2}. "),
        Style::default().fg(Color::DarkGray),
    )];
    spans.extend(guess.letters().iter().map(|letter| {
        Span::styled(
            format!(" {} ", letter.ch().to_uppercase()),
            Style::default()
                .bg(tile_color(letter.status()))
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    }));
    Line::from(spans)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE ASSISTANT")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn render_game_menu(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = Game::ALL
        .iter()
        .enumerate()
        .map(|(i, game)| {
            ListItem::new(format!(
                "{}. {game} ({})",
                i + 1,
                pluralize(game.words().len(), "word")
            ))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Which game are you playing? ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected_game));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_history(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let guesses = app.solver.as_ref().map_or(&[][..], |s| s.guesses());

    let lines: Vec<Line> = if guesses.is_empty() {
        vec![Line::from(Span::styled(
            "No guesses yet",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        guesses
            .iter()
            .enumerate()
            .map(|(i, guess)| guess_line(i + 1, guess))
            .collect()
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let words: Vec<&str> = app.candidates.iter().map(String::as_str).collect();

    let (title, body, color) = match words.len() {
        0 => (
            " No words left ".to_string(),
            "Nothing in the dictionary fits. Type 'undo' to go back.".to_string(),
            Color::Red,
        ),
        1 => (
            " Final word ".to_string(),
            words[0].to_uppercase(),
            Color::Green,
        ),
        n => (
            format!(" {} left ", pluralize(n, "word")),
            // Roughly what fits in the panel
            candidate_list(&words, usize::from(area.height.saturating_sub(2)) * 8),
            Color::White,
        ),
    };

    let paragraph = Paragraph::new(body)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Style::default().fg(color)),
        );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_constraints(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_constraints(f: &mut Frame, app: &App, area: Rect) {
    let Some(solver) = app.solver.as_ref() else {
        return;
    };
    let constraints: Constraints = solver.constraints();

    let mut pattern = vec!['_'; solver.word_length()];
    for (ch, position) in constraints.fixed_positions() {
        if let Some(slot) = pattern.get_mut(position) {
            *slot = ch;
        }
    }
    let pattern: String = pattern
        .iter()
        .map(|ch| ch.to_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let letters = |chars: Vec<char>| -> String {
        if chars.is_empty() {
            "-".to_string()
        } else {
            chars.iter().map(char::to_string).collect::<Vec<_>>().join(" ")
        }
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Pattern:  "),
            Span::styled(pattern, Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::raw("Present:  "),
            Span::styled(
                letters(constraints.required_chars()),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::raw("Absent:   "),
            Span::styled(
                letters(constraints.excluded_chars()),
                Style::default().fg(tile_color(LetterStatus::Incorrect)),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Known Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
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
    let (title, content, color) = match app.input_mode {
        InputMode::GameSelect => (" Up/Down and Enter, or press 1-2 ", "", Color::Cyan),
        InputMode::Guessing => (
            " Guess (<word>-<feedback>, c=correct i=incorrect m=missed) ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::Finished => (" Solved! 'n' new game, 'u' undo, 'q' quit ", "", Color::Green),
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
    let text = match app.solver.as_ref() {
        Some(solver) => format!(
            "Guess #{} | {} | Enter: submit | Esc: clear | Ctrl-C: quit",
            solver.guesses().len() + 1,
            pluralize(app.candidates.len(), "candidate"),
        ),
        None => "q: quit".to_string(),
    };

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Solver;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn menu_lists_games() {
        let text = screen(&App::new(None));
        assert!(text.contains("Which game are you playing?"));
        assert!(text.contains("1. Wordle"));
        assert!(text.contains("2. Termo"));
    }

    #[test]
    fn session_shows_history_and_known_letters() {
        let mut solver = Solver::new(["apple", "angle", "ashen", "abyss"]).unwrap();
        solver
            .add_guess(Guess::decode("apple", "ciiim").unwrap())
            .unwrap();
        let app = App::new(Some(solver));

        let text = screen(&app);
        assert!(text.contains(" A  P  P  L  E "));
        assert!(text.contains("Pattern:  A _ _ _ _"));
        assert!(text.contains("Absent:   l p"));
        assert!(text.contains("Final word"));
        assert!(text.contains("ASHEN"));
    }
}
