//! TUI rendering with ratatui
//!
//! Screens for mode selection, challenge word entry, play and the end-of-game animations.

use super::app::{App, MessageStyle, Screen};
use crate::core::{Change, Finished, Session};
use crate::output::formatters::{
    KEYBOARD_ROWS, KeyState, distribution_summary, figure_parts_shown, hangman_figure, key_state,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const CONFETTI: [&str; 4] = ["✦ ✧ ★ ✶ ", "✧ ★ ✶ ✦ ", "★ ✶ ✦ ✧ ", "✶ ✦ ✧ ★ "];
const PARTY_COLORS: [Color; 4] = [Color::Green, Color::Yellow, Color::Cyan, Color::Magenta];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(8), // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match app.screen {
        Screen::ModeSelection => render_mode_selection(f, app, chunks[1]),
        Screen::WordEntry => render_word_entry(f, app, chunks[1]),
        Screen::Playing | Screen::Finished => {
            if let Some(session) = &app.session {
                render_game(f, app, session, chunks[1]);
            }
        }
    }

    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 H A N G M A N")
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

fn render_mode_selection(f: &mut Frame, app: &App, area: Rect) {
    let key = |k: &'static str| {
        Span::styled(
            k,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut content = vec![
        Line::from(""),
        Line::from("Choose how to play:"),
        Line::from(""),
        Line::from(vec![key("[1]"), Span::raw("  Play vs. computer")]),
        Line::from(vec![key("[2]"), Span::raw("  Challenge a friend")]),
        Line::from(vec![key("[q]"), Span::raw("  Quit")]),
        Line::from(""),
    ];

    if app.stats.total_games > 0 {
        content.push(Line::from(Span::styled(
            format!(
                "Games: {}  Won: {}  Lost: {}  Win rate: {:.0}%",
                app.stats.total_games,
                app.stats.games_won,
                app.stats.games_lost,
                app.stats.win_rate()
            ),
            Style::default().fg(Color::DarkGray),
        )));
        if app.stats.games_won > 0 {
            content.push(Line::from(Span::styled(
                format!("Wins by wrong guesses  {}", distribution_summary(&app.stats)),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let menu = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Mode ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, area);
}

fn render_word_entry(f: &mut Frame, app: &App, area: Rect) {
    let hidden = "*".repeat(app.word_input.chars().count());

    let content = vec![
        Line::from(""),
        Line::from("Challenger: type the secret word. The guesser should look away!"),
        Line::from(""),
        Line::from(Span::styled(
            format!("▶ {hidden}▏"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Letters only, no spaces or numbers",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let entry = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Challenge a Friend ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(entry, area);
}

fn render_game(f: &mut Frame, app: &App, session: &Session, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Figure
            Constraint::Percentage(65), // Word, keyboard, lives
        ])
        .split(area);

    render_figure(f, app, session, chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Word
            Constraint::Min(5),    // Keyboard
            Constraint::Length(3), // Lives gauge
        ])
        .split(chunks[1]);

    render_word(f, app, session, right[0]);
    render_keyboard(f, app, session, right[1]);
    render_lives(f, session, right[2]);
}

fn render_figure(f: &mut Frame, app: &App, session: &Session, area: Rect) {
    let parts = figure_parts_shown(
        session.wrong_guess_count(),
        session.config().max_wrong_guesses(),
    );

    // The lost figure sways from side to side
    let (color, offset) = match app.finished {
        Some(Finished::Lost { .. }) => (Color::Red, " ".repeat(app.animation_frame % 2)),
        Some(Finished::Won) => (Color::Green, String::new()),
        None => (Color::White, String::new()),
    };

    let lines: Vec<Line> = hangman_figure(parts)
        .into_iter()
        .map(|line| Line::from(Span::styled(format!("{offset}{line}"), Style::default().fg(color))))
        .collect();

    let figure = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Gallows {}/{} ",
                session.wrong_guess_count(),
                session.config().max_wrong_guesses()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(figure, area);
}

fn render_word(f: &mut Frame, app: &App, session: &Session, area: Rect) {
    let recent = app.last_change.and_then(|change| match change {
        Change::Correct { letter, .. } | Change::Hinted { letter, .. } => Some(letter),
        _ => None,
    });

    let (word_line, title, border_color) = match &app.finished {
        Some(Finished::Won) => {
            let color = PARTY_COLORS[app.animation_frame % PARTY_COLORS.len()];
            let confetti = CONFETTI[app.animation_frame % CONFETTI.len()];
            let word = session.masked().to_uppercase();
            (
                Line::from(vec![
                    Span::styled(confetti, Style::default().fg(color)),
                    Span::styled(word, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                    Span::styled(format!(" {confetti}"), Style::default().fg(color)),
                ]),
                " 🎉 Congratulations! You Won! 🎉 ".to_string(),
                color,
            )
        }
        Some(Finished::Lost { secret }) => {
            let spaced = secret
                .to_uppercase()
                .chars()
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ");
            let color = if app.animation_frame % 2 == 0 {
                Color::Red
            } else {
                Color::LightRed
            };
            (
                Line::from(Span::styled(
                    spaced,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                format!(" 😕 You Lost. The word was: \"{secret}\" "),
                Color::Red,
            )
        }
        None => {
            let spans: Vec<Span> = session
                .revealed()
                .into_iter()
                .enumerate()
                .flat_map(|(i, slot)| {
                    let separator = if i == 0 { "" } else { " " };
                    let cell = match slot {
                        Some(c) if Some(c) == recent => Span::styled(
                            c.to_ascii_uppercase().to_string(),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Some(c) => Span::styled(
                            c.to_ascii_uppercase().to_string(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        None => Span::styled("_", Style::default().fg(Color::DarkGray)),
                    };
                    [Span::raw(separator), cell]
                })
                .collect();
            (
                Line::from(spans),
                format!(" Word ({} letters) ", session.word_len()),
                Color::White,
            )
        }
    };

    let word = Paragraph::new(vec![Line::from(""), word_line])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(border_color)),
        );
    f.render_widget(word, area);
}

fn render_keyboard(f: &mut Frame, app: &App, session: &Session, area: Rect) {
    let game_over = app.finished.is_some();

    let mut lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|b| {
                    let style = match key_state(session, b) {
                        KeyState::Correct => Style::default().fg(Color::Black).bg(Color::Green),
                        KeyState::Wrong => Style::default().fg(Color::DarkGray).bg(Color::Red),
                        KeyState::Unused if game_over => Style::default().fg(Color::DarkGray),
                        KeyState::Unused => Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    };
                    [
                        Span::styled(format!(" {} ", char::from(b).to_ascii_uppercase()), style),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Hints: "),
        Span::styled(
            "💡".repeat(usize::from(session.hints_remaining())),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("  ({} left, press ? or Tab)", session.hints_remaining()),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(keyboard, area);
}

fn render_lives(f: &mut Frame, session: &Session, area: Rect) {
    let max = session.config().max_wrong_guesses();
    let left = session.guesses_left();
    let ratio = if max == 0 {
        0.0
    } else {
        f64::from(left) / f64::from(max)
    };
    let color = match left {
        0 => Color::Red,
        1 | 2 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Lives ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format!("{left}/{max} wrong guesses left"));
    f.render_widget(gauge, area);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.screen {
        Screen::ModeSelection => "1: vs. Computer | 2: Challenge a Friend | q: Quit",
        Screen::WordEntry => "Enter: Start | Backspace: Delete | Esc: Back",
        Screen::Playing => "a-z: Guess | ?/Tab: Hint | Esc: Menu | Ctrl-C: Quit",
        Screen::Finished => "Enter/n: Play Again | q: Quit",
    };

    let status = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn press(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }

    #[test]
    fn renders_mode_selection() {
        let app = App::new(&[], crate::core::GameConfig::default(), StdRng::seed_from_u64(0));
        let screen = draw(&app);
        assert!(screen.contains("Challenge a friend"));
    }

    #[test]
    fn word_entry_hides_input() {
        let mut app = App::new(&[], crate::core::GameConfig::default(), StdRng::seed_from_u64(0));
        press(&mut app, '2');
        for c in "secret".chars() {
            press(&mut app, c);
        }
        let screen = draw(&app);
        assert!(screen.contains("******"));
        assert!(!screen.contains("secret▏"));
    }

    #[test]
    fn renders_loss_with_secret() {
        let mut app = App::new(&[], crate::core::GameConfig::default(), StdRng::seed_from_u64(0));
        press(&mut app, '2');
        for c in "dog".chars() {
            press(&mut app, c);
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        for c in "xyzqwv".chars() {
            press(&mut app, c);
        }
        app.tick();

        let screen = draw(&app);
        assert!(screen.contains("D O G"));
    }

    #[test]
    fn menu_shows_win_distribution_after_a_win() {
        let mut app = App::new(&[], crate::core::GameConfig::default(), StdRng::seed_from_u64(0));
        press(&mut app, '2');
        for c in "cat".chars() {
            press(&mut app, c);
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        for c in "xcat".chars() {
            press(&mut app, c);
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        assert_eq!(app.screen, Screen::ModeSelection);
        let screen = draw(&app);
        assert!(screen.contains("Wins by wrong guesses  0:0 1:1 2:0"));
    }
}
