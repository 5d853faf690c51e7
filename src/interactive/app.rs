//! TUI application state and logic

use crate::core::{Change, Finished, GameConfig, SecretWord, Session, Statistics, Turn};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Longest challenge word the entry box accepts
const MAX_WORD_INPUT: usize = 32;

/// Delay between animation frames on the finished screen
const FRAME_INTERVAL: Duration = Duration::from_millis(150);

/// Application state
pub struct App<'a> {
    pub words: &'a [SecretWord],
    pub config: GameConfig,
    rng: StdRng,
    pub screen: Screen,
    pub session: Option<Session>,
    pub finished: Option<Finished>,
    pub last_change: Option<Change>,
    pub word_input: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub animation_frame: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    ModeSelection,
    WordEntry,
    Playing,
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

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a [SecretWord], config: GameConfig, rng: StdRng) -> Self {
        Self {
            words,
            config,
            rng,
            screen: Screen::ModeSelection,
            session: None,
            finished: None,
            last_change: None,
            word_input: String::new(),
            messages: vec![Message {
                text: "Welcome! Pick a mode to start.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            animation_frame: 0,
            should_quit: false,
        }
    }

    /// Start a game on a random word from the list
    pub fn start_vs_computer(&mut self) {
        match Session::start(None, self.words, self.config, &mut self.rng) {
            Ok(session) => {
                let len = session.word_len();
                self.begin(session);
                self.add_message(
                    &format!("I'm thinking of a {len}-letter word. Start guessing!"),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Switch to the hidden word entry screen
    pub fn open_word_entry(&mut self) {
        self.word_input.clear();
        self.screen = Screen::WordEntry;
        self.add_message(
            "Challenger: type a secret word while the guesser looks away.",
            MessageStyle::Info,
        );
    }

    /// Validate the typed challenge word and start the game on it
    pub fn submit_challenge_word(&mut self) {
        match SecretWord::new(&self.word_input) {
            Ok(word) => {
                let len = word.len();
                self.word_input.clear();
                self.begin(Session::new(word, self.config));
                self.add_message(
                    &format!("🤫 The challenger picked a {len}-letter word."),
                    MessageStyle::Info,
                );
            }
            Err(e) => {
                debug!("rejected challenge word: {e}");
                self.add_message(
                    &format!("Please enter a valid word. {e}."),
                    MessageStyle::Error,
                );
            }
        }
    }

    fn begin(&mut self, session: Session) {
        self.session = Some(session);
        self.finished = None;
        self.last_change = None;
        self.animation_frame = 0;
        self.screen = Screen::Playing;
    }

    /// Guess a letter in the current game
    pub fn guess(&mut self, letter: char) {
        if let Some(turn) = self.session.as_mut().map(|s| s.guess(letter)) {
            self.apply_turn(turn);
        }
    }

    /// Ask for a hint in the current game
    pub fn request_hint(&mut self) {
        let rng = &mut self.rng;
        if let Some(turn) = self.session.as_mut().map(|s| s.hint(rng)) {
            self.apply_turn(turn);
        }
    }

    fn apply_turn(&mut self, turn: Turn) {
        match turn.change {
            Change::Correct {
                letter,
                occurrences,
            } => self.add_message(
                &format!(
                    "✓ '{}' appears {occurrences} time(s)",
                    letter.to_ascii_uppercase()
                ),
                MessageStyle::Success,
            ),
            Change::Wrong { letter, stage } => self.add_message(
                &format!(
                    "✗ No '{}' ({stage}/{} wrong)",
                    letter.to_ascii_uppercase(),
                    self.config.max_wrong_guesses()
                ),
                MessageStyle::Error,
            ),
            Change::Hinted {
                letter, hints_left, ..
            } => self.add_message(
                &format!(
                    "💡 Hint: '{}' ({hints_left} left)",
                    letter.to_ascii_uppercase()
                ),
                MessageStyle::Info,
            ),
            Change::Ignored(reason) => self.add_message(&reason.to_string(), MessageStyle::Error),
        }
        if !turn.is_ignored() {
            self.last_change = Some(turn.change);
        }

        if let Some(finished) = turn.finished {
            if let Some(session) = &self.session {
                self.stats.record(&finished, session);
            }
            match &finished {
                Finished::Won => {
                    self.add_message("🎉 Congratulations! You Won! 🎉", MessageStyle::Success);
                }
                Finished::Lost { secret } => self.add_message(
                    &format!("😕 You Lost. The word was: \"{secret}\""),
                    MessageStyle::Error,
                ),
            }
            self.add_message(
                "Press Enter to play again or 'q' to quit.",
                MessageStyle::Info,
            );
            info!(
                "finished game {}: {finished:?}",
                self.stats.total_games
            );
            self.finished = Some(finished);
            self.animation_frame = 0;
            self.screen = Screen::Finished;
        }
    }

    /// Drop the current game and go back to the mode menu
    pub fn back_to_mode_selection(&mut self) {
        self.session = None;
        self.finished = None;
        self.last_change = None;
        self.word_input.clear();
        self.screen = Screen::ModeSelection;
    }

    /// Advance the finished-screen animation
    pub fn tick(&mut self) {
        if self.screen == Screen::Finished {
            self.animation_frame = self.animation_frame.wrapping_add(1);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let KeyCode::Char('c') = key.code
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::ModeSelection => match key.code {
                KeyCode::Char('1') => self.start_vs_computer(),
                KeyCode::Char('2') => self.open_word_entry(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Screen::WordEntry => match key.code {
                KeyCode::Esc => self.back_to_mode_selection(),
                KeyCode::Enter => self.submit_challenge_word(),
                KeyCode::Backspace => {
                    self.word_input.pop();
                }
                KeyCode::Char(c) => {
                    if self.word_input.chars().count() < MAX_WORD_INPUT {
                        self.word_input.push(c);
                    }
                }
                _ => {}
            },
            Screen::Playing => match key.code {
                KeyCode::Esc => {
                    self.add_message("Game abandoned.", MessageStyle::Info);
                    self.back_to_mode_selection();
                }
                KeyCode::Char('?') | KeyCode::Tab => self.request_hint(),
                KeyCode::Char(c) if c.is_ascii_alphabetic() => self.guess(c),
                _ => {}
            },
            Screen::Finished => match key.code {
                KeyCode::Enter | KeyCode::Char('n') => self.back_to_mode_selection(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
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
pub fn run_tui(app: App) -> Result<Statistics> {
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

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(FRAME_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        } else {
            app.tick();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
