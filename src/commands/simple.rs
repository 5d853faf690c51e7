//! Simple interactive CLI mode
//!
//! Text-based Hangman without the TUI. Reads commands line by line from any `BufRead`,
//! so the whole flow can be driven from a script or a test.

use crate::core::{Finished, GameConfig, SecretWord, Session, Statistics};
use crate::output::{print_board, print_change, print_defeat, print_statistics, print_victory};
use colored::Colorize;
use crossterm::{
    Command,
    cursor::MoveTo,
    terminal::{Clear, ClearType},
};
use log::debug;
use rand::Rng;
use std::io::{self, BufRead, Write};

enum Mode {
    VsComputer,
    Challenge,
    Quit,
}

enum AfterGame {
    ModeSelection,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// Returns the statistics of the games finished during the run. End of input is treated
/// as a request to quit.
///
/// # Errors
///
/// Returns an error if reading input or writing to the terminal fails, or if a game
/// against the computer is requested with an empty word list.
pub fn run_simple<R: BufRead, G: Rng + ?Sized>(
    reader: &mut R,
    words: &[SecretWord],
    config: GameConfig,
    rng: &mut G,
) -> Result<Statistics, String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     H A N G M A N                            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the secret word one letter at a time.");
    println!(
        "You can make {} wrong guesses and ask for {} hints.\n",
        config.max_wrong_guesses(),
        config.hint_budget()
    );

    let mut stats = Statistics::default();

    loop {
        let session = match select_mode(reader)? {
            Mode::Quit => break,
            Mode::VsComputer => {
                Session::start(None, words, config, rng).map_err(|e| e.to_string())?
            }
            Mode::Challenge => match read_challenge_word(reader, config)? {
                Some(session) => session,
                None => continue,
            },
        };

        match play(reader, session, rng, &mut stats)? {
            AfterGame::ModeSelection => {}
            AfterGame::Quit => break,
        }
    }

    print_statistics(&stats);
    println!("\n👋 Thanks for playing!\n");
    Ok(stats)
}

fn select_mode<R: BufRead>(reader: &mut R) -> Result<Mode, String> {
    loop {
        println!("────────────────────────────────────────────────────────────");
        println!("  1) Play vs. computer");
        println!("  2) Challenge a friend");
        println!("  q) Quit");
        println!("────────────────────────────────────────────────────────────");

        let Some(input) = get_user_input(reader, "Choose a mode")? else {
            return Ok(Mode::Quit);
        };

        match input.to_lowercase().as_str() {
            "1" | "computer" => return Ok(Mode::VsComputer),
            "2" | "challenge" | "friend" => return Ok(Mode::Challenge),
            "q" | "quit" | "exit" => return Ok(Mode::Quit),
            _ => println!("❌ Please enter 1, 2 or q.\n"),
        }
    }
}

/// Ask the challenger for a secret word; `None` means go back to mode selection
fn read_challenge_word<R: BufRead>(
    reader: &mut R,
    config: GameConfig,
) -> Result<Option<Session>, String> {
    println!("\nChallenger: type the secret word while the guesser looks away.");
    println!("Type 'back' to return to mode selection.\n");

    loop {
        let Some(input) = get_user_input(reader, "Secret word")? else {
            return Ok(None);
        };

        if input.eq_ignore_ascii_case("back") {
            return Ok(None);
        }

        match SecretWord::new(&input) {
            Ok(word) => {
                hide_screen()?;
                println!(
                    "{}",
                    format!("🤫 The challenger picked a {}-letter word.", word.len()).cyan()
                );
                return Ok(Some(Session::new(word, config)));
            }
            Err(e) => {
                debug!("rejected challenge word: {e}");
                println!(
                    "{}",
                    format!("❌ Please enter a valid word. {e}.")
                        .red()
                );
            }
        }
    }
}

fn play<R: BufRead, G: Rng + ?Sized>(
    reader: &mut R,
    mut session: Session,
    rng: &mut G,
    stats: &mut Statistics,
) -> Result<AfterGame, String> {
    print_board(&session);

    loop {
        let Some(input) = get_user_input(reader, "\nGuess a letter ('?' hint, 'menu', 'quit')")?
        else {
            return Ok(AfterGame::Quit);
        };
        let input = input.to_lowercase();

        let turn = match input.as_str() {
            "quit" | "exit" => return Ok(AfterGame::Quit),
            "menu" => return Ok(AfterGame::ModeSelection),
            "?" | "hint" => session.hint(rng),
            _ => {
                let mut chars = input.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) => session.guess(letter),
                    _ => {
                        println!("❌ Enter a single letter.");
                        continue;
                    }
                }
            }
        };

        print_change(&turn.change);

        if let Some(finished) = turn.finished {
            stats.record(&finished, &session);
            print_board(&session);
            match &finished {
                Finished::Won => print_victory(&session),
                Finished::Lost { secret } => print_defeat(secret),
            }
            return play_again(reader);
        }

        if !turn.is_ignored() {
            print_board(&session);
        }
    }
}

fn play_again<R: BufRead>(reader: &mut R) -> Result<AfterGame, String> {
    let answer = get_user_input(reader, "Play again? (yes/no)")?.unwrap_or_default();
    match answer.to_lowercase().as_str() {
        "yes" | "y" => Ok(AfterGame::ModeSelection),
        _ => Ok(AfterGame::Quit),
    }
}

/// Clear the terminal so the guesser can't read the challenge word
///
/// Printed like every other line of this mode, so it follows stdout capture.
fn hide_screen() -> Result<(), String> {
    print!("{}", clear_sequence().map_err(|e| e.to_string())?);
    io::stdout().flush().map_err(|e| e.to_string())
}

/// ANSI sequence that clears the screen and homes the cursor
fn clear_sequence() -> Result<String, std::fmt::Error> {
    let mut ansi = String::new();
    Clear(ClearType::All).write_ansi(&mut ansi)?;
    MoveTo(0, 0).write_ansi(&mut ansi)?;
    Ok(ansi)
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<R: BufRead>(reader: &mut R, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = reader.read_line(&mut input).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn run(input: &str) -> Statistics {
        let words = words_from_slice(WORDS);
        let mut rng = StdRng::seed_from_u64(2024);
        let mut reader = Cursor::new(input);
        run_simple(&mut reader, &words, GameConfig::default(), &mut rng).unwrap()
    }

    #[test]
    fn quit_from_mode_selection() {
        let stats = run("q\n");
        assert_eq!(stats.total_games, 0);
    }

    #[test]
    fn end_of_input_quits() {
        let stats = run("");
        assert_eq!(stats.total_games, 0);
    }

    #[test]
    fn invalid_mode_is_reprompted() {
        let stats = run("7\nq\n");
        assert_eq!(stats.total_games, 0);
    }

    #[test]
    fn challenge_game_won() {
        let stats = run("2\ncat\nc\na\nt\nno\n");
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn clear_sequence_clears_and_homes_cursor() {
        let ansi = clear_sequence().unwrap();
        assert!(ansi.starts_with("\x1b[2J"));
        assert!(ansi.ends_with("\x1b[1;1H"));
    }

    #[test]
    fn challenge_word_rejected_then_back() {
        let stats = run("2\nbad word\n42\n\nback\nq\n");
        assert_eq!(stats.total_games, 0);
    }

    #[test]
    fn challenge_game_lost() {
        // 'q' is a guess here, not a quit command
        let stats = run("2\ndog\nx\ny\nz\nq\nw\nv\nno\n");
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_lost, 1);
    }

    #[test]
    fn repeated_and_invalid_guesses_do_not_count() {
        let stats = run("2\ncat\nx\nx\nx\nxyz\n1\nc\na\nt\nno\n");
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.wrong_guess_distribution[1], 1);
    }

    #[test]
    fn hints_win_the_game() {
        let stats = run("2\nbee\n?\nhint\nno\n");
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.hints_used, 2);
    }

    #[test]
    fn play_again_returns_to_mode_selection() {
        let stats = run("2\ncat\nc\na\nt\nyes\n2\ndog\nd\no\ng\nno\n");
        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 2);
    }

    #[test]
    fn menu_abandons_game_without_recording() {
        let stats = run("2\ncat\nc\nmenu\nq\n");
        assert_eq!(stats.total_games, 0);
    }

    #[test]
    fn game_against_computer_finishes() {
        let letters: String = ('a'..='z').map(|c| format!("{c}\n")).collect();
        let stats = run(&format!("1\n{letters}no\n"));
        assert_eq!(stats.total_games, 1);
    }

    #[test]
    fn computer_game_with_empty_list_errors() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut reader = Cursor::new("1\n");
        let result = run_simple(&mut reader, &[], GameConfig::default(), &mut rng);
        assert!(result.is_err());
    }
}
