//! Display functions for the line-based game

use super::formatters::{
    distribution_bar_width, figure_parts_shown, hangman_figure, keyboard_rows, letter_list,
    lives_bar, masked_word,
};
use crate::core::{Change, Ignored, Session, Statistics};
use colored::Colorize;

/// Print the board: figure, masked word, used letters, lives and hints
pub fn print_board(session: &Session) {
    let config = session.config();
    let parts = figure_parts_shown(session.wrong_guess_count(), config.max_wrong_guesses());

    println!();
    for line in hangman_figure(parts) {
        println!("   {}", line.bright_black());
    }

    println!("\n   {}\n", masked_word(session).bright_white().bold());

    for row in keyboard_rows(session.used_letters()) {
        println!("   {row}");
    }

    println!(
        "\n   Wrong:  {}",
        letter_list(session.wrong_letters()).red()
    );
    println!(
        "   Lives:  {} {}/{}",
        lives_bar(session, usize::from(config.max_wrong_guesses())).green(),
        session.guesses_left(),
        config.max_wrong_guesses()
    );
    println!(
        "   Hints:  {}",
        "💡".repeat(usize::from(session.hints_remaining()))
    );
}

/// Print the feedback line for a guess or hint
pub fn print_change(change: &Change) {
    match change {
        Change::Correct {
            letter,
            occurrences,
        } => println!(
            "{}",
            format!(
                "✓ '{}' is in the word ({occurrences}x)",
                letter.to_ascii_uppercase()
            )
            .green()
        ),
        Change::Wrong { letter, .. } => println!(
            "{}",
            format!("✗ No '{}' in the word", letter.to_ascii_uppercase()).red()
        ),
        Change::Hinted {
            letter, hints_left, ..
        } => println!(
            "{}",
            format!(
                "💡 Hint: the word contains '{}' ({hints_left} left)",
                letter.to_ascii_uppercase()
            )
            .yellow()
        ),
        Change::Ignored(Ignored::GameOver) => {}
        Change::Ignored(reason) => println!("{}", reason.to_string().bright_black()),
    }
}

/// Celebration banner for a won game
pub fn print_victory(session: &Session) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨   Y O U   W O N !   ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    let wrong = session.wrong_guess_count();
    let verdict = match wrong {
        0 => "🏆 Flawless! Not a single miss.",
        1 | 2 => "⭐ Excellent guessing!",
        3 | 4 => "👍 Nicely done!",
        _ => "😅 Phew! That was close!",
    };
    println!("\n  {}", verdict.bright_yellow().bold());
    if let Some(secret) = session.revealed_secret() {
        println!(
            "  The word was {}",
            secret.to_uppercase().bright_white().bold()
        );
    }
    println!(
        "  Wrong guesses: {}   Hints left: {}",
        wrong.to_string().bright_cyan(),
        session.hints_remaining().to_string().bright_cyan()
    );
    println!("\n{}\n", "═".repeat(60).bright_cyan());
}

/// Failure banner for a lost game, revealing the word
pub fn print_defeat(secret: &str) {
    println!("\n{}", "═".repeat(60).red());
    println!("{}", "    💀  G A M E   O V E R  💀    ".bright_red().bold());
    println!("{}", "═".repeat(60).red());
    println!(
        "\n  😕 You lost. The word was: {}",
        format!("\"{secret}\"").bright_white().bold()
    );
    println!("\n{}\n", "═".repeat(60).red());
}

/// Print accumulated statistics
pub fn print_statistics(stats: &Statistics) {
    if stats.total_games == 0 {
        return;
    }
    println!("📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Games played: {}", stats.total_games);
    println!(
        "   Won / lost:   {} / {}",
        stats.games_won.to_string().green(),
        stats.games_lost.to_string().red()
    );
    println!(
        "   Win rate:     {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow()
    );
    println!("   Hints used:   {}", stats.hints_used);

    if stats.games_won == 0 {
        return;
    }
    println!("\n📈 {}", "Wins by wrong guesses:".bright_cyan().bold());
    for (misses, &count) in stats.wrong_guess_distribution.iter().enumerate() {
        let filled = distribution_bar_width(count, stats.games_won, 40);
        let bar = format!(
            "{}{}",
            "█".repeat(filled).green(),
            "░".repeat(40 - filled).bright_black()
        );
        println!("   {misses}: {bar} {count:4}");
    }
}
