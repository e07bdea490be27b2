//! Simple interactive CLI mode
//!
//! Text-based game without TUI, for both modes.

use crate::core::{Code, GameConfig};
use crate::game::{ComputerRound, Mode, PlayerRound, SecretSource};
use crate::output::formatters::{code_to_pegs, feedback_to_pegs};
use crate::solver::SolverState;
use colored::Colorize;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// What to do once a round ends
enum Next {
    NewRound,
    SwitchMode,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// `delay` paces the computer's guesses so a human can follow them.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// engine rejects a round it created itself.
pub fn run_simple(
    config: &GameConfig,
    mut mode: Mode,
    source: &mut impl SecretSource,
    delay: Duration,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Mastermind - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let palette: Vec<String> = config
        .palette()
        .iter()
        .map(|&c| format!("{} {}", code_to_pegs(&Code::new([c])), c.name()))
        .collect();
    println!("Colors: {}", palette.join("  "));
    println!(
        "Enter codes as letters (e.g. {}) or names separated by spaces.",
        config.opening_guess()
    );
    println!("Commands: 'quit' to exit, 'new' for a new round, 'mode' to switch mode\n");

    loop {
        println!("{}", format!("── {mode} ──").bright_cyan().bold());

        let next = match mode {
            Mode::PlayerVsComputer => play_player_round(config, source)?,
            Mode::ComputerVsPlayer => play_computer_round(config, delay)?,
        };

        match next {
            Next::NewRound => println!("\n🔄 New round started!\n"),
            Next::SwitchMode => {
                mode = mode.toggled();
                println!("\n🔄 Switched to {mode}\n");
            }
            Next::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Map round-level commands; `None` means the input is not a command
fn parse_command(input: &str) -> Option<Next> {
    match input {
        "quit" | "q" | "exit" => Some(Next::Quit),
        "new" | "n" | "reset" => Some(Next::NewRound),
        "mode" | "m" => Some(Next::SwitchMode),
        _ => None,
    }
}

fn play_player_round(
    config: &GameConfig,
    source: &mut impl SecretSource,
) -> Result<Next, String> {
    let mut round = PlayerRound::new(config.clone(), source).map_err(|e| e.to_string())?;
    println!(
        "I picked a secret of {} colors. Type 'reveal' to give up.\n",
        config.length()
    );

    loop {
        let input = get_user_input(&format!("Guess #{}", round.round().turns() + 1))?;
        let lowered = input.to_lowercase();

        if let Some(next) = parse_command(&lowered) {
            return Ok(next);
        }
        if lowered == "reveal" {
            println!("The secret was {}\n", code_to_pegs(round.reveal()));
            return ask_play_again();
        }

        let guess = match input.parse::<Code>() {
            Ok(code) => code,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        match round.guess(&guess) {
            Ok(feedback) => {
                println!(
                    "   {}  {}",
                    code_to_pegs(&guess),
                    feedback_to_pegs(feedback, config.length())
                );
                if round.is_won() {
                    let turns = round.round().turns();
                    println!(
                        "\n{}",
                        format!(
                            "🎉 Congratulations! You cracked the code in {turns} {}!",
                            if turns == 1 { "guess" } else { "guesses" }
                        )
                        .bright_green()
                        .bold()
                    );
                    return ask_play_again();
                }
            }
            Err(e) => println!("❌ {e}\n"),
        }
    }
}

fn play_computer_round(config: &GameConfig, delay: Duration) -> Result<Next, String> {
    let mut round = loop {
        let input = get_user_input(&format!(
            "Enter your secret code ({} colors)",
            config.length()
        ))?;

        if let Some(next) = parse_command(&input.to_lowercase()) {
            return Ok(next);
        }

        match input
            .parse::<Code>()
            .and_then(|secret| ComputerRound::new(config.clone(), secret))
        {
            Ok(round) => break round,
            Err(e) => println!("❌ {e}\n"),
        }
    };

    println!(
        "Secret set to {}. Computer is guessing...\n",
        code_to_pegs(round.round().secret())
    );

    loop {
        thread::sleep(delay);
        let turn = round.step().map_err(|e| e.to_string())?;

        println!(
            "   Turn {}: {}  {}  {}",
            round.round().turns(),
            code_to_pegs(&turn.guess),
            feedback_to_pegs(turn.feedback, config.length()),
            format!("{} → {} candidates", turn.candidates_before, turn.candidates_after)
                .bright_black()
        );

        if turn.state == SolverState::Won {
            println!(
                "\n{}",
                format!(
                    "🤖 Computer guessed the code in {} guesses: {}",
                    round.round().turns(),
                    turn.guess.names()
                )
                .bright_green()
                .bold()
            );
            return ask_play_again();
        }
    }
}

fn ask_play_again() -> Result<Next, String> {
    let answer = get_user_input("Play again? (yes/no/mode)")?.to_lowercase();
    Ok(match answer.as_str() {
        "yes" | "y" => Next::NewRound,
        "mode" | "m" => Next::SwitchMode,
        _ => Next::Quit,
    })
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        // EOF behaves like quit
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_recognized() {
        assert!(matches!(parse_command("q"), Some(Next::Quit)));
        assert!(matches!(parse_command("new"), Some(Next::NewRound)));
        assert!(matches!(parse_command("mode"), Some(Next::SwitchMode)));
        assert!(parse_command("rgby").is_none());
    }
}
