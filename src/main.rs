use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use chess_referee::board::{Coordinate, Player};
use chess_referee::engine::{parse_draw_answer, Game, GameOptions, GameState, Prompter};

/// Reads prompts from stdin. End of input answers with the defaults.
struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn promotion_choice(&mut self, square: Coordinate) -> String {
        prompt(&format!(
            "Your pawn reached {square}. Promote it to? (N, B, R, Q) : "
        ))
        .unwrap_or_else(|| "Q".to_string())
    }

    fn draw_response(&mut self, offered_by: &Player) -> bool {
        prompt(&format!(
            "{offered_by} offers a draw. Do you accept? (y/n) : "
        ))
        .is_some_and(|answer| parse_draw_answer(&answer))
    }
}

/// Print `question` and read one trimmed line; `None` at end of input.
fn prompt(question: &str) -> Option<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{question}").ok();
    stdout.flush().ok();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Map `--name value` pairs onto the game options.
fn parse_args(args: &[String]) -> Result<GameOptions, String> {
    let mut options = GameOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let Some(name) = arg.strip_prefix("--") else {
            return Err(format!("unexpected argument '{arg}'"));
        };
        let value = iter
            .next()
            .ok_or_else(|| format!("missing value for '--{name}'"))?;
        options
            .apply_option(&name.replace('-', " "), value)
            .map_err(|e| e.to_string())?;
    }
    Ok(options)
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("usage: chess_referee [--fifty-ply-limit N] [--symbols unicode|ascii]");
            return ExitCode::FAILURE;
        }
    };

    let mut game = Game::new(options, ConsolePrompter);
    let (Some(white), Some(black)) = (
        prompt("Name of the white player : "),
        prompt("Name of the black player : "),
    ) else {
        return ExitCode::SUCCESS;
    };
    game.add_players(&white, &black);

    while game.state() == GameState::InProgress {
        println!("{}", game.turn_info());
        let Some(choice) = prompt(
            "1 : Move history\n2 : Forfeit\n3 : Offer a draw\nAnything else : Play\n> ",
        ) else {
            return ExitCode::SUCCESS;
        };

        match choice.as_str() {
            "1" => print!("{}", game.move_history_text()),
            "2" => {
                game.forfeit().ok();
            }
            "3" => match game.offer_draw() {
                Ok(false) => println!("The draw was declined"),
                Ok(true) | Err(_) => {}
            },
            _ => {
                let (Some(start), Some(end)) = (
                    prompt("Position of the piece to move : "),
                    prompt("Destination : "),
                ) else {
                    return ExitCode::SUCCESS;
                };
                if let Err(err) = game.submit_turn(&start, &end) {
                    println!("{err}");
                }
            }
        }
    }

    println!("{}", game.end_info());
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let options = parse_args(&args(&["--fifty-ply-limit", "10", "--symbols", "ascii"])).unwrap();
        assert_eq!(options.fifty_ply_limit, 10);
        assert!(parse_args(&args(&["--fifty"])).is_err());
        assert!(parse_args(&args(&["--hash", "64"])).is_err());
        assert!(parse_args(&args(&["ascii"])).is_err());
        assert_eq!(parse_args(&[]).unwrap(), GameOptions::default());
    }
}
