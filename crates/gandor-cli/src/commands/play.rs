//! Interactive play loop over stdin/stdout.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use gandor_fiction::{Command, GameError, GameSession, parse_command};

pub fn run() -> Result<(), String> {
    let mut session = GameSession::new().map_err(|e| e.to_string())?;

    println!("{}", "THE LOST RELIC OF GANDOR".bold());
    println!("Type 'help' for commands.\n");
    println!("{}", session.look().map_err(|e| e.to_string())?);

    let stdin = io::stdin();
    loop {
        print!("\n> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).map_err(|e| e.to_string())? == 0 {
            break; // EOF
        }

        let command = parse_command(&line);
        let quitting = command == Command::Quit;

        match session.execute(command) {
            Ok(output) => println!("{output}"),
            Err(GameError::UnknownCommand(input)) => {
                println!("I don't understand '{input}'. Type 'help' for commands.");
            }
            Err(e) => return Err(e.to_string()),
        }

        if quitting {
            break;
        }

        // The engine reports death narratively; ending the run is ours.
        if session.health() == 0 {
            println!("\n{}", "You have fallen. Game over.".red().bold());
            break;
        }
    }

    Ok(())
}
