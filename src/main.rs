use std::{
    fs,
    io::{self, BufRead, Write},
};

use calcra::evaluate;
use clap::Parser;

/// calcra is an easy to use calculator for arithmetic expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calcra to treat EXPRESSION as a file path and evaluate each
    /// non-empty line of that file.
    #[arg(short, long)]
    file: bool,

    /// The expression to evaluate. When omitted, calcra starts its
    /// interactive console.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.expression else {
        console();
        return;
    };

    if args.file {
        let script = fs::read_to_string(&contents).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                         std::process::exit(1);
                     });
        for line in script.lines().filter(|line| !line.trim().is_empty()) {
            print_outcome(line);
        }
    } else {
        print_outcome(&contents);
    }
}

/// Evaluates one expression and prints `= <result>`, or `Error: <message>`
/// to stderr. Exits with status 1 on failure.
fn print_outcome(expression: &str) {
    match evaluate(expression) {
        Ok(value) => println!("= {value}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        },
    }
}

/// Runs the interactive console until `exit`, `quit` or end of input.
///
/// Reads one line at a time. Empty lines are skipped; the literal `exit` or
/// `quit` (exact, case-sensitive) terminates the loop. Anything else is
/// evaluated: results go to stdout as `= <result>`, failures to stderr as
/// `Error: <message>`, and the loop continues either way.
fn console() {
    println!("=== Expression Calculator ===");
    println!("Enter mathematical expressions:");
    println!("Examples: 2+3, 5+6, 10*5-2, 100/4, 2^3, 10%3");
    println!("Supports: + - * / % ^ (power)");
    println!("Type 'exit' to quit\n");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }
        let input = input.trim_end_matches(['\r', '\n']);

        if input == "exit" || input == "quit" {
            println!("Goodbye!");
            break;
        }

        if input.is_empty() {
            continue;
        }

        match evaluate(input) {
            Ok(value) => println!("= {value}"),
            Err(e) => eprintln!("Error: {e}"),
        }
    }
}
