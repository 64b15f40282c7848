//! lexdfa CLI
//!
//! Reads lines, splits them on whitespace and prints the category of every
//! token as `Token: <label>; String: <token>`.

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

use colored::Colorize;

use lexdfa::lexer::{run_traced, Trace};
use lexdfa::{Diagnostic, LexError, LexResult, Lexer, LexerOptions, VERSION};

/// What the command line asked for
#[derive(Debug, Default)]
struct Config {
    options: LexerOptions,
    trace: bool,
    repl: bool,
    help: bool,
    version: bool,
    filename: Option<String>,
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprint!("{}", Diagnostic::new(e));
            print_usage();
            process::exit(1);
        }
    };

    if config.help {
        print_help();
        return;
    }

    if config.version {
        println!("lexdfa {}", VERSION);
        return;
    }

    let result = match (&config.filename, config.repl) {
        (Some(file), _) => run_file(file, &config),
        (None, true) => repl(&config),
        (None, false) => run_prompt(&config),
    };

    if let Err(e) = result {
        eprint!("{}", Diagnostic::new(e));
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> LexResult<Config> {
    let mut config = Config::default();
    let mut args = args.iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--variant" | "-v" => {
                let value = args
                    .next()
                    .ok_or_else(|| LexError::usage(format!("{} needs a value", arg)))?;
                config.options.variant = value.parse()?;
            }
            "--max-line" | "-m" => {
                let value = args
                    .next()
                    .ok_or_else(|| LexError::usage(format!("{} needs a value", arg)))?;
                config.options.max_line_length = value.parse().map_err(|_| {
                    LexError::usage(format!("invalid line length '{}'", value))
                })?;
            }
            "--trace" | "-t" => config.trace = true,
            "--repl" | "-r" => config.repl = true,
            "--help" | "-h" => config.help = true,
            "--version" => config.version = true,
            _ if arg.starts_with('-') => {
                return Err(LexError::usage(format!("Unknown flag: {}", arg)));
            }
            _ => {
                if config.filename.is_some() {
                    return Err(LexError::usage("only one input file may be given"));
                }
                config.filename = Some(arg.clone());
            }
        }
    }

    Ok(config)
}

fn print_usage() {
    eprintln!("Usage: lexdfa [OPTIONS] [file]");
    eprintln!("       lexdfa --help");
}

fn print_help() {
    println!("lexdfa v{} - DFA driven lexical analyser", VERSION);
    println!();
    println!("USAGE:");
    println!("    lexdfa [OPTIONS] [file]");
    println!();
    println!("OPTIONS:");
    println!("    -v, --variant <name>  Transition table: baseline, integer or float (default)");
    println!("    -m, --max-line <n>    Longest accepted line, 0 for no limit (default 99)");
    println!("    -t, --trace           Print every DFA transition to stderr");
    println!("    -r, --repl            Keep reading lines until EOF or 'exit'");
    println!("    -h, --help            Show this help message");
    println!("        --version         Show the version");
    println!();
    println!("EXAMPLES:");
    println!("    lexdfa                     Tokenise one line from stdin");
    println!("    lexdfa input.txt           Tokenise every line of a file");
    println!("    lexdfa -v integer --repl   Interactive session without floats");
}

/// Prompt once and tokenise a single line from stdin
fn run_prompt(config: &Config) -> LexResult<()> {
    let lexer = Lexer::new(config.options);

    print!("Enter a string to tokenise: ");
    io::stdout()
        .flush()
        .map_err(|e| LexError::io("failed to write prompt", e))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| LexError::io("failed to read input", e))?;

    lex_line(&lexer, config.trace, &input, 1);
    Ok(())
}

/// Tokenise every line of a file
fn run_file(filename: &str, config: &Config) -> LexResult<()> {
    let lexer = Lexer::new(config.options);
    let source = fs::read_to_string(filename)
        .map_err(|e| LexError::io(format!("Failed to read file '{}'", filename), e))?;

    for (i, line) in source.lines().enumerate() {
        lex_line(&lexer, config.trace, line, i + 1);
    }

    Ok(())
}

/// Start an interactive session
fn repl(config: &Config) -> LexResult<()> {
    let lexer = Lexer::new(config.options);
    let stdin = io::stdin();
    let mut line_number = 1;

    println!("lexdfa v{} ({} table)", VERSION, config.options.variant);
    println!("Type 'exit' to quit\n");

    loop {
        print!("lex:{} > ", line_number);
        io::stdout()
            .flush()
            .map_err(|e| LexError::io("failed to write prompt", e))?;

        let mut input = String::new();
        let read = stdin
            .lock()
            .read_line(&mut input)
            .map_err(|e| LexError::io("failed to read input", e))?;
        if read == 0 {
            break; // EOF
        }

        let trimmed = input.trim();
        if trimmed == "exit" || trimmed == "quit" {
            break;
        }
        if trimmed.is_empty() {
            continue;
        }

        lex_line(&lexer, config.trace, &input, line_number);
        line_number += 1;
    }

    println!("\nGoodbye!");
    Ok(())
}

/// Classify one line and print the result; problems go to stderr
fn lex_line(lexer: &Lexer, trace: bool, line: &str, line_number: usize) {
    match lexer.tokenize(line) {
        Ok(tokens) => {
            for token in tokens {
                if trace {
                    print_trace(&token.lexeme, &run_traced(lexer.table(), &token.lexeme));
                }
                println!("{}", token);
            }
        }
        Err(e) => {
            let source = line.trim_end_matches(&['\n', '\r'][..]);
            eprint!("{}", Diagnostic::with_source(e, source, line_number));
        }
    }
}

fn print_trace(lexeme: &str, trace: &Trace) {
    eprintln!("{} {}", "trace".cyan().bold(), lexeme);
    for step in &trace.steps {
        let to = if step.to.is_error() {
            step.to.to_string().red().bold()
        } else {
            step.to.to_string().green()
        };
        eprintln!(
            "  {:?} {} {} {} {}",
            step.character,
            format!("{:10}", step.class.as_str()).dimmed(),
            step.from,
            "->".blue(),
            to
        );
    }
    eprintln!("  {} {}", "final".cyan(), trace.final_state());
}
