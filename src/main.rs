use std::{fs, io, process::ExitCode};

use bongscript::interpreter::{evaluator::core::Interpreter, lexer::tokenize, parser::core::parse};
use clap::Parser;

/// bong runs bongscript programs: `kaj shuru ... kaj shesh`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the argument as program text instead of a path to a source file.
    #[arg(short, long)]
    eval: bool,

    /// Print the token stream to stderr before running.
    #[arg(short, long)]
    tokens: bool,

    /// Print the syntax tree to stderr before running.
    #[arg(short, long)]
    ast: bool,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let source = if args.eval {
        args.contents.clone()
    } else {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    };

    if let Err(e) = run(&source, &args) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(source: &str, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    if args.tokens {
        for (token, line) in &tokens {
            eprintln!("{line:>4}  {token:?}");
        }
    }

    let program = parse(&tokens)?;
    if args.ast {
        eprintln!("{program:#?}");
    }

    let mut interpreter = Interpreter::new(io::stdin().lock(), io::stdout().lock());
    interpreter.execute(&program)?;

    Ok(())
}
