// porcheck: lexical, syntax, and variable-usage validation for
// Portuguese-keyword pseudocode files.

mod scanner;
mod semantics;
mod syntax;

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use scanner::scanner::{category_lines, Scanner};
use semantics::usage::UsageChecker;
use syntax::checker::SyntaxChecker;

#[derive(Parser)]
#[command(name = "porcheck", version, about = "Validate a pseudocode source file")]
struct Cli {
    /// Path to the pseudocode source file
    input: PathBuf,

    /// Print the scanner's category form of each source line and exit
    #[arg(long)]
    tokens: bool,
}

fn main() {
    let cli = Cli::parse();

    let source = match fs::read_to_string(&cli.input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: cannot read '{}': {}", cli.input.display(), e);
            process::exit(1);
        }
    };

    eprintln!("Scanning {}...", cli.input.display());
    let tokens = match Scanner::new(&source).tokenize() {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    eprintln!("Lexical analysis completed: {} tokens.", tokens.len());

    if cli.tokens {
        for (line, categories) in category_lines(&tokens) {
            println!("{:>4}: {}", line, categories);
        }
        return;
    }

    if let Err(e) = SyntaxChecker::new(&tokens).parse() {
        eprintln!("{}", e);
        process::exit(1);
    }
    eprintln!("Syntax is valid.");

    if let Err(e) = UsageChecker::new(&tokens).validate() {
        eprintln!("{}", e);
        process::exit(1);
    }
    eprintln!("Variable usage is valid.");

    eprintln!("Validation completed successfully.");
}
