use clap::Parser;
use monkey::repl::{self, Config, Mode};
use std::error::Error;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "monkey")]
#[command(about = "Interactive tokenizer and parser for the Monkey language", version)]
struct Cli {
    /// What to print for each line
    #[arg(short, long, value_enum, default_value = "tokens")]
    mode: Mode,

    /// Prompt printed before each line
    #[arg(long, default_value = ">> ")]
    prompt: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let cli = Cli::parse();
    let config = Config {
        mode: cli.mode,
        prompt: cli.prompt,
    };

    println!("Hello! This is the Monkey programming language!");
    println!("Feel free to type in commands");

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::start(stdin.lock(), &mut stdout.lock(), &config)?;
    Ok(())
}
