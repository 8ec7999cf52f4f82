//! Line oriented read-eval-print loop.

use monkey_parser::lexer::TokenKind;
use std::io::{self, BufRead, Write};

/// What the REPL prints for each line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Print every token of the line.
    Tokens,
    /// Print the canonical rendering of the parsed program, or its parse errors.
    Ast,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Tokens,
            prompt: ">> ".to_string(),
        }
    }
}

/// Runs the REPL until `input` is exhausted.
pub fn start(input: impl BufRead, output: &mut impl Write, config: &Config) -> io::Result<()> {
    write!(output, "{}", config.prompt)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        tracing::trace!(len = line.len(), "read line");

        match config.mode {
            Mode::Tokens => print_tokens(&line, output)?,
            Mode::Ast => print_ast(&line, output)?,
        }

        write!(output, "{}", config.prompt)?;
        output.flush()?;
    }

    writeln!(output)
}

fn print_tokens(line: &str, output: &mut impl Write) -> io::Result<()> {
    for token in monkey_parser::tokenize(line).take_while(|token| token.kind != TokenKind::Eof) {
        writeln!(output, "{}", token)?;
    }
    Ok(())
}

fn print_ast(line: &str, output: &mut impl Write) -> io::Result<()> {
    let (program, errors) = monkey_parser::parse(line);
    if !errors.is_empty() {
        writeln!(output, "parser errors:")?;
        for error in &errors {
            writeln!(output, "\t{}", error)?;
        }
        return Ok(());
    }

    writeln!(output, "{}", program)
}
