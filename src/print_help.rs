use colored::Colorize;
use std::io::{self, Write};

pub fn print_help() {
    let _ = write_help(&mut io::stdout());
}

pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{:━^60}", " DAVINCI ".yellow())?;
    writeln!(out, "Usage:")?;
    writeln!(out, "  {} <prompt>", "davinci".bold().green())?;
    writeln!(out, "\nOptions:")?;
    writeln!(
        out,
        "  {}     Display this help message.",
        "-h, -help, --help".bold().blue()
    )?;
    writeln!(out, "\nArguments:")?;
    writeln!(
        out,
        "  {}  A text prompt for text-davinci-002. Extra words are joined with spaces.",
        "<prompt>".bold().green()
    )?;
    writeln!(out, "\nEnvironment:")?;
    writeln!(
        out,
        "  {}       API key sent as a bearer token (required).",
        "OPENAI_API_KEY".bold().cyan()
    )?;
    writeln!(
        out,
        "  {}       Completions endpoint override.",
        "OPENAI_API_URL".bold().cyan()
    )?;
    writeln!(
        out,
        "  {}  Request timeout in seconds (default 30).",
        "OPENAI_TIMEOUT_SECS".bold().cyan()
    )?;
    writeln!(out, "\nExamples:")?;
    writeln!(
        out,
        "  {} \"Write a haiku about the sea\"",
        "davinci".bold().green()
    )?;
    writeln!(
        out,
        "  {} What is the capital of California?",
        "davinci".bold().green()
    )?;
    writeln!(out, "{:━^60}", "".yellow())
}
