//! `korbible` - look up Korean scripture references from the command line.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use korbible::bible::BOOKS;
use korbible::config::Config;
use korbible::error::Error;
use korbible::services::editor::{Cursor, Editor, LineBuffer};
use korbible::services::VerseSuggester;
use korbible::settings::SettingsStore;

#[derive(Parser, Debug)]
#[command(name = "korbible", version, about = "Quote Korean scripture as a Markdown callout")]
struct Args {
    /// Reference to look up, e.g. 요한복음3:16-18
    query: Vec<String>,

    /// Print only the verse lines, without the callout wrapper
    #[arg(long)]
    body: bool,

    /// Also copy the output to the clipboard
    #[arg(long)]
    copy: bool,

    /// Insert the output into a Markdown file instead of printing it
    #[arg(long, value_name = "FILE")]
    into: Option<PathBuf>,

    /// Insertion point for --into, 0-indexed
    #[arg(long, value_name = "LINE:COLUMN", default_value = "0:0", value_parser = parse_position)]
    at: Cursor,

    /// List the book table and exit
    #[arg(long)]
    books: bool,

    /// Store a new value for the free-form setting
    #[arg(long, value_name = "VALUE")]
    set_setting: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_position(s: &str) -> std::result::Result<Cursor, String> {
    let (line, column) = s
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:COLUMN, got {s:?}"))?;
    let line: usize = line.trim().parse().map_err(|e| format!("bad line {line:?}: {e}"))?;
    let column: usize = column.trim().parse().map_err(|e| format!("bad column {column:?}: {e}"))?;
    Ok((line, column))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let config = Config::load()?;

    let mut store = SettingsStore::from_config(&config)?;
    tracing::debug!("Settings from {}: {:?}", store.path().display(), store.settings());
    let updated_setting = args.set_setting.is_some();
    if let Some(value) = args.set_setting {
        store.set_my_setting(value)?;
        eprintln!("Saved settings to {}", store.path().display());
    }

    if args.books {
        print_books();
        return Ok(ExitCode::SUCCESS);
    }

    let query = args.query.join(" ");
    if query.trim().is_empty() {
        if updated_setting {
            return Ok(ExitCode::SUCCESS);
        }
        anyhow::bail!("No reference given. Try: korbible 요한복음3:16-18");
    }

    let suggester = VerseSuggester::from_config(&config);
    let suggestion = match suggester.lookup(&query).await {
        Ok(suggestion) => suggestion,
        Err(e) => {
            eprintln!("{e}");
            if let Error::Remote { hint: Some(hint), .. } = e {
                eprintln!("hint: {hint}");
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    let output = if args.body {
        suggestion.body.clone()
    } else {
        suggester.choose(&suggestion)
    };

    match &args.into {
        Some(path) => insert_into_file(path, args.at, &output)?,
        None => println!("{output}"),
    }

    if args.copy {
        if let Err(e) = arboard::Clipboard::new().and_then(|mut cb| cb.set_text(output.clone())) {
            tracing::warn!("Failed to copy to clipboard: {e}");
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Insert `text` into the file at `at`, creating the file if needed.
fn insert_into_file(path: &Path, at: Cursor, text: &str) -> Result<()> {
    let existing = if path.exists() {
        fs_err::read_to_string(path)?
    } else {
        String::new()
    };

    let mut buffer = LineBuffer::from_text(&existing);
    buffer.set_cursor(at.0, at.1);
    let (line, column) = buffer.insert_at_cursor(text);

    fs_err::write(path, buffer.text())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    eprintln!("Inserted into {} (cursor now at {line}:{column})", path.display());
    Ok(())
}

fn print_books() {
    for book in &BOOKS {
        println!(
            "{:>2}  {:<6} {:<16} {}",
            book.number,
            book.key,
            book.english_name,
            book.korean_names.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("3:14"), Ok((3, 14)));
        assert!(parse_position("3").is_err());
        assert!(parse_position("a:1").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["korbible", "요한복음", "3:16", "--body"]).unwrap();
        assert_eq!(args.query.join(" "), "요한복음 3:16");
        assert!(args.body);
        assert_eq!(args.at, (0, 0));
    }
}
