//! Report CLI
//!
//! Loads a data-standard JSON document, renders the attribute report for a
//! category, and writes it as CSV. Cells embedding line breaks (composite
//! signatures, multi-group cells) are quoted per RFC 4180.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use datastandard_report::{loader, report, Row};

#[derive(Parser)]
#[command(name = "report")]
#[command(about = "Render an attribute report for a data-standard category")]
struct Cli {
    /// Path to the data standard JSON document
    standard: PathBuf,

    /// Category id to report on
    category: String,

    /// Write CSV to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let standard = loader::from_file(&cli.standard)
        .with_context(|| format!("loading {}", cli.standard.display()))?;

    let rows = report(&standard, &cli.category);

    match cli.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("creating {}", path.display()))?;
            write_csv(rows, &mut BufWriter::new(file))?;
        }
        None => {
            let stdout = io::stdout();
            write_csv(rows, &mut stdout.lock())?;
        }
    }

    Ok(())
}

fn write_csv(rows: impl Iterator<Item = Row>, out: &mut impl Write) -> io::Result<()> {
    for row in rows {
        let line: Vec<String> = row.iter().map(|cell| csv_cell(cell)).collect();
        writeln!(out, "{}", line.join(","))?;
    }
    Ok(())
}

/// Quote a cell when it contains a comma, quote, or line break
fn csv_cell(cell: &str) -> String {
    let needs_quoting = cell
        .chars()
        .any(|c| matches!(c, ',' | '"' | '\n' | '\r'));
    if needs_quoting {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_cell_is_unquoted() {
        assert_eq!(csv_cell("string"), "string");
        assert_eq!(csv_cell(""), "");
    }

    #[test]
    fn test_cells_with_separators_are_quoted() {
        assert_eq!(csv_cell("a,b"), "\"a,b\"");
        assert_eq!(csv_cell("Technical\nMarketing"), "\"Technical\nMarketing\"");
        assert_eq!(csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_write_csv_rows() {
        let rows = vec![
            vec!["a".to_string(), "b,c".to_string()],
            vec!["composite{\n}".to_string(), "d".to_string()],
        ];
        let mut out = Vec::new();
        write_csv(rows.into_iter(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a,\"b,c\"\n\"composite{\n}\",d\n"
        );
    }
}
