use std::io::{self, BufRead, Write};
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use minisql::{Cell, ColumnType, Database, FetchResult, ResultColumn, StatementOutcome};

const PROMPT: &str = "minisql> ";

/// An interactive shell for the minisql engine.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Statements to execute before the shell starts reading input.
    #[arg(short = 'c', long = "command", value_name = "SQL")]
    commands: Vec<String>,

    /// Suppress the startup banner.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut db = Database::new();

    if !args.quiet {
        println!("minisql {}", env!("CARGO_PKG_VERSION"));
    }

    for command in &args.commands {
        run_line(&mut db, command);
    }

    let stdin = io::stdin();
    loop {
        print!("{PROMPT}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }
        run_line(&mut db, line);
    }
}

/// Submits one input line and renders the final statement's outcome.
fn run_line(db: &mut Database, source: &str) {
    let started = Instant::now();

    let outcomes = match db.submit(source) {
        Ok(outcomes) => outcomes,
        Err(err) => {
            eprintln!("program error: {err}");
            return;
        }
    };

    match outcomes.last() {
        Some(StatementOutcome::Rows(result)) => {
            if !result.rows.is_empty() {
                print!("{}", render_fetch_result(result));
            }
        }
        Some(StatementOutcome::Affected(n)) => println!("affected rows: {n}"),
        Some(StatementOutcome::Failed(err)) => {
            eprintln!("program error: {err}");
            return;
        }
        None => {}
    }

    println!("ok (took {:.2}s)", started.elapsed().as_secs_f64());
}

/// Formats a result set as an aligned table with an underlined header.
fn render_fetch_result(result: &FetchResult) -> String {
    let widths: Vec<usize> = result
        .columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            result
                .rows
                .iter()
                .map(|row| cell_text(column, row[index].as_ref()).len())
                .chain([column.name.len()])
                .max()
                .unwrap_or(0)
                + 2
        })
        .collect();

    let mut header = String::from("|");
    for (column, &width) in result.columns.iter().zip(&widths) {
        header.push_str(&format!(" {:<width$}|", column.name));
    }

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"=".repeat(header.len()));
    out.push('\n');

    for row in &result.rows {
        out.push('|');
        for ((column, cell), &width) in result.columns.iter().zip(row).zip(&widths) {
            out.push_str(&format!(" {:<width$}|", cell_text(column, cell.as_ref())));
        }
        out.push('\n');
    }

    out
}

/// Decodes a cell for display under its column's type; absent cells
/// render as an empty field.
fn cell_text(column: &ResultColumn, cell: Option<&Cell>) -> String {
    match cell {
        None => String::new(),
        Some(cell) => match column.column_type {
            ColumnType::Int => cell.as_int().to_string(),
            ColumnType::Float => cell.as_float().to_string(),
            ColumnType::Text => cell.as_text().to_owned(),
        },
    }
}
