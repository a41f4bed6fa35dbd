//! `clash` CLI — check course timetable clashes from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # List selectable courses (ID - title, alphabetical)
//! clash -f corsi.csv list
//!
//! # Show which courses overlap course 12
//! clash -f corsi.csv check 12
//!
//! # Same, for a fixed-position sheet export without a header row
//! clash -f orario.csv --layout fixed check 3
//!
//! # Export the conflict list as CSV / tab-delimited text / JSON
//! clash -f corsi.csv export 12 -o conflicts.csv
//! clash -f corsi.csv export 12 --format tsv
//! clash -f corsi.csv export 12 --format json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use catalog_core::export::{conflict_rows, fmt_date, fmt_time, write_delimited, write_json};
use catalog_core::{load_catalog_with_delimiter, Catalog, CourseId, CourseRecord, Layout};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clash_engine::{find_conflicts, ClashError, Conflict};

#[derive(Parser)]
#[command(name = "clash", version, about = "Course timetable clash checker")]
struct Cli {
    /// Catalog file (delimited spreadsheet export)
    #[arg(short, long)]
    file: PathBuf,

    /// Sheet layout: header-driven named columns, or fixed positions
    #[arg(long, value_enum, default_value = "named")]
    layout: LayoutArg,

    /// Leading rows to skip before the data region (fixed layout only)
    #[arg(long, default_value_t = catalog_core::loader::DEFAULT_SKIP_ROWS)]
    skip_rows: usize,

    /// Field delimiter (a single character, or "tab"); sniffed if omitted
    #[arg(long, value_parser = parse_delimiter)]
    delimiter: Option<char>,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LayoutArg {
    Named,
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Tsv,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List selectable courses as "ID - title" lines
    List,
    /// Show the courses that overlap the given course
    Check {
        /// Course id (see `list`)
        id: String,
    },
    /// Export the conflict list for the given course
    Export {
        /// Course id (see `list`)
        id: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output serialization
        #[arg(long, value_enum, default_value = "csv")]
        format: Format,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let layout = match cli.layout {
        LayoutArg::Named => Layout::Named,
        LayoutArg::Fixed => Layout::Fixed {
            skip_rows: cli.skip_rows,
        },
    };
    let catalog = load_catalog_with_delimiter(&cli.file, layout, cli.delimiter)
        .with_context(|| format!("failed to load catalog from {}", cli.file.display()))?;

    match cli.command {
        Command::List => list_courses(&catalog),
        Command::Check { id } => check_course(&catalog, &id)?,
        Command::Export { id, output, format } => {
            export_conflicts(&catalog, &id, output.as_deref(), format)?;
        }
    }

    Ok(())
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// The selection menu: disambiguated labels, sorted alphabetically.
fn list_courses(catalog: &Catalog) {
    let mut entries = catalog.display_labels();
    entries.sort_by(|(_, a), (_, b)| a.cmp(b));
    for (id, label) in entries {
        println!("{id} - {label}");
    }
}

fn check_course(catalog: &Catalog, raw_id: &str) -> Result<()> {
    let id = CourseId::new(raw_id);
    let Some(reference) = catalog.get(&id) else {
        return Err(ClashError::CourseNotFound(id.to_string()).into());
    };
    let conflicts = find_conflicts(catalog, &id)?;

    print_course(reference);
    println!();

    if conflicts.is_empty() {
        println!("No overlapping courses.");
    } else {
        println!("Overlapping courses:");
        for conflict in &conflicts {
            print_conflict(conflict);
        }
    }
    Ok(())
}

fn print_course(record: &CourseRecord) {
    println!("Course: {} ({})", record.title, record.id);
    println!("Day: {}", record.day);
    println!("Time: {}", time_span(record));
    println!("Dates: {}", date_span(record));
    if !record.teacher.is_empty() {
        println!("Teacher: {}", record.teacher);
    }
    if !record.room.is_empty() {
        println!("Room: {}", record.room);
    }
}

fn print_conflict(conflict: &Conflict) {
    let record = &conflict.record;
    let mut line = format!(
        "  {} ({}): {}, {}",
        record.title,
        record.id,
        time_span(record),
        date_span(record),
    );
    if !record.room.is_empty() {
        line.push_str(&format!(", room {}", record.room));
    }
    line.push_str(&format!(" [{} min overlap]", conflict.overlap_minutes));
    println!("{line}");
}

fn time_span(record: &CourseRecord) -> String {
    match (record.start_time, record.end_time) {
        (Some(_), Some(_)) => format!(
            "{} - {}",
            fmt_time(record.start_time),
            fmt_time(record.end_time)
        ),
        _ => "not specified".to_string(),
    }
}

fn date_span(record: &CourseRecord) -> String {
    match (record.start_date, record.end_date) {
        (None, None) => "not specified".to_string(),
        (start, end) => format!("{} - {}", fmt_date(start), fmt_date(end)),
    }
}

fn export_conflicts(
    catalog: &Catalog,
    raw_id: &str,
    output: Option<&std::path::Path>,
    format: Format,
) -> Result<()> {
    let id = CourseId::new(raw_id);
    let conflicts = find_conflicts(catalog, &id)?;
    let rows = conflict_rows(conflicts.iter().map(|c| &c.record));

    let content = match format {
        Format::Csv => write_delimited(&rows, ','),
        Format::Tsv => write_delimited(&rows, '\t'),
        Format::Json => write_json(&rows).context("failed to serialize conflicts as JSON")?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => print!("{content}"),
    }
    Ok(())
}

fn parse_delimiter(raw: &str) -> std::result::Result<char, String> {
    if raw.eq_ignore_ascii_case("tab") || raw == "\\t" {
        return Ok('\t');
    }
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!(
            "delimiter must be a single character or \"tab\", got {raw:?}"
        )),
    }
}
