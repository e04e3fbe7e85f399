use crate::config::Config;
use crate::loaders::{ArgsLoader, CsvLoader, Loader, TomlLoader};
use clap::{ArgAction, Parser, ValueEnum};
use eyre::{Result, bail};
use rcard::checks;
use std::path::PathBuf;
use tracing::info;
use tracing::level_filters::LevelFilter;

mod config;
mod display;
mod loaders;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Toml,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Use FILE instead of rcard.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Student name (overrides the name found in a TOML record)
    #[arg(short, long)]
    name: Option<String>,
    /// Mark for a subject, may be repeated
    #[arg(
        short,
        long = "mark",
        value_name = "SUBJECT=SCORE",
        conflicts_with_all = ["toml", "csv"]
    )]
    marks: Vec<String>,
    /// Read the student record from a TOML file
    #[arg(long, value_name = "FILE", conflicts_with = "csv")]
    toml: Option<PathBuf>,
    /// Read marks from a CSV file with a subject,mark header
    #[arg(long, value_name = "FILE", requires = "name")]
    csv: Option<PathBuf>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Set verbosity level
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = Config::load_or_default(args.config.as_deref())?;
    let mut loader: Box<dyn Loader> = match (args.toml, args.csv) {
        (Some(path), _) => Box::new(TomlLoader::new(path, args.name)),
        (None, Some(path)) => Box::new(CsvLoader::from_path(
            args.name.unwrap_or_default(),
            &path,
        )?),
        (None, None) => Box::new(ArgsLoader::new(args.name, args.marks)),
    };
    let student = loader.load()?;
    info!(
        student = %student,
        subjects = student.marks.len(),
        "student record loaded"
    );
    let valid = match checks::validate(Some(&student), &config.grading) {
        Ok(valid) => valid,
        Err(e) => bail!("invalid student record for {student}: {e}"),
    };
    let card = rcard::build(&valid, &config.grading);
    match args.format {
        Format::Text => display::display_card(&card, &student)?,
        Format::Toml => display::display_toml(&card)?,
    }
    Ok(())
}
