mod input;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use input::{read_birth_file, BirthArgs};
use kundli::{
    compare_kundlis, get_all_mantras, get_all_remedies_from_kundli, get_pilgrimage_guides,
    EngineSettings, KundliEngine,
};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate Vedic kundlis and compatibility reports as JSON")]
struct Cli {
    /// Settings file (default: configs/kundli.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the "today" used for dashas and age, YYYY-MM-DD.
    #[arg(long, global = true)]
    reference_date: Option<NaiveDate>,

    /// Pretty-print the JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Catalog {
    Mantras,
    Pilgrimages,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the complete kundli for one birth.
    Generate(BirthArgs),
    /// Only the remedies section of a generated kundli.
    Remedies(BirthArgs),
    /// Guna Milan and Manglik check between two births (JSON files).
    Compare {
        #[arg(long)]
        first: PathBuf,
        #[arg(long)]
        second: PathBuf,
    },
    /// Static reference catalogs.
    Catalog {
        #[arg(value_enum)]
        which: Catalog,
    },
}

fn load_settings(cli: &Cli) -> anyhow::Result<EngineSettings> {
    let mut settings = match &cli.config {
        Some(path) => kundli_config::load_engine_settings_from(path)?,
        None => kundli_config::load_engine_settings()?,
    };
    if cli.reference_date.is_some() {
        settings.reference_date = cli.reference_date;
    }
    Ok(settings)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let engine = KundliEngine::with_settings(load_settings(&cli)?);
    let pretty = cli.pretty;

    match cli.command {
        Command::Generate(birth) => {
            let details = birth.into_details()?;
            let kundli = engine.generate(&details)?;
            print_json(&kundli, pretty)
        }
        Command::Remedies(birth) => {
            let details = birth.into_details()?;
            let kundli = engine.generate(&details)?;
            print_json(&get_all_remedies_from_kundli(&kundli), pretty)
        }
        Command::Compare { first, second } => {
            let first = engine
                .generate(&read_birth_file(&first)?)
                .context("First birth rejected")?;
            let second = engine
                .generate(&read_birth_file(&second)?)
                .context("Second birth rejected")?;
            let result = compare_kundlis(&first, &second);
            info!(
                "{} x {}: {}/36 ({:?})",
                first.personal_info.name,
                second.personal_info.name,
                result.matching_gunas,
                result.verdict
            );
            print_json(&result, pretty)
        }
        Command::Catalog { which } => match which {
            Catalog::Mantras => print_json(&get_all_mantras(), pretty),
            Catalog::Pilgrimages => print_json(&get_pilgrimage_guides(), pretty),
        },
    }
}
