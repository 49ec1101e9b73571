use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};
use salestax::application::engine::TaxEngine;
use salestax::interfaces::console::menu::Menu;
use salestax::interfaces::console::render::ConsoleRenderer;
use salestax::interfaces::csv::batch::run_batch;
use salestax::interfaces::input::{parse_base_value, parse_category};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Fractional digits shown for money amounts in text output
    #[arg(long, global = true, default_value_t = 2, value_parser = clap::value_parser!(u32).range(0..=10))]
    precision: u32,

    /// Output format for one-shot commands
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the taxes for one product
    Calculate {
        /// Pre-tax price of the product
        #[arg(allow_negative_numbers = true)]
        base_value: String,
        /// Category number (1-6), display name or id (e.g. "basic-foods")
        category: String,
    },
    /// List the available product categories
    Categories,
    /// List the taxes applied to a category
    Taxes {
        /// Category number (1-6), display name or id
        category: String,
    },
    /// Interactive menu on stdin/stdout
    Menu,
    /// Compute taxes for every row of a CSV file with `base_value,category` columns
    Batch {
        /// Input items CSV file
        input: PathBuf,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Calculate { .. } => "calculate",
            Command::Categories => "categories",
            Command::Taxes { .. } => "taxes",
            Command::Menu => "menu",
            Command::Batch { .. } => "batch",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = TaxEngine::new();
    let renderer = ConsoleRenderer::new(cli.precision);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let command = cli.command.unwrap_or(Command::Menu);
    tracing::info!(
        command = command.name(),
        precision = cli.precision,
        "running command"
    );

    match command {
        Command::Calculate {
            base_value,
            category,
        } => {
            let base_value = parse_base_value(&base_value).into_diagnostic()?;
            let category = parse_category(&category).into_diagnostic()?;
            let breakdown = engine.compute(base_value, category).into_diagnostic()?;
            match cli.format {
                OutputFormat::Text => renderer
                    .write_breakdown(&mut out, &breakdown)
                    .into_diagnostic()?,
                OutputFormat::Json => write_json(&mut out, &breakdown)?,
            }
        }
        Command::Categories => {
            let categories = engine.list_categories();
            match cli.format {
                OutputFormat::Text => renderer
                    .write_numbered(&mut out, &categories)
                    .into_diagnostic()?,
                OutputFormat::Json => write_json(&mut out, &categories)?,
            }
        }
        Command::Taxes { category } => {
            let category = parse_category(&category).into_diagnostic()?;
            let taxes = engine.list_taxes_for_category(category).into_diagnostic()?;
            match cli.format {
                OutputFormat::Text => {
                    writeln!(out, "Taxes applicable to '{category}':").into_diagnostic()?;
                    renderer.write_numbered(&mut out, &taxes).into_diagnostic()?;
                }
                OutputFormat::Json => write_json(&mut out, &taxes)?,
            }
        }
        Command::Menu => {
            let stdin = io::stdin();
            Menu::new(&engine, renderer, stdin.lock(), &mut out)
                .run()
                .into_diagnostic()?;
        }
        Command::Batch { input } => {
            let file = File::open(&input).into_diagnostic()?;
            let summary = run_batch(&engine, file, &mut out).into_diagnostic()?;
            if summary.rejected > 0 {
                tracing::warn!(
                    input = %input.display(),
                    rejected = summary.rejected,
                    "some items were skipped"
                );
            }
        }
    }

    out.flush().into_diagnostic()?;
    Ok(())
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).into_diagnostic()?;
    writeln!(out).into_diagnostic()?;
    Ok(())
}
