//! suma-export CLI - lecture summary to PDF

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use suma_export::writer::to_json;
use suma_export::{Exporter, JsonFormat, PageSize, SummaryRecord};

#[derive(Parser)]
#[command(name = "suma-export")]
#[command(version)]
#[command(about = "Render lecture summaries as paginated PDF", long_about = None)]
struct Cli {
    /// Summary JSON file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file or directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a summary JSON file to PDF
    Render {
        /// Summary JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file or directory (current directory if not specified)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Page size: letter, a4, or WIDTHxHEIGHT in points
        #[arg(long, value_name = "SIZE", default_value = "letter", value_parser = PageSize::parse)]
        page_size: PageSize,

        /// Write uncompressed content streams
        #[arg(long)]
        no_compress: bool,
    },

    /// Show the page layout of a summary without writing a PDF
    Inspect {
        /// Summary JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the full layout model as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Render {
            input,
            output,
            page_size,
            no_compress,
        }) => cmd_render(&input, output.as_deref(), page_size, no_compress),
        Some(Commands::Inspect { input, json }) => cmd_inspect(&input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: render if input is provided
            if let Some(input) = cli.input {
                cmd_render(&input, cli.output.as_deref(), PageSize::Letter, false)
            } else {
                println!("{}", "Usage: suma-export <FILE> [OUTPUT]".yellow());
                println!("       suma-export --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn read_summary(input: &Path) -> Result<SummaryRecord, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)
        .map_err(|e| format!("Cannot read {}: {}", input.display(), e))?;
    Ok(SummaryRecord::from_json_str(&text)?)
}

fn cmd_render(
    input: &Path,
    output: Option<&Path>,
    page_size: PageSize,
    no_compress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let summary = read_summary(input)?;
    log::debug!("Rendering {}", input.display());

    let mut exporter = Exporter::new().with_page_size(page_size);
    if no_compress {
        exporter = exporter.uncompressed();
    }

    let exported = exporter.export(&summary)?;
    let target = exported.save(output.unwrap_or_else(|| Path::new(".")))?;

    println!(
        "{} {} ({} page{})",
        "Saved to".green(),
        target.display(),
        exported.page_count(),
        if exported.page_count() == 1 { "" } else { "s" }
    );

    Ok(())
}

fn cmd_inspect(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let summary = read_summary(input)?;
    let doc = Exporter::new().layout(&summary)?;

    if json {
        println!("{}", to_json(&doc, JsonFormat::Pretty)?);
        return Ok(());
    }

    println!("{}", "Summary Layout".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!(
        "{}: {}",
        "Kind".bold(),
        if summary.is_raw() { "Raw" } else { "Structured" }
    );
    println!("{}: {}", "Pages".bold(), doc.page_count());
    println!("{}: {}", "Body lines".bold(), doc.body_lines().len());

    println!();
    println!("{}", "Pages".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for page in &doc.pages {
        let headers = page.section_headers();
        if headers.is_empty() {
            println!("  {} {}", format!("{:>3}", page.number).bold(), "-".dimmed());
        } else {
            println!(
                "  {} {}",
                format!("{:>3}", page.number).bold(),
                headers.join(", ")
            );
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "suma-export".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Lecture summary PDF exporter");
}
