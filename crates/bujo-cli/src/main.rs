use anyhow::{Result, bail};
use bujo_planner::{PageCounts, PlannerOptions, Settings, ValidationReport};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bujo", about = "Bullet journal planner generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the planner PDF for a year
    Generate {
        /// Year to generate (defaults to the current year)
        year: Option<i32>,

        /// Settings JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output PDF file (defaults to output/BulletJournal_rPPM_<year>.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory the font paths are resolved against
        #[arg(long, default_value = ".")]
        assets: PathBuf,

        /// Pages per daily log, overrides the config file
        #[arg(long)]
        pages_per_day: Option<usize>,

        /// Pages per collection entry, overrides the config file
        #[arg(long)]
        pages_per_collection: Option<usize>,

        /// Treat validation problems as errors
        #[arg(long)]
        strict: bool,

        /// Lay out and link the planner without fonts or output
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            year,
            config,
            output,
            assets,
            pages_per_day,
            pages_per_collection,
            strict,
            dry_run,
        } => {
            let year = year.unwrap_or_else(|| chrono::Local::now().year());
            log::debug!("Generating planner for {}", year);

            let mut settings = match &config {
                Some(path) => Settings::load(path).await?,
                None => Settings::default(),
            };
            if let Some(pages) = pages_per_day {
                settings.pages_per_day = pages;
            }
            if let Some(pages) = pages_per_collection {
                settings.pages_per_collection = pages;
            }

            let options = PlannerOptions::new(year)
                .with_settings(settings)
                .with_asset_root(assets);

            let report = if dry_run {
                let run = bujo_planner::dry_run(&options)?;
                print_counts(year, &run.page_counts());
                println!("  Links: {}", run.links.len());
                println!("  Drawing primitives: {}", run.primitives);
                run.report
            } else {
                let planner = bujo_planner::generate(options).await?;
                print_counts(year, &planner.page_counts());
                println!("  Links: {}", planner.links.len());

                let output =
                    output.unwrap_or_else(|| bujo_planner::constants::default_output_path(year));
                let report = planner.report;
                bujo_planner::save_pdf(planner.document, &output).await?;
                println!("Generated → {}", output.display());
                report
            };

            finish(&report, strict)?;
        }
    }

    Ok(())
}

fn print_counts(year: i32, counts: &PageCounts) {
    println!("Planner {}:", year);
    println!("  Front matter pages: {}", counts.front_matter_pages);
    println!("  Guide pages: {}", counts.guide_pages);
    println!("  Collection index pages: {}", counts.collection_index_pages);
    println!("  Future log pages: {}", counts.future_log_pages);
    println!("  Monthly pages: {}", counts.monthly_pages);
    println!("  Weekly pages: {}", counts.weekly_pages);
    println!("  Daily pages: {}", counts.daily_pages);
    println!("  Collection pages: {}", counts.collection_pages);
    println!("  Total pages: {}", counts.total_pages);
}

fn finish(report: &ValidationReport, strict: bool) -> Result<()> {
    for line in report.summary_lines() {
        println!("{}", line);
    }
    if strict && !report.is_ok() {
        bail!(
            "validation failed with {} problem(s)",
            report.violations().len()
        );
    }
    Ok(())
}
