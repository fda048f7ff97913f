use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use clap::{Args, Parser, Subcommand};

mod dataset;
mod export;
mod generate;
mod import;
mod models;
mod report;
mod schema;
mod simulate;
mod stats;

use dataset::Dataset;
use import::FileUpload;
use models::{PlacementStatus, StudentRecord, Tier};
use simulate::PolicyLevers;
use stats::RecordFilter;

#[derive(Parser)]
#[command(name = "placement-analytics")]
#[command(about = "Placement outcome analytics over an in-memory cohort dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FilterArgs {
    /// Restrict to one institution (implies its tier unless --tier is given)
    #[arg(long)]
    institution: Option<String>,
    #[arg(long)]
    tier: Option<Tier>,
    #[arg(long)]
    department: Option<String>,
    #[arg(long)]
    year: Option<i32>,
    #[arg(long)]
    status: Option<PlacementStatus>,
}

impl FilterArgs {
    fn into_filter(self) -> RecordFilter {
        RecordFilter {
            institution: self.institution,
            tier: self.tier,
            department: self.department,
            year: self.year,
            status: self.status,
        }
        .with_tier_from_institution()
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the aggregated overview for the current selection
    Stats {
        #[command(flatten)]
        filters: FilterArgs,
        /// Import a CSV file into the session before computing
        #[arg(long)]
        import: Option<PathBuf>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write a markdown report for the current selection
    Report {
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long)]
        import: Option<PathBuf>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Project what-if KPIs under policy investments
    Simulate {
        #[command(flatten)]
        filters: FilterArgs,
        /// Skill-training investment, 0-100
        #[arg(long, default_value_t = 0)]
        skill_training: u32,
        /// Mentorship investment, 0-100
        #[arg(long, default_value_t = 0)]
        mentorship: u32,
        /// Lab-funding investment, 0-100
        #[arg(long, default_value_t = 0)]
        lab_funding: u32,
        #[arg(long)]
        json: bool,
    },
    /// Validate a CSV file and append its rows to the session dataset
    Import {
        #[arg(long)]
        csv: PathBuf,
        /// Accept unexpected columns without prompting
        #[arg(long)]
        yes: bool,
        /// Start from an empty collection instead of the sample dataset
        #[arg(long)]
        no_seed: bool,
        /// Write the merged collection to this file afterwards
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Export the current selection as CSV
    Export {
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long)]
        import: Option<PathBuf>,
        /// Output file (defaults to a dated report name)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write the sample import template
    Template {
        #[arg(long, default_value = "sample_import_template.csv")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats {
            filters,
            import,
            json,
        } => {
            let mut dataset = seeded_dataset();
            if let Some(path) = import {
                import_file(&mut dataset, &path, false)?;
            }
            let filter = filters.into_filter();
            let selection = filter.apply(dataset.records());
            let overview = stats::overview(&filter, &selection);
            if json {
                println!("{}", serde_json::to_string_pretty(&overview)?);
            } else {
                print_overview(&overview);
            }
        }
        Commands::Report {
            filters,
            import,
            out,
        } => {
            let mut dataset = seeded_dataset();
            if let Some(path) = import {
                import_file(&mut dataset, &path, false)?;
            }
            let filter = filters.into_filter();
            let selection = filter.apply(dataset.records());
            let report = report::build_report(&filter, &selection);
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Simulate {
            filters,
            skill_training,
            mentorship,
            lab_funding,
            json,
        } => {
            let dataset = seeded_dataset();
            let filter = filters.into_filter();
            let selection = filter.apply(dataset.records());
            let current = stats::kpis(&selection);
            let levers = PolicyLevers {
                skill_training,
                mentorship,
                lab_funding,
            };
            let projected = simulate::project(&current, &levers);
            if json {
                let bundle = serde_json::json!({
                    "current": current,
                    "projected": projected,
                });
                println!("{}", serde_json::to_string_pretty(&bundle)?);
            } else {
                println!("Scope: {}", filter.describe());
                println!(
                    "Current: {:.1}% placed, avg salary {:.1}L",
                    current.placement_rate, current.avg_salary_lakh
                );
                println!(
                    "Simulated (+{:.1} points): {:.1}% placed, avg salary {:.1}L",
                    levers.total_boost(),
                    projected.placement_rate,
                    projected.avg_salary_lakh
                );
            }
        }
        Commands::Import {
            csv,
            yes,
            no_seed,
            export: export_path,
        } => {
            let mut dataset = if no_seed {
                Dataset::new()
            } else {
                seeded_dataset()
            };
            import_file(&mut dataset, &csv, yes)?;
            if let Some(path) = export_path {
                let selection: Vec<&StudentRecord> = dataset.records().iter().collect();
                write_export(&path, &selection)?;
            }
        }
        Commands::Export {
            filters,
            import,
            out,
        } => {
            let mut dataset = seeded_dataset();
            if let Some(path) = import {
                import_file(&mut dataset, &path, false)?;
            }
            let filter = filters.into_filter();
            let selection = filter.apply(dataset.records());
            let out = out.unwrap_or_else(|| {
                PathBuf::from(export::report_file_name(Local::now().date_naive()))
            });
            write_export(&out, &selection)?;
        }
        Commands::Template { out } => {
            std::fs::write(&out, export::sample_template())
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Sample template written to {}.", out.display());
        }
    }

    Ok(())
}

fn seeded_dataset() -> Dataset {
    let mut rng = rand::thread_rng();
    let dataset = generate::sample_dataset(&mut rng);
    println!("Generated {} sample records.", dataset.len());
    dataset
}

fn import_file(dataset: &mut Dataset, path: &Path, assume_yes: bool) -> anyhow::Result<()> {
    let upload = FileUpload::from_path(path)?;
    let before = dataset.len();
    let outcome = import::import_records(dataset, &upload, |extra| {
        if assume_yes {
            println!("Ignoring unexpected columns: {}.", extra.join(", "));
            return true;
        }
        confirm(&format!(
            "Found unexpected columns: {}. They will be ignored. Continue import?",
            extra.join(", ")
        ))
    })
    .with_context(|| format!("import of {} failed", path.display()))?;

    println!(
        "Imported {} records from {} ({} -> {}).",
        outcome.accepted,
        path.display(),
        before,
        dataset.len()
    );
    if let Some(summary) = outcome.skipped_summary() {
        println!("Warning: {summary}.");
    }
    Ok(())
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    let _ = io::stdout().flush();
    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn write_export(path: &Path, records: &[&StudentRecord]) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    export::write_report_csv(file, records)?;
    println!("Exported {} records to {}.", records.len(), path.display());
    Ok(())
}

fn print_overview(overview: &stats::Overview) {
    println!(
        "Scope: {} ({} records)",
        overview.scope, overview.kpis.total
    );
    println!("- Placement rate: {:.1}%", overview.kpis.placement_rate);
    println!("- Average salary: {:.1}L", overview.kpis.avg_salary_lakh);
    println!("- Highest salary: {:.2}L", overview.kpis.highest_salary_lakh);

    println!("Outcomes:");
    for entry in &overview.outcomes {
        println!("- {}: {} records", entry.status, entry.count);
    }

    println!("Tier salary bands:");
    for band in &overview.tier_salaries {
        println!(
            "- {}: high {:.1}L, avg {:.1}L, low {:.1}L",
            band.tier, band.high_lakh, band.avg_lakh, band.low_lakh
        );
    }

    println!(
        "Hackathon impact: {:.1}% placed with vs {:.1}% without.",
        overview.hackathon.with_rate, overview.hackathon.without_rate
    );
    println!(
        "On-campus vs off-campus (placed): {} vs {}.",
        overview.campus_split.on_campus, overview.campus_split.off_campus
    );
}
