//! ganttab CLI - roadmap generator
//!
//! Command-line interface for turning TSV task exports into styled
//! XLSX Gantt roadmaps.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ganttab_layout::span_between;
use ganttab_parser::{parse_human_date, parse_project};
use ganttab_render::RoadmapRenderer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "ganttab")]
#[command(author, version, about = "TSV task exports to styled XLSX Gantt roadmaps", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a roadmap workbook from a task export
    Generate {
        /// Input TSV file path
        #[arg(value_name = "FILE")]
        file: std::path::PathBuf,

        /// Output XLSX file path
        #[arg(short, long)]
        output: std::path::PathBuf,

        /// Sheet title text
        #[arg(long)]
        title: Option<String>,

        /// Company line under the title
        #[arg(long)]
        company: Option<String>,

        /// Project lead line
        #[arg(long)]
        lead: Option<String>,

        /// Override the project start date ("2021-01-04" or "January 4, 2021")
        #[arg(long)]
        start: Option<String>,

        /// Override the project end date
        #[arg(long)]
        end: Option<String>,
    },

    /// Parse a task export and print a summary
    Inspect {
        /// Input TSV file path
        #[arg(value_name = "FILE")]
        file: std::path::PathBuf,

        /// Emit the parsed project as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            file,
            output,
            title,
            company,
            lead,
            start,
            end,
        } => {
            let input = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let mut project = parse_project(&input);
            tracing::info!(
                repos = project.repos.len(),
                tasks = project.task_count(),
                total_days = project.total_days,
                "parsed task export"
            );

            // Overrides ride the strict date path: a typo here must not
            // silently shift the timeline.
            let start_override = start.as_deref().map(parse_human_date).transpose()?;
            let end_override = end.as_deref().map(parse_human_date).transpose()?;
            if start_override.is_some() || end_override.is_some() {
                let span = span_between(
                    start_override.unwrap_or(project.start_date),
                    end_override.unwrap_or(project.end_date),
                );
                project.start_date = span.start;
                project.end_date = span.end;
                project.total_days = span.total_days;
            }

            let mut renderer = RoadmapRenderer::new();
            if let Some(title) = title {
                renderer = renderer.title(title);
            }
            if let Some(company) = company {
                renderer = renderer.company(company);
            }
            if let Some(lead) = lead {
                renderer = renderer.lead(lead);
            }

            renderer
                .render_to_file(&project, &output)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("Roadmap successfully saved to {}", output.display());
        }
        Commands::Inspect { file, json } => {
            let input = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let project = parse_project(&input);

            if json {
                println!("{}", serde_json::to_string_pretty(&project)?);
            } else {
                println!(
                    "Project: {} -> {} ({} days)",
                    project.start_date, project.end_date, project.total_days
                );
                for repo in &project.repos {
                    println!("  {} ({} tasks)", repo.name, repo.tasks.len());
                    for task in &repo.tasks {
                        println!(
                            "    [{:>3}%] {}",
                            task.progress(),
                            if task.title.is_empty() { "Untitled Task" } else { task.title.as_str() }
                        );
                    }
                }
            }
        }
    }

    Ok(())
}
