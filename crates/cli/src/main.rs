//! LeverMap CLI - a terminal learning map for e-commerce operators.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

use levermap_catalog as catalog;
use levermap_core::{ContextId, ModuleId, ModuleStatus};
use levermap_guidance::{resolve, ResolvedGuidance};
use levermap_progress::{compute_progress, snapshot, ContextStore};
use levermap_storage::JsonFileStore;

#[derive(Parser)]
#[command(name = "levermap")]
#[command(about = "Learning map: from e-commerce operator to analyst", long_about = None)]
struct Cli {
    /// Directory holding persisted progress
    #[arg(long, default_value = ".levermap")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the business-problem contexts
    Problems,
    /// Select the active context
    Select {
        /// A problem id, or "general" to clear the selection
        context: ContextId,
    },
    /// Show the learning map for the active context
    Map,
    /// Show guidance for one module
    Show {
        /// Module id (0-5)
        module: ModuleId,
        /// Show the generic theory view even when a problem is active
        #[arg(long)]
        theory: bool,
    },
    /// Set a module's status under the active context
    Set {
        /// Module id (0-5)
        module: ModuleId,
        /// One of: to-learn, needs-review, mastered
        status: ModuleStatus,
    },
    /// Show the status breakdown for the active context
    Progress,
    /// List the case-study walkthroughs
    Cases,
    /// Show one case study
    Case {
        /// Case id, e.g. "case-a"
        id: String,
    },
    /// Look up a metric or term
    Define {
        /// Term, e.g. "ROAS"
        term: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    let store = JsonFileStore::new(&cli.data_dir).await?;
    let mut tracker = ContextStore::hydrate(store).await;

    match cli.command {
        Commands::Problems => {
            let active = tracker.active_context();
            println!("Business problems ({})", catalog::problems().len());
            for def in catalog::problems() {
                let marker = if active == ContextId::Problem(def.id) { "*" } else { " " };
                println!("{marker} {} {} - {}", def.icon.glyph(), def.label, def.description);
                println!("      id: {}  metrics: {}", def.id, def.metrics_to_watch.join(", "));
            }
        }
        Commands::Select { context } => {
            tracker.select_context(context).await;
            match context {
                ContextId::General => {
                    println!("Cleared problem selection. The general path is active.");
                }
                ContextId::Problem(id) => {
                    let def = catalog::problem(id);
                    println!(
                        "Current path: \"{}\". Your thinking blueprint is now active across all modules.",
                        def.label
                    );
                }
            }
        }
        Commands::Map => {
            let active = tracker.active_context();
            let map = tracker.active_status_map();
            let problem = active.problem().map(catalog::problem);

            match problem {
                Some(def) => println!("Learning map - path: {}", def.label),
                None => println!("Learning map - general path"),
            }
            for def in catalog::modules() {
                let highlighted = problem.map(|p| p.highlights(def.id)).unwrap_or(false);
                println!(
                    "  {}{} {} {} {}",
                    status_glyph(map.get(def.id)),
                    if highlighted { "*" } else { " " },
                    def.id,
                    def.icon.glyph(),
                    def.title,
                );
            }
            println!("Progress: {:.0}%", compute_progress(&map));
        }
        Commands::Show { module, theory } => {
            let active = if theory { ContextId::General } else { tracker.active_context() };
            let definition = catalog::module(module);

            match resolve(active, module)? {
                ResolvedGuidance::Generic(def) => {
                    println!("Module {}: {} {}", def.id, def.icon.glyph(), def.title);
                    println!("  Purpose: {}", def.purpose);
                    println!("  What you do:");
                    for step in def.what_you_do {
                        println!("    - {step}");
                    }
                    println!("  Inputs:  {}", def.inputs.join(", "));
                    println!("  Outputs: {}", def.outputs.join(", "));
                    println!("  Example: {}", def.example);
                }
                ResolvedGuidance::Tailored { problem, blueprint } => {
                    println!("Module {}: {} - {}", module, definition.title, blueprint.title);
                    println!("  Path:   {}", problem.label);
                    println!("  Advice: {}", blueprint.advice);
                    println!("  Action: {}", blueprint.action);
                }
            }

            println!("  Status: {}", tracker.active_status_map().get(module));
            match module.next() {
                Some(next) => {
                    println!("  Next:   {} (levermap show {next})", definition.next_step_label);
                }
                None => println!("  Next:   {}", definition.next_step_label),
            }
        }
        Commands::Set { module, status } => {
            let context = tracker.active_context();
            let map = tracker.set_status(context, module, status).await;
            println!(
                "{} -> {} (context: {})",
                catalog::module(module).title,
                status,
                context,
            );
            println!("Progress: {:.0}%", compute_progress(&map));
        }
        Commands::Progress => {
            let snap = snapshot(&tracker.active_status_map());
            println!("Context: {}", tracker.active_context());
            println!("  mastered:     {}", snap.mastered);
            println!("  needs review: {}", snap.needs_review);
            println!("  to learn:     {}", snap.to_learn);
            println!("  progress:     {:.1}%", snap.percentage);
        }
        Commands::Cases => {
            println!("Case studies ({})", catalog::cases().len());
            for case in catalog::cases() {
                println!("  {} | {} | {}", case.id, case.category, case.title);
            }
        }
        Commands::Case { id } => {
            let Some(case) = catalog::case(&id) else {
                anyhow::bail!("unknown case id: {id}");
            };
            println!("{} ({})", case.title, case.category);
            println!("\nContext:\n  {}", case.context);
            println!("\nHypotheses:");
            for hypothesis in case.hypothesis_tree {
                println!("  - {hypothesis}");
            }
            println!("\nRequired data: {}", case.required_data.join(", "));
            println!("\nAnalysis steps:");
            for (i, step) in case.analysis_steps.iter().enumerate() {
                println!("  {}. {step}", i + 1);
            }
            println!("\nRecommendation:\n  {}", case.recommendation);
            println!("\nEmail template:\n{}", case.email_template);
        }
        Commands::Define { term } => match catalog::define(&term) {
            Some(definition) => println!("{definition}"),
            None => anyhow::bail!("no definition for {term:?}"),
        },
    }

    Ok(())
}

fn status_glyph(status: ModuleStatus) -> &'static str {
    match status {
        ModuleStatus::ToLearn => "[ ]",
        ModuleStatus::NeedsReview => "[~]",
        ModuleStatus::Mastered => "[x]",
    }
}
