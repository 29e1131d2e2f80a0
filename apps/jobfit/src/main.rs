mod analysis;
mod catalogue;
mod cli;
mod config;
mod errors;
mod extraction;
mod report;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::experience::ExperiencePatterns;
use crate::analysis::scoring::ScoringWeights;
use crate::catalogue::RoleCatalogue;
use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::errors::AppError;
use crate::report::MatchReport;

fn main() -> Result<()> {
    let args = Cli::parse();
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobfit v{}", env!("CARGO_PKG_VERSION"));

    let catalogue = RoleCatalogue::builtin();

    if args.list_roles {
        println!("Supported roles:");
        for role in catalogue.role_names() {
            println!("- {role}");
        }
        return Ok(());
    }

    if let Err(e) = run(&args, &config, &catalogue) {
        error!("{e}");
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn run(args: &Cli, config: &Config, catalogue: &RoleCatalogue) -> Result<(), AppError> {
    let resume = args
        .resume
        .as_ref()
        .ok_or_else(|| AppError::Usage("a resume path is required (or use --list-roles)".into()))?;
    let role_arg = args
        .role
        .as_ref()
        .ok_or_else(|| AppError::Usage("--role is required (or use --list-roles)".into()))?;

    // Catalogue lookup is case-sensitive over lowercase keys; the role
    // argument is normalized here, at the edge.
    let role = role_arg.to_lowercase();
    let requirement = catalogue
        .lookup(&role)
        .ok_or_else(|| AppError::UnknownRole(role.clone()))?;

    info!(
        "Analyzing resume {} for role '{}'",
        resume.display(),
        requirement.role
    );

    let text = extraction::extract_resume_text(resume, config)?;
    if text.trim().is_empty() {
        info!("Extraction succeeded but found no text; scoring an empty resume");
    }

    let weights = ScoringWeights::default();
    let patterns = ExperiencePatterns::default();
    let analysis = analysis::analyze_resume(&text, requirement, &weights, &patterns);
    let report = MatchReport::new(requirement, analysis);

    match args.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => {
            let json = report.to_json().map_err(|e| AppError::Internal(e.into()))?;
            println!("{json}");
        }
    }

    Ok(())
}
