//! ragmatch - Main CLI Entry Point

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use ragmatch::{
    cli::{Args, Commands, DocumentKind},
    keywords, logging, BertEmbedder, EmbeddingProvider, RagConfig, RagSystem,
};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = RagConfig::load(args.config.clone()).context("failed to load configuration")?;

    logging::init(args.verbosity().log_level(&config.logging.level));

    match &args.command {
        Commands::Keywords { file } => show_keywords(file),
        Commands::Config => show_config(&args, &config),
        command => {
            let system = load_system(&config)?;
            run_with_model(system, command, &config)
        }
    }
}

fn load_system(config: &RagConfig) -> Result<RagSystem> {
    info!(model = %config.embedding.model_id, "loading embedding model");
    let embedder = BertEmbedder::load(&config.embedding)
        .context("embedding model could not be loaded")?;
    let provider: Arc<dyn EmbeddingProvider> = Arc::new(embedder);
    Ok(RagSystem::new(provider, config)?)
}

fn run_with_model(mut system: RagSystem, command: &Commands, config: &RagConfig) -> Result<()> {
    match command {
        Commands::Context { job, resume, top_k, max_length } => {
            let job_text = read_text(job)?;
            let resume_text = read_text(resume)?;

            system.build_job_requirements_index(&job_text)?;
            let context = system.assemble_context(
                &resume_text,
                top_k.unwrap_or(config.retrieval.top_k),
                max_length.unwrap_or(config.retrieval.max_context_length),
            )?;

            info!(
                fragments = context.fragment_count,
                truncated = context.truncated,
                "context assembled"
            );
            println!("{}", context.text);
        }
        Commands::Search { document, query, top_k } => {
            let text = read_text(document)?;
            system.add_documents(&[text.as_str()], &[])?;
            let results = system.search(query, top_k.unwrap_or(config.retrieval.top_k))?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Commands::Sections { file, kind } => {
            let text = read_text(file)?;
            let json = match kind {
                DocumentKind::Resume => {
                    serde_json::to_string_pretty(&system.extract_resume_sections(&text)?)?
                }
                DocumentKind::Job => {
                    serde_json::to_string_pretty(&system.extract_job_sections(&text)?)?
                }
            };
            println!("{}", json);
        }
        Commands::Keywords { .. } | Commands::Config => {}
    }

    Ok(())
}

fn show_keywords(file: &Path) -> Result<()> {
    let text = read_text(file)?;

    println!("Skills:");
    for skill in keywords::extract_skills(&text) {
        println!("  {}", skill);
    }
    println!();

    println!("Keywords:");
    for keyword in keywords::extract_keywords(&text) {
        println!("  {}", keyword);
    }

    Ok(())
}

fn show_config(args: &Args, config: &RagConfig) -> Result<()> {
    match RagConfig::default_path() {
        Some(path) if args.config.is_none() => println!("# default path: {}", path.display()),
        _ => {}
    }
    println!("# verbosity: {:?}", args.verbosity());
    println!();
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
