use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use configdoc_search::build::run_build;
use configdoc_search::{PrefixSearchIndex, SearchPayload};

mod cli;
use cli::display::{
    field, finding_count, format_size, row, section_bot, section_top, themed, timing_us, title,
    truncate, BOLD, CYAN, DIM, GRAY, GREEN,
};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Index {
            input,
            output,
            template,
        } => run_index(&input, &output, template.as_deref()),
        Commands::Inspect { file } => run_inspect(&file),
        Commands::Search {
            file,
            query,
            limit,
            json,
        } => run_search(&file, &query, limit, json),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_index(input: &Path, output: &Path, template: Option<&Path>) -> Result<()> {
    let summary = run_build(input, output, template)
        .with_context(|| format!("failed to build index from {}", input.display()))?;

    if summary.schema_count == 0 {
        println!("⚠️  No schemas found; search index is empty");
    }

    println!(
        "{} {} schemas, {} keywords",
        themed(GREEN, &[BOLD], "✓ Indexed"),
        summary.schema_count,
        summary.keyword_count
    );
    for file in &summary.files {
        println!("  {} {}", themed(GRAY, &[], "→"), file.display());
    }
    Ok(())
}

fn load_payload(path: &Path) -> Result<(SearchPayload, usize)> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let payload: SearchPayload = serde_json::from_str(&raw)
        .with_context(|| format!("invalid payload JSON in {}", path.display()))?;
    Ok((payload, raw.len()))
}

fn run_inspect(path: &Path) -> Result<()> {
    let (payload, size) = load_payload(path)?;

    let start = Instant::now();
    let index = PrefixSearchIndex::from_payload(payload);
    let build_us = start.elapsed().as_secs_f64() * 1_000_000.0;

    let report = index.validate();
    for (keyword, id) in &report.dangling {
        tracing::warn!(keyword = %keyword, position = id, "keyword points past the schema table");
    }
    for keyword in &report.unnormalized {
        tracing::warn!(keyword = %keyword, "keyword is not normalized and can never match");
    }

    println!();
    title("SEARCH PAYLOAD INSPECTOR");
    println!();

    section_top("PAYLOAD");
    field("File", &truncate(&path.display().to_string(), 50));
    field("Size", &format_size(size));
    field("Schemas", &index.schemas().len().to_string());
    field("Keywords", &index.keywords().len().to_string());
    section_bot();

    section_top("TRIE");
    field("Nodes", &index.trie().node_count().to_string());
    field("Distinct keywords", &index.trie().len().to_string());
    field("Build time", &timing_us(build_us));
    section_bot();

    section_top("VALIDATION");
    field("Dangling refs", &finding_count(report.dangling.len()));
    field("Unnormalized", &finding_count(report.unnormalized.len()));
    field("Unreferenced", &finding_count(report.unreferenced.len()));
    for &id in &report.unreferenced {
        if let Some(schema) = index.schemas().get(id) {
            row(&format!("    {} {}", themed(GRAY, &[DIM], "no keywords:"), schema.name));
        }
    }
    section_bot();
    println!();

    Ok(())
}

fn run_search(path: &Path, query: &str, limit: usize, json: bool) -> Result<()> {
    let (payload, _) = load_payload(path)?;
    let index = PrefixSearchIndex::from_payload(payload);

    let start = Instant::now();
    let result = index.query(query);
    let query_us = start.elapsed().as_secs_f64() * 1_000_000.0;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "{} for {} ({})",
        themed(CYAN, &[BOLD], &format!("{} match(es)", result.count())),
        themed(GREEN, &[], &format!("\"{}\"", query)),
        timing_us(query_us)
    );
    if !result.keywords.is_empty() {
        println!(
            "{} {}",
            themed(GRAY, &[], "keywords:"),
            truncate(&result.keyword_summary(), 200)
        );
    }
    for schema in result.schemas.iter().take(limit) {
        println!("  {} {}", themed(CYAN, &[BOLD], &schema.name), themed(GRAY, &[], &schema.path));
    }
    if result.count() > limit {
        println!("  {}", themed(GRAY, &[DIM], &format!("... {} more", result.count() - limit)));
    }

    Ok(())
}
