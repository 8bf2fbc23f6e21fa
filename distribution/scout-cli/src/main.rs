//! Command-line front end for the help-center search
//!
//! Run with: cargo run -p scout-cli -- search "referral process"

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use scout::{
    HelpCenterSearch, HelpSearchApi, Published, RecordType, SearchConfig, SearchFilters,
    SearchOutcome, SearchRequest, SearchSession, SortKey, SourceCollections,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with featured articles, categories and resources
    /// (built-in catalog when omitted)
    #[arg(long, global = true)]
    sources: Option<PathBuf>,

    /// JSON search configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a single query
    Search {
        query: String,

        /// Restrict to a category (repeatable)
        #[arg(long)]
        category: Vec<String>,

        /// Restrict to a record type: article, faq, resource, featured (repeatable)
        #[arg(long = "type")]
        record_type: Vec<String>,

        /// relevance, date, popularity or helpful
        #[arg(long, default_value = "relevance")]
        sort: SortKey,

        /// Maximum results (overrides the config)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Search as you type: each stdin line replaces the pending query.
    /// `:open <id>` activates a result.
    Interactive {
        /// Debounce delay in milliseconds (overrides the config)
        #[arg(long)]
        debounce_ms: Option<u64>,
    },
    /// Show the idle suggestion panel
    Suggestions,
    /// List categories in index order
    Categories,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<SearchConfig> {
    match &cli.config {
        Some(path) => SearchConfig::load(path).context("loading search config"),
        None => Ok(SearchConfig::default()),
    }
}

fn build_search(cli: &Cli, config: SearchConfig) -> Result<HelpCenterSearch> {
    let search = match &cli.sources {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let sources = SourceCollections::from_json(&json)
                .with_context(|| format!("parsing {}", path.display()))?;
            HelpCenterSearch::new(&sources, config)?
        }
        None => HelpCenterSearch::with_default_catalog(config)?,
    };
    tracing::info!(records = search.index().len(), "index ready");
    Ok(search)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_outcome(outcome: &SearchOutcome) {
    match outcome {
        SearchOutcome::Suggestions(panel) => {
            if !panel.recent_queries.is_empty() {
                println!("Recent searches:");
                for q in &panel.recent_queries {
                    println!("  {q}");
                }
            }
            println!("Popular searches:");
            for q in &panel.popular_searches {
                println!("  {q}");
            }
            println!("Try:");
            for q in &panel.quick_suggestions {
                println!("  {q}");
            }
        }
        SearchOutcome::NoResults { query, alternatives } => {
            println!("No results for \"{query}\". Try one of:");
            for alt in alternatives {
                println!("  {alt}");
            }
        }
        SearchOutcome::Results(results) => {
            println!(
                "{} of {} results for \"{}\"",
                results.hits.len(),
                results.total_matches,
                results.query
            );
            for (rank, hit) in results.hits.iter().enumerate() {
                println!(
                    "{:>3}. [{:>4}] {:<9} {}  ({})  {}",
                    rank + 1,
                    hit.relevance_score,
                    hit.record.record_type.display_name(),
                    hit.record.title,
                    hit.record.category,
                    hit.record.id
                );
            }
        }
    }
}

async fn run_search(
    search: &HelpCenterSearch,
    query: String,
    categories: Vec<String>,
    types: Vec<String>,
    sort: SortKey,
    json: bool,
) -> Result<()> {
    let mut filters = SearchFilters::new();
    for category in categories {
        filters = filters.with_category(category);
    }
    for label in &types {
        filters = filters.with_type_label(label);
    }

    let request = SearchRequest::new(query).with_filters(filters).with_sort(sort);
    let outcome = search.search(request).await?;

    if json {
        print_json(&outcome)
    } else {
        print_outcome(&outcome);
        Ok(())
    }
}

fn print_published(published: &Published, json: bool) -> Result<()> {
    if json {
        return print_json(&published.outcome);
    }
    println!("── #{} \"{}\"", published.generation, published.request.query);
    print_outcome(&published.outcome);
    Ok(())
}

async fn run_interactive(search: Arc<HelpCenterSearch>, json: bool) -> Result<()> {
    let session = Arc::new(SearchSession::new(Arc::clone(&search)));
    let mut rx = session.subscribe();

    let printer = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let published = rx.borrow_and_update().clone();
            if let Some(published) = published {
                if let Err(e) = print_published(&published, json) {
                    tracing::warn!(error = %e, "failed to print results");
                }
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        if let Some(id) = line.strip_prefix(":open ") {
            match search.select(id.trim()) {
                Ok(activation) => println!("→ {activation:?}"),
                Err(e) => println!("{e}"),
            }
            continue;
        }
        session.update(SearchRequest::new(line));
    }

    // Let the last pending query publish before exiting
    let last = session.current_generation();
    if last > 0 {
        let mut rx = session.subscribe();
        let wait = rx.wait_for(|p| p.as_ref().is_some_and(|p| p.generation >= last));
        let deadline = search.config().debounce() + std::time::Duration::from_secs(5);
        if tokio::time::timeout(deadline, wait).await.is_err() {
            tracing::warn!(generation = last, "last query did not finish before exit");
        }
    }

    drop(session);
    printer.abort();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut config = load_config(&cli)?;

    match &cli.command {
        Command::Search { limit: Some(0), .. } => bail!("--limit must be greater than 0"),
        Command::Search { limit: Some(limit), .. } => config.max_results = *limit,
        Command::Interactive { debounce_ms: Some(ms) } => config.debounce_ms = *ms,
        _ => {}
    }

    let search = build_search(&cli, config)?;

    match cli.command {
        Command::Search {
            query,
            category,
            record_type,
            sort,
            ..
        } => run_search(&search, query, category, record_type, sort, cli.json).await,
        Command::Interactive { .. } => run_interactive(Arc::new(search), cli.json).await,
        Command::Suggestions => {
            let panel = search.suggestions();
            if cli.json {
                print_json(&panel)
            } else {
                print_outcome(&SearchOutcome::Suggestions(panel));
                Ok(())
            }
        }
        Command::Categories => {
            let categories = search.categories();
            if cli.json {
                return print_json(&categories);
            }
            let counts = search.index().type_counts();
            for category in &categories {
                println!("{category}");
            }
            let summary: Vec<String> = RecordType::ALL
                .iter()
                .map(|t| format!("{} {}", counts.get(t).copied().unwrap_or(0), t.display_name()))
                .collect();
            eprintln!("{}", summary.join(", "));
            Ok(())
        }
    }
}
