use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

mod cli;
mod config;

use cli::Cli;
use cli::commands::{ArticleCommands, Commands};
use cli::render;
use config::Config;
use toolshelf::blog::{ArticleCriteria, article_categories, filter_articles};
use toolshelf::catalog::{CatalogState, CatalogView, ComparisonTable, Facet, parse_compare_ids};
use toolshelf::domain::{Category, PricingType};
use toolshelf::import::import_file;
use toolshelf::storage::{ArticleStore, JsonlStorage, LikedArticles, NewsletterStore, ToolStore};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolshelf")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("toolshelf.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn open_storage(config: &Config) -> Result<JsonlStorage> {
    let data_dir = &config.storage.data_dir;
    JsonlStorage::new(data_dir).context(format!("Failed to open data directory {}", data_dir.display()))
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
        println!("Data directory: {}", config.storage.data_dir.display());
    }

    let storage = open_storage(config)?;

    match &cli.command {
        None => handle_list_command(&storage, config, ListArgs::default()),
        Some(Commands::List {
            search,
            category,
            pricing,
            feature,
            select,
        }) => handle_list_command(
            &storage,
            config,
            ListArgs {
                search: search.as_deref(),
                category: category.as_deref(),
                pricing: pricing.as_deref(),
                feature: feature.as_deref(),
                select: select.as_deref(),
            },
        ),
        Some(Commands::Show { id }) => handle_show_command(&storage, id),
        Some(Commands::Compare { ids }) => handle_compare_command(&storage, ids),
        Some(Commands::Top { category, limit }) => {
            handle_top_command(&storage, category, limit.unwrap_or(config.catalog.top_rated_limit))
        }
        Some(Commands::Import { file }) => handle_import_command(&storage, file),
        Some(Commands::Articles { command }) => handle_articles_command(&storage, command),
        Some(Commands::Subscribe { email }) => handle_subscribe_command(&storage, email),
    }
}

/// Map known aliases (`data-analysis`, `free-trial`) to the stored form.
/// Unknown values pass through and simply match nothing.
fn canonical_facet(value: Option<&str>, known: fn(&str) -> Option<&'static str>, kind: &str) -> Option<String> {
    let value = value?;
    if Facet::parse(value).is_all() {
        return Some(value.to_string());
    }
    match known(value) {
        Some(canonical) => Some(canonical.to_string()),
        None => {
            println!("{} unknown {} '{}', nothing will match", "Warning:".yellow(), kind, value);
            Some(value.to_string())
        }
    }
}

#[derive(Debug, Default)]
struct ListArgs<'a> {
    search: Option<&'a str>,
    category: Option<&'a str>,
    pricing: Option<&'a str>,
    feature: Option<&'a str>,
    select: Option<&'a str>,
}

fn handle_list_command(storage: &JsonlStorage, config: &Config, args: ListArgs<'_>) -> Result<()> {
    info!("Listing tools: {:?}", args);
    let ListArgs {
        search,
        category,
        pricing,
        feature,
        select,
    } = args;

    let store = ToolStore::new(storage);
    let tools = match feature {
        Some(feature) => store.with_feature(feature),
        None => store.list(),
    }
    .context("Failed to load tools")?;

    let category = canonical_facet(category, |s| Category::from_str(s).map(|c| c.as_str()), "category");
    let pricing = canonical_facet(pricing, |s| PricingType::from_str(s).map(|p| p.as_str()), "pricing type");

    let mut state = CatalogState::from_category_param(category.as_deref())
        .with_pricing(Facet::from_option(pricing.as_deref()));
    if let Some(term) = search {
        state = state.with_search(term);
    }

    if let Some(select) = select {
        for id in parse_compare_ids(select) {
            match tools.iter().find(|t| t.id == id) {
                Some(tool) => {
                    let next = state.toggle(tool);
                    if next.selection() == state.selection() {
                        println!("{} {} (at most 3 tools can be compared)", "Not selected:".yellow(), id);
                    }
                    state = next;
                }
                None => println!("{} {}", "Unknown tool:".yellow(), id),
            }
        }
    }

    let output = match state.view(&tools, config.catalog.section_preview) {
        CatalogView::Sections(sections) => render::sections(&sections, state.selection()),
        CatalogView::Results(results) => render::results(&results, state.selection()),
    };
    println!("{}", output);

    if let Some(footer) = render::selection_footer(state.selection()) {
        println!();
        println!("{}", footer.green());
    }
    Ok(())
}

fn handle_show_command(storage: &JsonlStorage, id: &str) -> Result<()> {
    info!("Showing tool: {}", id);
    let tool = ToolStore::new(storage)
        .get(id)?
        .ok_or_else(|| eyre!("Tool not found: {}", id))?;
    println!("{}", render::tool_detail(&tool));
    Ok(())
}

fn handle_compare_command(storage: &JsonlStorage, ids: &str) -> Result<()> {
    let ids = parse_compare_ids(ids);
    info!("Comparing tools: {:?}", ids);
    let tools = ToolStore::new(storage).get_many(&ids)?;
    if tools.len() < ids.len() {
        println!("{}", "Some requested tools were not found".yellow());
    }
    println!("{}", render::comparison(&ComparisonTable::build(&tools)));
    Ok(())
}

fn handle_top_command(storage: &JsonlStorage, category: &str, limit: usize) -> Result<()> {
    info!("Top {} tools in {}", limit, category);
    let category = canonical_facet(Some(category), |s| Category::from_str(s).map(|c| c.as_str()), "category")
        .unwrap_or_default();
    let tools = ToolStore::new(storage).top_rated(&category, limit)?;
    println!("{}", render::results(&tools, &Default::default()));
    Ok(())
}

fn handle_import_command(storage: &JsonlStorage, file: &Path) -> Result<()> {
    info!("Importing from: {}", file.display());
    let summary = import_file(storage, file).context(format!("Failed to import {}", file.display()))?;
    println!(
        "{} {} tools, {} articles",
        "Imported:".green(),
        summary.tools_created,
        summary.articles_created
    );
    for reason in &summary.skipped {
        println!("{} {}", "Skipped:".yellow(), reason);
    }
    Ok(())
}

fn handle_articles_command(storage: &JsonlStorage, command: &ArticleCommands) -> Result<()> {
    info!("Handling articles command: {:?}", command);
    let store = ArticleStore::new(storage);
    let ledger = LikedArticles::new(storage);

    match command {
        ArticleCommands::List { search, category } => {
            let articles = store.list().context("Failed to load articles")?;
            let mut criteria = ArticleCriteria::new().with_category(Facet::from_option(category.as_deref()));
            if let Some(term) = search {
                criteria = criteria.with_search(term.as_str());
            }
            let categories = article_categories(&articles);
            if !categories.is_empty() {
                println!("{} all, {}", "Categories:".cyan(), categories.join(", "));
            }
            println!("{}", render::articles(&filter_articles(&articles, &criteria), &ledger.ids()?));
        }
        ArticleCommands::Show { id } => {
            let article = store.get(id)?.ok_or_else(|| eyre!("Article not found: {}", id))?;
            println!("{}", render::article_detail(&article, ledger.is_liked(id)?));
        }
        ArticleCommands::Like { id } => {
            let outcome = store.toggle_like(id, &ledger)?;
            let verb = if outcome.liked { "Liked:".green() } else { "Unliked:".yellow() };
            println!("{} {} ({} likes)", verb, id, outcome.likes);
        }
    }
    Ok(())
}

fn handle_subscribe_command(storage: &JsonlStorage, email: &str) -> Result<()> {
    info!("Subscribing: {}", email);
    let subscription = NewsletterStore::new(storage).subscribe(email)?;
    println!("{} {}", "Subscribed:".green(), subscription.email);
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
