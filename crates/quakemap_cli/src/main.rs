//! # quakemap
//!
//! Terminal front end for the quake map core: loads the seismic feed into an
//! in-memory display, applies one category/search pass and prints what a map
//! would show.

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueHint};
use quakemap_core::{
    default_log_level, init_logging, kst_clock_now, Category, CategorySelector, FeedConfig,
    FeedSource, FilterQuery, InMemoryDisplay, MapSession, MapViewConfig,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "quakemap",
    version,
    about = "Plots seismic events around Korea and filters them by category and text."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the feed, filter it, and print the visible markers.
    Show(ShowArgs),
    /// Print the current Korea Standard Time.
    Clock,
}

#[derive(Args)]
struct ShowArgs {
    /// Read a saved GeoJSON feed instead of querying the network.
    #[arg(long, value_hint = ValueHint::FilePath)]
    feed_file: Option<PathBuf>,

    /// Category selector: `all`, `crime`, `disaster` or `protest`.
    #[arg(long, short = 'c', default_value = "all")]
    category: String,

    /// Free-text search over titles and descriptions.
    #[arg(long, short = 'q', default_value = "")]
    query: String,

    /// Feed start date (YYYY-MM-DD).
    #[arg(long, env = "QUAKEMAP_FEED_START")]
    start: Option<String>,

    /// Feed end date (YYYY-MM-DD).
    #[arg(long, env = "QUAKEMAP_FEED_END")]
    end: Option<String>,

    /// Absolute directory for rotating log files; logging is off when unset.
    #[arg(long, value_hint = ValueHint::DirPath, env = "QUAKEMAP_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Show(args) => show(args).await,
        Command::Clock => {
            println!("KST {}", kst_clock_now());
            Ok(())
        }
    }
}

async fn show(args: ShowArgs) -> anyhow::Result<()> {
    if let Some(dir) = &args.log_dir {
        let dir = dir.to_str().context("log directory is not valid UTF-8")?;
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, dir).context("failed to initialize logging")?;
    }

    let mut feed = FeedConfig::from_env();
    if let Some(start) = args.start {
        feed.start = start;
    }
    if let Some(end) = args.end {
        feed.end = end;
    }
    let source = match args.feed_file {
        Some(path) => FeedSource::File(path),
        None => FeedSource::Remote,
    };

    let view = MapViewConfig::from_env();
    let mut session = MapSession::new(InMemoryDisplay::new(&view), view);
    match session.load_feed(&source, &feed).await {
        Ok(report) => println!(
            "loaded {} markers ({} skipped)",
            report.accepted,
            report.skipped()
        ),
        Err(err) => {
            log::warn!("event=cli_show module=cli status=error error={err}");
            eprintln!("warning: {err}");
        }
    }

    session.apply_query(FilterQuery::new(
        CategorySelector::parse(&args.category),
        args.query,
    ));
    print_session(&session);
    Ok(())
}

fn print_session(session: &MapSession<InMemoryDisplay>) {
    let display = session.display();

    if let Some(counts) = display.legend() {
        let legend = Category::ALL
            .iter()
            .map(|category| format!("{category} {}", counts.legend_label(*category)))
            .collect::<Vec<_>>()
            .join("  ");
        println!("legend: {legend}");
    }

    println!(
        "visible: {}/{}",
        display.shown_count(),
        session.store().len()
    );
    for record in session.store().all() {
        let shown = display
            .visual(record.visual())
            .is_some_and(|state| state.shown);
        if shown {
            let position = record.position();
            println!(
                "  {} [{}] ({:.3}, {:.3}) {}",
                record.id(),
                record.category(),
                position.lat,
                position.lon,
                record.description()
            );
        }
    }

    match display.result_list() {
        Some(lines) => {
            println!("search results: {}", lines.len());
            for line in lines {
                println!("  - {}", line.label);
            }
        }
        None => println!("search results: hidden"),
    }
}
