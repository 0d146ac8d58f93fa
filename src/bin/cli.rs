//! Mural CLI
//!
//! Command-line interface for board operations against a local or remote
//! feed, without running the server:
//! - Show the daily featured entry
//! - Extract and print the palette
//! - List or search messages
//! - Print board statistics
//! - Emit a default config file

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use mural::api::dto::{CardListResponse, DailyResponse, PaletteResponse, StatsResponse};
use mural::board::Board;
use mural::config::{self, Config};

#[derive(Parser)]
#[command(name = "mural-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Message board toolbox")]
#[command(long_about = "Inspect a message board feed from the command line:\ndaily featured entry, extracted palette, search, and statistics.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Feed source (file path or URL); overrides the config file
    #[arg(long, global = true)]
    pub feed: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the featured entry for a day
    Daily {
        /// Date to select for (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Extract and print the card palette
    Palette,

    /// List cards in display order
    Messages {
        /// Search query (matches body, author, and date)
        query: Option<String>,
    },

    /// Show board statistics
    Stats,

    /// Print a default config file to stdout
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config = cli.command {
        print!("{}", config::generate_default_config());
        return Ok(());
    }

    let mut config = Config::load_default();
    if let Some(feed) = &cli.feed {
        config.feed.source = feed.clone();
    }

    let board = Board::load(&config).await?;
    let json = cli.format == "json";

    match cli.command {
        Commands::Daily { date } => {
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let daily = board.daily(date);

            if json {
                let response = DailyResponse {
                    date,
                    daily: daily.map(Into::into),
                };
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                match daily {
                    Some(entry) => {
                        println!("Featured for {date}:");
                        println!("  \"{}\"", entry.message);
                        println!("  - {} ({})", entry.name, entry.date);
                    }
                    None => println!("No entries on the board."),
                }
            }
        }

        Commands::Palette => {
            let response = PaletteResponse::from(board.palette());
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                let origin = if response.fallback { "fallback" } else { "extracted" };
                println!("Palette ({origin}):");
                for color in &response.colors {
                    println!("  {color}");
                }
            }
        }

        Commands::Messages { query } => {
            let cards = board.cards_filtered(query.as_deref().unwrap_or(""));
            if json {
                let response = CardListResponse {
                    total: cards.len(),
                    cards: cards.into_iter().map(Into::into).collect(),
                };
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else if cards.is_empty() {
                println!("No matching entries.");
            } else {
                for card in cards {
                    println!("[{}] {} \"{}\" - {} ({})",
                        card.position, card.color, card.message, card.name, card.date);
                }
            }
        }

        Commands::Stats => {
            let response = StatsResponse::from(board.stats());
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("Total entries: {}", response.total);

                if !response.contributors.is_empty() {
                    println!("Top contributors:");
                    for contributor in &response.contributors {
                        println!("  {} ({})", contributor.name, contributor.count);
                    }
                }

                if let Some(longest) = &response.longest {
                    println!("Longest entry: {} chars by {}", longest.length, longest.author);
                    println!("  \"{}\"", longest.snippet);
                }

                if !response.by_day.is_empty() {
                    println!("Entries per day:");
                    for row in &response.by_day {
                        println!("  {}  {}", row.date, row.count);
                    }
                }
            }
        }

        Commands::Config => unreachable!("handled above"),
    }

    Ok(())
}
