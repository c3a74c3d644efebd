//! Herodex - browse superheroes from the terminal
//!
//! One-shot `list` and `show` commands, plus an interactive `browse` loop
//! where the caching service earns its keep: revisited pages and prefetched
//! details render without touching the network.

use clap::{Parser, Subcommand};
use herodex::{
    format_hero_detail, format_hero_page, image_url, HeroApi, HeroService, DEFAULT_API_URL,
};
use std::io::{BufRead, Write};

/// Fixed user-facing message for any list fetch failure
const LIST_ERROR: &str = "Could not load the hero list. The API may be slow, please try again.";
/// Fixed user-facing message for any detail fetch failure
const DETAIL_ERROR: &str = "Could not load the hero details. The API may be slow, please try again.";

/// Superhero browser - paginated hero list and details from a REST API
#[derive(Parser, Debug)]
#[command(name = "herodex")]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the hero API
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one page of the hero list
    List {
        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Heroes per page
        #[arg(short, long, default_value_t = 10)]
        size: u32,
    },
    /// Print the details of a single hero
    Show {
        /// Hero id
        id: u32,
    },
    /// Browse interactively: n/p to page, a hero id to open it, q to quit
    Browse {
        /// Starting page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// Heroes per page
        #[arg(short, long, default_value_t = 10)]
        size: u32,
    },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let service = HeroService::new(HeroApi::new(args.api_url));

    match args.command {
        Command::List { page, size } => list(&service, page, size).await,
        Command::Show { id } => show(&service, id).await,
        Command::Browse { page, size } => browse(&service, page, size).await,
    }
}

async fn list(service: &HeroService, page: u32, size: u32) {
    match service.fetch_heroes(page, size).await {
        Ok(heroes) => print!("{}", format_hero_page(&heroes)),
        Err(e) => {
            log::error!("List fetch failed: {}", e);
            eprintln!("{}", LIST_ERROR);
            std::process::exit(1);
        }
    }
}

async fn show(service: &HeroService, id: u32) {
    // Instant render from cache when possible, otherwise fetch
    let hero = match service.hero_from_cache(id) {
        Some(hero) => hero,
        None => match service.fetch_hero(id).await {
            Ok(hero) => hero,
            Err(e) => {
                log::error!("Detail fetch failed for hero {}: {}", id, e);
                eprintln!("{}", DETAIL_ERROR);
                std::process::exit(1);
            }
        },
    };

    print!("{}", format_hero_detail(&hero));
    println!("\nImage: {}", image_url(Some(&hero)));
}

async fn browse(service: &HeroService, start_page: u32, size: u32) {
    let mut page = start_page.max(1);
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let mut last_page = None;
        match service.fetch_heroes(page, size).await {
            Ok(heroes) => {
                last_page = Some(heroes.total_pages());
                print!("{}", format_hero_page(&heroes));
            }
            Err(e) => {
                log::error!("List fetch failed: {}", e);
                println!("{}", LIST_ERROR);
            }
        }

        print!("[n]ext, [p]revious, hero id, [q]uit > ");
        let _ = std::io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };

        match line.trim() {
            "q" | "quit" => break,
            "n" | "next" => {
                if last_page.map_or(true, |last| page < last) {
                    page += 1;
                }
            }
            "p" | "prev" | "previous" => page = page.saturating_sub(1).max(1),
            "" => {}
            input => match input.parse::<u32>() {
                Ok(id) => {
                    // Prefetched or previously viewed heroes come straight
                    // from the cache
                    if let Some(hero) = service.hero_from_cache(id) {
                        print!("{}", format_hero_detail(&hero));
                        println!("(cached)");
                        continue;
                    }
                    match service.fetch_hero(id).await {
                        Ok(hero) => print!("{}", format_hero_detail(&hero)),
                        Err(e) => {
                            log::error!("Detail fetch failed for hero {}: {}", id, e);
                            println!("{}", DETAIL_ERROR);
                        }
                    }
                }
                Err(_) => println!("Unrecognized input: {}", input),
            },
        }
    }
}
