//! academy-content - client for the UST Soccer Academy content API.
//!
//! Fetches typed collections (events, sponsors, camps/clinics, tryouts,
//! posts), caches each for a freshness window, and prints display-ready
//! listings ordered the way the site's pages order them.

mod api;
mod cache;
mod config;
mod content;
mod models;
mod registration;
mod utils;

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use api::{ContentClient, ContentError};
use config::Config;
use content::{filters, ContentProvider};
use utils::format::{format_date, format_optional};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn print_usage() {
    eprintln!("Usage: academy-content [COMMAND]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  events                 List upcoming events (default)");
    eprintln!("  event <id>             Show one event in detail");
    eprintln!("  sponsors               List active sponsors in display order");
    eprintln!("  camps-clinics          List camp and clinic programs");
    eprintln!("  tryouts                List upcoming tryouts");
    eprintln!("  posts                  List blog posts");
    eprintln!("  set-base-url <url>     Save the site base URL to the config file");
}

/// Print the page-level generic error state before propagating.
fn report(err: ContentError) -> anyhow::Error {
    eprintln!(
        "Unable to load {} right now. Please try again later.",
        err.collection()
    );
    err.into()
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();
    info!("academy-content starting");

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("events");

    if command == "--help" || command == "-h" {
        print_usage();
        return Ok(());
    }

    if command == "set-base-url" {
        let Some(url) = args.get(2) else {
            print_usage();
            anyhow::bail!("set-base-url requires a URL");
        };
        let mut config = Config::load()?;
        config.base_url = Some(url.clone());
        config.save()?;
        println!("Base URL set to {}", url);
        return Ok(());
    }

    let config = Config::load()?;
    let client = ContentClient::new(config.resolved_base_url())?;
    let provider = ContentProvider::new(client, config.freshness_window());

    match command {
        "events" => {
            let events = provider.events().await.map_err(report)?;
            let upcoming = filters::upcoming_events(&events);
            if upcoming.is_empty() {
                println!("No upcoming events.");
            }
            for event in &upcoming {
                let date = event
                    .start_date
                    .as_deref()
                    .map(format_date)
                    .unwrap_or_else(|| "TBD".to_string());
                println!(
                    "{:12}  {}  [{}]",
                    date,
                    event.title,
                    event.kind.as_deref().unwrap_or("Event"),
                );
                println!("{:12}  {}", "", format_optional(&event.venue, "Venue TBD"));
            }
        }
        "event" => {
            let Some(id) = args.get(2) else {
                print_usage();
                anyhow::bail!("event requires an id");
            };
            match provider.find_event(id).await.map_err(report)? {
                Some(event) => {
                    println!("{}", event.title);
                    if let Some(ref description) = event.description {
                        println!("{}", description);
                    }
                    println!("Venue:      {}", format_optional(&event.venue, "TBD"));
                    println!(
                        "Dates:      {} - {}",
                        format_date(event.start_date.as_deref().unwrap_or("TBD")),
                        format_date(event.end_date.as_deref().unwrap_or("TBD")),
                    );
                    println!("Sessions:   {}", event.session_dates().join(", "));
                    println!("Age groups: {}", event.age_groups.join(", "));
                    println!("Price:      {}", event.price_display());
                    if let Some(max) = event.max_participants {
                        println!("Capacity:   {} participants", max);
                    }
                    if let Some(ref deadline) = event.registration_deadline {
                        println!("Register by {}", format_date(deadline));
                    }
                    for feature in &event.features {
                        println!("  - {}", feature);
                    }
                }
                None => println!("Event not found"),
            }
        }
        "sponsors" => {
            let sponsors = provider.sponsors().await.map_err(report)?;
            for sponsor in filters::active_sponsors(&sponsors) {
                println!(
                    "{:3}  {}  {}",
                    sponsor.order,
                    sponsor.name,
                    format_optional(&sponsor.website, ""),
                );
            }
        }
        "camps-clinics" => {
            let camps = provider.camps_clinics().await.map_err(report)?;
            for camp in &camps {
                let marker = if camp.is_upcoming() { "*" } else { " " };
                let date = camp
                    .start_date
                    .as_deref()
                    .map(format_date)
                    .unwrap_or_else(|| "TBD".to_string());
                println!("{} {:12}  {}", marker, date, camp.title);
            }
        }
        "tryouts" => {
            let tryouts = provider.tryouts().await.map_err(report)?;
            for tryout in filters::upcoming_tryouts(&tryouts) {
                let first = tryout
                    .dates
                    .first()
                    .map(|d| format_date(&d.date))
                    .unwrap_or_else(|| "TBD".to_string());
                println!("{}  {}", first, tryout.title);
            }
        }
        "posts" => {
            let posts = provider.posts().await.map_err(report)?;
            for post in &posts {
                println!(
                    "{}  {}  /news/{}",
                    post.formatted_date().unwrap_or_default(),
                    post.title,
                    post.slug,
                );
            }
        }
        other => {
            print_usage();
            anyhow::bail!("unknown command: {}", other);
        }
    }

    Ok(())
}
