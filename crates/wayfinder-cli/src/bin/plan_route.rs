//! CLI tool to plan a route against the built-in airport catalog.
//!
//! Runs fully offline; prints the generated step list, the static advice
//! pair, and the offline summary instructions.

use anyhow::{bail, Result};
use clap::Parser;
use wayfinder_core::{
    catalog, fallback_advice, fallback_instructions, plan_route, Language, TravelMode,
};

/// Plan a wayfinding route offline
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// List the airport catalog and exit
    #[arg(long)]
    list: bool,

    /// Airport id (e.g. del-t3)
    #[arg(long)]
    airport: Option<String>,

    /// Start location id (e.g. del-e1)
    #[arg(long)]
    start: Option<String>,

    /// End location id (e.g. del-g15)
    #[arg(long)]
    end: Option<String>,

    /// Travel mode: wheelchair or standard
    #[arg(long, default_value = "wheelchair", value_parser = parse_mode)]
    mode: TravelMode,

    /// Language: en, hi, te, ta or ml
    #[arg(long, default_value = "en", value_parser = parse_language)]
    language: Language,
}

fn parse_mode(s: &str) -> Result<TravelMode, String> {
    match s {
        "wheelchair" => Ok(TravelMode::Wheelchair),
        "standard" => Ok(TravelMode::Standard),
        _ => Err(format!("unknown mode '{}'", s)),
    }
}

fn parse_language(s: &str) -> Result<Language, String> {
    match s {
        "en" => Ok(Language::En),
        "hi" => Ok(Language::Hi),
        "te" => Ok(Language::Te),
        "ta" => Ok(Language::Ta),
        "ml" => Ok(Language::Ml),
        _ => Err(format!("unknown language '{}'", s)),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list {
        for airport in catalog::airports() {
            println!("{}  {} ({}, {})", airport.id, airport.name, airport.city, airport.code);
            for location in &airport.locations {
                println!("    {}  {}", location.id, location.name);
            }
        }
        return Ok(());
    }

    let (Some(airport), Some(start), Some(end)) = (&args.airport, &args.start, &args.end) else {
        bail!("--airport, --start and --end are required (or use --list)");
    };

    let path = plan_route(airport, start, end, args.mode, args.language)?;

    println!("Route: {} -> {}", path.from, path.to);
    println!("Mode: {}   Distance: {}   ETA: {}", path.mode.as_str(), path.distance, path.estimated_time);
    println!();
    for (index, step) in path.steps.iter().enumerate() {
        let marker = if step.is_elevator { " [lift]" } else { "" };
        println!(
            "  {}. ({:>5.1}, {:>5.1})  {}{}",
            index + 1,
            step.point.x,
            step.point.y,
            step.instruction,
            marker
        );
    }

    let advice = fallback_advice(args.language);
    println!();
    println!("Tip: {}", advice.tip);
    println!("Caution: {}", advice.caution);

    println!();
    println!("Summary:");
    for line in fallback_instructions(&path.from, &path.to, args.language) {
        println!("  - {}", line);
    }

    Ok(())
}
