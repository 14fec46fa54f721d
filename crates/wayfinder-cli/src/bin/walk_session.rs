//! CLI tool to drive a navigation session against a running wayfinder server.
//!
//! Opens a session, plans a route, then walks it step by step, printing the
//! instruction and whatever advice the server has attached for the current
//! step. Optionally ends with an emergency drill.

use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tokio::time;
use wayfinder_cli::WayfinderClient;
use wayfinder_core::{Language, TravelMode};

/// Walk a navigation session end to end against a wayfinder server
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Wayfinder server URL
    #[arg(long, default_value = "http://localhost:3000")]
    url: String,

    /// Airport id
    #[arg(long, default_value = "del-t3")]
    airport: String,

    /// Start location id
    #[arg(long, default_value = "del-e1")]
    start: String,

    /// End location id
    #[arg(long, default_value = "del-g15")]
    end: String,

    /// Travel mode: wheelchair or standard
    #[arg(long, default_value = "wheelchair", value_parser = parse_mode)]
    mode: TravelMode,

    /// Language: en, hi, te, ta or ml
    #[arg(long, default_value = "en", value_parser = parse_language)]
    language: Language,

    /// Pause between steps in milliseconds
    #[arg(long, default_value_t = 1500)]
    step_delay: u64,

    /// Trigger and cancel an evacuation after reaching the gate
    #[arg(long)]
    emergency_drill: bool,
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

async fn print_current_step(client: &WayfinderClient) -> Result<()> {
    // Give the advice fetch a moment to land before reading the snapshot.
    time::sleep(Duration::from_millis(300)).await;
    let session = client.get_session().await?;
    let Some(path) = &session.path else {
        return Ok(());
    };
    let step = &path.steps[session.current_step];
    println!(
        "Step {}/{}: {}",
        session.current_step + 1,
        path.steps.len(),
        step.instruction
    );
    if let Some(advice) = &session.advice {
        if advice.step_index == session.current_step {
            println!("  tip: {}", advice.tip);
            println!("  caution: {}", advice.caution);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    println!("Connecting to wayfinder server at {}...", args.url);
    let mut client = WayfinderClient::new(&args.url);

    let session = client.create_session().await?;
    println!("Opened session {}", session.id);

    let session = client
        .plan(&args.airport, &args.start, &args.end, args.mode, args.language)
        .await?;
    let path = session.path.as_ref().expect("planned session has a path");
    println!(
        "Planned: {} -> {} ({}, {})",
        path.from, path.to, path.distance, path.estimated_time
    );

    let total_steps = path.steps.len();
    client.narrate("start").await?;
    print_current_step(&client).await?;

    for _ in 1..total_steps {
        time::sleep(Duration::from_millis(args.step_delay)).await;
        client.step("next").await?;
        client.narrate("start").await?;
        print_current_step(&client).await?;
    }
    println!("Arrived at {}", path.to);

    if args.emergency_drill {
        println!();
        println!("Starting emergency drill...");
        let session = client.set_emergency(true).await?;
        let route = session.path.as_ref().expect("evacuation route");
        for step in &route.steps {
            println!("  {}", step.instruction);
        }
        time::sleep(Duration::from_millis(args.step_delay)).await;
        client.set_emergency(false).await?;
        println!("Drill complete, back to planning.");
    }

    client.narrate("stop").await?;
    Ok(())
}
