use std::{io::BufRead, path::PathBuf};

use anyhow::Context;
use barbell_rs::{
    bar::Bar,
    bar_kind::BarKind,
    event::Event,
    plate::Plate,
    presenter::{Assets, Frame},
    session::Session,
};
use clap::Parser;
use itertools::Itertools;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Load plates onto a barbell and see the total weight
#[derive(Parser)]
#[command(name = "barbell")]
struct Args {
    /// Bar to start with: o, w, t or a weight in kilograms
    #[arg(short, long, default_value = "o")]
    bar: Bar,

    /// Directory image references are resolved against
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Print the standard plates and bars, then exit
    #[arg(long)]
    list_plates: bool,

    /// Log every mutation
    #[arg(short, long)]
    verbose: bool,

    /// Commands to apply in order, e.g. "+20" "add 2.5" undo "remove 0".
    /// Reads commands from stdin when none are given.
    #[arg(value_parser = clap::value_parser!(Event))]
    events: Vec<Event>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.list_plates {
        println!(
            "Plates: {}",
            Plate::standard().iter().map(Plate::kg_label).join(", ")
        );
        for kind in BarKind::ALL {
            println!("Bar {}: {} ({})", kind.code(), kind, Bar::from(kind));
        }
        return Ok(());
    }

    let mut session = Session::new(args.bar, Assets::new(args.assets));
    info!(bar = %session.bar(), "session started");

    if !args.events.is_empty() {
        for event in args.events {
            let frame = session
                .apply(event.clone())
                .with_context(|| format!("Failed to apply {event}"))?;
            show(frame);
        }
        return Ok(());
    }

    show(session.frame());
    for line in std::io::stdin().lock().lines() {
        let line = line.context("Failed to read command from stdin")?;
        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            command => match command.parse::<Event>() {
                Ok(event) => match session.apply(event) {
                    Ok(frame) => show(frame),
                    Err(err) => eprintln!("{err}"),
                },
                Err(err) => eprintln!("{err}"),
            },
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "barbell_rs=debug"
    } else {
        "barbell_rs=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn show(frame: &Frame) {
    println!("{frame}");
    println!("  bar: {}", frame.bar_image);
    for view in &frame.left {
        println!("  {view}");
    }
}
