use std::{fmt::Write as _, process::ExitCode};

use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::{ClientSettings, SearchController, SearchState};
use shared::domain::Movie;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "movie-search", about = "Search the movie service from the terminal")]
struct Args {
    /// Print the resulting state as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Look up a movie by title.
    Search {
        query: String,
        /// Include the extended details (rating, cast, ...).
        #[arg(long)]
        details: bool,
    },
    /// List previous search queries recorded by the service.
    History,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    tracing::debug!(?args, "parsed arguments");

    let controller = SearchController::from_settings(&ClientSettings::default())?;

    match &args.command {
        Command::Search { query, details } => {
            if *details {
                controller.toggle_details().await;
            }
            controller.search(query.clone()).await;
        }
        Command::History => {
            controller.fetch_history().await;
        }
    }

    let state = controller.snapshot().await;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print!("{}", render(&args.command, &state));
    }

    if let Some(error) = state.error() {
        eprintln!("{error}");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn render(command: &Command, state: &SearchState) -> String {
    let mut out = String::new();
    match command {
        Command::Search { .. } => {
            if let Some(movie) = state.result() {
                render_movie(&mut out, movie, state.show_details());
            } else if state.error().is_none() {
                out.push_str("No movie found.\n");
            }
        }
        Command::History => {
            if state.history().is_empty() && state.error().is_none() {
                out.push_str("No previous searches.\n");
            }
            for (index, entry) in state.history().iter().enumerate() {
                let _ = writeln!(out, "{:>3}. {entry}", index + 1);
            }
        }
    }
    out
}

fn render_movie(out: &mut String, movie: &Movie, show_details: bool) {
    let title = movie.title.as_deref().unwrap_or("Untitled");
    match &movie.imdb_id {
        Some(imdb_id) => {
            let _ = writeln!(out, "{title} ({imdb_id})");
        }
        None => {
            let _ = writeln!(out, "{title}");
        }
    }
    if let Some(poster) = movie.poster.as_deref() {
        let _ = writeln!(out, "Poster: {poster}");
    }
    if let Some(plot) = movie.plot.as_deref() {
        let _ = writeln!(out, "\n{plot}");
    }
    if show_details {
        out.push('\n');
        for (label, value) in movie.detail_rows() {
            let _ = writeln!(out, "{label}: {}", value.unwrap_or(""));
        }
    }
}
