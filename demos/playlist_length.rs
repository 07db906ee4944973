use std::error::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use playlist_length_rs::api::{handle_playlist_request, PlaylistRequest};
use playlist_length_rs::{format_hhmmss, PlaylistAggregator, SETTINGS};

/// Print how long a playlist takes to watch at each supported speed.
///
/// Needs `YOUTUBE_API_KEY` in the environment (or a `.env` file).
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let input = std::env::args()
        .nth(1)
        .ok_or("Please provide a playlist URL or ID")?;

    let aggregator = PlaylistAggregator::from_settings(&SETTINGS)?;
    let response = handle_playlist_request(
        &aggregator,
        PlaylistRequest {
            playlist_input: Some(input),
        },
    )
    .await;

    if !response.is_success() {
        eprintln!("Error ({}): {}", response.status, response.body["error"]);
        std::process::exit(1);
    }

    let body = &response.body;
    println!("{}", body["title"].as_str().unwrap_or("<untitled>"));
    if let Some(thumbnail) = body["thumbnail"].as_str() {
        println!("Thumbnail: {}", thumbnail);
    }
    println!("Videos: {}", body["totalVideos"]);
    println!();
    println!("{:>6}  {:>10}", "Speed", "Duration");

    if let Some(rows) = body["durationsBySpeed"].as_array() {
        for row in rows {
            let speed = row["speed"].as_f64().unwrap_or(1.0);
            let seconds = row["seconds"].as_u64().unwrap_or(0);
            println!("{:>5}x  {:>10}", speed, format_hhmmss(seconds));
        }
    }

    Ok(())
}
