//! Playcache command-line entrypoint.
//!
//! Answers a phrase from the local archive and prints the results as JSON:
//!
//! ```text
//! playcache [--type music|video|generic] [--featured] <phrase...>
//! ```

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use playcache::archive::MediaArchive;
use playcache::config::Config;
use playcache::keywords::{Harvest, KeywordMatcher};
use playcache::media::MediaType;
use playcache::search::{CacheSearch, FeaturedMedia};

#[derive(Debug, Parser)]
#[command(name = "playcache")]
#[command(about = "Answer a media request from the local archive and print the results as JSON.")]
struct Args {
    /// Requested media type (music, video or generic)
    #[arg(short = 't', long = "type", default_value = "generic")]
    media_type: MediaType,

    /// Print the featured playlist instead of searching
    #[arg(long)]
    featured: bool,

    /// Words of the spoken request
    #[arg(required_unless_present = "featured")]
    phrase: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        storage_path = %config.storage_path.display(),
        provider = %config.provider_name,
        "Playcache starting"
    );

    let archive = MediaArchive::open(&config.storage_path)
        .with_context(|| format!("opening archive in {}", config.storage_path.display()))?;
    let featured = FeaturedMedia::new(archive.clone(), Arc::new(config.identity()));

    if args.featured {
        let playlist = featured.playlist(config.featured_confidence, config.featured_count);
        println!("{}", serde_json::to_string_pretty(&playlist)?);
        return Ok(());
    }

    let keywords = Arc::new(KeywordMatcher::new());
    let added = Harvest::from_archive(&archive).register(
        &keywords,
        &config.vocabulary(),
        &config.genres,
    );
    tracing::info!(
        tracks = archive.track_count(),
        playlists = archive.playlist_count(),
        keywords = added,
        "Archive loaded"
    );

    let search = CacheSearch::new(archive.clone(), keywords, featured)
        .with_featured(config.featured_confidence, config.featured_count)
        .with_write_back_scores(config.write_back_scores);
    let results = search.search(&args.phrase.join(" "), args.media_type);

    if config.write_back_scores {
        archive.flush()?;
    }

    tracing::info!(results = results.len(), "Search complete");
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
