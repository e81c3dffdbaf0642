use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tiktok_scraper::config::{DEFAULT_LINKS_FILE, DEFAULT_PREVIEW_COUNT, DEFAULT_YT_DLP};
use tiktok_scraper::{fetch_video_links, logging, YtDlp};

/// List every video link of a TikTok profile using yt-dlp
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Profile URL or username (@username or username). Prompted for when omitted
    profile: Option<String>,

    /// File the links are saved to, one per line
    #[arg(long, default_value = DEFAULT_LINKS_FILE)]
    output: PathBuf,

    /// Only look at this many videos of the listing
    #[arg(long)]
    max_items: Option<usize>,

    /// How many links to print
    #[arg(long, default_value_t = DEFAULT_PREVIEW_COUNT)]
    preview: usize,

    /// yt-dlp executable to run
    #[arg(long = "yt-dlp", default_value = DEFAULT_YT_DLP)]
    yt_dlp: PathBuf,
}

fn prompt_profile() -> Result<String> {
    print!("Enter TikTok profile URL or username (e.g. @username or username or full URL): ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read profile from stdin")?;
    Ok(line.trim().to_string())
}

fn run(cli: &Cli, profile: &str) -> Result<()> {
    println!("Fetching video links for: {} ...", profile);

    let extractor = YtDlp::new(&cli.yt_dlp);
    let links = fetch_video_links(&extractor, profile, Some(&cli.output), cli.max_items)?;

    if links.is_empty() {
        println!("No videos found or extraction failed.");
        return Ok(());
    }

    println!(
        "Found {} videos. Sample (first {}):",
        links.len(),
        cli.preview
    );
    for (i, link) in links.iter().take(cli.preview).enumerate() {
        println!("{}. {}", i + 1, link);
    }
    println!("\nAll links saved to: {}", absolute(&cli.output).display());

    Ok(())
}

fn absolute(path: &Path) -> PathBuf {
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let profile = match &cli.profile {
        Some(profile) => profile.trim().to_string(),
        None => prompt_profile()?,
    };

    if profile.is_empty() {
        println!("No profile provided. Exiting.");
        return Ok(());
    }

    // Failures are reported, not fatal.
    if let Err(e) = run(&cli, &profile) {
        println!("Error: {:#}", e);
    }

    Ok(())
}
