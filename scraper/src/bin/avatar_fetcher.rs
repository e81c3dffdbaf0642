use anyhow::Result;
use clap::Parser;
use tiktok_scraper::{logging, strip_handle, AvatarLocator, FetcherConfig, ProfileClient};

/// Download the profile picture of a TikTok account
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Username, with or without the leading @
    username: Option<String>,

    /// Seconds to wait for the profile page
    #[arg(long)]
    timeout: Option<u64>,
}

fn get_profile_image(client: &ProfileClient, username: &str) -> Result<Option<String>> {
    let username = strip_handle(username);
    println!("[*] Fetching profile page for @{}...", username);

    let page = client.fetch_profile_page(username)?;
    if !page.is_ok() {
        println!("[!] Failed to fetch page (status {}).", page.status);
        return Ok(None);
    }

    match AvatarLocator::default().locate(page.status, &page.body) {
        Some(img_url) => {
            println!("[+] Found image URL: {}", img_url);
            Ok(Some(img_url))
        }
        None => {
            println!("[!] Could not find profile image URL. Page layout may have changed.");
            Ok(None)
        }
    }
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let username = match cli.username {
        Some(username) => username,
        None => {
            println!("Usage: avatar_fetcher <username>");
            std::process::exit(1);
        }
    };

    let config = FetcherConfig::default().with_timeout_secs(cli.timeout);
    let client = ProfileClient::new(config)?;

    if let Some(img_url) = get_profile_image(&client, &username)? {
        let cwd = std::env::current_dir()?;
        if let Some(path) = client.download_image(&img_url, &username, &cwd)? {
            let name = path.file_name().unwrap_or(path.as_os_str());
            println!("[✓] Saved profile picture as: {}", name.to_string_lossy());
        }
    }

    Ok(())
}
