use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::Path;
use tiktok_scraper::{logging, AvatarLocator, FetcherConfig, ProfileClient};

fn main() -> Result<()> {
    logging::init();

    // Get username and fixture name from command line arguments
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Please provide a username and a test name");
        eprintln!("Usage: cargo run --bin save_page_failure <USERNAME> <test_name>");
        std::process::exit(1);
    }

    let username = &args[1];
    let test_name = &args[2];

    let client = ProfileClient::new(FetcherConfig::default())?;
    println!("Fetching profile page for {}...", username);
    let page = client.fetch_profile_page(username)?;
    println!("Status of {}: {}", page.url, page.status);

    // Saved pages are picked up by the regression test
    let failures_dir = Path::new("src/tests/fixtures/failures");
    fs::create_dir_all(failures_dir).context("Failed to create failures directory")?;

    let file_path = failures_dir.join(format!("{}.html", test_name));
    fs::write(&file_path, &page.body).context("Failed to write HTML file")?;

    println!(
        "Saved HTML to {} for regression testing",
        file_path.display()
    );

    let locator = AvatarLocator::default();

    println!("\nImage source results:");
    for (name, found) in locator.diagnose(&page.body) {
        match found {
            Some(url) => println!("  - {}: {}", name, url),
            None => println!("  - {}: not found", name),
        }
    }

    match locator.locate(page.status, &page.body) {
        Some(url) => {
            println!("⚠️ Locator found {}. This may not be a failure case.", url);
        }
        None if !page.is_ok() => {
            println!("✅ Page was not served (status {}).", page.status);
            println!("   Blocked or missing profile rather than a layout change");
        }
        None => {
            println!("✅ No image source matched the page.");
            println!("\nThis test case has been saved and will be included in regression tests.");
        }
    }

    Ok(())
}
