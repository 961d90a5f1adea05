//! Basic example demonstrating the Crisp plugin API client.
//!
//! Run with:
//! ```
//! CRISP_API_IDENTIFIER=id CRISP_API_KEY=key CRISP_API_TIER=plugin \
//!     cargo run --example basic -- <plugin-id>
//! ```

use crispapi::{
    check_connect_session_validity, list_connect_websites, CrispClient, Get, PersonalPluginRank,
    PluginInformation, PluginStars,
};

#[tokio::main]
async fn main() -> crispapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating Crisp client...");
    let client = CrispClient::from_env()?;
    println!("Connected to: {} (tier: {})", client.base_url(), client.tier());

    // Check the connect session
    println!("\n--- Connect Session ---");
    match check_connect_session_validity(&client).await {
        Ok(meta) => println!("Session valid ({})", meta.status),
        Err(e) => println!("Session invalid: {e}"),
    }

    // List connected websites
    println!("\n--- Connected Websites ---");
    let websites = list_connect_websites(&client)
        .await?
        .into_data()
        .unwrap_or_default();
    println!("Found {} websites", websites.len());
    for website_id in &websites {
        println!("  - {website_id}");
    }

    // Inspect a plugin
    let Some(plugin_id) = std::env::args().nth(1) else {
        println!("\nPass a plugin ID to inspect a plugin");
        return Ok(());
    };

    println!("\n--- Plugin Details ---");
    let plugin = PluginInformation::get(&client, plugin_id.clone()).await?;
    match plugin.data {
        Some(plugin) => {
            println!("Plugin: {}", plugin.label().unwrap_or("(unnamed)"));
            println!("  URN: {:?}", plugin.urn);
            println!("  Type: {:?}", plugin.plugin_type);
            println!("  Price: {:?}", plugin.price);
        }
        None => println!("No plugin data returned"),
    }

    println!("\n--- Ratings ---");
    let stars = PluginStars::get(&client, plugin_id.clone()).await?;
    if let Some(stars) = stars.data {
        println!("Mean {:?} over {:?} ranks", stars.mean, stars.total);
    }

    let rank = PersonalPluginRank::get(&client, plugin_id).await?;
    match rank.data.and_then(|r| r.rank) {
        Some(rank) => println!("Your rank: {rank}"),
        None => println!("You have not ranked this plugin"),
    }

    println!("\nDone!");
    Ok(())
}
