//! Basic example demonstrating the custom property values client.
//!
//! Run with:
//! ```
//! GITHUB_TOKEN=your-token cargo run --example basic -- octo-org/hello-world
//! ```

use ghprops::{CustomPropertyValue, GitHubClient, RepoRef};

#[tokio::main]
async fn main() -> ghprops::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    let repo: RepoRef = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "octo-org/hello-world".to_string())
        .parse()?;

    // Create client from environment variables
    println!("Creating GitHub client...");
    let client = GitHubClient::from_env()?;
    let repos = client.repositories();

    // Read current values
    println!("\n--- Custom Property Values for {repo} ---");
    let (values, meta) = repos.get_all_custom_property_values(&repo).await?;
    for value in &values {
        println!(
            "  - {} = {}",
            value.property_name,
            value.value.as_deref().unwrap_or("(unset)")
        );
    }
    if let Some(rate) = meta.rate {
        println!("Rate limit: {}/{} remaining", rate.remaining, rate.limit);
    }

    // Write one value back unchanged
    if let Some(first) = values.first() {
        println!("\n--- Re-applying '{}' ---", first.property_name);
        let meta = repos
            .create_or_update_custom_property_values(
                &repo,
                &[CustomPropertyValue::new(
                    first.property_name.clone(),
                    first.value.clone(),
                )],
            )
            .await?;
        println!("Status: {}", meta.status);
    }

    Ok(())
}
