use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smartagri_push_test::{run_delivery_check, PushService, PushTestConfig};

#[derive(Parser)]
#[command(name = "push-test")]
#[command(about = "Smart Agriculture Push Notification Test Tool")]
struct Cli {
    /// Expo push token override
    #[arg(long)]
    token: Option<String>,
    /// Notification title override
    #[arg(long)]
    title: Option<String>,
    /// Notification body override
    #[arg(long)]
    body: Option<String>,
    /// Expo push API URL override
    #[arg(long)]
    push_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smartagri_push_test=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = PushTestConfig::from_env();
    if let Some(token) = cli.token {
        config.token = token;
    }
    if let Some(title) = cli.title {
        config.title = title;
    }
    if let Some(body) = cli.body {
        config.body = body;
    }
    if let Some(push_url) = cli.push_url {
        config.push_url = push_url;
    }

    println!("{}", "=".repeat(60));
    println!("🚀 Smart Agriculture - Push Notification Test");
    println!("{}", "=".repeat(60));
    println!();
    println!("📤 Sending notification to: {}", config.token);
    println!("📝 Title: {}", config.title);
    println!("📝 Body: {}", config.body);
    println!();

    let service = PushService::new(&config).await?;
    let report = run_delivery_check(&service, &config.token, &config.title, &config.body).await;

    println!("{}", report.render());

    if report.succeeded() {
        println!("{}", "=".repeat(60));
        println!("✅ TEST PASSED!");
        println!("{}", "=".repeat(60));
        println!();
        println!("Next steps:");
        println!("1. Check your Android phone");
        println!("2. Notification should appear (even if app is closed)");
        println!("3. If it works, backend integration is complete!");
    } else {
        println!("{}", "=".repeat(60));
        println!("❌ TEST FAILED");
        println!("{}", "=".repeat(60));
        println!();
        println!("Troubleshooting:");
        println!("1. Check if token is correct");
        println!("2. Make sure phone has internet");
        println!("3. Check response error message above");
    }

    Ok(())
}
