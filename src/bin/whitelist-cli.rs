use clap::{Parser, Subcommand};
use reqwest::Method;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "whitelist-cli")]
#[command(about = "Command-line client for the whitelist gateway", long_about = None)]
struct Cli {
    #[arg(short, long, env = "WHITELIST_URL", default_value = "http://localhost:8008")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a player to the whitelist
    Add { username: String },
    /// Remove a player from the whitelist
    Remove { username: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let (method, username) = match cli.command {
        Commands::Add { username } => (Method::POST, username),
        Commands::Remove { username } => (Method::DELETE, username),
    };

    let res = client
        .request(method, format!("{}/whitelist", cli.url.trim_end_matches('/')))
        .query(&[("username", username.as_str())])
        .send()
        .await?;

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if status.is_success() {
        println!("{}", status);
    } else {
        eprintln!("Error: gateway returned status {}", status);
    }

    if text.is_empty() {
        return Ok(());
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
