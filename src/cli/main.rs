use clap::{Parser, Subcommand};
use reqwest::{Client, Response};
use serde_json::json;
use std::error::Error;

#[derive(Parser)]
#[command(name = "catalog-cli")]
#[command(about = "Catalog search CLI", long_about = None)]
struct Cli {
    #[arg(short, long, env = "CATALOG_SEARCH_ENDPOINT", default_value = "http://localhost:4000")]
    endpoint: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a collection
    Create {
        /// Collection name (server default when omitted)
        #[arg(short, long)]
        index: Option<String>,
    },

    /// Index a product (the server's sample product when no name is given)
    Index {
        #[arg(short, long)]
        index: Option<String>,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long, default_value = "0")]
        price: i64,

        #[arg(short, long, default_value = "")]
        tag: String,

        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Search products
    Search {
        #[arg(value_name = "TEXT", default_value = "")]
        text: String,

        #[arg(short, long)]
        index: Option<String>,
    },

    /// Check server health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let client = Client::new();

    match cli.command {
        Commands::Create { index } => {
            let mut request = client.post(format!("{}/create", cli.endpoint));
            if let Some(index) = index {
                request = request.query(&[("index", index)]);
            }

            print_text(request.send().await?).await?;
        }

        Commands::Index {
            index,
            name,
            price,
            tag,
            description,
        } => {
            let mut request = client.post(format!("{}/index", cli.endpoint));
            if let Some(index) = index {
                request = request.query(&[("index", index)]);
            }
            if let Some(name) = name {
                request = request.json(&json!({
                    "name": name,
                    "price": price,
                    "tag": tag,
                    "description": description,
                }));
            }

            print_text(request.send().await?).await?;
        }

        Commands::Search { text, index } => {
            let mut request = client
                .get(format!("{}/search", cli.endpoint))
                .query(&[("search", text)]);
            if let Some(index) = index {
                request = request.query(&[("index", index)]);
            }

            let response = request.send().await?;
            if !response.status().is_success() {
                return fail(response).await;
            }

            let body: serde_json::Value = response.json().await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }

        Commands::Health => {
            let response = client
                .get(format!("{}/health", cli.endpoint))
                .send()
                .await?;

            let body: serde_json::Value = response.json().await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }

    Ok(())
}

async fn print_text(response: Response) -> Result<(), Box<dyn Error>> {
    if !response.status().is_success() {
        return fail(response).await;
    }

    println!("{}", response.text().await?);
    Ok(())
}

async fn fail(response: Response) -> Result<(), Box<dyn Error>> {
    let status = response.status();
    let message = response.text().await?;
    Err(format!("server returned {}: {}", status, message).into())
}
