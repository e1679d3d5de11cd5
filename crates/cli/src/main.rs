//! GoMarket CLI - Cart inspection and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Add a product to the cart (merges with an existing line)
//! gm-cli cart add -i p1 -t "Shirt" -u https://cdn.example.com/shirt.png -p 19.99
//!
//! # Change a line's quantity
//! gm-cli cart increment p1
//! gm-cli cart decrement p1
//!
//! # Show the cart
//! gm-cli cart show
//! ```
//!
//! # Commands
//!
//! - `cart add` - Add a product to the cart
//! - `cart increment` - Increment a line's quantity
//! - `cart decrement` - Decrement a line's quantity (removes the line at 1)
//! - `cart show` - Print the cart with item count and subtotal
//!
//! The snapshot location is taken from `GOMARKET_DATA_DIR` (default
//! `.gomarket`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;

#[derive(Parser)]
#[command(name = "gm-cli")]
#[command(author, version, about = "GoMarket CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and mutate the local cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product identifier
        #[arg(short, long)]
        id: String,

        /// Display name
        #[arg(short, long)]
        title: String,

        /// Product image URL
        #[arg(short = 'u', long)]
        image_url: String,

        /// Price per unit (e.g. 19.99)
        #[arg(short, long)]
        price: Decimal,
    },
    /// Increment a line's quantity by 1
    Increment {
        /// Product identifier
        id: String,
    },
    /// Decrement a line's quantity by 1 (removes the line at 1)
    Decrement {
        /// Product identifier
        id: String,
    },
    /// Print the cart with item count and subtotal
    Show,
}

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gm_cli=info,gomarket_cart=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Add {
                id,
                title,
                image_url,
                price,
            } => commands::cart::add(&id, &title, &image_url, price).await?,
            CartAction::Increment { id } => commands::cart::increment(&id).await?,
            CartAction::Decrement { id } => commands::cart::decrement(&id).await?,
            CartAction::Show => commands::cart::show().await?,
        },
    }
    Ok(())
}
