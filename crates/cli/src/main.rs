//! Shelfcart CLI - Inspect and edit a file-backed cart.
//!
//! # Usage
//!
//! ```bash
//! # Add a product to the cart
//! shelfcart add -n "Widget" -p '$10.00' -q 2
//!
//! # Show the cart, its summary, or the badge count
//! shelfcart list
//! shelfcart summary
//! shelfcart badge
//!
//! # Change a quantity, remove a line, or empty the cart
//! shelfcart update <ID> 3
//! shelfcart remove <ID>
//! shelfcart clear
//! ```
//!
//! # Environment Variables
//!
//! See `shelfcart_storefront::config` for `CART_STORAGE_KEY`,
//! `CART_STORAGE_PATH`, `CART_FIXED_DISCOUNT` and `CART_FIXED_TAX`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use shelfcart_storefront::cart::CartStore;
use shelfcart_storefront::config::CartConfig;
use shelfcart_storefront::storage::FileStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::cart::AddArgs;

#[derive(Parser)]
#[command(name = "shelfcart")]
#[command(author, version, about = "Shelfcart cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cart page
    List,
    /// Show subtotal, fixed charges, and total
    Summary,
    /// Show the cart badge
    Badge,
    /// Add a product to the cart
    Add {
        /// Product title
        #[arg(short, long)]
        name: Option<String>,

        /// Price as displayed (e.g. '$10.00')
        #[arg(short, long)]
        price: Option<String>,

        /// Product image URL
        #[arg(long)]
        image: Option<String>,

        /// Supplier name
        #[arg(long)]
        seller: Option<String>,

        /// Sizes offered by the product page
        #[arg(long, value_delimiter = ',')]
        sizes: Vec<String>,

        /// Selected size
        #[arg(short, long)]
        size: Option<String>,

        /// Quantity input value
        #[arg(short, long, default_value = "1")]
        quantity: String,
    },
    /// Remove a line from the cart
    Remove {
        /// Cart item ID
        id: String,
    },
    /// Change the quantity of a line
    Update {
        /// Cart item ID
        id: String,

        /// New quantity
        quantity: String,
    },
    /// Remove every line from the cart
    Clear,
}

#[allow(clippy::print_stdout)]
fn main() {
    // Logs go to stderr so command output stays clean on stdout
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shelfcart_cli=info,shelfcart_storefront=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            tracing::error!("Command failed: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> shelfcart_storefront::error::Result<Vec<String>> {
    let config = CartConfig::from_env()?;
    tracing::debug!(path = %config.storage_path.display(), key = %config.storage_key, "Opening cart");

    let storage = FileStore::new(&config.storage_path);
    let mut store = CartStore::with_key(storage, config.storage_key.clone());
    let pricing = config.pricing;

    match cli.command {
        Commands::List => Ok(commands::cart::list(&store, &pricing)),
        Commands::Summary => Ok(commands::cart::summary(&store, &pricing)),
        Commands::Badge => Ok(commands::cart::badge(&store)),
        Commands::Add {
            name,
            price,
            image,
            seller,
            sizes,
            size,
            quantity,
        } => commands::cart::add(
            &mut store,
            AddArgs {
                name,
                price,
                image,
                seller,
                sizes,
                size,
                quantity,
            },
        ),
        Commands::Remove { id } => commands::cart::remove(&mut store, &id),
        Commands::Update { id, quantity } => commands::cart::update(&mut store, &id, &quantity),
        Commands::Clear => commands::cart::clear(&mut store),
    }
}
