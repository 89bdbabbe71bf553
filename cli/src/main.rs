//! Terminal client for the shopping list API.

use std::io;

use clap::Parser;
use shopping_core::{ShoppingClient, ShoppingList};
use tracing_subscriber::EnvFilter;

mod session;
mod transport;

use transport::UreqTransport;

#[derive(Parser, Debug)]
#[command(name = "shopping", about = "Shopping list in the terminal")]
struct Args {
    /// Root of the items API.
    #[arg(long, env = "SHOPPING_API_URL", default_value = "http://localhost:5000/api")]
    api_url: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();

    let args = Args::parse();
    let mut list = ShoppingList::new(ShoppingClient::new(&args.api_url));
    let mut transport = UreqTransport::new();

    println!("{}", session::HELP);
    let stdin = io::stdin();
    session::run(&mut list, &mut transport, &mut stdin.lock(), &mut io::stdout())?;
    Ok(())
}
