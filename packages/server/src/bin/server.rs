//! Simple WebSocket message relay server with broadcast functionality.
//!
//! Receives JSON messages from clients, stamps them with the server receipt
//! time, and broadcasts them to all connected clients, including the sender.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin chukei-server
//! cargo run --bin chukei-server -- --host 0.0.0.0 --port 3000
//! ```

use std::sync::Arc;

use chukei_server::{
    domain::ConnectionRegistry, infrastructure::registry::InMemoryConnectionRegistry, ui::Server,
    usecase::RelayMessageUseCase,
};
use chukei_shared::{logger::setup_logger, time::SystemClock};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chukei-server")]
#[command(about = "WebSocket message relay server with broadcast support", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8040")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Registry
    // 2. Clock
    // 3. UseCases
    // 4. Server

    // 1. Create Registry (in-memory connection table)
    let registry: Arc<dyn ConnectionRegistry> = Arc::new(InMemoryConnectionRegistry::new());

    // 2. Create Clock (wall clock for receipt timestamps)
    let clock = Arc::new(SystemClock);

    // 3. Create UseCases
    let relay_message_usecase = Arc::new(RelayMessageUseCase::new(registry.clone(), clock));

    // 4. Create and run the server
    let server = Server::new(registry, relay_message_usecase);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
