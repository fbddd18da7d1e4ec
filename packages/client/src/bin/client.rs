//! CLI client for the Chukei message relay server.
//!
//! Connects to a relay server and sends JSON chat messages typed on stdin.
//! Every relayed frame is printed, including this client's own messages
//! echoed back with the server-stamped `time` field.
//! Automatically reconnects on disconnection (max 5 attempts with 5 second interval).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin chukei-client -- --user Alice
//! cargo run --bin chukei-client -- -n Bob -u ws://127.0.0.1:8040/ws
//! ```

use clap::Parser;

use chukei_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "chukei-client")]
#[command(about = "CLI client for the Chukei WebSocket message relay", long_about = None)]
struct Args {
    /// User name attached to outgoing messages
    #[arg(short = 'n', long, default_value = "anonymous")]
    user: String,

    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:8040/ws")]
    url: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // Run the client
    if let Err(e) = chukei_client::run_client(args.url, args.user).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
