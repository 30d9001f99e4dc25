//! # stockcart Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (logging to stderr)
//! 3. Load configuration (defaults, environment, arguments)
//! 4. Ask for the number of carts if not configured
//! 5. Run the menu until exit or end of input
//! 6. Release the catalog through the cascading delete

fn main() -> anyhow::Result<()> {
    // The actual setup is in lib.rs for better testability
    stockcart_cli::run()
}
