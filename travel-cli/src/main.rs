//! Entry point for the `turkey-travel` tool. A single zero-argument
//! invocation runs the whole report pipeline in travel-core and prints the
//! locations of the generated HTML and JSON documents.

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
