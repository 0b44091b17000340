use clap::Parser;
use travel_core::PipelineOptions;

/// Top-level CLI struct. The tool takes no arguments: one invocation runs the
/// full pipeline and prints the output locations.
#[derive(Debug, Parser)]
#[command(name = "turkey-travel", version, about = "Turkey travel report generator")]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let options = PipelineOptions::default();
        travel_core::pipeline::run(&options).await?;
        println!("\n🇹🇷 Ready for your Turkish adventure! 🎉");
        Ok(())
    }
}
