use anyhow::Result;
use clap::Parser;
use tracing::Level;

use tauview::cli::Cli;
use tauview::ops;
use tauview::resources;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let provider = ops::create_provider(&cli);
    let stdout = std::io::stdout();

    if let Err(e) = ops::run(&cli, provider.as_ref(), resources::bundled(), stdout.lock()) {
        eprintln!("tauview: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
