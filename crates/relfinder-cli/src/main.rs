//! relfinder - Pairwise relatedness lookups for lists of individuals.

use clap::Parser;
use relfinder_cli::commands;
use relfinder_cli::logging;
use relfinder_cli::{Cli, Command, RunContext, Settings};
use tracing::Instrument;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> relfinder_cli::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Command::DetermineRelatedness(args) => {
            logging::init(&args.log, &settings.log_dir)?;
            logging::record_inputs(&args.inputs());

            let context = RunContext::start("determine-relatedness", settings);
            context
                .span()
                .in_scope(|| commands::execute_determine(&args, &context))?;
            context.finish();
        }
        Command::GatherDistributions(args) => {
            logging::init(&args.log, &settings.log_dir)?;
            logging::record_inputs(&args.inputs());

            let context = RunContext::start("gather-distributions", settings);
            let span = context.span().clone();
            commands::execute_gather(&args, &context)
                .instrument(span)
                .await?;
            context.finish();
        }
    }

    Ok(())
}
