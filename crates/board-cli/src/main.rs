mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    board_core::init_logging()?;

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "board", &mut std::io::stdout());
        return Ok(());
    }

    let ctx = match CliContext::load(cli.config.as_deref(), cli.pretty) {
        Ok(ctx) => ctx,
        Err(e) => output::output_error(&e.to_string()),
    };

    let result = match cli.command {
        Commands::New(args) => handlers::board::handle_new(&ctx, args),
        Commands::Validate { board } => handlers::board::handle_validate(&ctx, board).await,
        Commands::Patch(args) => handlers::board::handle_patch(&ctx, args).await,
        Commands::Decode(cmd) => handlers::decode::handle(&ctx, cmd.kind).await,
        Commands::Completions { .. } => Ok(()),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {:#}", e);
        output::output_error(&e.to_string());
    }

    Ok(())
}
