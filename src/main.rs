use clap::Parser;
use spendguard::cli::commands::{cmd_patterns, cmd_run};
use spendguard::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Run {
            page,
            script,
            trace,
            seed,
        } => {
            cmd_run(
                &page,
                script.as_deref(),
                trace.as_deref(),
                seed,
                &config,
                cli.verbose,
            )?;
        }
        Commands::Patterns => {
            cmd_patterns(&config);
        }
    }

    Ok(())
}
