use clap::Parser;
use ipv4_addressing::cli::Cli;
use ipv4_addressing::config::Config;
use ipv4_addressing::logging::init_logging;
use ipv4_addressing::output::print_evaluations;
use ipv4_addressing::summarise_all;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let config = Config::from_env()?.with_cli(&cli);
    init_logging(&config.log_config)?;
    log::info!("#Start main() {config:?}");

    let evaluations = summarise_all(&cli.cidr_inputs());
    print_evaluations(&evaluations, config.format)?;

    let failed = evaluations.iter().filter(|e| e.result.is_err()).count();
    if failed > 0 {
        return Err(format!("{failed} of {} inputs were invalid", evaluations.len()).into());
    }
    Ok(())
}
