use clap::Parser;
use faculty_roster::utils::logger;
use faculty_roster::{CliConfig, Faculty, RosterReport};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting faculty-roster demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let faculty = Faculty::sample().with_delay(Duration::from_millis(config.delay_ms));
    let report = RosterReport::new(faculty);

    for line in report.run().await? {
        println!("{}", line);
    }
    report.finish();

    tracing::info!("Done");
    Ok(())
}
