mod config;
mod domain;
mod error;
mod services;

use config::ReportConfig;
use error::Result;
use services::catalog;
use services::report;
use services::trx_processor::SalesProcessor;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Starting sales report generation...");

    // A fatal error is reported but still ends the process with status 0.
    match run(&ReportConfig::new()) {
        Ok(()) => println!("Reports generated!"),
        Err(e) => eprintln!("ERROR: {}", e),
    }
}

fn run(config: &ReportConfig) -> Result<()> {
    let products = catalog::load_products(&config.products_path())?;
    let sellers = catalog::load_sellers(&config.sellers_path())?;

    let mut processor = SalesProcessor::new(products, sellers, config.clone());
    processor.process_all()?;

    report::generate_reports(config, processor.products(), processor.sellers())
}
