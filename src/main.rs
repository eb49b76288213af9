use clap::Parser;
use dotenvy::dotenv;

use f2h_storefront::cli::{Cli, run};
use f2h_storefront::config::StorefrontConfig;

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let cli = Cli::parse();

    let mut config = StorefrontConfig::from_env();
    if let Some(path) = cli.storage {
        config.storage_path = path;
    }

    match run(cli.cmd, &config) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
