mod completion;
mod config;
mod constants;
mod print_help;
mod utils;

use crate::config::Config;
use crate::print_help::print_help;
use crate::utils::{build_client, collect_args, is_help_request, parse_query, process_command};
use std::{
    env,
    error::Error,
    io::{self, Write},
    process,
};

async fn run(query: &str) -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    let client = build_client(&config)?;

    let mut out = io::stdout();
    process_command(&client, &config, query, &mut out, &mut io::stderr()).await?;
    out.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let args = match collect_args(env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    if is_help_request(&args) {
        print_help();
        return;
    }
    let query = match parse_query(&args) {
        Ok(query) => query,
        Err(e) => {
            eprintln!("{}", e);
            print_help();
            process::exit(1);
        }
    };

    if let Err(e) = run(&query).await {
        eprintln!("{}", e);
        process::exit(1);
    }
}
