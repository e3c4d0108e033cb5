use clap::Parser;
use std::process::exit;
use vdbctl::Cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    match cli.run() {
        Ok(cmd) => println!("{}", cmd),
        Err(e) => {
            log::error!("{}", e);
            exit(1);
        }
    }
}
