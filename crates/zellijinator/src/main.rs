//! Zellijinator CLI - declarative Zellij sessions
//!
//! Binary name: `zellijinator`

use std::process;

mod cli;
mod commands;

use cli::handlers::{format_error, run_cli};

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        #[allow(clippy::print_stderr)]
        {
            eprintln!("Error: {}", format_error(&err));
        }

        let code = err
            .downcast_ref::<zellijinator_core::Error>()
            .map_or(1, zellijinator_core::Error::exit_code);

        #[allow(clippy::exit)]
        process::exit(code);
    }
}
