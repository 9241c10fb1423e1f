//! native-notify CLI entry point

use std::process::ExitCode;

use clap::Parser;

use native_notify::cli::{run, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    run(cli).await
}
