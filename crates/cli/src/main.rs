use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    orcalite_cli::run().await
}
