use std::{
    io::{self, Write},
    process::ExitCode,
};

use calc::{
    config::Config,
    logging,
    server::{App, ServerError},
};

async fn run() -> Result<(), ServerError> {
    let config = Config::from_env()?;
    logging::init(&config.log_filter);
    tracing::info!(
        config = %serde_json::to_string(&config).unwrap_or_default(),
        "starting calc-server"
    );

    let mut app = App::new(config);
    app.on_shutdown("stdout", || io::stdout().flush().map_err(Into::into));
    app.run().await
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "calc-server failed");
            eprintln!("calc-server: {}", err);
            ExitCode::FAILURE
        }
    }
}
