use lambda_runtime::{run, service_fn};
use tracing::info;

use hello_lambda::config::LogConfig;
use hello_lambda::function_handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    let config = LogConfig::from_env();

    // CloudWatch timestamps each line already
    tracing_subscriber::fmt()
        .with_ansi(false)
        .without_time()
        .with_max_level(config.level)
        .init();

    info!("Hello Lambda function initialized");

    run(service_fn(function_handler)).await
}
