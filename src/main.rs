use booking_server::run_with_config;

#[tokio::main]
async fn main() {
    // Delegate to the server framework entry point.
    if let Err(error) = run_with_config().await {
        tracing::error!(%error, "server exited with error");
    }
}
