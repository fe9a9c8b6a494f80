//! Standalone REST API server binary.
//!
//! Runs the REST API server on its own; the workspace's main
//! `mediboard-run` binary does the same and exists as the conventional
//! entry point.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    api_rest::run().await
}
