//! Main runner binary for the Mediboard dashboard service.
//!
//! Boots the REST API with its default environment-driven configuration.
//! Equivalent to running the `api-rest` binary directly; this is the
//! workspace's default entry point.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    api_rest::run().await
}
