use contact_api_mock::{MockServer, ReplyFixture};
use std::env;
use std::fs;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let fixtures_path = env::var("FIXTURES_PATH").unwrap_or_else(|_| "./fixtures".to_string());
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8088".to_string());

    let fixture_path = format!("{}/contact-reply.yaml", fixtures_path);
    let reply = if let Ok(fixture_file) = fs::read_to_string(&fixture_path) {
        tracing::info!("Loading reply fixture from {}", fixture_path);
        ReplyFixture::from_yaml(&fixture_file)?
    } else {
        tracing::info!("No fixture file found, accepting every request with 201");
        ReplyFixture::default()
    };

    MockServer::new(reply).serve(&bind_addr).await
}
