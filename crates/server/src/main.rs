#[tokio::main]
async fn main() -> anyhow::Result<()> {
    billrag_server::start().await
}
