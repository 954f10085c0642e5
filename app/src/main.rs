#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bridgefee_lib::run().await
}
