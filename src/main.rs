#[tokio::main]
async fn main() {
    partypass_backend::run().await;
}
