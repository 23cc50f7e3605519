#[tokio::main]
async fn main() {
    acuity::run().await;
}
