#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mandarin_flashcards::run().await
}
