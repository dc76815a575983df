#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cookbook_db::init_tracing();
    recipe_many_to_many_multiple_keys::run().await
}
