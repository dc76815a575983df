#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cookbook_db::init_tracing();
    recipe_one_to_one::run().await
}
