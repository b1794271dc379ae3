use viator::api::serve;
use viator::engine::Engine;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let engine = Engine::new().unwrap();

    serve(engine).await;
}
