#[tokio::main]
async fn main() {
    if let Err(e) = hello_items_lib::run().await {
        eprintln!("hello-items: {:#}", e);
        std::process::exit(1);
    }
}
