//! enturno main entrypoint.

use enturno::run;
use enturno::ui::messages;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        messages::error(&e);
        std::process::exit(1);
    }
}
