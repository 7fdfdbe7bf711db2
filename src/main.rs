use dotenvy::dotenv;

use airportdex::config;
use airportdex::runtime::modes::run_server;
use airportdex::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Load env configurations
    config::init_config();
    let config = config::get_config();

    // Guard must be kept alive so buffered log lines are flushed on exit
    let _guard = init_logging(config);

    run_server().await
}
