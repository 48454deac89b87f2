use actix_cors::Cors;
use actix_web::{App, HttpServer};
use tracing::Level;

use hotdog_classifier::config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = Config::from_env();
    tracing::info!("Server running at http://{}:{}", config.host, config.port);

    let bind_addr = (config.host.clone(), config.port);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        let config = config.clone();
        App::new()
            .wrap(cors)
            .configure(move |cfg| hotdog_classifier::configure(cfg, config))
    })
    .bind(bind_addr)?
    .run()
    .await
}
