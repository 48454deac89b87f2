pub mod classifier;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use actix_web::web;

use classifier::{ImageClassifier, RandomClassifier};
use config::Config;

/// Wires the routes and shared state onto an actix app.
pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    let classifier: Arc<dyn ImageClassifier> = Arc::new(RandomClassifier::new());
    configure_with(cfg, config, classifier);
}

/// Same as [`configure`], but with a caller-supplied classifier.
pub fn configure_with(
    cfg: &mut web::ServiceConfig,
    config: Config,
    classifier: Arc<dyn ImageClassifier>,
) {
    cfg.app_data(web::Data::new(config))
        .app_data(web::Data::new(classifier))
        .service(web::resource("/api/classify").route(web::post().to(handlers::classify)))
        .service(web::resource("/").route(web::get().to(handlers::index)));
}
