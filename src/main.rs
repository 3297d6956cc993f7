use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;

use solvex::config::AppConfig;
use solvex::routes::{configure, json_config, AppState};

// ---------- Server bootstrap ----------
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();

    // Keep the guard alive for the lifetime of the server so events get flushed.
    let _sentry = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let state = web::Data::new(AppState::from_config(&config));
    let json_limit = config.json_limit;

    log::info!(
        "Starting server on http://127.0.0.1:{} with {}",
        config.port,
        state.solver.name(),
    );
    HttpServer::new(move || {
        App::new()
            .wrap(sentry_actix::Sentry::new())
            .wrap(Logger::default())
            .app_data(state.clone())
            .app_data(json_config(json_limit))
            .configure(configure)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
