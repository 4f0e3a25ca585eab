use actix_web::http::header;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{App, HttpServer};
use coursehub::db::init_db;
use env_logger::Env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_lib_mods();
    coursehub::app_config::init();
    init_db(std::env::var("DATABASE_URL").expect("DATABASE_URL must be set.")).await;

    let site = coursehub::app_config::site();
    let server = coursehub::app_config::server();
    log::info!(
        "{} serving {} on {}:{}",
        site.name,
        site.base_url,
        server.bind,
        server.port
    );

    HttpServer::new(move || {
        // Middleware runs in REVERSE registration order.
        App::new()
            // Security headers - applied to all responses
            .wrap(
                DefaultHeaders::new()
                    .add((header::X_FRAME_OPTIONS, "DENY"))
                    .add((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
                    .add(("Referrer-Policy", "strict-origin-when-cross-origin")),
            )
            .wrap(Logger::new("%a %{User-Agent}i"))
            .configure(coursehub::web::configure)
    })
    .bind((server.bind.as_str(), server.port))?
    .run()
    .await
}

/// Initialize third party crates we rely on but don't have control over.
fn init_lib_mods() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
