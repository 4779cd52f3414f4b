//! HTTP surface.
//!
//! [`routes`] builds the router for any [`PolicyRepository`];
//! [`run`] binds it to the PostgreSQL client owned by the caller.
pub mod handlers;

use crate::config::Config;
use crate::*;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::middleware::NormalizePath;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;

/// Register every endpoint against repository `R`, which must be
/// provided to the app as `web::Data<R>`.
#[rustfmt::skip]
pub fn routes<R: PolicyRepository + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/",            web::get().to(handlers::hello))
       .route("/policy",      web::get().to(handlers::list::<R>))
       .route("/policy",      web::post().to(handlers::create::<R>))
       .route("/policy/{id}", web::get().to(handlers::fetch::<R>))
       .route("/policy/{id}", web::put().to(handlers::update::<R>))
       .route("/policy/{id}", web::delete().to(handlers::delete::<R>));
}

pub async fn run(config: &Config, client: Arc<Client>) -> Result<(), std::io::Error> {
    let repo = web::Data::new(client);
    log::info!("starting server on {}:{}", config.host, config.port);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(repo.clone())
            .configure(routes::<Arc<Client>>)
    });
    let server = match config.workers {
        Some(n) => server.workers(n),
        None => server,
    };
    server.bind(config.bind())?.run().await
}
