use std::net::TcpListener;
use std::sync::Arc;

use axum::{
    routing::{get, IntoMakeService},
    Extension, Router,
};
use hyper::{http::Request, server::conn::AddrIncoming, Body};
use tera::Tera;
use tower_http::trace::TraceLayer;
use tower_request_id::RequestIdLayer;

use crate::configuration::Settings;
use crate::routes::home;
use crate::telemetry::request_id;
use crate::utils::handler_404;

pub fn build(configuration: Settings) -> axum::Server<AddrIncoming, IntoMakeService<Router>> {
    let address = format!(
        "{}:{}",
        configuration.application.host,
        configuration.application.port
    );
    let listener = TcpListener::bind(address)
        .expect("Failed to bind a port");

    run(listener, configuration.application.site_title)
}

/// Title handed to every view context.
#[derive(Clone)]
pub struct SiteTitle(pub String);

pub fn run(
    listener: TcpListener,
    site_title: String,
) -> axum::Server<AddrIncoming, IntoMakeService<Router>> {
    let templates = Tera::new("templates/**/*")
        .expect("Failed to compile the view templates");
    let templates = Arc::new(templates);

    let router = Router::new()
        .route("/", get(home))
        .fallback(handler_404)
        .layer(TraceLayer::new_for_http()
            .make_span_with(|request: &Request<Body>| {
                request_id(request)
            })
        )
        .layer(RequestIdLayer)
        .layer(Extension(Arc::clone(&templates)))
        .layer(Extension(SiteTitle(site_title)));

    axum::Server::from_tcp(listener)
        .expect("Failed to bind a port.")
        .serve(router.into_make_service())
}
