//! HTTP surface for the pilgrimage planner.
//!
//! Routes are registered through [`configure`] so tests and the `pilgrim`
//! binary build identical applications. Planner calls run on actix's
//! blocking pool because store backends perform synchronous I/O.
#![forbid(unsafe_code)]

use std::{io, net::ToSocketAddrs};

use actix_web::{App, HttpServer, middleware::Logger, web};

mod error;
mod routes;
mod state;

pub use error::{ApiError, Operation};
pub use routes::configure;
pub use state::{AppState, SharedPlanner};

/// Bind `addr` and serve requests until the server is stopped.
///
/// # Errors
///
/// Returns the I/O error raised when the address cannot be bound or the
/// server fails while running.
pub async fn serve<A: ToSocketAddrs>(addr: A, state: AppState) -> io::Result<()> {
    let data = web::Data::new(state);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(data.clone())
            .configure(configure)
    })
    .bind(addr)?;
    for bound in server.addrs() {
        log::info!("listening on http://{bound}");
    }
    server.run().await
}
