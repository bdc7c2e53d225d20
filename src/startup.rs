use crate::configuration::Settings;
use crate::lookup::{MockPlantingLookup, PlantingLookup, TokioDelay};
use crate::routes::{fetch_planting_info, health_check, render_index, submit_planting_form};
use actix_web::dev::Server;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer, web};
use std::net::TcpListener;
use std::sync::Arc;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let lookup: Arc<dyn PlantingLookup> = Arc::new(MockPlantingLookup::new(
            Arc::new(TokioDelay),
            configuration.lookup.simulated_latency(),
        ));

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, lookup).await?;

        tracing::info!(port, "Planting guide listening");

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

async fn run(
    listener: TcpListener,
    lookup: Arc<dyn PlantingLookup>,
) -> Result<Server, anyhow::Error> {
    let lookup: Data<dyn PlantingLookup> = Data::from(lookup);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .route("/", web::get().to(render_index))
            .route("/", web::post().to(submit_planting_form))
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/api").route("/planting-info", web::post().to(fetch_planting_info)),
            )
            .app_data(lookup.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
