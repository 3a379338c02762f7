use crate::configuration::Settings;
use crate::dispatcher::MailDispatcher;
use crate::domain::MailRoute;
use crate::email_client::EmailClient;
use crate::handler::ContactHandler;
use crate::response::ResponseBuilder;
use crate::routes::{self, MaxBodyBytes};
use actix_web::{dev::Server, http::Method, web, App, HttpServer};
use anyhow::{anyhow, Context};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Everything the handler needs is checked here, once: a bad address or origin stops the
    /// process before it accepts a single request.
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let handler = build_contact_handler(&configuration)?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener =
            TcpListener::bind(&address).with_context(|| format!("Failed to bind {address}"))?;
        // Retrieve the port assigned to us by the OS
        let port = listener.local_addr()?.port();
        let server = run(
            listener,
            handler,
            MaxBodyBytes(configuration.application.max_body_bytes),
        )?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// A more expressive name that makes it clear that this function only returns when the
    /// application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn build_contact_handler(
    configuration: &Settings,
) -> Result<ContactHandler<EmailClient>, anyhow::Error> {
    let email_settings = &configuration.email_client;
    let route = MailRoute {
        sender: email_settings
            .sender()
            .map_err(|e| anyhow!(e))
            .context("Invalid sender email address")?,
        recipient: email_settings
            .recipient()
            .map_err(|e| anyhow!(e))
            .context("Invalid recipient email address")?,
    };
    let allowed_origin = configuration
        .contact
        .allowed_origin()
        .map_err(|e| anyhow!(e))
        .context("Invalid allowed origin")?;

    let email_client = EmailClient::new(
        email_settings.base_url.clone(),
        email_settings.authorization_token.clone(),
        email_settings.timeout(),
    )
    .context("Unable to build email client")?;

    Ok(ContactHandler::new(
        MailDispatcher::new(email_client, route),
        ResponseBuilder::new(allowed_origin),
    ))
}

pub fn run(
    listener: TcpListener,
    handler: ContactHandler<EmailClient>,
    max_body_bytes: MaxBodyBytes,
) -> Result<Server, std::io::Error> {
    // Shared read-only across workers
    let handler = web::Data::new(handler);
    let max_body_bytes = web::Data::new(max_body_bytes);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(routes::health_check))
            .service(
                web::resource("/contact")
                    .route(web::post().to(routes::submit_contact_form))
                    .route(web::method(Method::OPTIONS).to(routes::contact_preflight)),
            )
            .app_data(handler.clone())
            .app_data(max_body_bytes.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
