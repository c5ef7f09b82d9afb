mod job_schedulers;
mod reminder;
mod shared;
mod status;

use actix_web::{dev::Server, middleware, web, App, HttpServer};
use job_schedulers::{start_reminders_cleanup_job, start_send_reminders_job};
pub use reminder::{
    dispatch_interview_reminder, CleanupInterviewRemindersUseCase, SendInterviewRemindersUseCase,
    SendRemindersSummary,
};
pub use shared::usecase::{execute, UseCase};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;
use workflowgo_infra::AppContext;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    status::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: AppContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        Application::start_job_schedulers(context);

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn start_job_schedulers(context: AppContext) {
        start_send_reminders_job(context.clone());
        start_reminders_cleanup_job(context);
    }

    async fn configure_server(context: AppContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
