use actix_web::{web, HttpResponse};
use serde::Serialize;

#[derive(Serialize)]
struct StatusResponse {
    message: String,
    /// Reminders delivered since the server started that are still tracked
    tracked_reminders: usize,
}

async fn status(ctx: web::Data<workflowgo_infra::AppContext>) -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse {
        message: "Yo! We are up!\r\n".into(),
        tracked_reminders: ctx.notified_reminders.len(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}
