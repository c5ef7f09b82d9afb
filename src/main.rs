mod telemetry;

use telemetry::{get_subscriber, init_subscriber};
use workflowgo_api::Application;
use workflowgo_infra::setup_context;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("workflowgo_server".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context().await;

    let app = Application::new(context).await?;
    app.start().await
}
