use super::{user_destination, IReminderChannel};
use crate::WebhookSettings;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use workflowgo_domain::{ClientMessage, ID};

pub const WEBHOOK_KEY_HEADER: &str = "workflowgo-webhook-key";

const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts every message to the configured webhook, which is responsible for
/// forwarding it to the connected clients of the user
pub struct WebhookReminderChannel {
    client: Client,
    settings: WebhookSettings,
}

impl WebhookReminderChannel {
    pub fn new(settings: WebhookSettings) -> anyhow::Result<Self> {
        Self::with_timeout(settings, WEBHOOK_TIMEOUT)
    }

    /// A webhook that does not answer within `timeout` counts as a failed delivery
    pub fn with_timeout(settings: WebhookSettings, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, settings })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WebhookBody<'a> {
    user_id: &'a ID,
    destination: String,
    message: &'a ClientMessage,
}

#[async_trait::async_trait]
impl IReminderChannel for WebhookReminderChannel {
    async fn deliver(&self, user_id: &ID, message: &ClientMessage) -> anyhow::Result<()> {
        let body = WebhookBody {
            user_id,
            destination: user_destination(user_id),
            message,
        };
        self.client
            .post(&self.settings.url)
            .header(WEBHOOK_KEY_HEADER, &self.settings.key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
    use serde_json::Value;
    use std::net::TcpListener;
    use std::sync::{Arc, Mutex};
    use workflowgo_domain::{Interview, InterviewReminderPayload, Notification};

    #[derive(Clone, Default)]
    struct Received(Arc<Mutex<Vec<(Option<String>, Value)>>>);

    async fn accept(
        req: HttpRequest,
        body: web::Json<Value>,
        received: web::Data<Received>,
    ) -> HttpResponse {
        let key = req
            .headers()
            .get(WEBHOOK_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        received.0.lock().unwrap().push((key, body.into_inner()));
        HttpResponse::Ok().finish()
    }

    async fn fail() -> HttpResponse {
        HttpResponse::InternalServerError().finish()
    }

    async fn hang() -> HttpResponse {
        actix_web::rt::time::sleep(Duration::from_secs(5)).await;
        HttpResponse::Ok().finish()
    }

    // Launch a webhook receiver on a random port as a background task
    fn spawn_receiver(received: Received) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(received.clone()))
                .route("/accept", web::post().to(accept))
                .route("/fail", web::post().to(fail))
                .route("/hang", web::post().to(hang))
        })
        .listen(listener)
        .unwrap()
        .workers(1)
        .run();
        actix_web::rt::spawn(server);

        format!("http://127.0.0.1:{}", port)
    }

    fn settings(address: &str, path: &str) -> WebhookSettings {
        WebhookSettings {
            url: format!("{}{}", address, path),
            key: "secret-key".into(),
        }
    }

    fn message(user_id: &ID) -> ClientMessage {
        let interview = Interview::new(user_id.clone(), "Acme", "Engineer", "2024-03-05", "15:00");
        let notification = Notification::interview_reminder(user_id.clone(), &interview.summary(), 0);
        ClientMessage::InterviewReminder(InterviewReminderPayload::new(
            interview.summary(),
            "30 minutes",
            notification,
        ))
    }

    #[actix_web::test]
    async fn it_posts_reminder_to_webhook() {
        let received = Received::default();
        let address = spawn_receiver(received.clone());
        let channel = WebhookReminderChannel::new(settings(&address, "/accept")).unwrap();
        let user_id = ID::new();

        channel
            .deliver(&user_id, &message(&user_id))
            .await
            .expect("To deliver reminder");

        let received = received.0.lock().unwrap().clone();
        assert_eq!(received.len(), 1);
        let (key, body) = &received[0];
        assert_eq!(key.as_deref(), Some("secret-key"));
        assert_eq!(body["userId"], user_id.as_string());
        assert_eq!(body["destination"], format!("/queue/user.{}", user_id));
        assert_eq!(body["message"]["type"], "INTERVIEW_REMINDER");
        assert_eq!(body["message"]["data"]["reminderLabel"], "30 minutes");
        assert_eq!(body["message"]["data"]["title"], "Interview Reminder: Acme");
    }

    #[actix_web::test]
    async fn it_fails_on_error_status() {
        let received = Received::default();
        let address = spawn_receiver(received.clone());
        let channel = WebhookReminderChannel::new(settings(&address, "/fail")).unwrap();
        let user_id = ID::new();

        assert!(channel.deliver(&user_id, &message(&user_id)).await.is_err());
        assert!(received.0.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn it_fails_when_webhook_does_not_answer_in_time() {
        let address = spawn_receiver(Received::default());
        let channel =
            WebhookReminderChannel::with_timeout(settings(&address, "/hang"), Duration::from_millis(200))
                .unwrap();
        let user_id = ID::new();

        assert!(channel.deliver(&user_id, &message(&user_id)).await.is_err());
    }
}
