//! Mock of the studio's contact-us endpoint
//!
//! Answers `POST /api/contact-us/` with a configurable status, body and delay, and records
//! every request it receives so tests can assert on exactly what the client sent. Runs on
//! an ephemeral local port inside tests or as a standalone binary for manual checks.

pub mod fixtures;
pub mod handlers;
pub mod server;

pub use fixtures::{ReceivedRequest, ReplyFixture};
pub use server::{MockServer, RunningServer, CONTACT_PATH};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_fixture_accepts() {
        let reply = ReplyFixture::default();
        assert_eq!(reply.status, 201);
        assert_eq!(reply.delay_ms, 0);
    }

    #[test]
    fn fixture_from_yaml() {
        let yaml = "status: 500\nbody: '{\"message\":\"Server busy\"}'\ndelay_ms: 50\n";
        let reply = ReplyFixture::from_yaml(yaml).unwrap();
        assert_eq!(reply.status, 500);
        assert_eq!(reply.delay_ms, 50);
        assert!(reply.body.contains("Server busy"));
    }

    #[tokio::test]
    async fn records_posted_json() {
        let running = MockServer::new(ReplyFixture::json(201, json!({"ok": true})))
            .spawn()
            .await
            .expect("Failed to start mock server");

        let client = reqwest::Client::new();
        let resp = client
            .post(running.contact_url())
            .json(&json!({"name": "Test", "email": "t@e.st", "phone": "1", "message": "hi"}))
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status().as_u16(), 201);
        let received = running.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].body["name"], "Test");
        assert_eq!(received[0].content_type.as_deref(), Some("application/json"));
    }

    #[tokio::test]
    async fn health_check_answers() {
        let running = MockServer::default().spawn().await.unwrap();
        let resp = reqwest::get(format!("{}/health", running.base_url())).await.unwrap();
        assert!(resp.status().is_success());
        assert!(running.received().is_empty());
    }

    #[tokio::test]
    async fn reply_can_change_between_requests() {
        let running = MockServer::default().spawn().await.unwrap();
        running.set_reply(ReplyFixture::text(503, "maintenance"));

        let client = reqwest::Client::new();
        let resp = client.post(running.contact_url()).json(&json!({})).send().await.unwrap();
        assert_eq!(resp.status().as_u16(), 503);
        assert_eq!(resp.text().await.unwrap(), "maintenance");
    }
}
