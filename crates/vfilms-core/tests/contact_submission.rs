//! End-to-end contact submissions over HTTP against the mock contact endpoint

use contact_api_mock::{MockServer, ReplyFixture};
use serde_json::json;
use std::time::Duration;
use vfilms_core::{
    ContactConfig, ContactField, ContactFormSubmitter, HttpContactTransport, ManualClock,
    NotificationKind, SubmissionStatus, SubmitError, TransportError,
};

type HttpForm = ContactFormSubmitter<HttpContactTransport, ManualClock>;

fn form_for(url: String, timeout: Duration) -> HttpForm {
    let transport = HttpContactTransport::new(url, timeout).expect("client should build");
    ContactFormSubmitter::new(transport, ManualClock::new(0), 3_500)
}

fn fill<C: vfilms_core::Clock>(form: &mut ContactFormSubmitter<HttpContactTransport, C>) {
    form.edit(ContactField::Name, " Priya Sharma ");
    form.edit(ContactField::Email, "priya@example.com ");
    form.edit(ContactField::Phone, "+91 98100-00000");
    form.edit(ContactField::Message, "Wedding film enquiry\n");
}

#[tokio::test]
async fn created_response_clears_form_and_posts_trimmed_json() {
    let running = MockServer::new(ReplyFixture::json(201, json!({"id": 42})))
        .spawn()
        .await
        .unwrap();
    let mut form = form_for(running.contact_url(), Duration::from_secs(5));
    fill(&mut form);

    form.submit().await.unwrap();

    assert_eq!(form.state().status, SubmissionStatus::Succeeded);
    assert!(form.state().fields.is_empty());
    assert_eq!(form.state().last_message, "Form Submitted");
    assert_eq!(form.notification().unwrap().kind, NotificationKind::Success);

    let received = running.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(
        received[0].body,
        json!({
            "name": "Priya Sharma",
            "email": "priya@example.com",
            "phone": "919810000000",
            "message": "Wedding film enquiry"
        })
    );
}

#[tokio::test]
async fn server_message_is_surfaced_on_failure() {
    let running = MockServer::new(ReplyFixture::json(500, json!({"message": "Server busy"})))
        .spawn()
        .await
        .unwrap();
    let mut form = form_for(running.contact_url(), Duration::from_secs(5));
    fill(&mut form);

    let err = form.submit().await.unwrap_err();

    assert_eq!(
        err,
        SubmitError::Server {
            status: 500,
            message: Some("Server busy".to_string())
        }
    );
    assert_eq!(form.state().status, SubmissionStatus::Failed);
    assert!(form.state().last_message.contains("Server busy"));
    // kept exactly as typed, not trimmed
    assert_eq!(form.state().fields.name, " Priya Sharma ");
    assert_eq!(form.notification().unwrap().text, "Failed: Server busy");
}

#[tokio::test]
async fn non_json_error_body_reports_status() {
    let running = MockServer::new(ReplyFixture::text(502, "<html>bad gateway</html>"))
        .spawn()
        .await
        .unwrap();
    let mut form = form_for(running.contact_url(), Duration::from_secs(5));
    fill(&mut form);

    let _ = form.submit().await;

    assert_eq!(form.state().status, SubmissionStatus::Failed);
    assert_eq!(form.state().last_message, "Failed to send: Server returned 502");
}

#[tokio::test]
async fn invalid_form_never_reaches_the_server() {
    let running = MockServer::default().spawn().await.unwrap();
    let mut form = form_for(running.contact_url(), Duration::from_secs(5));
    fill(&mut form);
    form.edit(ContactField::Email, "not-an-email");

    let err = form.submit().await.unwrap_err();

    assert!(matches!(err, SubmitError::Invalid(_)));
    assert_eq!(form.state().status, SubmissionStatus::Invalid);
    assert!(running.received().is_empty());
}

#[tokio::test]
async fn unreachable_server_is_a_transport_failure() {
    // grab a free port, then close it again
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let mut form = form_for(
        format!("http://127.0.0.1:{}/api/contact-us/", port),
        Duration::from_secs(5),
    );
    fill(&mut form);

    let err = form.submit().await.unwrap_err();

    assert!(matches!(err, SubmitError::Transport(TransportError::Connect(_))));
    assert_eq!(form.state().status, SubmissionStatus::Failed);
    assert!(form.state().last_message.starts_with("Failed to send: could not reach server"));
    assert_eq!(form.state().fields.email, "priya@example.com ");
}

#[tokio::test]
async fn slow_server_hits_the_request_timeout() {
    let running = MockServer::new(ReplyFixture::default().delayed(2_000))
        .spawn()
        .await
        .unwrap();
    let mut form = form_for(running.contact_url(), Duration::from_millis(200));
    fill(&mut form);

    let err = form.submit().await.unwrap_err();

    assert_eq!(err, SubmitError::Transport(TransportError::Timeout(200)));
    assert_eq!(form.state().status, SubmissionStatus::Failed);
    assert_eq!(form.state().last_message, "Failed to send: request timed out after 200ms");
}

#[tokio::test]
async fn from_config_posts_to_configured_endpoint() {
    let running = MockServer::default().spawn().await.unwrap();
    let config = ContactConfig {
        endpoint: running.contact_url(),
        ..ContactConfig::default()
    };
    let mut form = ContactFormSubmitter::from_config(&config).unwrap();
    fill(&mut form);

    form.submit().await.unwrap();

    assert_eq!(form.state().status, SubmissionStatus::Succeeded);
    assert_eq!(running.received().len(), 1);
}
