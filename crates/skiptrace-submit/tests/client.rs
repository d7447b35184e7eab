use std::cell::RefCell;
use std::fs;

use skiptrace_submit::{
    ActorClient, ActorConfig, CredentialProvider, HttpReply, HttpTransport, RunInput, SecretsFile,
    SubmitError, Transport,
};

/// Records requests and answers with a canned reply.
struct StubTransport {
    reply: HttpReply,
    requests: RefCell<Vec<(String, String)>>,
}

impl StubTransport {
    fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: HttpReply {
                status,
                body: body.to_string(),
            },
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for &StubTransport {
    fn post_json(&self, url: &str, body: &str) -> skiptrace_submit::Result<HttpReply> {
        self.requests
            .borrow_mut()
            .push((url.to_string(), body.to_string()));
        Ok(self.reply.clone())
    }
}

struct Unreachable;

impl Transport for Unreachable {
    fn post_json(&self, _url: &str, _body: &str) -> skiptrace_submit::Result<HttpReply> {
        Err(SubmitError::Network("connection refused".to_string()))
    }
}

fn addresses() -> RunInput {
    RunInput::new(vec!["123 Main St; Springfield, IL 62704".to_string()])
}

fn credentials() -> ActorConfig {
    ActorConfig::new("t0k", "me~skiptrace").with_api_base("https://actors.test")
}

#[test]
fn created_reply_reports_status_url() {
    let stub = StubTransport::replying(201, r#"{"data":{"statusUrl":"https://x/status"}}"#);
    let client = ActorClient::new(&stub);

    let started = client.start_run(&credentials(), &addresses()).expect("run");
    assert_eq!(started.status_url, "https://x/status");
    assert_eq!(started.run_id, None);
    assert_eq!(started.submitted, 1);

    let requests = stub.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].0,
        "https://actors.test/v2/acts/me~skiptrace/runs?token=t0k"
    );
    let body: serde_json::Value = serde_json::from_str(&requests[0].1).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "street_citystatezip": ["123 Main St; Springfield, IL 62704"],
            "max_results": 1
        })
    );
}

#[test]
fn other_status_is_rejection_with_body() {
    let stub = StubTransport::replying(400, "invalid input: street_citystatezip");
    let err = ActorClient::new(&stub)
        .start_run(&credentials(), &addresses())
        .unwrap_err();

    match &err {
        SubmitError::Rejected { status, body } => {
            assert_eq!(*status, 400);
            assert_eq!(body, "invalid input: street_citystatezip");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("invalid input: street_citystatezip"));
}

#[test]
fn success_status_other_than_created_is_rejected() {
    let stub = StubTransport::replying(200, r#"{"data":{"statusUrl":"https://x/status"}}"#);
    let err = ActorClient::new(&stub)
        .start_run(&credentials(), &addresses())
        .unwrap_err();
    assert!(matches!(err, SubmitError::Rejected { status: 200, .. }));
}

#[test]
fn created_without_status_url_is_invalid() {
    let stub = StubTransport::replying(201, r#"{"data":{"id":"run1"}}"#);
    let err = ActorClient::new(&stub)
        .start_run(&credentials(), &addresses())
        .unwrap_err();
    assert!(matches!(err, SubmitError::InvalidResponse(_)));

    let stub = StubTransport::replying(201, "not json");
    let err = ActorClient::new(&stub)
        .start_run(&credentials(), &addresses())
        .unwrap_err();
    assert!(matches!(err, SubmitError::InvalidResponse(_)));
}

#[test]
fn max_results_is_forwarded() {
    let stub = StubTransport::replying(201, r#"{"data":{"id":"r","statusUrl":"https://x/s"}}"#);
    let started = ActorClient::new(&stub)
        .start_run(&credentials(), &addresses().with_max_results(3))
        .expect("run");
    assert_eq!(started.run_id.as_deref(), Some("r"));

    let body: serde_json::Value = serde_json::from_str(&stub.requests.borrow()[0].1).unwrap();
    assert_eq!(body["max_results"], 3);
}

#[test]
fn empty_batch_is_not_sent() {
    let stub = StubTransport::replying(201, "{}");
    let err = ActorClient::new(&stub)
        .start_run(&credentials(), &RunInput::new(Vec::new()))
        .unwrap_err();
    assert!(matches!(err, SubmitError::EmptyBatch));
    assert!(stub.requests.borrow().is_empty());
}

#[test]
fn network_failure_propagates() {
    let err = ActorClient::new(Unreachable)
        .start_run(&credentials(), &addresses())
        .unwrap_err();
    assert!(matches!(err, SubmitError::Network(_)));
}

#[test]
fn connection_error_does_not_expose_token() {
    let config = ActorConfig::new("SUPERSECRET", "me~a").with_api_base("http://127.0.0.1:1");
    let client = ActorClient::new(HttpTransport::new().expect("http client"));

    let err = client.start_run(&config, &addresses()).unwrap_err();
    assert!(matches!(err, SubmitError::Network(_)));
    assert!(!err.to_string().contains("SUPERSECRET"));
    assert!(!format!("{err:?}").contains("SUPERSECRET"));
}

#[test]
fn credentials_come_from_secrets_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("secrets.toml");
    fs::write(
        &path,
        "[apify]\ntoken = \"file-token\"\nactor_id = \"me~file\"\napi_base = \"https://actors.test\"\n",
    )
    .expect("write secrets");

    let secrets = SecretsFile::new(&path);
    assert_eq!(secrets.credentials().unwrap().actor_id, "me~file");

    let stub = StubTransport::replying(201, r#"{"data":{"statusUrl":"https://x/status"}}"#);
    ActorClient::new(&stub)
        .start_run(&secrets, &addresses())
        .expect("run");
    assert_eq!(
        stub.requests.borrow()[0].0,
        "https://actors.test/v2/acts/me~file/runs?token=file-token"
    );
}

#[test]
fn missing_secrets_file_is_reported_before_sending() {
    let dir = tempfile::tempdir().expect("temp dir");
    let secrets = SecretsFile::new(dir.path().join("absent.toml"));
    let stub = StubTransport::replying(201, "{}");
    let err = ActorClient::new(&stub)
        .start_run(&secrets, &addresses())
        .unwrap_err();
    assert!(matches!(err, SubmitError::SecretsRead { .. }));
    assert!(stub.requests.borrow().is_empty());
}
