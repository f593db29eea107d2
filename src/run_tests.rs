//! Tests for the run module.

use std::sync::Mutex;

use http::StatusCode;
use paymongo::config::{Cli, ClientConfig};
use paymongo::http::{HttpError, HttpRequest, HttpResponse};
use paymongo::time::FixedClock;
use paymongo::webhook::compute_signature;

use super::*;

/// Mock transport that replays canned responses and records request URLs.
#[derive(Debug)]
struct MockClient {
    responses: Mutex<Vec<HttpResponse>>,
    urls: Mutex<Vec<String>>,
}

impl MockClient {
    fn responding(status: StatusCode, body: &str) -> Self {
        Self {
            responses: Mutex::new(vec![HttpResponse::new(status, body.as_bytes().to_vec())]),
            urls: Mutex::new(Vec::new()),
        }
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.urls.lock().unwrap().push(req.url.to_string());
        self.responses.lock().unwrap().pop().ok_or(HttpError::Timeout)
    }
}

fn client(transport: MockClient) -> ApiClient<MockClient> {
    ApiClient::with_transport(ClientConfig::new("sk_test_run").unwrap(), transport)
}

fn config(args: &[&str]) -> ValidatedConfig {
    let mut full_args = vec!["paymongo"];
    full_args.extend(args);
    ValidatedConfig::from_raw(&Cli::parse_from_iter(full_args), None).unwrap()
}

mod get_command {
    use super::*;

    #[tokio::test]
    async fn retrieve_prints_resource() {
        let transport = MockClient::responding(
            StatusCode::OK,
            r#"{"data":{"id":"pay_1","attributes":{"amount":10000}}}"#,
        );
        let api = client(transport);

        let output = get(&api, "payments", Some("pay_1"), &[]).await.unwrap();
        let document: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(document, json!({"id": "pay_1", "attributes": {"amount": 10000}}));
        assert_eq!(
            api.transport().urls.lock().unwrap()[0],
            "https://api.paymongo.com/v1/payments/pay_1"
        );
    }

    #[tokio::test]
    async fn list_passes_query_and_prints_page() {
        let transport = MockClient::responding(
            StatusCode::OK,
            r#"{"has_more":1,"data":[{"id":"link_1","attributes":{}}]}"#,
        );
        let api = client(transport);

        let output = get(&api, "links", None, &["limit=1".to_string()])
            .await
            .unwrap();
        let document: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(document["has_more"], json!(true));
        assert_eq!(document["data"][0]["id"], "link_1");
        assert_eq!(
            api.transport().urls.lock().unwrap()[0],
            "https://api.paymongo.com/v1/links?limit=1"
        );
    }

    #[tokio::test]
    async fn malformed_query_is_rejected_before_sending() {
        let api = client(MockClient::responding(StatusCode::OK, "{}"));

        let error = get(&api, "links", None, &["limit".to_string()])
            .await
            .unwrap_err();

        assert!(matches!(error, RunError::InvalidQuery(ref q) if q == "limit"));
        assert!(api.transport().urls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_service_is_api_error() {
        let api = client(MockClient::responding(StatusCode::OK, "{}"));

        let error = get(&api, "wallets", Some("w_1"), &[]).await.unwrap_err();

        assert!(
            matches!(error, RunError::Api(ref e) if e.kind() == ErrorKind::UnknownService)
        );
        assert!(!error.is_verification_failure());
    }

    #[tokio::test]
    async fn listing_unlistable_service_fails() {
        let api = client(MockClient::responding(StatusCode::OK, "{}"));

        let error = get(&api, "customers", None, &[]).await.unwrap_err();

        assert!(
            matches!(error, RunError::Api(ref e) if e.kind() == ErrorKind::UnsupportedOperation)
        );
    }

    #[tokio::test]
    async fn api_failure_is_propagated() {
        let api = client(MockClient::responding(
            StatusCode::NOT_FOUND,
            r#"{"errors":[{"code":"resource_not_found","detail":"No such payment."}]}"#,
        ));

        let error = get(&api, "payments", Some("pay_x"), &[]).await.unwrap_err();

        assert!(
            matches!(error, RunError::Api(ref e) if e.kind() == ErrorKind::ResourceNotFound)
        );
        assert!(error.to_string().ends_with("No such payment."));
    }
}

mod verify_command {
    use super::*;
    use std::io::Write;

    const SECRET: &str = "whsk_run";
    const NOW: i64 = 1_700_000_000;
    const PAYLOAD: &str =
        r#"{"data":{"id":"evt_9","attributes":{"type":"payment.failed","data":{"id":"pay_9"}}}}"#;

    fn payload_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn verifier() -> WebhookVerifier<FixedClock> {
        WebhookVerifier::new(300).with_clock(FixedClock::at(NOW.unsigned_abs()))
    }

    fn header(timestamp: i64) -> String {
        let signature = compute_signature(SECRET, timestamp, PAYLOAD).unwrap();
        format!("t={timestamp},test={signature},live=")
    }

    #[test]
    fn valid_delivery_prints_event() {
        let file = payload_file(PAYLOAD);

        let output = verify(&verifier(), file.path(), &header(NOW), SECRET).unwrap();
        let document: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(document["id"], "evt_9");
        assert_eq!(document["type"], "payment.failed");
        assert_eq!(document["resource"]["id"], "pay_9");
    }

    #[test]
    fn stale_delivery_is_verification_failure() {
        let file = payload_file(PAYLOAD);

        let error = verify(&verifier(), file.path(), &header(NOW - 1000), SECRET).unwrap_err();

        assert!(error.is_verification_failure());
        assert!(error.to_string().contains("timestamp exceeds tolerance"));
    }

    #[test]
    fn trailing_newline_changes_signature() {
        let file = payload_file(&format!("{PAYLOAD}\n"));

        let error = verify(&verifier(), file.path(), &header(NOW), SECRET).unwrap_err();

        assert!(error.is_verification_failure());
    }

    #[test]
    fn missing_payload_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let error = verify(&verifier(), &path, &header(NOW), SECRET).unwrap_err();

        assert!(matches!(error, RunError::ReadPayload { .. }));
        assert!(!error.is_verification_failure());
    }
}

mod execute_command {
    use super::*;

    #[tokio::test]
    async fn init_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("paymongo.toml");
        let command = Command::Init {
            output: output.clone(),
        };

        let printed = execute(command, &config(&["init"])).await.unwrap();

        assert!(std::fs::read_to_string(&output).unwrap().contains("[api]"));
        let document: Value = serde_json::from_str(&printed).unwrap();
        assert_eq!(document["written"], output.display().to_string());
    }

    #[tokio::test]
    async fn init_into_missing_directory_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let command = Command::Init {
            output: dir.path().join("absent/paymongo.toml"),
        };

        let error = execute(command, &config(&["init"])).await.unwrap_err();

        assert!(matches!(error, RunError::Config(ConfigError::FileWrite { .. })));
    }

    #[tokio::test]
    async fn get_without_api_key_is_config_error() {
        let cli = Cli::parse_from_iter(["paymongo", "get", "payments", "pay_1"]);
        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        let error = execute(cli.command, &config).await.unwrap_err();

        assert!(matches!(error, RunError::Config(ConfigError::MissingRequired { .. })));
    }

    #[tokio::test]
    async fn verify_without_secret_is_config_error() {
        let cli = Cli::parse_from_iter([
            "paymongo",
            "verify",
            "--payload",
            "body.json",
            "--signature",
            "t=1,test=a",
        ]);
        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        let error = execute(cli.command, &config).await.unwrap_err();

        assert!(matches!(error, RunError::Config(ConfigError::MissingRequired { .. })));
    }
}

mod run_error {
    use super::*;

    #[test]
    fn invalid_query_displays_argument() {
        let error = RunError::InvalidQuery("limit".to_string());

        assert_eq!(
            error.to_string(),
            "Invalid query parameter 'limit': expected 'key=value'"
        );
    }

    #[test]
    fn config_error_is_transparent() {
        let error = RunError::from(ConfigError::missing("api_key", "Use --api-key"));

        assert_eq!(
            error.to_string(),
            "Missing required field: api_key. Use --api-key"
        );
    }
}
