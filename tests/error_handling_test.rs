//! Failures leave the service only as problem responses

use serde_json::json;
use stackprobe::detection::{AnalyzeRequest, CooldownLimiter};
use stackprobe::remote::TransportError;
use stackprobe::{DetectionService, MockTransport, ProbeConfig};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

const TREE: &str = "https://api.github.com/repos/acme/widgets/git/trees/HEAD?recursive=1";
const URL: &str = "https://github.com/acme/widgets";

fn service(transport: &Arc<MockTransport>) -> DetectionService {
    let config = ProbeConfig {
        request_timeout_secs: 5,
        sample_cap: 100,
        cooldown_secs: 0,
        user_agent: "stackprobe-tests".to_string(),
        log_level: "info".to_string(),
        log_json: false,
        credentials: HashMap::new(),
    };
    DetectionService::with_transport(transport.clone(), &config)
}

#[tokio::test]
async fn test_invalid_url_is_validation_problem() {
    let transport = Arc::new(MockTransport::new());
    let problem = service(&transport)
        .handle("caller", AnalyzeRequest::new("https://example.com/a/b"))
        .await
        .unwrap_err();

    assert_eq!(problem.status, 400);
    assert_eq!(problem.problem_type, "validation-error");
    assert!(problem.detail.contains("GitLab"));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_missing_url_is_validation_problem() {
    let transport = Arc::new(MockTransport::new());
    let problem = service(&transport)
        .handle("caller", AnalyzeRequest::default())
        .await
        .unwrap_err();
    assert_eq!(problem.status, 400);
}

#[tokio::test]
async fn test_unauthorized_keeps_status_and_names_credential() {
    let transport = Arc::new(MockTransport::new());
    transport.add_status(TREE, 401);

    let problem = service(&transport)
        .handle("caller", AnalyzeRequest::new(URL))
        .await
        .unwrap_err();

    assert_eq!(problem.status, 401);
    assert_eq!(problem.problem_type, "authentication-required");
    assert!(problem.detail.contains("GITHUB_TOKEN"));
}

#[tokio::test]
async fn test_not_found_goes_through_generic_path() {
    let transport = Arc::new(MockTransport::new());
    let problem = service(&transport)
        .handle("caller", AnalyzeRequest::new(URL))
        .await
        .unwrap_err();

    assert_eq!(problem.status, 500);
    assert_eq!(problem.problem_type, "repository-not-found");
    assert!(problem.detail.contains("private"));
}

#[tokio::test]
async fn test_unexpected_shape_is_upstream_problem() {
    let transport = Arc::new(MockTransport::new());
    transport.add_json(TREE, &json!({"message": "weird"}));

    let problem = service(&transport)
        .handle("caller", AnalyzeRequest::new(URL))
        .await
        .unwrap_err();
    assert_eq!(problem.status, 500);
    assert_eq!(problem.problem_type, "upstream-error");
}

#[tokio::test]
async fn test_timeout_is_upstream_problem() {
    let transport = Arc::new(MockTransport::new());
    transport.add_error(TREE, TransportError::Timeout { seconds: 5 });

    let problem = service(&transport)
        .handle("caller", AnalyzeRequest::new(URL))
        .await
        .unwrap_err();
    assert_eq!(problem.problem_type, "upstream-error");
    assert!(problem.detail.contains("timed out"));
}

#[tokio::test]
async fn test_html_sign_in_page_is_auth_problem() {
    let transport = Arc::new(MockTransport::new());
    transport.add_response(TREE, 200, "text/html; charset=utf-8", "<html>Sign in</html>");

    let problem = service(&transport)
        .handle("caller", AnalyzeRequest::new(URL))
        .await
        .unwrap_err();
    assert_eq!(problem.problem_type, "authentication-required");
}

#[tokio::test]
async fn test_cooldown_rejects_repeat_caller() {
    let transport = Arc::new(MockTransport::new());
    transport.add_json(TREE, &json!({"tree": [], "truncated": false}));
    let service = service(&transport).with_limiter(CooldownLimiter::new(Duration::from_secs(30)));

    service.handle("alice", AnalyzeRequest::new(URL)).await.unwrap();
    let problem = service
        .handle("alice", AnalyzeRequest::new(URL))
        .await
        .unwrap_err();

    assert_eq!(problem.status, 429);
    assert_eq!(problem.problem_type, "rate-limited");
    assert_eq!(transport.requests().len(), 3);
}

#[tokio::test]
async fn test_problem_json_shape() {
    let transport = Arc::new(MockTransport::new());
    transport.add_status(TREE, 502);

    let problem = service(&transport)
        .handle("caller", AnalyzeRequest::new(URL))
        .await
        .unwrap_err();
    let value = serde_json::to_value(&problem).unwrap();

    assert_eq!(value["type"], "upstream-error");
    assert_eq!(value["title"], "Platform error");
    assert_eq!(value["status"], 500);
    assert_eq!(value["detail"], "GitHub error: 502");
}
