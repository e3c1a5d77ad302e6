mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use common::FixedClassifier;
use phishing_detector::api::handlers::explain_handler;
use phishing_detector::state::AppState;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/explain", get(explain_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_explain_structure() {
    let server = server(common::create_test_state(FixedClassifier(0.5), &[]));

    let response = server
        .get("/explain")
        .add_query_param("url", "http://example.com")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["url"], "http://example.com");
    assert_eq!(json["detail"], "Heuristic URL signals with color-coded severity");
    assert_eq!(json["trusted"], false);

    let rows = json["explanations"].as_array().unwrap();
    let features: Vec<&str> = rows
        .iter()
        .map(|row| row["feature"].as_str().unwrap())
        .collect();
    assert_eq!(
        features,
        [
            "url_length",
            "num_dots",
            "num_special_chars",
            "entropy",
            "is_ip_address",
            "num_subdomains",
            "suspicious_keywords",
            "suspicious_path_keywords",
            "tld",
            "is_suspicious_tld",
            "is_trusted_domain",
        ]
    );

    for row in rows {
        assert!(
            ["green", "yellow", "red"].contains(&row["color"].as_str().unwrap()),
            "{row}"
        );
    }
}

#[tokio::test]
async fn test_explain_phishy_url() {
    let server = server(common::create_test_state(FixedClassifier(0.5), &[]));

    let response = server
        .get("/explain")
        .add_query_param("url", "secure-login.account.example.tk/claim/free-gift")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let rows = json["explanations"].as_array().unwrap();
    let row = |name: &str| {
        rows.iter()
            .find(|r| r["feature"] == name)
            .cloned()
            .unwrap()
    };

    assert_eq!(row("url_length")["color"], "yellow");
    assert_eq!(
        row("suspicious_keywords")["value"],
        serde_json::json!(["login", "secure", "account"])
    );
    assert_eq!(row("suspicious_keywords")["color"], "red");
    assert_eq!(
        row("suspicious_path_keywords")["value"],
        serde_json::json!(["claim", "free", "gift"])
    );
    assert_eq!(row("tld")["value"], "tk");
    assert_eq!(row("tld")["color"], "red");
    assert_eq!(row("is_suspicious_tld")["value"], true);
    assert_eq!(row("is_trusted_domain")["color"], "red");
}

#[tokio::test]
async fn test_explain_trusted_domain() {
    let server = server(common::create_test_state(FixedClassifier(0.5), &["example.com"]));

    let response = server
        .get("/explain")
        .add_query_param("url", "https://www.example.com")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["trusted"], true);

    let last = json["explanations"].as_array().unwrap().last().cloned().unwrap();
    assert_eq!(last["feature"], "is_trusted_domain");
    assert_eq!(last["value"], true);
    assert_eq!(last["color"], "green");
}

#[tokio::test]
async fn test_explain_rejects_invalid_url() {
    let server = server(common::create_test_state(FixedClassifier(0.5), &[]));

    let response = server
        .get("/explain")
        .add_query_param("url", "not a url")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}
