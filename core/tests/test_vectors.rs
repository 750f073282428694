//! Verify request building and response inspection against the JSON test
//! vectors stored in `test-vectors/`.
//!
//! Request bodies are compared as parsed JSON, not raw strings, so the
//! vectors stay readable.

use restful_core::{ApiError, ClientConfig, HttpMethod, HttpResponse, Request, RestClient};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> RestClient {
    RestClient::new(ClientConfig::new(BASE_URL))
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        other => panic!("unknown method: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: Request = serde_json::from_value(case["input"].clone()).unwrap();
        let result = c.build_request(&input);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "MissingBody" => assert!(matches!(err, ApiError::MissingBody), "{name}: expected MissingBody"),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
            continue;
        }

        let req = result.unwrap();
        let expected_req = &case["expected_request"];
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.url, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: url");

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        match req.body.as_deref() {
            Some(body) => {
                let req_body: serde_json::Value = serde_json::from_str(body).unwrap();
                assert_eq!(req_body, expected_req["body"], "{name}: body");
            }
            None => assert!(expected_req["body"].is_null(), "{name}: body should be None"),
        }
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            body: sim["body"].as_str().unwrap().to_string(),
        };

        assert_eq!(
            c.status_warning(&response).as_deref(),
            case["expected_warning"].as_str(),
            "{name}: warning"
        );
        assert_eq!(response.is_ok(), case["expected_ok"].as_bool().unwrap(), "{name}: ok flag");

        if let Some(expected_body) = case.get("expected_body") {
            let body = c.parse_body(&response).unwrap();
            assert_eq!(&body, expected_body, "{name}: parsed body");
        }
    }
}
