use anyhow::Result;
use serde_json::json;

use casewatch::client::SearchClient;
use casewatch::data_models::{CaseCount, SearchRequest};
use casewatch::error::SubmitError;
use casewatch::form::SearchForm;

mod test_helpers {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, Default)]
    pub struct CapturedRequest {
        pub body: String,
        pub content_type: String,
        pub accept: String,
    }

    pub async fn spawn_server(router: Router) -> Result<SocketAddr> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Ok(addr)
    }

    /// `/search` that records the raw request and replies with the given
    /// JSON body.
    pub fn capturing_search(
        body: serde_json::Value,
    ) -> (Router, Arc<Mutex<Option<CapturedRequest>>>) {
        let captured = Arc::new(Mutex::new(None));
        let sink = captured.clone();
        let router = Router::new().route(
            "/search",
            post(move |headers: HeaderMap, raw_body: String| {
                let body = body.clone();
                let sink = sink.clone();
                async move {
                    let header = |name: &str| {
                        headers
                            .get(name)
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or("")
                            .to_string()
                    };
                    *sink.lock().unwrap() = Some(CapturedRequest {
                        body: raw_body,
                        content_type: header("content-type"),
                        accept: header("accept"),
                    });
                    Json(body)
                }
            }),
        );
        (router, captured)
    }

    /// `/search` that replies 200 with a body that is not JSON.
    pub fn garbage_search() -> Router {
        Router::new().route("/search", post(|| async { "<html>not json</html>" }))
    }

    pub fn failing_search() -> Router {
        Router::new().route(
            "/search",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
    }

    pub fn sample_request() -> SearchRequest {
        let form = SearchForm::new(vec![
            ("zipcode".to_string(), "94103".to_string()),
            ("date".to_string(), "2021-05-01".to_string()),
        ]);
        SearchRequest::from_form(&form)
    }
}

use test_helpers::*;

#[tokio::test]
async fn test_search_posts_urlencoded_fields_in_order() -> Result<()> {
    let (router, captured) = capturing_search(json!({
        "success": true,
        "cases": 42,
        "graph_url": "/g/1.png",
    }));
    let addr = spawn_server(router).await?;

    let client = SearchClient::new(format!("http://{addr}"));
    let response = client.search(&sample_request()).await.unwrap();

    assert!(response.success);
    assert_eq!(response.cases, Some(CaseCount::Number(42)));
    assert_eq!(response.graph_url.as_deref(), Some("/g/1.png"));

    let captured = captured.lock().unwrap().clone().unwrap();
    assert_eq!(captured.body, "zipcode=94103&date=2021-05-01");
    assert_eq!(captured.content_type, "application/x-www-form-urlencoded");
    assert_eq!(captured.accept, "application/json");
    Ok(())
}

#[tokio::test]
async fn test_search_does_not_branch_on_success_flag() -> Result<()> {
    // success:false is still a well-formed reply at the transport level;
    // the controller owns that branch, not the client
    let (router, _) = capturing_search(json!({
        "success": false,
        "message": "No data for zipcode",
    }));
    let addr = spawn_server(router).await?;

    let client = SearchClient::new(format!("http://{addr}"));
    let response = client.search(&sample_request()).await.unwrap();

    assert!(!response.success);
    assert_eq!(response.message.as_deref(), Some("No data for zipcode"));
    Ok(())
}

#[tokio::test]
async fn test_error_status_collapses_to_transport() -> Result<()> {
    let addr = spawn_server(failing_search()).await?;

    let client = SearchClient::new(format!("http://{addr}"));
    let err = client.search(&sample_request()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Transport));
    Ok(())
}

#[tokio::test]
async fn test_undecodable_body_collapses_to_transport() -> Result<()> {
    let addr = spawn_server(garbage_search()).await?;

    let client = SearchClient::new(format!("http://{addr}"));
    let err = client.search(&sample_request()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Transport));
    Ok(())
}

#[tokio::test]
async fn test_unreachable_host_collapses_to_transport() -> Result<()> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let client = SearchClient::new(format!("http://{addr}"));
    let err = client.search(&sample_request()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Transport));
    Ok(())
}

#[test]
fn test_error_messages_match_the_page_contract() {
    assert_eq!(
        SubmitError::Transport.to_string(),
        "An error occurred while processing your request."
    );
    assert_eq!(
        SubmitError::Application("No data for zipcode".to_string()).to_string(),
        "No data for zipcode"
    );
}

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let client = SearchClient::new("http://localhost:5000/");
    assert_eq!(client.base_url(), "http://localhost:5000");
}
