//! HTTP API Tests
//!
//! Drives the full router with in-memory stores and, for the LLM proxy, a stub
//! Ollama server on an ephemeral port.

#[cfg(test)]
mod api_tests {
    use anyhow::Result;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
        routing::post,
        Router,
    };
    use http_body_util::BodyExt;
    use itemsync_core::db::{GraphStore, InMemoryGraphStore, InMemoryItemStore};
    use itemsync_core::services::LlmService;
    use itemsync_server::{create_router, AppState, MALFORMED_PAYLOAD_MESSAGE};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Unroutable upstream for tests that never reach the LLM
    const NO_UPSTREAM: &str = "http://127.0.0.1:9";

    struct TestApp {
        router: Router,
        items: Arc<InMemoryItemStore>,
        graph: Arc<InMemoryGraphStore>,
    }

    /// Helper to build the router over fresh in-memory stores
    fn create_test_app(ollama_url: &str) -> Result<TestApp> {
        let items = Arc::new(InMemoryItemStore::new());
        let graph = Arc::new(InMemoryGraphStore::new());
        let llm = LlmService::new(ollama_url, "llama3")?;
        let state = AppState::new(items.clone(), graph.clone(), llm);

        Ok(TestApp {
            router: create_router(state, None),
            items,
            graph,
        })
    }

    /// Helper to send one request and decode the JSON response body
    async fn send(
        app: &TestApp,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value)> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(match body {
                Some(v) => Body::from(v.to_string()),
                None => Body::empty(),
            })?;

        let response = app.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        Ok((status, value))
    }

    /// Helper to start a stub Ollama server answering with `status` and `body`
    async fn spawn_upstream(status: StatusCode, body: &'static str) -> Result<String> {
        let app = Router::new().route("/api/generate", post(move || async move { (status, body) }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Ok(format!("http://{}", addr))
    }

    #[tokio::test]
    async fn test_health_check() -> Result<()> {
        let app = create_test_app(NO_UPSTREAM)?;

        let (status, body) = send(&app, Method::GET, "/health", None).await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        Ok(())
    }

    #[tokio::test]
    async fn test_create_and_get_item() -> Result<()> {
        let app = create_test_app(NO_UPSTREAM)?;

        let (status, created) = send(
            &app,
            Method::POST,
            "/items/",
            Some(json!({"name": "kettle", "description": "boils water"})),
        )
        .await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            created,
            json!({"id": 1, "name": "kettle", "description": "boils water"})
        );

        let (status, fetched) = send(&app, Method::GET, "/items/1", None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let node = app.graph.get("kettle").await?.expect("graph node created");
        assert_eq!(node.description, "boils water");
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_item_is_404() -> Result<()> {
        let app = create_test_app(NO_UPSTREAM)?;
        let body = json!({"name": "a", "description": "b"});

        let (status, error) = send(&app, Method::GET, "/items/42", None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error["code"], "ITEM_NOT_FOUND");
        assert_eq!(error["message"], "Item not found");

        let (status, _) = send(&app, Method::PUT, "/items/42", Some(body)).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::DELETE, "/items/42", None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_replaces_item_and_syncs_description() -> Result<()> {
        let app = create_test_app(NO_UPSTREAM)?;
        send(
            &app,
            Method::POST,
            "/items/",
            Some(json!({"name": "kettle", "description": "old"})),
        )
        .await?;

        let (status, updated) = send(
            &app,
            Method::PUT,
            "/items/1",
            Some(json!({"name": "kettle", "description": "new"})),
        )
        .await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            updated,
            json!({"id": 1, "name": "kettle", "description": "new"})
        );
        assert_eq!(app.graph.get("kettle").await?.unwrap().description, "new");
        Ok(())
    }

    #[tokio::test]
    async fn test_rename_through_items_endpoint_misses_graph_node() -> Result<()> {
        let app = create_test_app(NO_UPSTREAM)?;
        send(
            &app,
            Method::POST,
            "/items/",
            Some(json!({"name": "kettle", "description": "old"})),
        )
        .await?;

        let (status, _) = send(
            &app,
            Method::PUT,
            "/items/1",
            Some(json!({"name": "teapot", "description": "new"})),
        )
        .await?;

        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&app, Method::GET, "/neo4j/items/teapot", None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (_, stale) = send(&app, Method::GET, "/neo4j/items/kettle", None).await?;
        assert_eq!(stale, json!({"name": "kettle", "description": "old"}));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_item_removes_both_sides() -> Result<()> {
        let app = create_test_app(NO_UPSTREAM)?;
        send(
            &app,
            Method::POST,
            "/items/",
            Some(json!({"name": "kettle", "description": "d"})),
        )
        .await?;

        let (status, body) = send(&app, Method::DELETE, "/items/1", None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ok": true}));
        assert!(app.graph.get("kettle").await?.is_none());

        let (status, _) = send(&app, Method::GET, "/items/1", None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_body_is_rejected() -> Result<()> {
        let app = create_test_app(NO_UPSTREAM)?;

        let (status, _) = send(&app, Method::POST, "/items/", Some(json!({"name": "a"}))).await?;

        assert!(status.is_client_error());
        assert!(app.items.is_empty().await);
        Ok(())
    }

    #[tokio::test]
    async fn test_postgres_endpoints_do_not_touch_graph() -> Result<()> {
        let app = create_test_app(NO_UPSTREAM)?;

        let (status, created) = send(
            &app,
            Method::POST,
            "/postgres/items/",
            Some(json!({"name": "lamp", "description": "desk"})),
        )
        .await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["id"], 1);

        let (_, updated) = send(
            &app,
            Method::PUT,
            "/postgres/items/1",
            Some(json!({"name": "bulb", "description": "led"})),
        )
        .await?;
        assert_eq!(
            updated,
            json!({"id": 1, "name": "bulb", "description": "led"})
        );

        let (status, body) = send(&app, Method::DELETE, "/postgres/items/1", None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ok": true}));

        let (status, _) = send(&app, Method::GET, "/postgres/items/1", None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(app.graph.nodes().await.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_neo4j_endpoints() -> Result<()> {
        let app = create_test_app(NO_UPSTREAM)?;

        let (status, created) = send(
            &app,
            Method::POST,
            "/neo4j/items/",
            Some(json!({"name": "lamp", "description": "desk"})),
        )
        .await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created, json!({"name": "lamp", "description": "desk"}));

        let (status, renamed) = send(
            &app,
            Method::PUT,
            "/neo4j/items/lamp",
            Some(json!({"name": "torch", "description": "handheld"})),
        )
        .await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(renamed, json!({"name": "torch", "description": "handheld"}));

        let (status, _) = send(&app, Method::GET, "/neo4j/items/lamp", None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            Method::PUT,
            "/neo4j/items/lamp",
            Some(json!({"name": "lamp", "description": "x"})),
        )
        .await?;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // Delete never checks existence
        let (status, body) = send(&app, Method::DELETE, "/neo4j/items/nothing", None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ok": true}));

        assert!(app.items.is_empty().await);
        Ok(())
    }

    #[tokio::test]
    async fn test_ollama_returns_indented_json() -> Result<()> {
        let url = spawn_upstream(StatusCode::OK, r#"{"response":"{\"a\":1}"}"#).await?;
        let app = create_test_app(&url)?;

        let (status, body) = send(
            &app,
            Method::POST,
            "/ollama/",
            Some(json!({"prompt": "give me a"})),
        )
        .await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"response": "{\n  \"a\": 1\n}"}));
        Ok(())
    }

    #[tokio::test]
    async fn test_ollama_malformed_payload_is_500() -> Result<()> {
        let url = spawn_upstream(StatusCode::OK, r#"{"response":"not json"}"#).await?;
        let app = create_test_app(&url)?;

        let (status, body) =
            send(&app, Method::POST, "/ollama/", Some(json!({"prompt": "p"}))).await?;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], MALFORMED_PAYLOAD_MESSAGE);
        assert_eq!(body["code"], "MALFORMED_UPSTREAM_PAYLOAD");
        Ok(())
    }

    #[tokio::test]
    async fn test_ollama_upstream_status_is_propagated() -> Result<()> {
        let url = spawn_upstream(StatusCode::NOT_FOUND, "model 'llama3' not found").await?;
        let app = create_test_app(&url)?;

        let (status, body) =
            send(&app, Method::POST, "/ollama/", Some(json!({"prompt": "p"}))).await?;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "model 'llama3' not found");
        assert_eq!(body["code"], "UPSTREAM_REJECTED");
        Ok(())
    }
}
