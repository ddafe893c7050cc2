use anyhow::Result;
use httpmock::prelude::*;
use postfix_forwards::domain::ports::ForwardBackend;
use postfix_forwards::{ForwardError, HttpBackend, NewForward, Settings};
use serde_json::json;

fn backend_for(server: &MockServer) -> Result<HttpBackend> {
    let settings = Settings::resolve(None, Some(server.base_url().as_str()), Some(5));
    Ok(HttpBackend::new(&settings)?)
}

#[tokio::test]
async fn test_list_domains() -> Result<()> {
    let server = MockServer::start();
    let list_mock = server.mock(|when, then| {
        when.method(GET).path("/api/domains/");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([
                {"name": "x.com", "forwards": [{"from": "a@x.com", "to": "b@y.com"}]},
                {"name": "empty.org", "forwards": []}
            ]));
    });

    let domains = backend_for(&server)?.list_domains().await?;

    list_mock.assert();
    assert_eq!(domains.len(), 2);
    assert_eq!(domains[0].name, "x.com");
    assert_eq!(domains[0].forwards[0].to, "b@y.com");
    assert!(domains[1].forwards.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_list_domains_tolerates_missing_forwards() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/domains/");
        then.status(200).json_body(json!([{"name": "bare.net"}]));
    });

    let domains = backend_for(&server)?.list_domains().await?;

    assert_eq!(domains[0].name, "bare.net");
    assert!(domains[0].forwards.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_create_forward_posts_from_and_to() -> Result<()> {
    let server = MockServer::start();
    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/domains/x.com/forwards/")
            .json_body(json!({"from": "c@x.com", "to": "d@y.com"}));
        then.status(200);
    });

    backend_for(&server)?
        .create_forward("x.com", &NewForward::new("c@x.com", "d@y.com"))
        .await?;

    create_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_update_forward_puts_only_target() -> Result<()> {
    let server = MockServer::start();
    let update_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/domains/x.com/forwards/a@x.com/")
            .json_body(json!({"to": "z@y.com"}));
        then.status(200);
    });

    backend_for(&server)?
        .update_forward("x.com", "a@x.com", "z@y.com")
        .await?;

    update_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_delete_forward() -> Result<()> {
    let server = MockServer::start();
    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/domains/x.com/forwards/a@x.com/");
        then.status(200);
    });

    backend_for(&server)?.delete_forward("x.com", "a@x.com").await?;

    delete_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_domain_endpoints() -> Result<()> {
    let server = MockServer::start();
    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/domains/")
            .json_body(json!({"name": "new.org"}));
        then.status(200);
    });
    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/domains/old.org/");
        then.status(200);
    });

    let backend = backend_for(&server)?;
    backend.create_domain("new.org").await?;
    backend.delete_domain("old.org").await?;

    create_mock.assert();
    delete_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_non_success_status_is_an_error() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/domains/x.com/forwards/");
        then.status(500).body("duplicate entry");
    });

    let result = backend_for(&server)?
        .create_forward("x.com", &NewForward::new("a@x.com", "b@y.com"))
        .await;

    match result {
        Err(ForwardError::StatusError {
            method,
            status,
            body,
            ..
        }) => {
            assert_eq!(method, "POST");
            assert_eq!(status, 500);
            assert_eq!(body, "duplicate entry");
        }
        other => panic!("expected status error, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_an_error() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/domains/");
        then.status(200).body("<html>not json</html>");
    });

    let result = backend_for(&server)?.list_domains().await;

    assert!(matches!(result, Err(ForwardError::ApiError(_))));
    Ok(())
}

#[tokio::test]
async fn test_unreachable_backend_is_an_error() -> Result<()> {
    // 綁定後立即釋放的埠，不會有人在聽
    let port = std::net::TcpListener::bind("127.0.0.1:0")?.local_addr()?.port();
    let endpoint = format!("http://127.0.0.1:{}", port);
    let settings = Settings::resolve(None, Some(endpoint.as_str()), Some(2));
    let backend = HttpBackend::new(&settings)?;

    let result = backend.list_domains().await;

    assert!(matches!(result, Err(ForwardError::ApiError(_))));
    Ok(())
}
