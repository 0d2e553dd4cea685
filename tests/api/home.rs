use claims::assert_some_eq;

use crate::helpers::spawn_app;

#[tokio::test]
async fn home_returns_200_with_an_html_body() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_home().await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let content_type = response
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok());
    assert_some_eq!(content_type, "text/html; charset=utf-8");
}

#[tokio::test]
async fn home_sets_the_four_permissive_cors_headers() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_home().await;

    // Assert
    let headers = response.headers();
    let expected = [
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Request-Method", "*"),
        ("Access-Control-Allow-Methods", "OPTIONS, POST, GET"),
        ("Access-Control-Allow-Headers", "*"),
    ];
    for (name, value) in expected {
        assert_some_eq!(
            headers.get(name).and_then(|v| v.to_str().ok()),
            value,
            "missing or wrong header: {}",
            name
        );
    }
}

#[tokio::test]
async fn home_renders_the_index_template_with_the_title() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_home().await;

    // Assert
    let body = response.text().await.unwrap();
    assert!(body.contains("<title>Express</title>"));
    assert!(body.contains("Welcome to Express"));
}

#[tokio::test]
async fn repeated_requests_get_identical_responses() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let first = app.get_home().await;
    let first_headers = first.headers().clone();
    let first_body = first.text().await.unwrap();

    let second = app.get_home().await;
    let second_headers = second.headers().clone();
    let second_body = second.text().await.unwrap();

    // Assert
    assert_eq!(first_body, second_body);
    for name in [
        "Access-Control-Allow-Origin",
        "Access-Control-Request-Method",
        "Access-Control-Allow-Methods",
        "Access-Control-Allow-Headers",
        "Content-Type",
    ] {
        assert_eq!(first_headers.get(name), second_headers.get(name));
    }
}

#[tokio::test]
async fn query_strings_and_extra_headers_are_ignored() {
    // Arrange
    let app = spawn_app().await;
    let base = app.get_home().await;
    let base_headers = base.headers().clone();
    let base_body = base.text().await.unwrap();

    // Act
    let response = app
        .api_client
        .get(format!("{}/?foo=bar&baz=1", &app.address))
        .header("X-Custom-Header", "anything")
        .header("Origin", "https://example.com")
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(200, response.status().as_u16());
    for name in [
        "Access-Control-Allow-Origin",
        "Access-Control-Request-Method",
        "Access-Control-Allow-Methods",
        "Access-Control-Allow-Headers",
    ] {
        assert_eq!(base_headers.get(name), response.headers().get(name));
    }
    let body = response.text().await.unwrap();
    assert_eq!(base_body, body);
}

#[tokio::test]
async fn unknown_paths_get_a_404() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app
        .api_client
        .get(format!("{}/no_such_page", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(404, response.status().as_u16());
}
