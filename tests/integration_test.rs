#[cfg(test)]
mod tests {
    use std::fs;

    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
    };
    use email_writer::config::AppConfig;
    use email_writer::generator::ReplyGenerator;
    use email_writer::server::{AppState, app};
    use tower::util::ServiceExt; // for `call`, `oneshot`, and `ready`

    async fn body_to_string(body: Body) -> String {
        let bytes = axum::body::to_bytes(body, 4096usize).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn test_app(gemini_api_url: &str) -> Router {
        let config = AppConfig {
            gemini_api_url: gemini_api_url.to_string(),
            gemini_api_key: "test_key".to_string(),
            model: "gemini-2.5-flash".to_string(),
        };
        let generator = ReplyGenerator::new(reqwest::Client::new(), config);
        app(AppState::new(generator))
    }

    #[tokio::test]
    async fn it_generates_an_email_reply() {
        let mut server = mockito::Server::new_async().await;

        let mock_resp = fs::read_to_string("./tests/data/gemini_generate_content.json").unwrap();
        let mock = server
            .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
            .match_header("x-goog-api-key", "test_key")
            // The forwarded prompt must carry both the tone clause and
            // the original email text
            .match_body(mockito::Matcher::AllOf(vec![
                mockito::Matcher::Regex("Use a friendly tone".into()),
                mockito::Matcher::Regex(r"Can we reschedule\?".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(mock_resp)
            .create_async()
            .await;

        let app = test_app(&server.url());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/email/generate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"emailContent":"Can we reschedule?","tone":"friendly"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        mock.assert_async().await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_string(response.into_body()).await;
        assert_eq!(
            body,
            "Hi, of course we can reschedule. Just let me know what time works best for you and I will update the invite."
        );
    }

    #[tokio::test]
    async fn it_returns_a_500_when_the_upstream_call_fails() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
            .with_status(503)
            .with_body(r#"{"error":{"code":503,"message":"The model is overloaded"}}"#)
            .create_async()
            .await;

        let app = test_app(&server.url());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/email/generate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"emailContent":"Hello"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
