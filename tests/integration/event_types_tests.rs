//! Event-type query integration tests
//!
//! Each query must hit its documented method and path exactly once, with an
//! empty request body, and parse the documented response shape.

#[cfg(test)]
mod tests {
    use paypal_webhooks_rs::WebhookEventType;
    use wiremock::matchers::{body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::common::{SINGLE_EVENT_TYPE_BODY, mount_token_endpoint, test_client};

    // ==================== availableEventTypes ====================

    #[tokio::test]
    async fn test_available_event_types_issues_one_get_to_catalog_path() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server).await;

        Mock::given(method("GET"))
            .and(path("/v1/notifications/webhooks-event-types"))
            .and(body_string(""))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(SINGLE_EVENT_TYPE_BODY, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let list = WebhookEventType::available_event_types(&client)
            .await
            .unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list.event_types[0].name, "PAYMENT.SALE.COMPLETED");
        assert_eq!(list.event_types[0].description, "A sale completed");
    }

    #[tokio::test]
    async fn test_available_event_types_is_idempotent() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server).await;

        Mock::given(method("GET"))
            .and(path("/v1/notifications/webhooks-event-types"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(SINGLE_EVENT_TYPE_BODY, "application/json"),
            )
            .expect(2)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let first = WebhookEventType::available_event_types(&client)
            .await
            .unwrap();
        let second = WebhookEventType::available_event_types(&client)
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    // ==================== subscribedEventTypes ====================

    #[tokio::test]
    async fn test_subscribed_event_types_issues_one_get_to_webhook_path() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server).await;

        let body = r#"{
            "event_types": [
                {"name": "PAYMENT.SALE.COMPLETED", "description": "A sale completed"},
                {"name": "PAYMENT.SALE.REFUNDED", "description": "A sale was refunded"}
            ],
            "links": [
                {"href": "https://api-m.sandbox.paypal.com/v1/notifications/webhooks/WH-123/event-types", "rel": "self", "method": "GET"}
            ]
        }"#;

        Mock::given(method("GET"))
            .and(path("/v1/notifications/webhooks/WH-123/event-types"))
            .and(body_string(""))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let list = WebhookEventType::subscribed_event_types(&client, "WH-123")
            .await
            .unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.event_types[1].name, "PAYMENT.SALE.REFUNDED");
        assert_eq!(list.links.as_ref().unwrap()[0].rel, "self");
    }

    #[tokio::test]
    async fn test_subscribed_event_types_empty_id_fails_without_io() {
        let server = MockServer::start().await;

        let client = test_client(&server);
        let err = WebhookEventType::subscribed_event_types(&client, "")
            .await
            .unwrap_err();

        assert!(err.is_invalid_argument());
        // No token fetch, no resource call
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_subscribed_event_types_blank_id_fails_without_io() {
        let server = MockServer::start().await;

        let client = test_client(&server);
        let err = WebhookEventType::subscribed_event_types(&client, "   ")
            .await
            .unwrap_err();

        assert!(err.is_invalid_argument());
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    // ==================== Token caching ====================

    #[tokio::test]
    async fn test_token_is_fetched_once_and_reused() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/oauth2/token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(crate::common::TOKEN_BODY, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/notifications/webhooks-event-types"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(SINGLE_EVENT_TYPE_BODY, "application/json"),
            )
            .expect(2)
            .mount(&server)
            .await;

        let client = test_client(&server);
        WebhookEventType::available_event_types(&client)
            .await
            .unwrap();
        WebhookEventType::available_event_types(&client)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_resource_call_carries_bearer_token() {
        let server = MockServer::start().await;
        mount_token_endpoint(&server).await;

        Mock::given(method("GET"))
            .and(path("/v1/notifications/webhooks-event-types"))
            .and(wiremock::matchers::header(
                "Authorization",
                "Bearer A21AAFtest",
            ))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(SINGLE_EVENT_TYPE_BODY, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        WebhookEventType::available_event_types(&client)
            .await
            .unwrap();
    }
}
