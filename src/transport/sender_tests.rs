//! Tests for `ApiTransport`.

use super::sender::ApiTransport;
use super::{ApiError, ContentType, HttpError, RateLimitState, RequestDescriptor, ThrottlePolicy};
use crate::test_support::{MockClient, RecordingSleeper, quota_headers, response};
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

fn transport(
    client: &Arc<MockClient>,
) -> (
    ApiTransport<Arc<MockClient>, RecordingSleeper>,
    RecordingSleeper,
) {
    let sleeper = RecordingSleeper::default();
    let transport = ApiTransport::new("key-123", "app-456")
        .with_http_client(Arc::clone(client))
        .with_sleeper(sleeper.clone());
    (transport, sleeper)
}

fn get_descriptor() -> RequestDescriptor {
    RequestDescriptor::new(Method::GET, "Contacts")
}

mod validation {
    use super::*;

    #[tokio::test]
    async fn unsupported_method_fails_before_any_network_call() {
        let client = MockClient::success();
        let (transport, _) = transport(&client);

        let descriptor = RequestDescriptor::new(Method::PATCH, "Contacts");
        let err = transport.send(&descriptor).await.unwrap_err();

        assert!(matches!(err, ApiError::UnsupportedMethod(m) if m == "PATCH"));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn non_object_params_are_rejected() {
        let client = MockClient::success();
        let (transport, _) = transport(&client);

        let descriptor = get_descriptor().with_params(json!([1, 2, 3]));
        let err = transport.send(&descriptor).await.unwrap_err();

        assert!(matches!(err, ApiError::InvalidParameterType("array")));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn all_missing_required_parameters_are_reported() {
        let client = MockClient::success();
        let (transport, _) = transport(&client);

        let descriptor = get_descriptor()
            .with_params(json!({"range": 50}))
            .with_required(&["id", "objectID"]);
        let err = transport.send(&descriptor).await.unwrap_err();

        match err {
            ApiError::MissingRequiredParameters(missing) => {
                assert_eq!(missing, vec!["id".to_string(), "objectID".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn group_ids_substitutes_for_missing_ids() {
        let client = MockClient::success();
        let (transport, _) = transport(&client);

        let descriptor = get_descriptor()
            .with_params(json!({"group_ids": 3}))
            .with_required(&["ids"]);

        assert!(transport.send(&descriptor).await.is_ok());
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn group_ids_does_not_substitute_for_other_keys() {
        let client = MockClient::success();
        let (transport, _) = transport(&client);

        let descriptor = get_descriptor()
            .with_params(json!({"group_ids": 3}))
            .with_required(&["id"]);
        let err = transport.send(&descriptor).await.unwrap_err();

        assert!(matches!(err, ApiError::MissingRequiredParameters(m) if m == ["id"]));
    }

    #[tokio::test]
    async fn absent_params_with_required_names_fail() {
        let client = MockClient::success();
        let (transport, _) = transport(&client);

        let descriptor = get_descriptor().with_required(&["id"]);
        let err = transport.send(&descriptor).await.unwrap_err();

        assert!(matches!(err, ApiError::MissingRequiredParameters(m) if m == ["id"]));
        assert_eq!(client.calls(), 0);
    }
}

mod headers {
    use super::*;

    #[tokio::test]
    async fn credential_headers_are_sent_on_every_request() {
        let client = MockClient::success();
        let (transport, _) = transport(&client);

        transport.send(&get_descriptor()).await.unwrap();

        let request = &client.captured_requests()[0];
        assert_eq!(request.headers.get("api-key").unwrap(), "key-123");
        assert_eq!(request.headers.get("api-appid").unwrap(), "app-456");
    }

    #[tokio::test]
    async fn set_credentials_applies_to_subsequent_calls() {
        let client = MockClient::replying(vec![
            response(200, HeaderMap::new(), "ok"),
            response(200, HeaderMap::new(), "ok"),
        ]);
        let (transport, _) = transport(&client);

        transport.send(&get_descriptor()).await.unwrap();
        transport.set_credentials("rotated", "app-456");
        transport.send(&get_descriptor()).await.unwrap();

        let requests = client.captured_requests();
        assert_eq!(requests[0].headers.get("api-key").unwrap(), "key-123");
        assert_eq!(requests[1].headers.get("api-key").unwrap(), "rotated");
    }

    #[tokio::test]
    async fn persistent_header_is_sent_until_removed() {
        let client = MockClient::replying(vec![
            response(200, HeaderMap::new(), "ok"),
            response(200, HeaderMap::new(), "ok"),
        ]);
        let (transport, _) = transport(&client);

        let name = HeaderName::from_static("x-custom");
        transport.set_request_header(name.clone(), HeaderValue::from_static("yes"));
        transport.send(&get_descriptor()).await.unwrap();
        transport.remove_request_header(&name);
        transport.send(&get_descriptor()).await.unwrap();

        let requests = client.captured_requests();
        assert_eq!(requests[0].headers.get("x-custom").unwrap(), "yes");
        assert!(requests[1].headers.get("x-custom").is_none());
    }

    #[tokio::test]
    async fn per_call_header_overrides_do_not_leak_into_later_calls() {
        let client = MockClient::replying(vec![
            response(200, HeaderMap::new(), "ok"),
            response(200, HeaderMap::new(), "ok"),
        ]);
        let (transport, _) = transport(&client);

        let json_call = RequestDescriptor::new(Method::POST, "Rules")
            .with_params(json!({"name": "r"}))
            .with_content_type(ContentType::Json);
        transport.send(&json_call).await.unwrap();

        let form_call =
            RequestDescriptor::new(Method::POST, "Contacts").with_params(json!({"firstname": "A"}));
        transport.send(&form_call).await.unwrap();

        let requests = client.captured_requests();
        assert_eq!(
            requests[0].headers.get("content-type").unwrap(),
            "application/json"
        );
        assert_eq!(
            requests[1].headers.get("content-type").unwrap(),
            "application/x-www-form-urlencoded"
        );
    }
}

mod encoding {
    use super::*;

    #[tokio::test]
    async fn get_parameters_are_placed_on_the_query_string() {
        let client = MockClient::success();
        let (transport, _) = transport(&client);

        let descriptor = get_descriptor().with_params(json!({"id": 7}));
        transport.send(&descriptor).await.unwrap();

        let request = &client.captured_requests()[0];
        assert_eq!(
            request.url.as_str(),
            "https://api.ontraport.com/1/Contacts?id=7"
        );
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn post_form_parameters_are_placed_in_the_body() {
        let client = MockClient::success();
        let (transport, _) = transport(&client);

        let descriptor = RequestDescriptor::new(Method::POST, "Contacts")
            .with_params(json!({"firstname": "Ada", "lastname": "Lovelace"}));
        transport.send(&descriptor).await.unwrap();

        let request = &client.captured_requests()[0];
        assert!(request.url.query().is_none());
        let body = String::from_utf8(request.body.clone().unwrap()).unwrap();
        assert_eq!(body, "firstname=Ada&lastname=Lovelace");
    }

    #[tokio::test]
    async fn post_json_serializes_the_parameter_map() {
        let client = MockClient::success();
        let (transport, _) = transport(&client);

        let params = json!({"name": "rule", "events": "x(1)"});
        let descriptor = RequestDescriptor::new(Method::POST, "Rules")
            .with_params(params.clone())
            .with_content_type(ContentType::Json);
        transport.send(&descriptor).await.unwrap();

        let request = &client.captured_requests()[0];
        let body: Value = serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, params);
    }

    #[tokio::test]
    async fn delete_with_json_content_type_uses_a_body() {
        let client = MockClient::success();
        let (transport, _) = transport(&client);

        let descriptor = RequestDescriptor::new(Method::DELETE, "Tasks")
            .with_params(json!({"ids": [1, 2]}))
            .with_content_type(ContentType::Json);
        transport.send(&descriptor).await.unwrap();

        let request = &client.captured_requests()[0];
        assert!(request.url.query().is_none());
        assert!(request.body.is_some());
        assert_eq!(
            request.headers.get("content-type").unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn delete_without_json_uses_the_query_string() {
        let client = MockClient::success();
        let (transport, _) = transport(&client);

        let descriptor = RequestDescriptor::new(Method::DELETE, "Task").with_params(json!({"id": 9}));
        transport.send(&descriptor).await.unwrap();

        let request = &client.captured_requests()[0];
        assert_eq!(request.url.query(), Some("id=9"));
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn requests_carry_the_fixed_timeout() {
        let client = MockClient::success();
        let (transport, _) = transport(&client);

        transport.send(&get_descriptor()).await.unwrap();

        let request = &client.captured_requests()[0];
        assert_eq!(request.timeout, Some(Duration::from_secs(60)));
    }
}

mod throttling {
    use super::*;

    async fn prime_quota(limit: u64, remaining: u64) -> (Arc<MockClient>, RecordingSleeper) {
        let client = MockClient::replying(vec![
            response(200, quota_headers(limit, remaining, 10), "ok"),
            response(200, HeaderMap::new(), "ok"),
        ]);
        let (transport, sleeper) = transport(&client);

        transport.send(&get_descriptor()).await.unwrap();
        assert!(sleeper.recorded().is_empty());
        transport.send(&get_descriptor()).await.unwrap();
        (client, sleeper)
    }

    #[tokio::test]
    async fn first_call_is_never_throttled() {
        let client = MockClient::success();
        let (transport, sleeper) = transport(&client);

        transport.send(&get_descriptor()).await.unwrap();

        assert!(sleeper.recorded().is_empty());
    }

    #[tokio::test]
    async fn critically_low_quota_delays_500ms() {
        let (_, sleeper) = prime_quota(100, 3).await;
        assert_eq!(sleeper.recorded(), vec![Duration::from_millis(500)]);
    }

    #[tokio::test]
    async fn low_quota_delays_250ms() {
        let (_, sleeper) = prime_quota(100, 8).await;
        assert_eq!(sleeper.recorded(), vec![Duration::from_millis(250)]);
    }

    #[tokio::test]
    async fn healthy_quota_is_not_throttled() {
        let (_, sleeper) = prime_quota(100, 50).await;
        assert!(sleeper.recorded().is_empty());
    }

    #[tokio::test]
    async fn untouched_quota_is_not_throttled() {
        // limit == remaining means the window has not been used at all.
        let (_, sleeper) = prime_quota(4, 4).await;
        assert!(sleeper.recorded().is_empty());
    }

    #[tokio::test]
    async fn disabled_throttle_never_delays() {
        let client = MockClient::replying(vec![
            response(200, quota_headers(100, 1, 10), "ok"),
            response(200, HeaderMap::new(), "ok"),
        ]);
        let sleeper = RecordingSleeper::default();
        let transport = ApiTransport::new("k", "a")
            .with_http_client(Arc::clone(&client))
            .with_sleeper(sleeper.clone())
            .without_throttle();

        transport.send(&get_descriptor()).await.unwrap();
        transport.send(&get_descriptor()).await.unwrap();

        assert!(sleeper.recorded().is_empty());
    }
}

mod rate_limit_retry {
    use super::*;

    #[tokio::test]
    async fn a_429_is_retried_once_after_the_reset_window() {
        let client = MockClient::replying(vec![
            response(429, quota_headers(180, 0, 2), "slow down"),
            response(200, quota_headers(180, 180, 0), "recovered"),
        ]);
        let (transport, sleeper) = transport(&client);

        let body = transport.send(&get_descriptor()).await.unwrap();

        assert_eq!(body, "recovered");
        assert_eq!(client.calls(), 2);
        assert_eq!(sleeper.recorded(), vec![Duration::from_secs(2)]);
        assert_eq!(transport.last_status(), Some(StatusCode::OK));
    }

    #[tokio::test]
    async fn the_retry_resends_the_identical_request() {
        let client = MockClient::replying(vec![
            response(429, quota_headers(180, 0, 1), ""),
            response(200, HeaderMap::new(), "ok"),
        ]);
        let (transport, _) = transport(&client);

        let descriptor = RequestDescriptor::new(Method::POST, "Contacts")
            .with_params(json!({"firstname": "Ada"}));
        transport.send(&descriptor).await.unwrap();

        let requests = client.captured_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url, requests[1].url);
        assert_eq!(requests[0].method, requests[1].method);
        assert_eq!(requests[0].body, requests[1].body);
        assert_eq!(requests[0].headers, requests[1].headers);
    }

    #[tokio::test]
    async fn missing_reset_header_retries_without_waiting() {
        let client = MockClient::replying(vec![
            response(429, HeaderMap::new(), ""),
            response(200, HeaderMap::new(), "ok"),
        ]);
        let (transport, sleeper) = transport(&client);

        let body = transport.send(&get_descriptor()).await.unwrap();

        assert_eq!(body, "ok");
        assert_eq!(sleeper.recorded(), vec![Duration::from_secs(0)]);
    }

    #[tokio::test]
    async fn a_second_429_is_returned_to_the_caller() {
        let client = MockClient::replying(vec![
            response(429, quota_headers(180, 0, 1), ""),
            response(429, quota_headers(180, 0, 5), "still limited"),
        ]);
        let (transport, _) = transport(&client);

        let body = transport.send(&get_descriptor()).await.unwrap();

        assert_eq!(body, "still limited");
        assert_eq!(client.calls(), 2);
        assert_eq!(transport.last_status(), Some(StatusCode::TOO_MANY_REQUESTS));
    }

    #[tokio::test]
    async fn other_error_statuses_are_returned_verbatim() {
        let client = MockClient::replying(vec![response(500, HeaderMap::new(), "server broke")]);
        let (transport, _) = transport(&client);

        let body = transport.send(&get_descriptor()).await.unwrap();

        assert_eq!(body, "server broke");
        assert_eq!(client.calls(), 1);
        assert_eq!(
            transport.last_status(),
            Some(StatusCode::INTERNAL_SERVER_ERROR)
        );
    }

    #[tokio::test]
    async fn connection_errors_surface_as_transport_errors() {
        let client = MockClient::new(vec![Err(HttpError::Timeout)]);
        let (transport, _) = transport(&client);

        let err = transport.send(&get_descriptor()).await.unwrap_err();

        assert!(matches!(err, ApiError::Transport(HttpError::Timeout)));
    }
}

mod state {
    use super::*;

    #[tokio::test]
    async fn rate_limit_state_tracks_the_most_recent_response() {
        let client = MockClient::replying(vec![
            response(200, quota_headers(180, 120, 30), "ok"),
            response(200, HeaderMap::new(), "ok"),
        ]);
        let (transport, _) = transport(&client);

        assert!(transport.rate_limit().is_none());

        transport.send(&get_descriptor()).await.unwrap();
        assert_eq!(
            transport.rate_limit(),
            Some(RateLimitState {
                limit: 180,
                remaining: 120,
                reset: 30,
            })
        );

        transport.send(&get_descriptor()).await.unwrap();
        assert!(transport.rate_limit().is_none());
    }

    #[tokio::test]
    async fn last_status_is_none_before_any_call() {
        let client = MockClient::success();
        let (transport, _) = transport(&client);
        assert!(transport.last_status().is_none());
    }
}

mod configuration {
    use super::*;

    #[tokio::test]
    async fn custom_base_url_is_used_for_requests() {
        let client = MockClient::success();
        let sleeper = RecordingSleeper::default();
        let transport = ApiTransport::new("k", "a")
            .with_http_client(Arc::clone(&client))
            .with_sleeper(sleeper)
            .with_base_url("https://staging.example.com/2/");

        transport.send(&get_descriptor()).await.unwrap();

        let request = &client.captured_requests()[0];
        assert_eq!(request.url.as_str(), "https://staging.example.com/2/Contacts");
    }

    #[tokio::test]
    async fn throttle_policy_thresholds_are_configurable() {
        let client = MockClient::replying(vec![
            response(200, quota_headers(100, 30, 10), "ok"),
            response(200, HeaderMap::new(), "ok"),
        ]);
        let sleeper = RecordingSleeper::default();
        let transport = ApiTransport::new("k", "a")
            .with_http_client(Arc::clone(&client))
            .with_sleeper(sleeper.clone())
            .with_throttle_policy(
                ThrottlePolicy::new().with_low_threshold(0.5, Duration::from_millis(100)),
            );

        transport.send(&get_descriptor()).await.unwrap();
        transport.send(&get_descriptor()).await.unwrap();

        assert_eq!(sleeper.recorded(), vec![Duration::from_millis(100)]);
    }
}
