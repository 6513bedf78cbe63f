//! Integration tests for typed resource operations.

use lemonsqueezy::jsonapi::DecodeError;
use lemonsqueezy::rest::resources::{
    Checkout, CheckoutCreateAttributes, Subscription, SubscriptionListParams,
    SubscriptionUpdateAttributes, User,
};
use lemonsqueezy::rest::{Error, PageParams, Resource};
use lemonsqueezy::{ApiToken, BaseUrl, Client, Config};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACTIVE_SUBSCRIPTION: &str = r#"{
    "jsonapi": {"version": "1.0"},
    "links": {"self": "https://api.lemonsqueezy.com/v1/subscriptions/1"},
    "data": {
        "type": "subscriptions",
        "id": "1",
        "attributes": {
            "store_id": 1,
            "order_id": 1,
            "order_item_id": 1,
            "product_id": 1,
            "variant_id": 1,
            "product_name": "Example Product",
            "variant_name": "Example Variant",
            "user_name": "Darlene Daugherty",
            "user_email": "gernser@yahoo.com",
            "status": "active",
            "status_formatted": "Active",
            "pause": null,
            "cancelled": false,
            "trial_ends_at": null,
            "billing_anchor": 12,
            "urls": {
                "update_payment_method": "https://app.lemonsqueezy.com/my-orders/2ba92a4e-a00a-45d2-a128-16856ffa8cdf/subscription/8/update-payment-method?expires=1666869343&signature=9985e3bf9007840aeb3951412be475abc17439c449c1af3e56e08e45e1345413"
            },
            "renews_at": "2022-11-12T00:00:00.000000Z",
            "ends_at": null,
            "created_at": "2021-08-11T13:47:27.000000Z",
            "updated_at": "2021-08-11T13:54:19.000000Z",
            "test_mode": false
        },
        "relationships": {
            "store": {
                "links": {
                    "related": "https://api.lemonsqueezy.com/v1/subscriptions/1/store",
                    "self": "https://api.lemonsqueezy.com/v1/subscriptions/1/relationships/store"
                }
            }
        },
        "links": {"self": "https://api.lemonsqueezy.com/v1/subscriptions/1"}
    }
}"#;

fn cancelled_subscription() -> String {
    ACTIVE_SUBSCRIPTION
        .replace(r#""status": "active""#, r#""status": "cancelled""#)
        .replace(r#""status_formatted": "Active""#, r#""status_formatted": "Cancelled""#)
        .replace(r#""cancelled": false"#, r#""cancelled": true"#)
        .replace(
            r#""ends_at": null"#,
            r#""ends_at": "2022-11-12T00:00:00.000000Z""#,
        )
}

fn create_test_client(server: &MockServer) -> Client {
    let config = Config::builder()
        .api_token(ApiToken::new("test-api-token").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    Client::new(&config)
}

fn json_api_response(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status)
        .set_body_raw(body.as_bytes().to_vec(), "application/vnd.api+json")
}

#[tokio::test]
async fn test_find_subscription_decodes_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subscriptions/1"))
        .respond_with(json_api_response(200, ACTIVE_SUBSCRIPTION))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = Subscription::find(&client, "1").await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.data.kind, "subscriptions");
    assert_eq!(response.data.id, "1");

    let subscription = &response.data.attributes;
    assert_eq!(subscription.status, "active");
    assert_eq!(subscription.user_email, "gernser@yahoo.com");
    assert!(!subscription.cancelled);
    assert_eq!(subscription.ends_at, None);
    assert_eq!(subscription.trial_ends_at, None);
}

#[tokio::test]
async fn test_cancel_subscription_sets_ends_at() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/subscriptions/1"))
        .respond_with(json_api_response(200, &cancelled_subscription()))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = Subscription::cancel(&client, "1").await.unwrap();

    let subscription = &response.data.attributes;
    assert!(subscription.cancelled);
    assert_eq!(subscription.status, "cancelled");
    let ends_at = subscription.ends_at.expect("cancelled subscription must carry ends_at");
    assert_eq!(ends_at.to_rfc3339(), "2022-11-12T00:00:00+00:00");
}

#[tokio::test]
async fn test_update_subscription_sends_json_api_document() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/subscriptions/1"))
        .and(body_partial_json(serde_json::json!({
            "data": {
                "type": "subscriptions",
                "id": "1",
                "attributes": {"cancelled": false}
            }
        })))
        .respond_with(json_api_response(200, ACTIVE_SUBSCRIPTION))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let attributes = SubscriptionUpdateAttributes {
        cancelled: Some(false),
        ..Default::default()
    };

    let response = Subscription::update(&client, "1", &attributes)
        .await
        .unwrap();
    assert_eq!(response.data.attributes.status, "active");
}

#[tokio::test]
async fn test_server_error_with_empty_body_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subscriptions/1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = Subscription::find(&client, "1").await;

    match result {
        Err(Error::Api(e)) => {
            assert_eq!(e.status, 500);
            assert!(e.errors.is_empty());
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_carries_parsed_error_objects() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subscriptions/999"))
        .respond_with(json_api_response(
            404,
            r#"{"errors": [{"status": "404", "title": "Not Found", "detail": "The subscription does not exist."}]}"#,
        ))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = Subscription::find(&client, "999").await;

    match result {
        Err(Error::Api(e)) => {
            assert_eq!(e.status, 404);
            assert_eq!(e.errors.len(), 1);
            assert_eq!(e.errors[0].title.as_deref(), Some("Not Found"));
            assert_eq!(
                e.errors[0].detail.as_deref(),
                Some("The subscription does not exist.")
            );
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_success_body_maps_to_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subscriptions/1"))
        .respond_with(json_api_response(200, "this is not a json:api document"))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = Subscription::find(&client, "1").await;

    assert!(matches!(result, Err(Error::Decode(DecodeError::Json(_)))));
}

#[tokio::test]
async fn test_wrong_type_tag_maps_to_kind_mismatch() {
    let server = MockServer::start().await;

    let body = ACTIVE_SUBSCRIPTION.replace(
        r#""type": "subscriptions""#,
        r#""type": "orders""#,
    );

    Mock::given(method("GET"))
        .and(path("/subscriptions/1"))
        .respond_with(json_api_response(200, &body))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = Subscription::find(&client, "1").await;

    match result {
        Err(Error::Decode(DecodeError::KindMismatch { expected, actual })) => {
            assert_eq!(expected, "subscriptions");
            assert_eq!(actual, "orders");
        }
        other => panic!("expected DecodeError::KindMismatch, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_subscriptions_with_filters_and_pagination() {
    let server = MockServer::start().await;

    let list_body = format!(
        r#"{{
            "jsonapi": {{"version": "1.0"}},
            "links": {{
                "first": "https://api.lemonsqueezy.com/v1/subscriptions?page[number]=1",
                "last": "https://api.lemonsqueezy.com/v1/subscriptions?page[number]=5",
                "next": "https://api.lemonsqueezy.com/v1/subscriptions?page[number]=3",
                "prev": "https://api.lemonsqueezy.com/v1/subscriptions?page[number]=1"
            }},
            "meta": {{
                "page": {{
                    "currentPage": 2, "from": 11, "lastPage": 5,
                    "perPage": 10, "to": 20, "total": 47
                }}
            }},
            "data": [{data}]
        }}"#,
        data = serde_json::from_str::<serde_json::Value>(ACTIVE_SUBSCRIPTION).unwrap()["data"]
    );

    Mock::given(method("GET"))
        .and(path("/subscriptions"))
        .and(query_param("filter[store_id]", "1"))
        .and(query_param("page[number]", "2"))
        .respond_with(json_api_response(200, &list_body))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let params = SubscriptionListParams {
        store_id: Some(1),
        order_id: None,
        page: PageParams {
            number: Some(2),
            size: None,
        },
    };

    let response = Subscription::all(&client, Some(params)).await.unwrap();

    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].attributes.product_name, "Example Product");

    let page = response.meta.as_ref().unwrap().page.unwrap();
    assert_eq!(page.current_page, 2);
    assert_eq!(page.total, 47);
    assert!(response.links.next.is_some());
    assert!(response.links.prev.is_some());
}

#[tokio::test]
async fn test_create_checkout_posts_relationships() {
    let server = MockServer::start().await;

    let checkout_body = r#"{
        "jsonapi": {"version": "1.0"},
        "data": {
            "type": "checkouts",
            "id": "59dbd5e8-1dcd-42ba-a513-5e0e7a036a44",
            "attributes": {
                "store_id": 1,
                "variant_id": 2,
                "custom_price": 50000,
                "expires_at": null,
                "url": "https://my-store.lemonsqueezy.com/checkout/custom/59dbd5e8-1dcd-42ba-a513-5e0e7a036a44",
                "created_at": "2022-10-14T14:26:43.000000Z",
                "updated_at": "2022-10-14T14:26:43.000000Z",
                "test_mode": false
            }
        }
    }"#;

    Mock::given(method("POST"))
        .and(path("/checkouts"))
        .and(body_partial_json(serde_json::json!({
            "data": {
                "type": "checkouts",
                "attributes": {"custom_price": 50000},
                "relationships": {
                    "store": {"data": {"type": "stores", "id": "1"}},
                    "variant": {"data": {"type": "variants", "id": "2"}}
                }
            }
        })))
        .respond_with(json_api_response(201, checkout_body))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let attributes = CheckoutCreateAttributes {
        custom_price: Some(50000),
        expires_at: None,
    };

    let response = Checkout::create(&client, 1, 2, &attributes).await.unwrap();

    assert_eq!(response.status(), 201);
    assert_eq!(response.data.attributes.custom_price, Some(50000));
}

#[tokio::test]
async fn test_fetch_current_user() {
    let server = MockServer::start().await;

    // The avatar color contains `"#`, so a plain r#-string would end early
    let user_body = r##"{
        "jsonapi": {"version": "1.0"},
        "links": {"self": "https://api.lemonsqueezy.com/v1/users/1"},
        "data": {
            "type": "users",
            "id": "1",
            "attributes": {
                "name": "Darlene Daugherty",
                "email": "gernser@yahoo.com",
                "color": "#898FA9",
                "avatar_url": "https://www.gravatar.com/avatar/1ace5b3965c59dbcd1db79d85da75048?d=blank",
                "has_custom_avatar": false,
                "created_at": "2021-05-24T14:08:31.000000Z",
                "updated_at": "2021-08-26T13:24:54.000000Z"
            }
        }
    }"##;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(json_api_response(200, user_body))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = User::me(&client).await.unwrap();

    assert_eq!(response.data.attributes.name, "Darlene Daugherty");
    assert_eq!(response.data.attributes.email, "gernser@yahoo.com");
}
