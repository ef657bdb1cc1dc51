//! Query operations driven end to end against a stubbed server.

use crate::helpers::{Post, context_for};

use rest_core::{Api, BASE_ERROR_KEY, ErrorMap, UNEXPECTED_SERVER_ERROR};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn generic_errors() -> ErrorMap {
    let mut errors = ErrorMap::new();
    errors.insert(
        BASE_ERROR_KEY.to_string(),
        vec![UNEXPECTED_SERVER_ERROR.to_string()],
    );
    errors
}

/// **VALUE**: Verifies the happy collection path over real HTTP: derived
/// endpoint, payload-order decode, and a clean envelope.
#[tokio::test]
async fn given_two_element_collection_when_find_array_then_yields_entities_in_order() {
    // GIVEN: A server returning two posts from the derived endpoint
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "1", "title": "first" },
            { "id": "2", "title": "second" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Fetching the collection
    let mut api = Api::<Post>::new(context_for(&server.uri()));
    let (posts, response) = api.find_array().await;

    // THEN: Both entities arrive in payload order with a clean envelope
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, "1");
    assert_eq!(posts[1].id, "2");
    assert!(response.errors.is_none());
    assert_eq!(response.status_code, 200);
    assert!(!api.has_errors);
}

#[tokio::test]
async fn given_server_failure_when_get_then_substitutes_generic_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Something went wrong!"))
        .mount(&server)
        .await;

    let mut api = Api::<Post>::new(context_for(&server.uri()));
    let response = api.get("/v1/posts.json").await;

    assert_eq!(response.errors, Some(generic_errors()));
    assert_eq!(response.status_code, 500);
    assert!(response.single.is_none());
    assert!(api.has_errors);
}

/// **VALUE**: Verifies the "always a vector" contract under failure.
///
/// **WHY THIS MATTERS**: Callers iterate the result without checking for a
/// failure value first; an error here must look like an empty collection
/// plus a populated `errors` map, nothing else.
#[tokio::test]
async fn given_server_failure_when_find_array_then_yields_empty_vec() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Something went wrong!"))
        .expect(1)
        .mount(&server)
        .await;

    let mut api = Api::<Post>::new(context_for(&server.uri()));
    let (posts, response) = api.find_array().await;

    assert_eq!(posts.len(), 0);
    assert_eq!(response.array, Some(Vec::new()));
    assert!(api.has_errors);
    assert_eq!(
        api.error_messages,
        Some(vec![UNEXPECTED_SERVER_ERROR.to_string()])
    );
}

/// **VALUE**: Verifies the recognized error envelope over real HTTP: the
/// server's message surfaces verbatim AND a best-effort entity is decoded.
#[tokio::test]
async fn given_error_envelope_when_find_then_yields_entity_and_server_message() {
    let server = MockServer::start().await;

    // The singular derived endpoint for Post.
    Mock::given(method("GET"))
        .and(path("/post"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "post": { "errors": ["Something went wrong!"] } })),
        )
        .mount(&server)
        .await;

    let mut api = Api::<Post>::new(context_for(&server.uri()));
    let (post, response) = api.find().await;

    assert!(post.is_some());
    assert_eq!(
        response.error_messages().expect("messages").first(),
        Some(&"Something went wrong!".to_string())
    );
}

#[tokio::test]
async fn given_enveloped_success_body_when_get_then_unwraps_resource_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/featured.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "post": { "id": "7", "title": "wrapped" } })),
        )
        .mount(&server)
        .await;

    let mut api = Api::<Post>::new(context_for(&server.uri()));
    let response = api.get("/v1/featured.json").await;

    let post = response.single.expect("entity");
    assert_eq!(post.id, "7");
    assert_eq!(post.title, "wrapped");
    assert!(!api.has_errors);
}

#[tokio::test]
async fn given_explicit_path_when_get_array_then_bypasses_derivation() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/archive/posts.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "9" }])))
        .expect(1)
        .mount(&server)
        .await;

    let mut api = Api::<Post>::new(context_for(&server.uri()));
    let (posts, _) = api.get_array("/v2/archive/posts.json").await;

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, "9");
}

/// **VALUE**: Verifies the transport-failure branch with a connection that
/// never reaches a server.
///
/// **WHY THIS MATTERS**: "No response at all" and "non-2xx response" are
/// different failure classes in the transport contract, but callers must
/// see the same normalized shape for both.
#[tokio::test]
async fn given_unreachable_host_when_find_then_reports_transport_failure() {
    // GIVEN: A port nothing listens on
    let mut api = Api::<Post>::new(context_for("http://127.0.0.1:1"));

    // WHEN: Fetching the singular endpoint
    let (post, response) = api.find().await;

    // THEN: No payload, the generic message, and the no-response status
    assert!(post.is_none());
    assert_eq!(response.errors, Some(generic_errors()));
    assert_eq!(response.status_code, 0);
    assert!(api.has_errors);
}
