//! Authority Adapter Integration Tests
//!
//! Drives the blocking HTTP adapter against a wiremock server. The
//! adapter is synchronous, so every call runs inside `spawn_blocking`.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shield_client::{
    AuthorityClient, AuthorityConfig, CatalogPort, CateringCompany, Chi, DietaryPreference,
    DistanceOracle, FoodBox, FoodBoxItem, OrderingPort, Postcode, RemoteError,
};

async fn client_for(server: &MockServer) -> AuthorityClient {
    let uri = server.uri();
    tokio::task::spawn_blocking(move || AuthorityClient::new(&AuthorityConfig::new(uri)))
        .await
        .unwrap()
        .unwrap()
}

fn blocking<T: Send + 'static>(
    client: AuthorityClient,
    call: impl FnOnce(AuthorityClient) -> T + Send + 'static,
) -> tokio::task::JoinHandle<T> {
    tokio::task::spawn_blocking(move || call(client))
}

#[tokio::test]
async fn catalog_fetch_decodes_food_boxes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/showFoodBox"))
        .and(query_param("orderOption", "catering"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "1",
                "name": "box a",
                "diet": "none",
                "delivered_by": "caterer",
                "contents": [
                    {"id": 1, "name": "cucumbers", "quantity": 1},
                    {"id": 2, "name": "tomatoes", "quantity": 2}
                ]
            }
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let boxes = blocking(client, |c| c.fetch_all_food_boxes())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(boxes.len(), 1);
    assert_eq!(boxes[0].id(), "1");
    assert_eq!(boxes[0].diet(), DietaryPreference::None);
    assert_eq!(boxes[0].item_quantity(2), Some(2));
}

#[tokio::test]
async fn registration_decodes_the_four_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/registerShieldingIndividual"))
        .and(query_param("CHI", "0101901234"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!(["EH8 9LE", "Ada", "Lovelace", "0131_123_4567"])),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let details = blocking(client, |c| {
        c.register_individual(&Chi::new("0101901234").unwrap())
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(details.postcode, "EH8 9LE");
    assert_eq!(details.surname, "Lovelace");
}

#[tokio::test]
async fn registration_refusals_surface_as_rejections() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/registerShieldingIndividual"))
        .respond_with(ResponseTemplate::new(200).set_body_string("already registered"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = blocking(client, |c| {
        c.register_individual(&Chi::new("0101901234").unwrap())
    })
    .await
    .unwrap()
    .unwrap_err();

    assert!(matches!(err, RemoteError::Rejected { .. }));
}

#[tokio::test]
async fn distance_parses_the_float_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/distance"))
        .and(query_param("postcode1", "EH8_9LE"))
        .and(query_param("postcode2", "EH1_1AA"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1234.5"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let distance = blocking(client, |c| {
        c.distance(
            &Postcode::parse("EH8_9LE").unwrap(),
            &Postcode::parse("EH1_1AA").unwrap(),
        )
    })
    .await
    .unwrap()
    .unwrap();

    assert!((distance - 1234.5).abs() < f32::EPSILON);
}

#[tokio::test]
async fn caterer_listing_skips_blank_and_malformed_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getCaterers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            "1,far kitchen,EH1_1AA",
            null,
            "",
            "garbage",
            "2,near kitchen,EH2_2BB"
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let caterers = blocking(client, |c| c.list_caterers())
        .await
        .unwrap()
        .unwrap();

    let ids: Vec<&str> = caterers.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[tokio::test]
async fn placement_posts_the_payload_and_returns_the_order_number() {
    let server = MockServer::start().await;
    let food_box = FoodBox::new(
        "1",
        "box a",
        DietaryPreference::None,
        vec![FoodBoxItem::new(1, "cucumbers", 1)],
    );
    Mock::given(method("POST"))
        .and(path("/placeOrder"))
        .and(query_param("individual_id", "0101901234"))
        .and(query_param("catering_business_name", "near kitchen"))
        .and(query_param("catering_postcode", "EH2_2BB"))
        .and(body_json(json!({
            "id": "1",
            "contents": [{"id": 1, "name": "cucumbers", "quantity": 1}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("42"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let number = blocking(client, move |c| {
        let company = CateringCompany {
            id: "2".into(),
            name: "near kitchen".into(),
            postcode: Postcode::parse("EH2_2BB").unwrap(),
        };
        c.place_order(
            &Chi::new("0101901234").unwrap(),
            &company,
            &food_box.payload(),
        )
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(number, 42);
}

#[tokio::test]
async fn cancel_acknowledgment_and_refusal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cancelOrder"))
        .and(query_param("order_id", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("True"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cancelOrder"))
        .and(query_param("order_id", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("False"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let (ok, refused) = blocking(client, |c| (c.cancel_order(1), c.cancel_order(2)))
        .await
        .unwrap();

    assert!(ok.is_ok());
    assert!(matches!(refused, Err(RemoteError::Rejected { .. })));
}

#[tokio::test]
async fn status_query_returns_the_raw_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/requestStatus"))
        .and(query_param("order_id", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("2"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let code = blocking(client, |c| c.order_status(7))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(code, "2");
}

#[tokio::test]
async fn transport_failures_surface_as_transport_errors() {
    // Point at a server that was shut down.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let err = tokio::task::spawn_blocking(move || {
        let client = AuthorityClient::new(&AuthorityConfig::new(uri)).unwrap();
        client.order_status(1)
    })
    .await
    .unwrap()
    .unwrap_err();

    assert!(matches!(err, RemoteError::Transport { .. }));
}
