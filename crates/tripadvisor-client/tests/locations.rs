//! End-to-end tests of the location endpoints against a mock HTTP server.

use serde_json::json;
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};
use tripadvisor_client::TripAdvisorClient;
use tripadvisor_core::{RadiusUnit, TripAdvisorError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> TripAdvisorClient {
    TripAdvisorClient::builder()
        .api_key("test-key")
        .base_url(server.uri())
        .retry_delay(Duration::from_millis(5))
        .build()
        .unwrap()
}

fn details_response() -> serde_json::Value {
    json!({
        "location_id": "188757",
        "name": "Musée d'Orsay",
        "web_url": "https://www.tripadvisor.com/Attraction_Review-g187147-d188757",
        "address_obj": {
            "street1": "1 Rue de la Légion d'Honneur",
            "city": "Paris",
            "country": "France",
            "postalcode": "75007",
            "address_string": "1 Rue de la Légion d'Honneur, 75007 Paris France"
        },
        "latitude": "48.86",
        "longitude": "2.326561",
        "rating": "4.7",
        "num_reviews": "39211",
        "hours": {
            "periods": [
                {"open": {"day": 2, "time": "0930"}, "close": {"day": 2, "time": "1800"}}
            ],
            "weekday_text": ["Tuesday: 09:30 - 18:00"]
        },
        "photo_count": 12_345
    })
}

#[tokio::test]
async fn test_search_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/location/search"))
        .and(query_param("key", "test-key"))
        .and(query_param("searchQuery", "Orsay"))
        .and(query_param("radius", "2.5"))
        .and(query_param("radiusUnit", "km"))
        .and(query_param("language", "en"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"location_id": "188757", "name": "Musée d'Orsay", "distance": "0.42", "bearing": "north"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = assert_ok!(
        client(&server)
            .locations()
            .search("Orsay")
            .radius(2.5, RadiusUnit::Km)
            .send()
            .await
    );

    assert_eq!(page.data[0].name, "Musée d'Orsay");
    assert_eq!(page.data[0].distance_value(), Some(0.42));
}

#[tokio::test]
async fn test_details_are_typed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/location/188757/details"))
        .and(query_param("currency", "USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(details_response()))
        .mount(&server)
        .await;

    let details = assert_ok!(client(&server).locations().details("188757").send().await);

    assert_eq!(details.rating_value(), Some(4.7));
    assert_eq!(details.review_count(), Some(39_211));
    assert_eq!(details.coordinates(), Some((48.86, 2.326_561)));
    assert_eq!(
        details.address_obj.as_ref().and_then(|a| a.city.as_deref()),
        Some("Paris")
    );
    assert!(details.hours.as_ref().is_some_and(|h| h.is_open_on(2)));
}

#[tokio::test]
async fn test_server_errors_are_retried_until_success() {
    let server = MockServer::start().await;
    Mock::given(path("/location/1/reviews"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(path("/location/1/reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 998_877,
                "rating": 5,
                "title": "Wonderful",
                "published_date": "2024-03-02T10:15:00Z",
                "user": {"username": "traveler42"}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reviews = assert_ok!(client(&server).locations().reviews("1").limit(1).send().await);

    assert_eq!(reviews.data.len(), 1);
    assert_eq!(reviews.data[0].id, "998877");
    assert!(reviews.data[0].published_at().is_some());
}

#[tokio::test]
async fn test_client_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(path("/location/1/photos"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "Message": "User is not authorized to access this resource"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = assert_err!(client(&server).locations().photos("1").send().await);

    assert_eq!(err.status_code(), Some(401));
    assert!(!err.is_retryable());
    assert!(err.to_string().contains("not authorized"));
}

#[tokio::test]
async fn test_error_envelope_in_success_response() {
    let server = MockServer::start().await;
    Mock::given(path("/location/404/details"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {"message": "Location not found", "type": "NotFoundError", "code": 404}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = assert_err!(client(&server).locations().details("404").send().await);

    assert_eq!(
        err,
        TripAdvisorError::Api {
            message: "Location not found".into(),
            code: Some(404),
            kind: Some("NotFoundError".into()),
        }
    );
}
