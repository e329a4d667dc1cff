use approx::assert_relative_eq;
use chrono::NaiveDate;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nbrb_rates::{NbrbClient, RatesError};

const FEED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<DailyExRates Date="01/25/2012">
  <Currency Id="170">
    <NumCode>036</NumCode>
    <CharCode>AUD</CharCode>
    <Scale>1</Scale>
    <Name>Австралийский доллар</Name>
    <Rate>8540.12</Rate>
  </Currency>
  <Currency Id="145">
    <NumCode>840</NumCode>
    <CharCode>USD</CharCode>
    <Scale>1</Scale>
    <Name>Доллар США</Name>
    <Rate>8000.00</Rate>
  </Currency>
  <Currency Id="19">
    <NumCode>978</NumCode>
    <CharCode>EUR</CharCode>
    <Scale>1</Scale>
    <Name>Евро</Name>
    <Rate>9600.00</Rate>
  </Currency>
</DailyExRates>"#;

fn stub_client(server: &MockServer) -> NbrbClient {
    NbrbClient::with_base_url(format!("{}/rates?ondate=", server.uri()))
}

#[tokio::test]
async fn filtered_pipeline_returns_matching_records_in_feed_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rates"))
        .and(query_param("ondate", "01/25/2012"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .mount(&server)
        .await;

    let client = stub_client(&server);
    let filter = vec!["USD".to_string(), "EUR".to_string()];
    let rates = client
        .daily_rates(Some(&filter), Some("01/25/2012"))
        .await
        .unwrap();

    assert_eq!(rates.len(), 2);
    assert_eq!(rates[0].short_name, "USD");
    assert_eq!(rates[0].code, "840");
    assert_eq!(rates[0].amount, 1);
    assert_relative_eq!(rates[0].rate, 8000.00);
    assert_eq!(rates[1].short_name, "EUR");
    assert_relative_eq!(rates[1].rate, 9600.00);
}

#[tokio::test]
async fn no_date_requests_the_base_url_unmodified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rates"))
        .and(query_param("ondate", ""))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .expect(1)
        .mount(&server)
        .await;

    let client = stub_client(&server);
    let rates = client.daily_rates(None, None).await.unwrap();

    assert_eq!(rates.len(), 3);
    assert_eq!(rates[0].short_name, "AUD");
}

#[tokio::test]
async fn typed_date_is_formatted_as_mm_dd_yyyy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rates"))
        .and(query_param("ondate", "01/25/2012"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .expect(1)
        .mount(&server)
        .await;

    let client = stub_client(&server);
    let date = NaiveDate::from_ymd_opt(2012, 1, 25).unwrap();
    let rates = client.daily_rates_on(None, date).await.unwrap();

    assert_eq!(rates.len(), 3);
}

#[tokio::test]
async fn server_error_surfaces_as_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rates"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = stub_client(&server);
    let result = client.daily_rates(None, None).await;

    assert!(matches!(result, Err(RatesError::Fetch(_))));
}

#[tokio::test]
async fn non_xml_body_surfaces_as_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rates"))
        .respond_with(ResponseTemplate::new(200).set_body_string("service unavailable"))
        .mount(&server)
        .await;

    let client = stub_client(&server);
    let result = client.daily_rates(None, None).await;

    assert!(matches!(result, Err(RatesError::Parse(_))));
}
