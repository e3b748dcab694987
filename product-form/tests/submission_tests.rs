use product_form::client::ProductClient;
use product_form::config::ClientConfig;
use product_form::error::SubmitError;
use product_form::forms::{FieldId, FieldValue, ManagedSubmitter, NativeForm, UncontrolledSubmitter};
use product_form::payload::{build_payload, ProductFields};
use product_form::submission::{API_FAILURE_MESSAGE, SUCCESS_MESSAGE, TRANSPORT_FAILURE_MESSAGE};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn client_for(server: &MockServer) -> ProductClient {
    let config = ClientConfig::with_endpoint(&format!("{}/products", server.uri()))
        .expect("mock server uri is a valid URL");
    ProductClient::new(config)
}

/// An endpoint nothing listens on.
fn refused_client() -> ProductClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    ProductClient::new(ClientConfig::with_endpoint(&format!("http://127.0.0.1:{port}/products")).unwrap())
}

fn fill_native(form: &mut NativeForm) {
    *form.name_mut() = "  Widget  ".to_string();
    *form.price_mut() = "9.99".to_string();
    *form.quantity_mut() = "7".to_string();
    *form.description_mut() = "   ".to_string();
    *form.barcode_mut() = " 0123456789 ".to_string();
}

fn fill_managed(submitter: &mut ManagedSubmitter) {
    submitter.change(FieldId::Name, FieldValue::Text("Widget".to_string()));
    submitter.change(FieldId::Price, FieldValue::Text("9.99".to_string()));
    submitter.change(FieldId::Quantity, FieldValue::Text("7".to_string()));
    submitter.change(FieldId::Featured, FieldValue::Checked(true));
}

async fn mount(server: &MockServer, status: u16, body: Value, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/products"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_native_created_resets_form() {
    init_logging();
    let server = MockServer::start().await;
    mount(&server, 201, json!({"id": "srv-1"}), 1).await;

    let mut submitter = UncontrolledSubmitter::new(client_for(&server));
    fill_native(submitter.form_mut());

    let result = submitter.submit().await;

    assert_eq!(result, Some(Ok(SUCCESS_MESSAGE)));
    assert_eq!(submitter.status().message, "Product created successfully ✅");
    assert!(!submitter.status().loading);
    assert_eq!(submitter.form(), &NativeForm::new());

    let requests = server.received_requests().await.unwrap();
    let body: Value = requests[0].body_json().unwrap();
    assert_eq!(body["name"], "Widget");
    assert_eq!(body["description"], Value::Null);
    assert_eq!(body["barcode"], "0123456789");
    assert_eq!(body["quantity"], 7);
    assert_eq!(body["images"], "");
    assert_eq!(body["published"], true);
    assert_eq!(body["createdAt"], body["updatedAt"]);
}

#[tokio::test]
async fn test_native_rejection_keeps_values() {
    init_logging();
    let server = MockServer::start().await;
    mount(&server, 400, json!({"error": "invalid price"}), 1).await;

    let mut submitter = UncontrolledSubmitter::new(client_for(&server));
    fill_native(submitter.form_mut());

    let result = submitter.submit().await;

    assert_eq!(result, Some(Err(API_FAILURE_MESSAGE)));
    assert_eq!(submitter.status().message, "Failed to create product");
    assert!(!submitter.status().loading);
    assert_eq!(submitter.form().snapshot().name, "  Widget  ");
    assert_eq!(submitter.form().snapshot().price, "9.99");
}

#[tokio::test]
async fn test_native_connection_refused() {
    init_logging();
    let mut submitter = UncontrolledSubmitter::new(refused_client());
    fill_native(submitter.form_mut());

    let result = submitter.submit().await;

    assert_eq!(result, Some(Err(TRANSPORT_FAILURE_MESSAGE)));
    assert_eq!(submitter.status().message, "Something went wrong");
    assert!(!submitter.status().loading);
    assert_eq!(submitter.form().snapshot().quantity, "7");
}

#[tokio::test]
async fn test_native_invalid_form_sends_nothing() {
    init_logging();
    let server = MockServer::start().await;
    mount(&server, 201, json!({}), 0).await;

    let mut submitter = UncontrolledSubmitter::new(client_for(&server));
    fill_native(submitter.form_mut());
    *submitter.form_mut().price_mut() = "twelve".to_string();

    assert_eq!(submitter.submit().await, None);
    assert_eq!(submitter.violations().len(), 1);
    assert_eq!(submitter.violations()[0].field, "price");
}

#[tokio::test]
async fn test_managed_created_resets_model() {
    init_logging();
    let server = MockServer::start().await;
    mount(&server, 201, json!({"id": "srv-2"}), 1).await;

    let mut submitter = ManagedSubmitter::new(client_for(&server));
    fill_managed(&mut submitter);

    let result = submitter.submit().await;

    assert_eq!(result, Some(Ok(SUCCESS_MESSAGE)));
    assert_eq!(submitter.model().text(FieldId::Name), "");
    assert!(!submitter.model().checked(FieldId::Featured));
    assert!(submitter.model().checked(FieldId::Published));

    let requests = server.received_requests().await.unwrap();
    let body: Value = requests[0].body_json().unwrap();
    assert_eq!(body["featured"], true);
    assert_eq!(body["price"], 9.99);
}

#[tokio::test]
async fn test_managed_rejection_keeps_values() {
    init_logging();
    let server = MockServer::start().await;
    mount(&server, 400, json!({"error": "invalid price"}), 1).await;

    let mut submitter = ManagedSubmitter::new(client_for(&server));
    fill_managed(&mut submitter);

    assert_eq!(submitter.submit().await, Some(Err(API_FAILURE_MESSAGE)));
    assert_eq!(submitter.model().text(FieldId::Price), "9.99");
    assert!(!submitter.status().loading);
}

#[tokio::test]
async fn test_managed_empty_name_sends_nothing() {
    init_logging();
    let server = MockServer::start().await;
    mount(&server, 201, json!({}), 0).await;

    let mut submitter = ManagedSubmitter::new(client_for(&server));
    fill_managed(&mut submitter);
    submitter.change(FieldId::Name, FieldValue::Text(String::new()));

    assert_eq!(submitter.submit().await, None);
    assert_eq!(
        submitter.model().error(FieldId::Name),
        Some("Product name is required")
    );
}

#[tokio::test]
async fn test_managed_connection_refused() {
    init_logging();
    let mut submitter = ManagedSubmitter::new(refused_client());
    fill_managed(&mut submitter);

    assert_eq!(submitter.submit().await, Some(Err(TRANSPORT_FAILURE_MESSAGE)));
    assert!(!submitter.status().loading);
}

fn widget_payload() -> product_form::payload::ProductInput {
    build_payload(&ProductFields {
        name: "Widget".to_string(),
        price: "1".to_string(),
        quantity: "1".to_string(),
        ..ProductFields::default()
    })
    .unwrap()
}

async fn mount_text(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_non_json_created_body_is_malformed() {
    init_logging();
    let server = MockServer::start().await;
    mount_text(&server, 201, "created").await;

    match client_for(&server).create_product(&widget_payload()).await {
        Err(SubmitError::MalformedResponse { status, .. }) => assert_eq!(status.as_u16(), 201),
        other => panic!("expected malformed response, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_created_body_reports_something_went_wrong() {
    init_logging();
    let server = MockServer::start().await;
    mount_text(&server, 201, "created").await;

    let message = product_form::submission::submit(&client_for(&server), &widget_payload()).await;
    assert_eq!(message, Err(TRANSPORT_FAILURE_MESSAGE));
}

#[tokio::test]
async fn test_non_json_error_body_is_not_an_api_rejection() {
    init_logging();
    let server = MockServer::start().await;
    mount_text(&server, 502, "<html>Bad Gateway</html>").await;

    let mut submitter = ManagedSubmitter::new(client_for(&server));
    fill_managed(&mut submitter);

    assert_eq!(submitter.submit().await, Some(Err(TRANSPORT_FAILURE_MESSAGE)));
    assert_eq!(submitter.status().message, "Something went wrong");
    assert_eq!(submitter.model().text(FieldId::Name), "Widget");
}

#[tokio::test]
async fn test_api_error_carries_body() {
    init_logging();
    let server = MockServer::start().await;
    mount(&server, 422, json!({"error": "invalid price"}), 1).await;

    match client_for(&server).create_product(&widget_payload()).await {
        Err(SubmitError::Api { status, body }) => {
            assert_eq!(status.as_u16(), 422);
            assert_eq!(body, json!({"error": "invalid price"}));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}
