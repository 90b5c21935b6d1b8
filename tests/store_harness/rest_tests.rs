//! REST integration test macro for store backends.
//!
//! The `rest_contract_tests!` macro generates HTTP-level tests that drive a
//! store through the full router built by `ServerBuilder`:
//! request body → validation → handler → store → JSON response.
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_rest_create_customer`: POST 201 + JSON body
//! - `test_rest_create_from_form`: urlencoded submission accepted
//! - `test_rest_list_products`: GET list with count
//! - `test_rest_update_product`: PUT 200
//! - `test_rest_delete_customer_cascades`: DELETE 204, its orders gone
//!
//! ## Validation
//! - `test_rest_customer_validation_errors`: 422 with per-field messages
//! - `test_rest_order_placeholders_rejected`: select-list placeholders
//! - `test_rest_order_unknown_customer`: 404 for dangling reference
//! - `test_rest_order_unreadable_price_rejected`: 422, nothing stored
//! - `test_rest_order_reports_all_field_errors`: rule and format errors together
//!
//! ## Orders
//! - `test_rest_order_includes_total_and_names`
//! - `test_rest_toggle_delivery`
//! - `test_rest_list_orders_by_delivery`
//! - `test_rest_balance_sheets`
//!
//! ## Errors
//! - `test_rest_invalid_id`: 400
//! - `test_rest_not_found`: 404
//! - `test_rest_unknown_scope`: 400
//! - `test_rest_health`: service status and resources

/// Generate a REST integration test suite for a store backend.
///
/// `$factory` must be a future resolving to an `impl Store + 'static`.
#[macro_export]
macro_rules! rest_contract_tests {
    ($factory:expr) => {
        mod rest_contract_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use order_desk::server::ServerBuilder;
            use serde_json::{Value, json};

            async fn make_server() -> TestServer {
                let router = ServerBuilder::new()
                    .with_store($factory.await)
                    .without_request_tracing()
                    .build()
                    .unwrap();
                TestServer::try_new(router).unwrap()
            }

            async fn create(server: &TestServer, path: &str, body: Value) -> Value {
                let response = server.post(path).json(&body).await;
                response.assert_status(StatusCode::CREATED);
                response.json()
            }

            /// Customer 1, product 1 and one pending order for them
            async fn seed(server: &TestServer) -> (i64, i64, i64) {
                let customer = create(server, "/customers", customer_body("Marta")).await;
                let product = create(server, "/products", product_body("Alfajor")).await;
                let customer_id = customer["id"].as_i64().unwrap();
                let product_id = product["id"].as_i64().unwrap();
                let order = create(server, "/orders", order_body(customer_id, product_id)).await;
                (customer_id, product_id, order["id"].as_i64().unwrap())
            }

            // ==============================================================
            // CRUD
            // ==============================================================

            #[tokio::test]
            async fn test_rest_create_customer() {
                let server = make_server().await;
                let body = create(&server, "/customers", customer_body("Marta")).await;
                assert!(body["id"].as_i64().unwrap() > 0);
                assert_eq!(body["first_name"], "Marta");
                assert_eq!(body["last_name"], "Rojas");
                assert_eq!(body["email"], Value::Null);
            }

            #[tokio::test]
            async fn test_rest_create_from_form() {
                let server = make_server().await;
                let response = server
                    .post("/products")
                    .form(&[("name", "Mate cocido"), ("description", "")])
                    .await;
                response.assert_status(StatusCode::CREATED);
                let body: Value = response.json();
                assert_eq!(body["name"], "Mate cocido");
                assert_eq!(body["description"], Value::Null);
            }

            #[tokio::test]
            async fn test_rest_list_products() {
                let server = make_server().await;
                create(&server, "/products", product_body("Tea")).await;
                create(&server, "/products", product_body("Mate")).await;

                let response = server.get("/products").await;
                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["count"], 2);
                assert_eq!(body["products"][0]["name"], "Tea");
                assert_eq!(body["products"][1]["name"], "Mate");
            }

            #[tokio::test]
            async fn test_rest_update_product() {
                let server = make_server().await;
                let product = create(&server, "/products", product_body("Tea")).await;
                let id = product["id"].as_i64().unwrap();

                let response = server
                    .put(&format!("/products/{id}"))
                    .json(&json!({ "name": "Green tea" }))
                    .await;
                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["name"], "Green tea");
                assert_eq!(body["description"], Value::Null);
            }

            #[tokio::test]
            async fn test_rest_delete_customer_cascades() {
                let server = make_server().await;
                let (customer_id, _, order_id) = seed(&server).await;

                server
                    .delete(&format!("/customers/{customer_id}"))
                    .await
                    .assert_status(StatusCode::NO_CONTENT);
                server
                    .get(&format!("/customers/{customer_id}"))
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
                server
                    .get(&format!("/orders/{order_id}"))
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }

            // ==============================================================
            // Validation
            // ==============================================================

            #[tokio::test]
            async fn test_rest_customer_validation_errors() {
                let server = make_server().await;
                let response = server
                    .post("/customers")
                    .json(&json!({ "first_name": "Ana", "phone_number": "12345" }))
                    .await;
                response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
                let body: Value = response.json();
                assert_eq!(body["code"], "VALIDATION_ERROR");
                assert_eq!(
                    body["details"]["fields"]["first_name"],
                    "minimum 3 characters for the username field"
                );
                assert_eq!(
                    body["details"]["fields"]["phone_number"],
                    "minimum 6 digits for phone number"
                );

                let list: Value = server.get("/customers").await.json();
                assert_eq!(list["count"], 0);
            }

            #[tokio::test]
            async fn test_rest_order_placeholders_rejected() {
                let server = make_server().await;
                let response = server
                    .post("/orders")
                    .form(&[
                        ("product_id", "Lista de productos"),
                        ("customer_id", "Lista de clientes"),
                        ("amount", "0"),
                        ("price", "12"),
                        ("deadline", "2024-05-20"),
                    ])
                    .await;
                response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
                let body: Value = response.json();
                let fields = &body["details"]["fields"];
                assert_eq!(fields["product_id"], "choose a product for the order");
                assert_eq!(fields["customer_id"], "choose a customer for the order");
                assert_eq!(fields["amount"], "enter an amount");
                assert_eq!(fields["price"], "enter a price");
            }

            #[tokio::test]
            async fn test_rest_order_unknown_customer() {
                let server = make_server().await;
                let product = create(&server, "/products", product_body("Tea")).await;
                let response = server
                    .post("/orders")
                    .json(&order_body(99, product["id"].as_i64().unwrap()))
                    .await;
                response.assert_status(StatusCode::NOT_FOUND);
                let body: Value = response.json();
                assert_eq!(body["details"]["entity_type"], "customer");
            }

            #[tokio::test]
            async fn test_rest_order_unreadable_price_rejected() {
                let server = make_server().await;
                let customer = create(&server, "/customers", customer_body("Marta")).await;
                let product = create(&server, "/products", product_body("Tea")).await;
                let mut body = order_body(
                    customer["id"].as_i64().unwrap(),
                    product["id"].as_i64().unwrap(),
                );
                body["price"] = json!("abcd");

                let response = server.post("/orders").json(&body).await;
                response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
                let error: Value = response.json();
                assert_eq!(error["code"], "VALIDATION_ERROR");
                assert_eq!(
                    error["details"]["fields"]["price"],
                    "enter the price as a number"
                );

                let list: Value = server.get("/orders").await.json();
                assert_eq!(list["count"], 0);
            }

            #[tokio::test]
            async fn test_rest_order_reports_all_field_errors() {
                let server = make_server().await;
                let response = server
                    .post("/orders")
                    .form(&[
                        ("product_id", "1"),
                        ("customer_id", "1"),
                        ("amount", "0"),
                        ("price", "1500"),
                        ("deadline", "not-a-date"),
                    ])
                    .await;
                response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
                let body: Value = response.json();
                let fields = &body["details"]["fields"];
                assert_eq!(fields["amount"], "enter an amount");
                assert_eq!(fields["deadline"], "enter a deadline as YYYY-MM-DD");
            }

            // ==============================================================
            // Orders
            // ==============================================================

            #[tokio::test]
            async fn test_rest_order_includes_total_and_names() {
                let server = make_server().await;
                let (_, _, order_id) = seed(&server).await;

                let response = server.get(&format!("/orders/{order_id}")).await;
                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["amount"], 3);
                assert_eq!(body["price"], "1500");
                assert_eq!(body["total_price"], 4500);
                assert_eq!(body["deadline"], "2024-05-20");
                assert_eq!(body["delivered"], Value::Null);
                assert_eq!(body["customer_name"], "Marta Rojas");
                assert_eq!(body["product_name"], "Alfajor");
            }

            #[tokio::test]
            async fn test_rest_toggle_delivery() {
                let server = make_server().await;
                let (_, _, order_id) = seed(&server).await;
                let path = format!("/orders/{order_id}/delivery");

                let first: Value = server.post(&path).await.json();
                assert!(first["delivered"].is_string());

                let second: Value = server.post(&path).await.json();
                assert_eq!(second["delivered"], Value::Null);
            }

            #[tokio::test]
            async fn test_rest_list_orders_by_delivery() {
                let server = make_server().await;
                let (customer_id, product_id, first) = seed(&server).await;
                let second = create(&server, "/orders", order_body(customer_id, product_id)).await;
                let second = second["id"].as_i64().unwrap();
                server.post(&format!("/orders/{second}/delivery")).await.assert_status_ok();

                let pending: Value = server
                    .get("/orders")
                    .add_query_param("delivery", "pending")
                    .await
                    .json();
                assert_eq!(pending["count"], 1);
                assert_eq!(pending["orders"][0]["id"], first);

                let delivered: Value = server
                    .get("/orders")
                    .add_query_param("delivery", "delivered")
                    .await
                    .json();
                assert_eq!(delivered["count"], 1);
                assert_eq!(delivered["orders"][0]["id"], second);

                let all: Value = server.get("/orders").await.json();
                assert_eq!(all["count"], 2);
            }

            #[tokio::test]
            async fn test_rest_balance_sheets() {
                let server = make_server().await;
                let (customer_id, product_id, _) = seed(&server).await;
                let mut cheap = order_body(customer_id, product_id);
                cheap["price"] = json!("0200");
                cheap["amount"] = json!(1);
                let cheap = create(&server, "/orders", cheap).await;
                let cheap_id = cheap["id"].as_i64().unwrap();
                server
                    .post(&format!("/orders/{cheap_id}/delivery"))
                    .await
                    .assert_status_ok();

                let all: Value = server.get("/balance-sheets/all").await.json();
                assert_eq!(all["scope"], "all");
                assert_eq!(all["count"], 2);
                assert_eq!(all["total"], 4700);
                assert_eq!(all["unpriced"], 0);

                let pending: Value = server.get("/balance-sheets/pending").await.json();
                assert_eq!(pending["count"], 1);
                assert_eq!(pending["total"], 4500);

                let delivered: Value = server.get("/balance-sheets/delivered").await.json();
                assert_eq!(delivered["count"], 1);
                assert_eq!(delivered["total"], 200);
            }

            // ==============================================================
            // Errors
            // ==============================================================

            #[tokio::test]
            async fn test_rest_invalid_id() {
                let server = make_server().await;
                let response = server.get("/customers/not-a-number").await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["code"], "INVALID_ID");
            }

            #[tokio::test]
            async fn test_rest_not_found() {
                let server = make_server().await;
                server
                    .get("/products/404")
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
                server
                    .post("/orders/404/delivery")
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }

            #[tokio::test]
            async fn test_rest_unknown_scope() {
                let server = make_server().await;
                let response = server.get("/balance-sheets/shipped").await;
                response.assert_status(StatusCode::BAD_REQUEST);
                let response = server
                    .get("/orders")
                    .add_query_param("delivery", "shipped")
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);
            }

            #[tokio::test]
            async fn test_rest_health() {
                let server = make_server().await;
                let body: Value = server.get("/health").await.json();
                assert_eq!(body["status"], "ok");
                assert_eq!(body["resources"], json!(["customers", "orders", "products"]));
            }
        }
    };
}
