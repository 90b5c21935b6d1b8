//! Macro-generated contract suite for `Store` implementations.
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_create_and_get_customer`: create then retrieve
//! - `test_get_nonexistent`: unknown id returns None for every table
//! - `test_list_is_ordered_by_id`: listing follows id order
//! - `test_update_customer`: editable fields replaced
//! - `test_update_nonexistent`: unknown id is NotFound
//! - `test_delete_nonexistent`: unknown id is NotFound
//!
//! ## Orders
//! - `test_order_starts_pending`: new orders have no delivery date
//! - `test_order_requires_customer_and_product`: dangling references rejected
//! - `test_toggle_delivery_twice_restores_pending`
//! - `test_toggle_unknown_order`: NotFound for a missing order
//! - `test_delivery_listings_partition_orders`
//! - `test_update_keeps_delivery_date`
//!
//! ## Cascades
//! - `test_deleting_customer_removes_its_orders`
//! - `test_deleting_product_removes_its_orders`
//!
//! ## Edge Cases
//! - `test_concurrent_creates`: parallel creates get distinct ids

/// Generate a full `Store` conformance test suite.
///
/// `$factory` must be a future resolving to a fresh, empty store implementing
/// `Store + Clone + 'static`. It is re-evaluated for each test.
#[macro_export]
macro_rules! store_contract_tests {
    ($factory:expr) => {
        mod store_contract_tests {
            use super::*;
            use order_desk::core::error::{DeskError, EntityError};
            use order_desk::core::service::{DataService, OrderService};
            use order_desk::entities::{Customer, DeliveryFilter, Order, Product};
            use order_desk::entities::order::toggle_delivery;

            async fn seeded_order<S>(store: &S) -> (Customer, Product, Order)
            where
                S: order_desk::core::service::Store,
            {
                let customer = DataService::<Customer>::create(store, customer_fields("Marta"))
                    .await
                    .unwrap();
                let product = DataService::<Product>::create(store, product_fields("Alfajor"))
                    .await
                    .unwrap();
                let order =
                    DataService::<Order>::create(store, order_fields(customer.id, product.id))
                        .await
                        .unwrap();
                (customer, product, order)
            }

            fn assert_not_found(err: DeskError, expected_type: &str) {
                match err {
                    DeskError::Entity(EntityError::NotFound { entity_type, .. }) => {
                        assert_eq!(entity_type, expected_type)
                    }
                    other => panic!("expected NotFound({expected_type}), got {other:?}"),
                }
            }

            // ==================================================================
            // CRUD
            // ==================================================================

            #[tokio::test]
            async fn test_create_and_get_customer() {
                let store = $factory.await;
                let created = DataService::<Customer>::create(&store, customer_fields("Marta"))
                    .await
                    .unwrap();
                assert!(created.id > 0);
                assert_eq!(created.first_name, "Marta");

                let fetched = DataService::<Customer>::get(&store, created.id)
                    .await
                    .unwrap()
                    .expect("customer should exist");
                assert_eq!(fetched.id, created.id);
                assert_eq!(fetched.phone_number, "5551234");
                assert_eq!(fetched.email.as_deref(), Some("marta@example.com"));
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let store = $factory.await;
                assert!(DataService::<Customer>::get(&store, 404).await.unwrap().is_none());
                assert!(DataService::<Product>::get(&store, 404).await.unwrap().is_none());
                assert!(DataService::<Order>::get(&store, 404).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_list_is_ordered_by_id() {
                let store = $factory.await;
                for name in ["Tea", "Mate", "Alfajor"] {
                    DataService::<Product>::create(&store, product_fields(name))
                        .await
                        .unwrap();
                }
                let products = DataService::<Product>::list(&store).await.unwrap();
                assert_eq!(products.len(), 3);
                let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
                assert_eq!(names, vec!["Tea", "Mate", "Alfajor"]);
                assert!(products.windows(2).all(|w| w[0].id < w[1].id));
            }

            #[tokio::test]
            async fn test_update_customer() {
                let store = $factory.await;
                let created = DataService::<Customer>::create(&store, customer_fields("Marta"))
                    .await
                    .unwrap();

                let mut fields = customer_fields("Martina");
                fields.email = None;
                let updated = DataService::<Customer>::update(&store, created.id, fields)
                    .await
                    .unwrap();
                assert_eq!(updated.id, created.id);
                assert_eq!(updated.first_name, "Martina");
                assert_eq!(updated.email, None);
                assert_eq!(updated.created_at, created.created_at);
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let store = $factory.await;
                let err = DataService::<Product>::update(&store, 404, product_fields("Tea"))
                    .await
                    .unwrap_err();
                assert_not_found(err, "product");
            }

            #[tokio::test]
            async fn test_delete_nonexistent() {
                let store = $factory.await;
                let err = DataService::<Customer>::delete(&store, 404).await.unwrap_err();
                assert_not_found(err, "customer");
                let err = DataService::<Order>::delete(&store, 404).await.unwrap_err();
                assert_not_found(err, "order");
            }

            // ==================================================================
            // Orders
            // ==================================================================

            #[tokio::test]
            async fn test_order_starts_pending() {
                let store = $factory.await;
                let (customer, product, order) = seeded_order(&store).await;
                assert_eq!(order.delivered, None);
                assert_eq!(order.customer_id, customer.id);
                assert_eq!(order.product_id, product.id);
                assert_eq!(order.total_price().unwrap(), 4500);
            }

            #[tokio::test]
            async fn test_order_requires_customer_and_product() {
                let store = $factory.await;
                let product = DataService::<Product>::create(&store, product_fields("Tea"))
                    .await
                    .unwrap();
                let err = DataService::<Order>::create(&store, order_fields(404, product.id))
                    .await
                    .unwrap_err();
                assert_not_found(err, "customer");
                assert!(DataService::<Order>::list(&store).await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_toggle_delivery_twice_restores_pending() {
                let store = $factory.await;
                let (_, _, order) = seeded_order(&store).await;

                let delivered = toggle_delivery(&store, order.id).await.unwrap();
                assert!(delivered.delivered.is_some());

                let stored = DataService::<Order>::get(&store, order.id)
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(stored.delivered, delivered.delivered);

                let pending = toggle_delivery(&store, order.id).await.unwrap();
                assert_eq!(pending.delivered, None);
            }

            #[tokio::test]
            async fn test_toggle_unknown_order() {
                let store = $factory.await;
                let err = toggle_delivery(&store, 404).await.unwrap_err();
                assert_not_found(err, "order");
            }

            #[tokio::test]
            async fn test_delivery_listings_partition_orders() {
                let store = $factory.await;
                let (customer, product, first) = seeded_order(&store).await;
                let second =
                    DataService::<Order>::create(&store, order_fields(customer.id, product.id))
                        .await
                        .unwrap();
                let third =
                    DataService::<Order>::create(&store, order_fields(customer.id, product.id))
                        .await
                        .unwrap();
                toggle_delivery(&store, second.id).await.unwrap();

                let ids = |orders: Vec<Order>| orders.into_iter().map(|o| o.id).collect::<Vec<_>>();
                let all = ids(store.list_by_delivery(DeliveryFilter::All).await.unwrap());
                let pending = ids(store.list_by_delivery(DeliveryFilter::Pending).await.unwrap());
                let delivered =
                    ids(store.list_by_delivery(DeliveryFilter::Delivered).await.unwrap());

                assert_eq!(all, vec![first.id, second.id, third.id]);
                assert_eq!(pending, vec![first.id, third.id]);
                assert_eq!(delivered, vec![second.id]);
            }

            #[tokio::test]
            async fn test_update_keeps_delivery_date() {
                let store = $factory.await;
                let (customer, product, order) = seeded_order(&store).await;
                let delivered = toggle_delivery(&store, order.id).await.unwrap();

                let mut fields = order_fields(customer.id, product.id);
                fields.amount = 10;
                let updated = DataService::<Order>::update(&store, order.id, fields)
                    .await
                    .unwrap();
                assert_eq!(updated.amount, 10);
                assert_eq!(updated.delivered, delivered.delivered);
            }

            // ==================================================================
            // Cascades
            // ==================================================================

            #[tokio::test]
            async fn test_deleting_customer_removes_its_orders() {
                let store = $factory.await;
                let (customer, product, order) = seeded_order(&store).await;
                let other = DataService::<Customer>::create(&store, customer_fields("Pedro"))
                    .await
                    .unwrap();
                let kept = DataService::<Order>::create(&store, order_fields(other.id, product.id))
                    .await
                    .unwrap();

                DataService::<Customer>::delete(&store, customer.id)
                    .await
                    .unwrap();

                assert!(DataService::<Order>::get(&store, order.id).await.unwrap().is_none());
                let remaining = DataService::<Order>::list(&store).await.unwrap();
                assert_eq!(remaining.iter().map(|o| o.id).collect::<Vec<_>>(), vec![kept.id]);
                assert!(DataService::<Product>::get(&store, product.id).await.unwrap().is_some());
            }

            #[tokio::test]
            async fn test_deleting_product_removes_its_orders() {
                let store = $factory.await;
                let (customer, product, order) = seeded_order(&store).await;

                DataService::<Product>::delete(&store, product.id).await.unwrap();

                assert!(DataService::<Order>::get(&store, order.id).await.unwrap().is_none());
                assert!(DataService::<Customer>::get(&store, customer.id).await.unwrap().is_some());
            }

            // ==================================================================
            // Edge Cases
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_creates() {
                let store = $factory.await;
                let mut handles = Vec::new();
                for i in 0..10 {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move {
                        DataService::<Product>::create(&store, product_fields(&format!("Item {i}")))
                            .await
                            .unwrap()
                            .id
                    }));
                }

                let mut ids = Vec::new();
                for handle in handles {
                    ids.push(handle.await.unwrap());
                }
                ids.sort_unstable();
                ids.dedup();
                assert_eq!(ids.len(), 10);
                assert_eq!(DataService::<Product>::list(&store).await.unwrap().len(), 10);
            }
        }
    };
}
