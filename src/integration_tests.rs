#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::mpsc;

    use crate::actor_framework::ResourceRequest;
    use crate::clients::{ItemClient, OrderClient, UserClient};
    use crate::domain::{Item, ItemCreate, Order, OrderCreate, User};
    use crate::mock_framework::{create_mock_client, expect_create, expect_get};
    use crate::order_actor::OrderError;
    use crate::predictor::PricePredictor;

    struct NoPrediction;

    #[async_trait]
    impl PricePredictor for NoPrediction {
        async fn predict(&self, _item: &ItemCreate) -> Option<f64> {
            None
        }
    }

    struct Mocks {
        order_client: OrderClient,
        user_rx: mpsc::Receiver<ResourceRequest<User>>,
        item_rx: mpsc::Receiver<ResourceRequest<Item>>,
        order_rx: mpsc::Receiver<ResourceRequest<Order>>,
    }

    fn setup() -> Mocks {
        let (user_inner, user_rx) = create_mock_client::<User>(10);
        let (item_inner, item_rx) = create_mock_client::<Item>(10);
        let (order_inner, order_rx) = create_mock_client::<Order>(10);

        let user_client = UserClient::new(user_inner);
        let item_client = ItemClient::new(item_inner, Arc::new(NoPrediction));
        let order_client = OrderClient::new(order_inner, user_client, item_client);

        Mocks { order_client, user_rx, item_rx, order_rx }
    }

    fn shoe(id: i64) -> Item {
        Item {
            id,
            name: "Shoe".into(),
            description: "desc".into(),
            category: "Shoes".into(),
            price: 19.99,
        }
    }

    #[tokio::test]
    async fn test_order_creation_flow() {
        let Mocks { order_client, mut user_rx, mut item_rx, mut order_rx } = setup();

        let order_task = tokio::spawn(async move {
            order_client.create_order(OrderCreate { user_id: 1, item_id: 2 }).await
        });

        // Expect User Get
        let (user_id, responder) = expect_get(&mut user_rx).await.expect("Expected User Get");
        assert_eq!(user_id, 1);
        responder.send(Ok(Some(User { id: 1, username: "alice".into() }))).unwrap();

        // Expect Item Get
        let (item_id, responder) = expect_get(&mut item_rx).await.expect("Expected Item Get");
        assert_eq!(item_id, 2);
        responder.send(Ok(Some(shoe(2)))).unwrap();

        // Expect Order Create
        let (payload, responder) = expect_create(&mut order_rx).await.expect("Expected Order Create");
        assert_eq!(payload.user_id, 1);
        assert_eq!(payload.item_id, 2);
        responder.send(Ok(Order { id: 1, user_id: 1, item_id: 2 })).unwrap();

        let result = order_task.await.unwrap();
        assert_eq!(result, Ok(Order { id: 1, user_id: 1, item_id: 2 }));
    }

    #[tokio::test]
    async fn test_unknown_user_never_reaches_order_actor() {
        let Mocks { order_client, mut user_rx, item_rx: _item_rx, mut order_rx } = setup();

        let order_task = tokio::spawn(async move {
            order_client.create_order(OrderCreate { user_id: 99, item_id: 1 }).await
        });

        let (_, responder) = expect_get(&mut user_rx).await.expect("Expected User Get");
        responder.send(Ok(None)).unwrap();

        assert_eq!(order_task.await.unwrap(), Err(OrderError::InvalidUser(99)));

        // The client was dropped with the task, so the order channel is closed and empty.
        assert!(order_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_unknown_item_never_reaches_order_actor() {
        let Mocks { order_client, mut user_rx, mut item_rx, mut order_rx } = setup();

        let order_task = tokio::spawn(async move {
            order_client.create_order(OrderCreate { user_id: 1, item_id: 5 }).await
        });

        let (_, responder) = expect_get(&mut user_rx).await.expect("Expected User Get");
        responder.send(Ok(Some(User { id: 1, username: "alice".into() }))).unwrap();

        let (_, responder) = expect_get(&mut item_rx).await.expect("Expected Item Get");
        responder.send(Ok(None)).unwrap();

        assert_eq!(order_task.await.unwrap(), Err(OrderError::InvalidItem(5)));
        assert!(order_rx.recv().await.is_none());
    }
}
