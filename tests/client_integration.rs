//! End-to-end tests: a live server on a loopback port driven by `CartClient`.

use std::time::Duration;

use cart_service::cart::{AppState, Cart, Item, SharedState};
use cart_service::client::{CartClient, ClientError};
use cart_service::server;
use futures_util::future::join_all;
use tokio::sync::oneshot;

struct TestServer {
    addr: String,
    state: SharedState,
    stop: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = server::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        let state = AppState::shared();
        let (stop, stopped) = oneshot::channel::<()>();

        let handle = tokio::spawn({
            let state = state.clone();
            async move {
                server::serve(listener, state, async move {
                    _ = stopped.await;
                })
                .await
                .unwrap();
            }
        });

        Self {
            addr,
            state,
            stop: Some(stop),
            handle,
        }
    }

    fn client(&self) -> CartClient {
        CartClient::new(&self.addr, Duration::from_secs(1)).unwrap()
    }

    async fn shutdown(mut self) {
        if let Some(stop) = self.stop.take() {
            _ = stop.send(());
        }
        self.handle.await.unwrap();
    }
}

fn apple() -> Item {
    Item {
        id: "1".into(),
        name: "apple".into(),
        quantity: 1,
        price: 10.0,
    }
}

#[tokio::test]
async fn test_demo_scenario() {
    let server = TestServer::start().await;
    let client = server.client();

    let added = client.add_item("1", apple()).await.unwrap();
    assert_eq!(added, Cart::with_item("1", apple()));

    let fetched = client.get_cart("1").await.unwrap();
    assert_eq!(fetched, Some(Cart::with_item("1", apple())));

    drop(client);
    server.shutdown().await;
}

#[tokio::test]
async fn test_absent_carts() {
    let server = TestServer::start().await;
    let client = server.client();

    assert_eq!(client.get_cart("nobody").await.unwrap(), None);
    assert_eq!(client.remove_item("nobody", "1").await.unwrap(), None);

    drop(client);
    server.shutdown().await;
}

#[tokio::test]
async fn test_remove_item_round_trip() {
    let server = TestServer::start().await;
    let client = server.client();

    client.add_item("r", apple()).await.unwrap();
    let cart = client.remove_item("r", "1").await.unwrap().unwrap();
    assert!(cart.items.is_empty());
    assert_eq!(client.get_cart("r").await.unwrap(), Some(cart));

    drop(client);
    server.shutdown().await;
}

#[tokio::test]
async fn test_clear_cart_reports_rpc_error() {
    let server = TestServer::start().await;
    let client = server.client();

    let err = client.clear_cart("1").await.unwrap_err();
    match err {
        ClientError::Rpc { code, message } => {
            assert_eq!(code, -32001);
            assert!(message.contains("ClearCart"));
        }
        other => panic!("unexpected error: {other}"),
    }

    drop(client);
    server.shutdown().await;
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Grab a free port, then release it so nothing is listening there.
    let listener = server::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    drop(listener);

    let client = CartClient::new(&addr, Duration::from_millis(500)).unwrap();
    let err = client.get_cart("1").await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn test_concurrent_calls_do_not_lose_carts() {
    let server = TestServer::start().await;
    let client = server.client();

    let adds = (0..64).map(|i| {
        let client = &client;
        async move {
            let item = Item {
                id: format!("item-{i}"),
                name: "widget".into(),
                quantity: i,
                price: 1.0,
            };
            client.add_item(&format!("cart-{}", i % 8), item).await
        }
    });

    for result in join_all(adds).await {
        let cart = result.unwrap();
        assert_eq!(cart.items.len(), 1, "existing carts never grow");
    }
    assert_eq!(server.state.store.len(), 8);

    let removals = (0..8).map(|c| {
        let client = &client;
        async move {
            let cart_id = format!("cart-{c}");
            let first = client.get_cart(&cart_id).await?.unwrap();
            client.remove_item(&cart_id, &first.items[0].id).await
        }
    });

    for result in join_all(removals).await {
        let cart = result.unwrap().unwrap();
        assert!(cart.items.is_empty());
    }
    assert_eq!(server.state.store.len(), 8);

    drop(client);
    server.shutdown().await;
}
