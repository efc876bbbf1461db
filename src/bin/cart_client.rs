//! Demo client: adds one item to a cart and reads the cart back.

use cart_service::{
    cart::{
        helpers::{cart_total, format_item_summary},
        Cart, Item,
    },
    client::{CartClient, ClientError},
    config::ClientConfig,
    observability,
};
use std::process;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = ClientConfig::load().unwrap_or_else(|e| e.exit());

    if let Err(e) = observability::init(&config.logging) {
        eprintln!("{e}");
        process::exit(1);
    }

    if let Err(e) = run(&config).await {
        error!("{e}");
        process::exit(1);
    }
}

async fn run(config: &ClientConfig) -> Result<(), ClientError> {
    let client = CartClient::new(&config.addr, config.timeout())?;
    info!("connecting to {}", client.endpoint());

    let item = Item {
        id: "1".into(),
        name: "apple".into(),
        quantity: 1,
        price: 10.0,
    };

    let cart = client.add_item(&config.cart_id, item).await?;
    log_cart("AddItem", Some(&cart));

    let cart = client.get_cart(&config.cart_id).await?;
    log_cart("GetCart", cart.as_ref());

    Ok(())
}

fn log_cart(operation: &str, cart: Option<&Cart>) {
    match cart {
        Some(cart) => info!(
            "{operation}: cart {} [{}] total {:.2}",
            cart.id,
            format_item_summary(&cart.items),
            cart_total(&cart.items)
        ),
        None => info!("{operation}: no cart"),
    }
}
