//! Integration tests for the wishlist controller and cart transfer.
//!
//! Two controllers sharing one store stand in for two screens of the same
//! app: changes made through either must show up in both mirrors.

use std::sync::Arc;
use std::time::Duration;

use hypercars_core::{CartEntry, ProductName};
use hypercars_integration_tests::entry;
use hypercars_wishlist::{
    CartBuffer, CartSink, ControllerError, Snapshot, WishlistController, WishlistStore,
};

async fn wait_until(controller: &WishlistController, check: impl Fn(&Snapshot) -> bool) {
    let mut rx = controller.watch();
    tokio::time::timeout(Duration::from_secs(1), rx.wait_for(|s| check(s)))
        .await
        .expect("mirror did not catch up")
        .expect("mirror stopped");
}

#[tokio::test]
async fn test_two_controllers_share_one_store() {
    let store = WishlistStore::new();
    let cart: Arc<dyn CartSink> = Arc::new(CartBuffer::new());
    let list_screen = WishlistController::new(store.clone(), Arc::clone(&cart)).await;
    let detail_screen = WishlistController::new(store.clone(), cart).await;

    assert!(detail_screen.add(entry("Chiron", 5_500_000)).await);
    wait_until(&list_screen, |s| s.len() == 1).await;

    assert!(!list_screen.add(entry("Chiron", 1)).await);
    list_screen.remove(&entry("Chiron", 0)).await;
    wait_until(&detail_screen, |s| s.is_empty()).await;
}

#[tokio::test]
async fn test_move_to_cart_builds_fresh_line() {
    let store = WishlistStore::new();
    let cart = CartBuffer::new();
    let controller = WishlistController::new(store, Arc::new(cart.clone())).await;
    controller.add(entry("Valkyrie", 3_200_000)).await;

    let id = controller
        .move_to_cart(&ProductName::from("Valkyrie"))
        .await
        .expect("move to cart");

    let lines: Vec<CartEntry> = cart.entries().await;
    assert_eq!(lines.len(), 1);
    let line = lines.first().expect("one line");
    assert_eq!(line.id, id);
    assert_eq!(line.name.as_str(), "Valkyrie");
    assert_eq!(line.quantity, 1);
    assert_eq!(line.image, "valkyrie.png");

    let json = serde_json::to_value(line).expect("serialize cart line");
    assert_eq!(json["quantity"], 1);
    assert_eq!(json["price"]["amount"], "3200000");
}

#[tokio::test]
async fn test_move_to_cart_after_remove_fails() {
    let store = WishlistStore::new();
    let cart = CartBuffer::new();
    let controller = WishlistController::new(store, Arc::new(cart.clone())).await;
    controller.add(entry("Valkyrie", 3_200_000)).await;
    controller.remove(&entry("Valkyrie", 0)).await;

    let result = controller.move_to_cart(&ProductName::from("Valkyrie")).await;
    assert!(matches!(result, Err(ControllerError::NotInWishlist(_))));
    assert!(cart.entries().await.is_empty());
}
