//! End-to-end tests through the `Kitchen` orchestrator, building orders from
//! the provider catalog the way a collaborator would.

use std::collections::HashSet;
use std::sync::Once;
use std::time::Duration;

use kitchen_scheduler::catalog::default_catalog;
use kitchen_scheduler::kitchen::KitchenConfig;
use kitchen_scheduler::lifecycle::{setup_tracing, Kitchen};
use kitchen_scheduler::model::{Order, OrderStatus};

static TRACING: Once = Once::new();

fn init_tracing() {
    // The subscriber may only be installed once per process.
    TRACING.call_once(setup_tracing);
}

/// Full flow: pick an open provider, build a priced order from its menu,
/// watch it move through the kitchen, then shut down gracefully while a
/// second order is still preparing.
#[tokio::test(start_paused = true)]
async fn catalog_to_delivery_flow() {
    init_tracing();
    let kitchen = Kitchen::new(KitchenConfig::default());
    let client = kitchen.client();

    let catalog = default_catalog();
    let starbucks = &catalog[0];
    // The hours check is the collaborator's job; the kitchen never reads the
    // clock. 08:30 is well inside the breakfast window.
    assert!(starbucks.operating_hours.is_open_at(8 * 60 + 30));

    // 2x Cornetto (60s each) + 1x Caffè (30s): 3 items, 150s, $5.00.
    let mut order = Order::new();
    order.add_to_cart(starbucks.options[1].clone(), 2);
    order.add_to_cart(starbucks.options[0].clone(), 1);
    assert_eq!(order.preparation_time(), Duration::from_secs(150));
    assert_eq!(order.summary().total, 5.00);

    let first = client.submit(order).await.expect("submit failed");
    assert_eq!(
        client.status_of(first).await.unwrap(),
        OrderStatus::Preparing
    );

    // 2x Muffin: 2 items, does not fit next to the 3 already preparing.
    let mut second_order = Order::new();
    second_order.add_to_cart(starbucks.options[2].clone(), 2);
    let second = client.submit(second_order).await.expect("submit failed");
    assert_eq!(
        client.status_of(second).await.unwrap(),
        OrderStatus::Received
    );

    tokio::time::sleep(Duration::from_secs(151)).await;
    assert_eq!(
        client.status_of(first).await.unwrap(),
        OrderStatus::Delivering
    );
    assert_eq!(
        client.status_of(second).await.unwrap(),
        OrderStatus::Preparing
    );

    // Shutdown waits for the second order's preparation to finish; it only
    // completes once every client clone is gone.
    drop(client);
    kitchen.shutdown().await.expect("Failed to shutdown kitchen");
}

/// Concurrent submissions from cloned clients still get unique, gap-free ids
/// and all reach `Delivering` once capacity has cycled through them.
#[tokio::test(start_paused = true)]
async fn concurrent_submissions_keep_ids_unique() {
    init_tracing();
    let kitchen = Kitchen::new(KitchenConfig::default());
    let client = kitchen.client();

    let catalog = default_catalog();
    let caffe = catalog[0].options[0].clone(); // 30s each

    let mut handles = Vec::new();
    for _ in 0..10 {
        let client = kitchen.client();
        let item = caffe.clone();
        handles.push(tokio::spawn(async move {
            let mut order = Order::new();
            order.add_to_cart(item, 1);
            client.submit(order).await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let id = handle.await.unwrap().expect("submit failed");
        ids.insert(id);
    }
    assert_eq!(ids.len(), 10, "ids must never be reused");
    assert_eq!(*ids.iter().min().unwrap(), 1);
    assert_eq!(*ids.iter().max().unwrap(), 10);

    // 10 one-item orders through a 4-item kitchen: three admission waves of
    // 30s each.
    tokio::time::sleep(Duration::from_secs(91)).await;
    let all = client.list_all().await.unwrap();
    assert_eq!(all.len(), 10);
    assert!(all
        .iter()
        .all(|(_, status)| *status == OrderStatus::Delivering));

    drop(client);
    kitchen.shutdown().await.expect("Failed to shutdown kitchen");
}
