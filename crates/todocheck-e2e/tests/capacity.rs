//! Capacity scenarios
//!
//! The page caps the list at a fixed number of active entries (3 as
//! shipped, `capacity` in the suite configuration). The submit button is
//! visible exactly while the count is below the cap; at the cap, input
//! has no effect and no identifier past the cap is ever assigned.

use todocheck_browser::page::ITEM_INPUT;
use todocheck_browser::{Driver, TodoPage};
use todocheck_core::ItemId;
use todocheck_e2e::Fixture;

#[tokio::test]
#[ignore = "requires a local Chrome/Chromium and the todo page under test"]
async fn add_button_visibility_tracks_count_up_to_capacity() {
    let fixture = Fixture::from_workspace().expect("suite configuration should load");
    let session = fixture.acquire().await.expect("session should start on the configured page");
    let page = TodoPage::new(&session);

    let capacity = fixture.capacity();
    for n in 0..capacity {
        assert_eq!(
            page.item_count().await.expect("count entries"),
            n,
            "Visible count should equal the number of adds so far"
        );
        assert!(
            page.add_button_visible().await.expect("read add button visibility"),
            "Add button should be visible while below capacity ({} of {})",
            n,
            capacity
        );
        page.add_item(&format!("Task {}", n + 1)).await.expect("add should succeed");
    }

    assert_eq!(page.item_count().await.expect("count entries"), capacity);
    assert!(
        !page.add_button_visible().await.expect("read add button visibility"),
        "Add button should be hidden once the list is at capacity"
    );
}

#[tokio::test]
#[ignore = "requires a local Chrome/Chromium and the todo page under test"]
async fn input_at_capacity_creates_no_entry() {
    let fixture = Fixture::from_workspace().expect("suite configuration should load");
    let session = fixture.acquire().await.expect("session should start on the configured page");
    let page = TodoPage::new(&session);

    let capacity = fixture.capacity();
    for n in 0..capacity {
        page.add_item(&format!("Task {}", n + 1)).await.expect("add should succeed");
    }

    assert!(
        !page.add_button_visible().await.expect("read add button visibility"),
        "Add button should be hidden once {} entries exist",
        capacity
    );

    // The submit control is hidden, so the closest a user gets is typing.
    // Nothing may come of it.
    session.clear(ITEM_INPUT).await.expect("clear input");
    session
        .type_into(ITEM_INPUT, "Should NOT be added")
        .await
        .expect("type into input");

    assert_eq!(
        page.item_count().await.expect("count entries"),
        capacity,
        "Count must not grow past capacity"
    );
    assert!(
        !page
            .item_present(ItemId(capacity as u32 + 1))
            .await
            .expect("check for an entry past capacity"),
        "No identifier past the capacity-th may ever be assigned"
    );
}

#[tokio::test]
#[ignore = "requires a local Chrome/Chromium and the todo page under test"]
async fn deleting_at_capacity_lets_exactly_one_more_add_through() {
    let fixture = Fixture::from_workspace().expect("suite configuration should load");
    let session = fixture.acquire().await.expect("session should start on the configured page");
    let page = TodoPage::new(&session);

    let capacity = fixture.capacity();
    for n in 0..capacity {
        page.add_item(&format!("Task {}", n + 1)).await.expect("add should succeed");
    }

    page.delete_item(ItemId(1)).await.expect("delete should succeed");
    assert!(
        page.add_button_visible().await.expect("read add button visibility"),
        "Add button should reappear after an entry is deleted"
    );

    page.add_item("Task 4").await.expect("add should succeed again");
    assert_eq!(
        page.item_count().await.expect("count entries"),
        capacity,
        "The count should return to capacity, not exceed it"
    );

    // The freed identifier is not reused; the new entry takes the next one
    assert_eq!(
        page.item_ids_in_order().await.expect("list entry ids"),
        vec!["item2", "item3", "item4"]
    );
}
