use crate::db::*;
use crate::types::{ItemId, Status};
use tempfile::NamedTempFile;

async fn test_db() -> (Database, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let db = Database::new(temp_file.path()).await.unwrap();
    (db, temp_file)
}

fn new_item(title: &str, path: &str) -> NewItem {
    NewItem {
        title: title.to_string(),
        path: path.to_string(),
        status: Status::Downloaded,
    }
}

#[tokio::test]
async fn test_insert_and_get_item() {
    let (db, _guard) = test_db().await;

    let id = db
        .insert_item(&new_item("Big Buck Bunny", "/media/bbb.mp4"))
        .await
        .unwrap();
    assert!(id.0 > 0);

    let item = db.get_item(id).await.unwrap().unwrap();
    assert_eq!(item.id, id.0);
    assert_eq!(item.title, "Big Buck Bunny");
    assert_eq!(item.status, Status::Downloaded);
    assert_eq!(item.path, "/media/bbb.mp4");
    assert!(item.artifact_path.is_none());
    assert!(item.leased_at.is_none());
    assert!(item.created_at > 0);

    db.close().await;
}

#[tokio::test]
async fn test_get_missing_item_is_none() {
    let (db, _guard) = test_db().await;

    let item = db.get_item(ItemId(9999)).await.unwrap();
    assert!(item.is_none());

    db.close().await;
}

#[tokio::test]
async fn test_list_items_newest_first() {
    let (db, _guard) = test_db().await;

    for i in 0..3 {
        db.insert_item(&new_item(
            &format!("Item {}", i),
            &format!("/media/item{}.mp4", i),
        ))
        .await
        .unwrap();
    }

    let items = db.list_items().await.unwrap();
    assert_eq!(items.len(), 3);

    // Equal timestamps fall back to id DESC, so insertion order reverses
    assert_eq!(items[0].title, "Item 2");
    assert_eq!(items[1].title, "Item 1");
    assert_eq!(items[2].title, "Item 0");

    db.close().await;
}

#[tokio::test]
async fn test_update_item_title_only() {
    let (db, _guard) = test_db().await;

    let id = db
        .insert_item(&new_item("Old Title", "/media/a.mp4"))
        .await
        .unwrap();

    let updated = db.update_item(id, Some("New Title"), None).await.unwrap();
    assert!(updated);

    let item = db.get_item(id).await.unwrap().unwrap();
    assert_eq!(item.title, "New Title");
    // Untouched field keeps its value
    assert_eq!(item.status, Status::Downloaded);

    db.close().await;
}

#[tokio::test]
async fn test_update_item_status_only() {
    let (db, _guard) = test_db().await;

    let id = db
        .insert_item(&new_item("Reset Me", "/media/b.mp4"))
        .await
        .unwrap();

    let updated = db
        .update_item(id, None, Some(Status::PendingPreview))
        .await
        .unwrap();
    assert!(updated);

    let item = db.get_item(id).await.unwrap().unwrap();
    assert_eq!(item.status, Status::PendingPreview);
    assert_eq!(item.title, "Reset Me");

    db.close().await;
}

#[tokio::test]
async fn test_update_missing_item_returns_false() {
    let (db, _guard) = test_db().await;

    let updated = db
        .update_item(ItemId(404), Some("ghost"), None)
        .await
        .unwrap();
    assert!(!updated);

    db.close().await;
}

#[tokio::test]
async fn test_delete_item() {
    let (db, _guard) = test_db().await;

    let id = db
        .insert_item(&new_item("Doomed", "/media/doomed.mp4"))
        .await
        .unwrap();

    assert!(db.delete_item(id).await.unwrap());
    assert!(db.get_item(id).await.unwrap().is_none());

    // Second delete finds nothing
    assert!(!db.delete_item(id).await.unwrap());

    db.close().await;
}

#[tokio::test]
async fn test_item_ids_are_never_reused() {
    let (db, _guard) = test_db().await;

    let first = db
        .insert_item(&new_item("First", "/media/1.mp4"))
        .await
        .unwrap();
    db.delete_item(first).await.unwrap();

    let second = db
        .insert_item(&new_item("Second", "/media/2.mp4"))
        .await
        .unwrap();
    assert!(second.0 > first.0);

    db.close().await;
}
