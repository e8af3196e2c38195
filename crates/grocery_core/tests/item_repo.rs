use grocery_core::db::open_db_in_memory;
use grocery_core::{Item, ItemRepository, ItemValidationError, RepoError, SqliteItemRepository};
use uuid::Uuid;

#[test]
fn insert_and_list_roundtrip() {
    let mut repo = SqliteItemRepository::open_in_memory().unwrap();
    let item = Item::with_completion("Oat milk", true);
    repo.insert_item(&item).unwrap();

    assert_eq!(repo.list_items().unwrap(), vec![item]);
}

#[test]
fn list_follows_insertion_order_not_title_or_flag() {
    let mut repo = SqliteItemRepository::open_in_memory().unwrap();
    let zucchini = Item::new("Zucchini");
    let apples = Item::with_completion("Apples", true);
    let mango = Item::new("Mango");
    for item in [&zucchini, &apples, &mango] {
        repo.insert_item(item).unwrap();
    }
    repo.set_completed(zucchini.id, true).unwrap();

    let ids: Vec<Uuid> = repo.list_items().unwrap().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![zucchini.id, apples.id, mango.id]);
}

#[test]
fn blank_title_is_rejected_before_sql() {
    let mut repo = SqliteItemRepository::open_in_memory().unwrap();
    let err = repo.insert_item(&Item::new(" ")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ItemValidationError::EmptyTitle)
    ));
    assert!(repo.list_items().unwrap().is_empty());
}

#[test]
fn bulk_insert_is_all_or_nothing() {
    let mut repo = SqliteItemRepository::open_in_memory().unwrap();
    let existing = Item::new("Butter");
    repo.insert_item(&existing).unwrap();

    let duplicate = Item {
        id: existing.id,
        title: "Butter again".to_string(),
        is_completed: false,
    };
    let batch = vec![Item::new("Flour"), duplicate];
    assert!(matches!(
        repo.insert_items(&batch).unwrap_err(),
        RepoError::Db(_)
    ));

    let listed = repo.list_items().unwrap();
    assert_eq!(listed, vec![existing]);
}

#[test]
fn missing_ids_report_not_found() {
    let mut repo = SqliteItemRepository::open_in_memory().unwrap();
    let ghost = Uuid::new_v4();

    assert!(matches!(
        repo.set_completed(ghost, true).unwrap_err(),
        RepoError::NotFound(id) if id == ghost
    ));
    assert!(matches!(
        repo.delete_item(ghost).unwrap_err(),
        RepoError::NotFound(id) if id == ghost
    ));
}

#[test]
fn deleted_position_is_not_reused() {
    let mut repo = SqliteItemRepository::open_in_memory().unwrap();
    let first = Item::new("First");
    let second = Item::new("Second");
    repo.insert_item(&first).unwrap();
    repo.insert_item(&second).unwrap();
    repo.delete_item(second.id).unwrap();

    let third = Item::new("Third");
    repo.insert_item(&third).unwrap();
    let ids: Vec<Uuid> = repo.list_items().unwrap().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![first.id, third.id]);
}

#[test]
fn corrupt_rows_are_reported_not_masked() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO items (id, title, is_completed) VALUES ('not-a-uuid', 'Rice', 0);",
        [],
    )
    .unwrap();
    let repo = SqliteItemRepository::new(conn);

    match repo.list_items().unwrap_err() {
        RepoError::InvalidData(message) => assert!(message.contains("not-a-uuid")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn item_serializes_with_snake_case_fields() {
    let item = Item::with_completion("Cereals", true);
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["title"], "Cereals");
    assert_eq!(json["is_completed"], true);
    assert_eq!(json["id"], item.id.to_string());
}
