use recipe_one_to_many::db::{address, user};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set};

async fn setup() -> DatabaseConnection {
    let db = cookbook_db::connect().await.unwrap();
    cookbook_db::create_table(&db, user::Entity).await.unwrap();
    cookbook_db::create_table(&db, address::Entity)
        .await
        .unwrap();
    db
}

async fn insert_user(db: &DatabaseConnection, name: &str) -> user::Model {
    user::ActiveModel {
        name: Set(Some(name.to_owned())),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

async fn insert_address(db: &DatabaseConnection, user_id: i32, email: &str) -> address::Model {
    address::ActiveModel {
        user_id: Set(Some(user_id)),
        email_address: Set(Some(email.to_owned())),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

#[tokio::test]
async fn addresses_come_back_in_id_order() {
    let db = setup().await;
    let user = insert_user(&db, "name").await;
    for email in ["email1", "email2", "email3"] {
        insert_address(&db, user.id, email).await;
    }

    let addresses = user
        .find_related(address::Entity)
        .order_by_asc(address::Column::Id)
        .all(&db)
        .await
        .unwrap();

    let emails: Vec<_> = addresses
        .iter()
        .map(|a| a.email_address.as_deref().unwrap())
        .collect();
    assert_eq!(emails, ["email1", "email2", "email3"]);
}

#[tokio::test]
async fn both_directions_agree() {
    let db = setup().await;
    let user = insert_user(&db, "name").await;
    let address = insert_address(&db, user.id, "email1").await;

    let owner = address.find_related(user::Entity).one(&db).await.unwrap();
    assert_eq!(owner, Some(user.clone()));

    let addresses = user.find_related(address::Entity).all(&db).await.unwrap();
    assert_eq!(addresses, vec![address]);
}

#[tokio::test]
async fn user_without_addresses_has_an_empty_collection() {
    let db = setup().await;
    let user = insert_user(&db, "loner").await;

    let addresses = user.find_related(address::Entity).all(&db).await.unwrap();
    assert!(addresses.is_empty());
}

#[tokio::test]
async fn joined_fetch_groups_addresses_by_user() {
    let db = setup().await;
    let u1 = insert_user(&db, "u1").await;
    let u2 = insert_user(&db, "u2").await;
    insert_address(&db, u1.id, "email1").await;
    insert_address(&db, u1.id, "email2").await;

    let pairs = user::Entity::find()
        .find_with_related(address::Entity)
        .all(&db)
        .await
        .unwrap();

    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].0, u1);
    assert_eq!(pairs[0].1.len(), 2);
    assert_eq!(pairs[1].0, u2);
    assert!(pairs[1].1.is_empty());
}

#[tokio::test]
async fn demo_runs() {
    recipe_one_to_many::run().await.unwrap();
}
