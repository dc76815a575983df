use recipe_parent_tree::db::node;
use sea_orm::{ActiveModelTrait, DatabaseConnection, ModelTrait, Set};

async fn setup() -> DatabaseConnection {
    let db = cookbook_db::connect().await.unwrap();
    cookbook_db::create_table(&db, node::Entity).await.unwrap();
    db
}

async fn insert_node(db: &DatabaseConnection, name: &str, parent_id: Option<i32>) -> node::Model {
    node::ActiveModel {
        name: Set(name.to_owned()),
        parent_id: Set(parent_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

#[tokio::test]
async fn children_point_back_at_their_parent() {
    let db = setup().await;
    let root = insert_node(&db, "root", None).await;
    let a = insert_node(&db, "a", Some(root.id)).await;
    let b = insert_node(&db, "b", Some(root.id)).await;

    for child in [&a, &b] {
        let parent = child.find_linked(node::ParentLink).one(&db).await.unwrap();
        assert_eq!(parent.as_ref(), Some(&root));
    }

    let mut children = root.find_linked(node::ChildrenLink).all(&db).await.unwrap();
    children.sort_by_key(|n| n.id);
    assert_eq!(children, vec![a, b]);
}

#[tokio::test]
async fn nesting_goes_deeper_than_one_level() {
    let db = setup().await;
    let root = insert_node(&db, "root", None).await;
    let mid = insert_node(&db, "mid", Some(root.id)).await;
    let leaf = insert_node(&db, "leaf", Some(mid.id)).await;

    let parent = leaf.find_linked(node::ParentLink).one(&db).await.unwrap();
    assert_eq!(parent, Some(mid.clone()));

    let grandchildren = mid.find_linked(node::ChildrenLink).all(&db).await.unwrap();
    assert_eq!(grandchildren, vec![leaf]);
}

#[tokio::test]
async fn the_root_has_no_parent_and_a_leaf_has_no_children() {
    let db = setup().await;
    let root = insert_node(&db, "root", None).await;
    let leaf = insert_node(&db, "leaf", Some(root.id)).await;

    assert!(root
        .find_linked(node::ParentLink)
        .one(&db)
        .await
        .unwrap()
        .is_none());
    assert!(leaf
        .find_linked(node::ChildrenLink)
        .all(&db)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn demo_runs() {
    recipe_parent_tree::run().await.unwrap();
}
