//! A self-referential tree stored as an adjacency list: each node carries a
//! nullable foreign key to its parent in the same table.

pub mod db;

use anyhow::Context;
use sea_orm::{ActiveModelTrait, ModelTrait, Set};

use db::node;

async fn insert_node(
    db: &sea_orm::DatabaseConnection,
    name: &str,
    parent_id: Option<i32>,
) -> Result<node::Model, sea_orm::DbErr> {
    node::ActiveModel {
        name: Set(name.to_owned()),
        parent_id: Set(parent_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn run() -> anyhow::Result<()> {
    let db = cookbook_db::connect().await?;
    cookbook_db::create_table(&db, node::Entity).await?;

    println!("==> insert a root with two children");
    let root = insert_node(&db, "root", None).await?;
    let node1 = insert_node(&db, "node1", Some(root.id)).await?;
    insert_node(&db, "node2", Some(root.id)).await?;

    println!("==> node1.parent");
    let parent = node1
        .find_linked(node::ParentLink)
        .one(&db)
        .await?
        .context("node1 has no parent")?;
    println!(" -> parent = {parent:#?}");
    assert_eq!(parent.id, root.id);

    println!("==> root.children");
    let children = root.find_linked(node::ChildrenLink).all(&db).await?;
    println!(" -> children = {children:#?}");
    assert_eq!(children.len(), 2);

    // The root is nobody's child.
    assert!(root.find_linked(node::ParentLink).one(&db).await?.is_none());

    Ok(())
}
