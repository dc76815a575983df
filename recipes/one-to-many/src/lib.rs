//! A user owns an ordered collection of addresses and each address points
//! back at its user. The relationship is declared on both entities, so both
//! directions are navigable and stay consistent.

pub mod db;

use anyhow::Context;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};

use db::{address, user};

pub async fn run() -> anyhow::Result<()> {
    let db = cookbook_db::connect().await?;
    cookbook_db::create_table(&db, user::Entity).await?;
    cookbook_db::create_table(&db, address::Entity).await?;

    println!("==> insert a user");
    let user = user::ActiveModel {
        name: Set(Some("name".to_owned())),
        fullname: Set(Some("fullname".to_owned())),
        nickname: Set(Some("nickname".to_owned())),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    println!("==> append four addresses");
    for n in 1..=4 {
        address::ActiveModel {
            user_id: Set(Some(user.id)),
            email_address: Set(Some(format!("email{n}"))),
            ..Default::default()
        }
        .insert(&db)
        .await?;
    }

    println!("==> user.addresses, ordered by id");
    let addresses = user
        .find_related(address::Entity)
        .order_by_asc(address::Column::Id)
        .all(&db)
        .await?;
    println!(" -> addresses = {addresses:#?}");
    assert_eq!(addresses.len(), 4);

    println!("==> navigate from the first address back to its user");
    let first = address::Entity::find_by_id(1)
        .one(&db)
        .await?
        .context("address 1 not found")?;
    let owner = first
        .find_related(user::Entity)
        .one(&db)
        .await?
        .context("address 1 has no user")?;
    println!(" -> owner = {owner:#?}");
    assert_eq!(owner.id, user.id);

    println!("==> load every user together with its addresses");
    let pairs = user::Entity::find()
        .find_with_related(address::Entity)
        .all(&db)
        .await?;
    for (user, addresses) in &pairs {
        println!(" -> {:?} has {} addresses", user.name, addresses.len());
    }

    Ok(())
}
