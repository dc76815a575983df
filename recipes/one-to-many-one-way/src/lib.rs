//! One-way variant of the user/addresses collection: the relationship is
//! defined a single time, on the foreign-key side, and the user's collection
//! is derived by reversing it. Addresses expose no user navigation at all.

pub mod db;

use sea_orm::{ActiveModelTrait, ModelTrait, QueryOrder, Set};

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

    Ok(())
}
