//! A soldier holds a single rank, navigated through a foreign key on the
//! soldier table. The rank side carries no back-reference.

pub mod db;

use anyhow::Context;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set};

use db::{rank, soldier};

pub async fn run() -> anyhow::Result<()> {
    let db = cookbook_db::connect().await?;
    cookbook_db::create_table(&db, rank::Entity).await?;
    cookbook_db::create_table(&db, soldier::Entity).await?;

    println!("==> insert three ranks");
    let private = rank::ActiveModel {
        name: Set("Private".to_owned()),
        acronym: Set("PVT".to_owned()),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    rank::ActiveModel {
        name: Set("Corporal".to_owned()),
        acronym: Set("CPL".to_owned()),
        ..Default::default()
    }
    .insert(&db)
    .await?;
    rank::ActiveModel {
        name: Set("Sergeant".to_owned()),
        acronym: Set("SGT".to_owned()),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    println!("==> insert a soldier holding the first rank");
    let soldier = soldier::ActiveModel {
        name: Set("Soldier1".to_owned()),
        rank_id: Set(private.id),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    println!("==> re-fetch the soldier by id and navigate to its rank");
    let soldier = soldier::Entity::find_by_id(soldier.id)
        .one(&db)
        .await?
        .context("soldier not found")?;
    let rank = soldier
        .find_related(rank::Entity)
        .one(&db)
        .await?
        .context("soldier has no rank")?;

    println!(" -> soldier = {soldier:#?}");
    println!(" -> rank = {rank:#?}");

    assert_eq!(rank.acronym, "PVT");

    Ok(())
}
