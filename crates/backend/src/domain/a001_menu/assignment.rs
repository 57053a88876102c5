//! Menu entries visible per role.
//!
//! Rows are written by the access-control side; this module only reads them and
//! seeds test data.

use contracts::domain::a001_menu::MenuId;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_menu_assignment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub role: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub menu_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_menu_ids(role: &str) -> anyhow::Result<Vec<MenuId>> {
    let ids = Entity::find()
        .filter(Column::Role.eq(role))
        .order_by_asc(Column::MenuId)
        .all(conn())
        .await?
        .into_iter()
        .map(|m| MenuId(m.menu_id))
        .collect();
    Ok(ids)
}

pub async fn assign(role: &str, menu_ids: &[MenuId]) -> anyhow::Result<()> {
    if menu_ids.is_empty() {
        return Ok(());
    }
    let rows = menu_ids.iter().map(|id| ActiveModel {
        role: Set(role.to_string()),
        menu_id: Set(id.value()),
    });
    Entity::insert_many(rows)
        .exec_without_returning(conn())
        .await?;
    Ok(())
}
