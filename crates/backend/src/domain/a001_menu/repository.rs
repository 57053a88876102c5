use contracts::domain::a001_menu::{MenuAttributes, MenuId, MenuRecord};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_menu")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub parent: Option<i32>,
    pub route: Option<String>,
    pub order: Option<i32>,
    pub icon: Option<String>,
    /// JSON-encoded `MenuAttributes`
    pub data: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for MenuRecord {
    fn from(m: Model) -> Self {
        MenuRecord {
            id: MenuId(m.id),
            name: m.name,
            parent: m.parent.map(MenuId),
            route: m.route,
            order: m.order,
            icon: m.icon,
            attributes: MenuAttributes::from_data(m.data.as_deref()),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<MenuRecord>> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Insert a new entry; the id is assigned by the database.
pub async fn insert(record: &MenuRecord) -> anyhow::Result<MenuId> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        name: Set(record.name.clone()),
        parent: Set(record.parent.map(|p| p.value())),
        route: Set(record.route.clone()),
        order: Set(record.order),
        icon: Set(record.icon.clone()),
        data: Set(record.attributes.to_data()),
    };
    let inserted = active.insert(conn()).await?;
    Ok(MenuId(inserted.id))
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}
