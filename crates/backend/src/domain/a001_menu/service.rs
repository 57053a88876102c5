use super::{assignment, repository};
use contracts::domain::a001_menu::{MenuAttributes, MenuId, MenuRecord};
use contracts::shared::menu_tree::{
    activate_items, normalize, shape_with_attributes, ActiveContext, DefaultRouteResolver,
    MenuItem, MenuTreeError,
};
use std::collections::{HashMap, HashSet};

/// Menu tree of a role, without active flags
pub async fn assigned_menu(role: &str) -> anyhow::Result<Vec<MenuItem>> {
    let records = repository::list_all().await?;
    let assigned = assignment::list_menu_ids(role).await?;
    tracing::debug!(
        "Building menu for role '{}': {} records, {} assigned",
        role,
        records.len(),
        assigned.len()
    );
    Ok(build_menu(records, assigned)?)
}

/// Menu tree of a role with items matching `ctx` marked active
pub async fn menu_tree(role: &str, ctx: &ActiveContext) -> anyhow::Result<Vec<MenuItem>> {
    let mut items = assigned_menu(role).await?;
    let active = activate_items(&mut items, ctx);
    tracing::debug!("Menu for route '{}' has active branch: {}", ctx.route, active);
    Ok(items)
}

/// Normalize loaded records for the given assignments.
pub fn build_menu(
    records: Vec<MenuRecord>,
    assigned: Vec<MenuId>,
) -> Result<Vec<MenuItem>, MenuTreeError> {
    let menus: HashMap<MenuId, MenuRecord> = records.into_iter().map(|r| (r.id, r)).collect();
    let assigned = complete_assigned(&menus, assigned);
    normalize(&assigned, &menus, shape_with_attributes(DefaultRouteResolver))
}

/// Drop assignments without a record and add every ancestor of an assigned entry,
/// so that an entry is reachable whenever it is assigned.
pub fn complete_assigned(menus: &HashMap<MenuId, MenuRecord>, assigned: Vec<MenuId>) -> Vec<MenuId> {
    let mut seen = HashSet::with_capacity(assigned.len());
    let mut result = Vec::with_capacity(assigned.len());

    for id in assigned {
        if !menus.contains_key(&id) {
            tracing::warn!("Skipping assignment of missing menu {}", id);
            continue;
        }
        if seen.insert(id) {
            result.push(id);
        }
    }

    let direct = result.clone();
    for id in direct {
        let mut parent = menus.get(&id).and_then(|r| r.parent);
        while let Some(parent_id) = parent {
            let Some(record) = menus.get(&parent_id) else {
                break;
            };
            if !seen.insert(parent_id) {
                break;
            }
            result.push(parent_id);
            parent = record.parent;
        }
    }

    result
}

/// Seed a demo menu with `admin` and `guest` assignments; no-op when menus exist.
pub async fn insert_test_data() -> anyhow::Result<()> {
    if repository::count().await? > 0 {
        tracing::info!("Menu table is not empty, skipping test data");
        return Ok(());
    }

    let dashboard = repository::insert(
        &MenuRecord::new(0, "Dashboard")
            .with_route("/site/index")
            .with_icon("fa-dashboard")
            .with_order(1),
    )
    .await?;

    let access = repository::insert(&MenuRecord::new(0, "Access").with_icon("fa-lock").with_order(2)).await?;
    let users = repository::insert(
        &MenuRecord::new(0, "Users")
            .with_parent(access)
            .with_route("/admin/user/index")
            .with_order(1),
    )
    .await?;
    let roles = repository::insert(
        &MenuRecord::new(0, "Roles")
            .with_parent(access)
            .with_route("/admin/role/index")
            .with_order(2),
    )
    .await?;

    let reports = repository::insert(&MenuRecord::new(0, "Reports").with_icon("fa-bar-chart").with_order(3)).await?;
    let sales = repository::insert(
        &MenuRecord::new(0, "Monthly sales")
            .with_parent(reports)
            .with_route("/report/sales&period=month")
            .with_order(1),
    )
    .await?;

    let mut logout_attributes = MenuAttributes::default();
    logout_attributes
        .link_options
        .insert("data-method".to_string(), "post".to_string());
    let logout = repository::insert(
        &MenuRecord::new(0, "Logout")
            .with_route("/site/logout")
            .with_icon("fa-sign-out")
            .with_order(9)
            .with_attributes(logout_attributes),
    )
    .await?;

    assignment::assign("admin", &[dashboard, users, roles, sales, logout]).await?;
    assignment::assign("guest", &[dashboard, sales]).await?;

    tracing::info!("Inserted menu test data");
    Ok(())
}
