use super::item::{MenuItem, NavTarget};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current request as seen by the menu: route, query parameters and activation switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveContext {
    /// Route of the current request, e.g. `admin/user/index`
    pub route: String,
    #[serde(default)]
    pub params: HashMap<String, String>,
    /// Prefix for item routes that do not start with `/`
    #[serde(default)]
    pub module_id: String,
    #[serde(default = "default_true")]
    pub activate_items: bool,
    #[serde(default = "default_true")]
    pub activate_parents: bool,
}

fn default_true() -> bool {
    true
}

impl ActiveContext {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            params: HashMap::new(),
            module_id: String::new(),
            activate_items: true,
            activate_parents: true,
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_module(mut self, module_id: impl Into<String>) -> Self {
        self.module_id = module_id.into();
        self
    }
}

/// Whether `target` points at the current request.
///
/// The route must match exactly (relative routes get the module prefix first) and every
/// parameter with a value must be present in the request with the same value.
pub fn is_item_active(target: &NavTarget, ctx: &ActiveContext) -> bool {
    let NavTarget::Route { route, params } = target else {
        return false;
    };
    // no current route means nothing is active, not even `/`
    if route.is_empty() || ctx.route.trim_start_matches('/').is_empty() {
        return false;
    }

    let qualified = if !route.starts_with('/') && !ctx.module_id.is_empty() {
        format!("{}/{}", ctx.module_id.trim_end_matches('/'), route)
    } else {
        route.clone()
    };
    if qualified.trim_start_matches('/') != ctx.route.trim_start_matches('/') {
        return false;
    }

    params
        .iter()
        .filter(|param| param.name != "#")
        .all(|param| match &param.value {
            Some(value) => ctx.params.get(&param.name) == Some(value),
            None => true,
        })
}

/// Mark active items in place. Returns whether any top-level item is active.
///
/// Items already flagged active stay active. With `activate_parents`, an item with an active
/// descendant is active too.
pub fn activate_items(items: &mut [MenuItem], ctx: &ActiveContext) -> bool {
    if !ctx.activate_items {
        return false;
    }
    activate_level(items, ctx)
}

fn activate_level(items: &mut [MenuItem], ctx: &ActiveContext) -> bool {
    let mut any_active = false;
    for item in items.iter_mut() {
        if !item.active && is_item_active(&item.url, ctx) {
            item.active = true;
        }
        if let Some(children) = item.items.as_mut() {
            if activate_level(children, ctx) && ctx.activate_parents {
                item.active = true;
            }
        }
        any_active |= item.active;
    }
    any_active
}
