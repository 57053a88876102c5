use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Route parameter of a navigation target. `None` values never take part in matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParam {
    pub name: String,
    pub value: Option<String>,
}

impl RouteParam {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

/// Where a menu item points to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavTarget {
    /// Application route with its query parameters
    Route {
        route: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        params: Vec<RouteParam>,
    },
    /// Placeholder link (`#`) for entries without a route
    Hash,
}

impl NavTarget {
    pub fn route(route: impl Into<String>) -> Self {
        NavTarget::Route {
            route: route.into(),
            params: vec![],
        }
    }

    pub fn with_param(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        match self {
            NavTarget::Route { route, mut params } => {
                params.push(RouteParam::new(name, value));
                NavTarget::Route { route, params }
            }
            NavTarget::Hash => NavTarget::Hash,
        }
    }
}

/// Split a stored route such as `/user/view&id=5&tab` into route and parameters.
///
/// An empty route gives [`NavTarget::Hash`]. A parameter without `=` gets an empty value.
pub fn parse_route(route: Option<&str>) -> NavTarget {
    let Some(route) = route.filter(|r| !r.is_empty()) else {
        return NavTarget::Hash;
    };

    let mut parts = route.split('&');
    let path = parts.next().unwrap_or_default().to_string();
    let params = parts
        .map(|part| match part.split_once('=') {
            Some((name, value)) => RouteParam::new(name, value),
            None => RouteParam::new(part, ""),
        })
        .collect();

    NavTarget::Route {
        route: path,
        params,
    }
}

/// Turns the raw `route` column into a navigation target
pub trait RouteResolver {
    fn resolve(&self, route: Option<&str>) -> NavTarget;
}

/// Resolver backed by [`parse_route`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRouteResolver;

impl RouteResolver for DefaultRouteResolver {
    fn resolve(&self, route: Option<&str>) -> NavTarget {
        parse_route(route)
    }
}

impl<F> RouteResolver for F
where
    F: Fn(Option<&str>) -> NavTarget,
{
    fn resolve(&self, route: Option<&str>) -> NavTarget {
        self(route)
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Default output node of the normalizer.
///
/// `icon` and `items` stay `None` (and are left out of JSON) unless there is something to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub url: NavTarget,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<MenuItem>>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub active: bool,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, String>,

    #[serde(rename = "linkOptions", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub link_options: BTreeMap<String, String>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, url: NavTarget) -> Self {
        Self {
            label: label.into(),
            url,
            icon: None,
            items: None,
            active: false,
            options: BTreeMap::new(),
            link_options: BTreeMap::new(),
        }
    }

    /// Child items, empty when there are none
    pub fn children(&self) -> &[MenuItem] {
        self.items.as_deref().unwrap_or(&[])
    }
}
