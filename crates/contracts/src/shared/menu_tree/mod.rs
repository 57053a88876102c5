//! Menu tree: flat menu records -> ordered nested items, plus active-item marking.

pub mod active;
pub mod error;
pub mod item;
pub mod normalizer;
pub mod shape;

pub use active::{activate_items, is_item_active, ActiveContext};
pub use error::MenuTreeError;
pub use item::{parse_route, DefaultRouteResolver, MenuItem, NavTarget, RouteParam, RouteResolver};
pub use normalizer::{normalize, normalize_under};
pub use shape::{default_shape, shape_with_attributes};
