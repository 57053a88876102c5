use super::item::{MenuItem, RouteResolver};
use crate::domain::a001_menu::MenuRecord;

/// Standard item shaping: label, resolved url, icon if set, children if any.
pub fn default_shape<R>(resolver: R) -> impl Fn(&MenuRecord, Vec<MenuItem>) -> MenuItem
where
    R: RouteResolver,
{
    move |record: &MenuRecord, children: Vec<MenuItem>| build_item(&resolver, record, children)
}

/// Same as [`default_shape`], but also carries the record's stored HTML attributes.
pub fn shape_with_attributes<R>(resolver: R) -> impl Fn(&MenuRecord, Vec<MenuItem>) -> MenuItem
where
    R: RouteResolver,
{
    move |record: &MenuRecord, children: Vec<MenuItem>| {
        let mut item = build_item(&resolver, record, children);
        item.options = record.attributes.options.clone();
        item.link_options = record.attributes.link_options.clone();
        item
    }
}

fn build_item<R: RouteResolver>(
    resolver: &R,
    record: &MenuRecord,
    children: Vec<MenuItem>,
) -> MenuItem {
    let mut item = MenuItem::new(record.name.clone(), resolver.resolve(record.route.as_deref()));
    item.icon = record.icon().map(str::to_string);
    if !children.is_empty() {
        item.items = Some(children);
    }
    item
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_menu::MenuAttributes;
    use crate::shared::menu_tree::item::{DefaultRouteResolver, NavTarget};

    #[test]
    fn test_default_shape_omits_icon_and_items() {
        let shape = default_shape(DefaultRouteResolver);
        let item = shape(&MenuRecord::new(1, "Users").with_route("/user/index"), vec![]);

        assert_eq!(item.label, "Users");
        assert_eq!(item.url, NavTarget::route("/user/index"));
        assert_eq!(item.icon, None);
        assert_eq!(item.items, None);
    }

    #[test]
    fn test_default_shape_keeps_icon_and_children() {
        let shape = default_shape(DefaultRouteResolver);
        let child = MenuItem::new("Roles", NavTarget::Hash);
        let item = shape(
            &MenuRecord::new(1, "Access").with_icon("fa-lock"),
            vec![child.clone()],
        );

        assert_eq!(item.url, NavTarget::Hash);
        assert_eq!(item.icon.as_deref(), Some("fa-lock"));
        assert_eq!(item.items, Some(vec![child]));
    }

    #[test]
    fn test_shape_with_attributes() {
        let attributes = MenuAttributes::from_data(Some(
            r#"{"options":{"class":"header"},"linkOptions":{"data-method":"post"}}"#,
        ));
        let record = MenuRecord::new(7, "Logout")
            .with_route("/site/logout")
            .with_attributes(attributes);

        let item = shape_with_attributes(DefaultRouteResolver)(&record, vec![]);
        assert_eq!(item.options.get("class").map(String::as_str), Some("header"));
        assert_eq!(
            item.link_options.get("data-method").map(String::as_str),
            Some("post")
        );

        let plain = default_shape(DefaultRouteResolver)(&record, vec![]);
        assert!(plain.options.is_empty());
        assert!(plain.link_options.is_empty());
    }
}
