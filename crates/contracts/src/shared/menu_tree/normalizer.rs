use super::error::MenuTreeError;
use crate::domain::a001_menu::{MenuId, MenuRecord};
use std::collections::{HashMap, HashSet};

/// Children grouped by parent reference, in assigned order
type ChildrenMap<'a> = HashMap<Option<MenuId>, Vec<(MenuId, &'a MenuRecord)>>;

/// Build the ordered menu tree for `assigned`, starting at the root entries.
///
/// Every assigned id must have a record in `menus`, otherwise the whole call fails with
/// [`MenuTreeError::Lookup`]. Entries whose parent chain does not reach the root inside the
/// assigned set are left out. Siblings are sorted by `order`, ties keep the assigned order.
///
/// `shape` turns a record and its already built children into the output item.
pub fn normalize<T, F>(
    assigned: &[MenuId],
    menus: &HashMap<MenuId, MenuRecord>,
    shape: F,
) -> Result<Vec<T>, MenuTreeError>
where
    F: Fn(&MenuRecord, Vec<T>) -> T,
{
    normalize_under(assigned, menus, shape, None)
}

/// Same as [`normalize`], but builds the level below `parent` (`None` is the root).
pub fn normalize_under<T, F>(
    assigned: &[MenuId],
    menus: &HashMap<MenuId, MenuRecord>,
    shape: F,
    parent: Option<MenuId>,
) -> Result<Vec<T>, MenuTreeError>
where
    F: Fn(&MenuRecord, Vec<T>) -> T,
{
    let children = group_by_parent(assigned, menus)?;
    let mut path: Vec<MenuId> = parent.into_iter().collect();
    build_level(&children, parent, &shape, &mut path)
}

fn group_by_parent<'a>(
    assigned: &[MenuId],
    menus: &'a HashMap<MenuId, MenuRecord>,
) -> Result<ChildrenMap<'a>, MenuTreeError> {
    let mut seen = HashSet::with_capacity(assigned.len());
    let mut children: ChildrenMap<'a> = HashMap::new();

    for &id in assigned {
        let record = menus.get(&id).ok_or(MenuTreeError::Lookup { id })?;
        if !seen.insert(id) {
            continue;
        }
        children.entry(record.parent).or_default().push((id, record));
    }

    Ok(children)
}

fn build_level<T, F>(
    children: &ChildrenMap<'_>,
    parent: Option<MenuId>,
    shape: &F,
    path: &mut Vec<MenuId>,
) -> Result<Vec<T>, MenuTreeError>
where
    F: Fn(&MenuRecord, Vec<T>) -> T,
{
    let Some(records) = children.get(&parent) else {
        return Ok(vec![]);
    };

    let mut level: Vec<(Option<i32>, T)> = Vec::with_capacity(records.len());
    for &(id, record) in records {
        if path.contains(&id) {
            return Err(MenuTreeError::Cycle { id });
        }

        path.push(id);
        let items = build_level(children, Some(id), shape, path)?;
        path.pop();

        level.push((record.order, shape(record, items)));
    }

    // stable: equal orders keep assigned order
    level.sort_by_key(|(order, _)| *order);
    Ok(level.into_iter().map(|(_, item)| item).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::menu_tree::item::{DefaultRouteResolver, MenuItem, NavTarget};
    use crate::shared::menu_tree::shape::default_shape;

    fn menus(records: Vec<MenuRecord>) -> HashMap<MenuId, MenuRecord> {
        records.into_iter().map(|r| (r.id, r)).collect()
    }

    fn ids(values: &[i32]) -> Vec<MenuId> {
        values.iter().copied().map(MenuId).collect()
    }

    /// Compact view of a tree: `label[child,child]`
    fn outline(items: &[MenuItem]) -> String {
        items
            .iter()
            .map(|item| match &item.items {
                Some(children) => format!("{}[{}]", item.label, outline(children)),
                None => item.label.clone(),
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    fn sample() -> HashMap<MenuId, MenuRecord> {
        menus(vec![
            MenuRecord::new(1, "A").with_order(2),
            MenuRecord::new(2, "B").with_parent(1).with_order(1),
            MenuRecord::new(3, "C").with_order(1),
        ])
    }

    #[test]
    fn test_nested_and_ordered() {
        let tree = normalize(&ids(&[3, 1, 2]), &sample(), default_shape(DefaultRouteResolver)).unwrap();

        assert_eq!(outline(&tree), "C,A[B]");
        assert_eq!(tree[0].items, None);
        assert_eq!(tree[1].children()[0].label, "B");
        assert_eq!(tree[1].children()[0].items, None);
    }

    #[test]
    fn test_empty_assigned() {
        let tree = normalize(&[], &sample(), default_shape(DefaultRouteResolver)).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_missing_record_fails_whole_call() {
        let result = normalize(&ids(&[3, 1, 99, 2]), &sample(), default_shape(DefaultRouteResolver));
        assert_eq!(result, Err(MenuTreeError::Lookup { id: MenuId(99) }));
    }

    #[test]
    fn test_equal_order_keeps_assigned_order() {
        let records = menus(vec![
            MenuRecord::new(1, "one").with_order(5),
            MenuRecord::new(2, "two").with_order(5),
            MenuRecord::new(3, "three").with_order(1),
            MenuRecord::new(4, "four").with_order(5),
        ]);

        let tree = normalize(&ids(&[4, 1, 3, 2]), &records, default_shape(DefaultRouteResolver)).unwrap();
        assert_eq!(outline(&tree), "three,four,one,two");

        let tree = normalize(&ids(&[2, 4, 1, 3]), &records, default_shape(DefaultRouteResolver)).unwrap();
        assert_eq!(outline(&tree), "three,two,four,one");
    }

    #[test]
    fn test_missing_order_sorts_first() {
        let records = menus(vec![
            MenuRecord::new(1, "ordered").with_order(-3),
            MenuRecord::new(2, "unordered"),
        ]);
        let tree = normalize(&ids(&[1, 2]), &records, default_shape(DefaultRouteResolver)).unwrap();
        assert_eq!(outline(&tree), "unordered,ordered");
    }

    #[test]
    fn test_unreachable_entries_are_excluded() {
        let records = menus(vec![
            MenuRecord::new(1, "root"),
            MenuRecord::new(2, "child").with_parent(1),
            MenuRecord::new(3, "orphan").with_parent(40),
            MenuRecord::new(4, "orphan child").with_parent(3),
            MenuRecord::new(5, "hidden parent"),
            MenuRecord::new(6, "under hidden").with_parent(5),
        ]);

        // 5 is not assigned, so 6 cannot be reached either
        let tree = normalize(&ids(&[1, 2, 3, 4, 6]), &records, default_shape(DefaultRouteResolver)).unwrap();
        assert_eq!(outline(&tree), "root[child]");
    }

    #[test]
    fn test_each_reachable_entry_once_at_its_depth() {
        let records = menus(vec![
            MenuRecord::new(1, "L0").with_order(1),
            MenuRecord::new(2, "L1").with_parent(1),
            MenuRecord::new(3, "L2").with_parent(2),
            MenuRecord::new(4, "L3").with_parent(3),
            MenuRecord::new(5, "other").with_order(2),
        ]);

        // duplicates in the assigned list collapse to one entry
        let assigned = ids(&[4, 3, 2, 1, 5, 3]);
        let depths = normalize(&assigned, &records, |record: &MenuRecord, children: Vec<Vec<(String, usize)>>| {
            let mut flat = vec![(record.name.clone(), 0)];
            for child in children {
                flat.extend(child.into_iter().map(|(name, depth)| (name, depth + 1)));
            }
            flat
        })
        .unwrap();

        let flat: Vec<(String, usize)> = depths.into_iter().flatten().collect();
        assert_eq!(
            flat,
            vec![
                ("L0".to_string(), 0),
                ("L1".to_string(), 1),
                ("L2".to_string(), 2),
                ("L3".to_string(), 3),
                ("other".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_same_input_same_tree() {
        let records = sample();
        let assigned = ids(&[2, 3, 1]);
        let first = normalize(&assigned, &records, default_shape(DefaultRouteResolver)).unwrap();
        let second = normalize(&assigned, &records, default_shape(DefaultRouteResolver)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_shape_sees_children() {
        let tree = normalize(&ids(&[1, 2, 3]), &sample(), |record: &MenuRecord, children: Vec<String>| {
            if children.is_empty() {
                record.name.to_lowercase()
            } else {
                format!("{}({})", record.name, children.join(" "))
            }
        })
        .unwrap();
        assert_eq!(tree, vec!["c".to_string(), "A(b)".to_string()]);
    }

    #[test]
    fn test_normalize_under_subtree() {
        let records = menus(vec![
            MenuRecord::new(1, "Admin"),
            MenuRecord::new(2, "Users").with_parent(1).with_route("/user/index").with_order(2),
            MenuRecord::new(3, "Roles").with_parent(1).with_route("/role/index").with_order(1),
        ]);

        let tree = normalize_under(&ids(&[1, 2, 3]), &records, default_shape(DefaultRouteResolver), Some(MenuId(1)))
            .unwrap();
        assert_eq!(outline(&tree), "Roles,Users");
        assert_eq!(tree[0].url, NavTarget::route("/role/index"));
    }

    #[test]
    fn test_cycle_is_reported() {
        let records = menus(vec![
            MenuRecord::new(1, "a").with_parent(2),
            MenuRecord::new(2, "b").with_parent(1),
        ]);

        // unreachable from the root, so a plain call is fine
        let tree = normalize(&ids(&[1, 2]), &records, default_shape(DefaultRouteResolver)).unwrap();
        assert!(tree.is_empty());

        let result = normalize_under(&ids(&[1, 2]), &records, default_shape(DefaultRouteResolver), Some(MenuId(1)));
        assert_eq!(result, Err(MenuTreeError::Cycle { id: MenuId(1) }));
    }

    #[test]
    fn test_self_parent_is_a_cycle() {
        let records = menus(vec![MenuRecord::new(5, "loop").with_parent(5)]);
        let result = normalize_under(&ids(&[5]), &records, default_shape(DefaultRouteResolver), Some(MenuId(5)));
        assert_eq!(result, Err(MenuTreeError::Cycle { id: MenuId(5) }));
    }
}
