//! Lookup indexes over a data standard
//!
//! Builds fast-access maps from the flat entity lists and resolves a
//! category's ancestor chain. Indexes borrow from the data standard;
//! duplicate ids resolve last-write-wins (input is expected id-unique).

use std::collections::{HashMap, HashSet};

use crate::model::{Attribute, Category, Datastandard};

/// Index categories by id
pub fn category_index(standard: &Datastandard) -> HashMap<&str, &Category> {
    standard
        .categories
        .iter()
        .map(|category| (category.id.as_str(), category))
        .collect()
}

/// Index attributes by id
pub fn attribute_index(standard: &Datastandard) -> HashMap<&str, &Attribute> {
    standard
        .attributes
        .iter()
        .map(|attribute| (attribute.id.as_str(), attribute))
        .collect()
}

/// Index group display names by group id
pub fn group_name_index(standard: &Datastandard) -> HashMap<&str, &str> {
    standard
        .attribute_groups
        .iter()
        .map(|group| (group.id.as_str(), group.name.as_str()))
        .collect()
}

/// Resolve the ancestor chain for a category, root first, target last.
///
/// Walks parent links upward from `category_id` until an id does not
/// resolve. An unknown starting id yields an empty chain; a broken parent
/// reference ends the chain at the last resolvable ancestor. A parent
/// cycle ends the walk at the first repeated id rather than looping.
pub fn ancestor_chain<'a>(
    index: &HashMap<&str, &'a Category>,
    category_id: &str,
) -> Vec<&'a Category> {
    let mut chain = Vec::new();
    let mut visited = HashSet::new();
    let mut current = index.get(category_id).copied();

    while let Some(category) = current {
        if !visited.insert(category.id.as_str()) {
            break;
        }
        chain.push(category);
        current = category
            .parent_id
            .as_deref()
            .and_then(|parent_id| index.get(parent_id).copied());
    }

    chain.reverse();
    chain
}

/// Resolve group ids to display names, preserving input order.
///
/// Ids absent from the index are silently dropped, not replaced with a
/// placeholder. Duplicate ids in the input resolve to duplicate names.
pub fn resolve_group_names<'a>(
    index: &HashMap<&str, &'a str>,
    group_ids: &[String],
) -> Vec<&'a str> {
    group_ids
        .iter()
        .filter_map(|id| index.get(id.as_str()).copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttributeType;

    fn standard_with_categories(categories: Vec<Category>) -> Datastandard {
        Datastandard {
            categories,
            ..Default::default()
        }
    }

    #[test]
    fn test_ancestor_chain_unknown_id_is_empty() {
        let standard = standard_with_categories(vec![Category::new("root", "Root")]);
        let index = category_index(&standard);
        assert!(ancestor_chain(&index, "unknown").is_empty());
    }

    #[test]
    fn test_ancestor_chain_root_only() {
        let standard = standard_with_categories(vec![Category::new("root", "Root")]);
        let index = category_index(&standard);

        let chain = ancestor_chain(&index, "root");
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].id, "root");
    }

    #[test]
    fn test_ancestor_chain_is_root_to_leaf() {
        // Collection order deliberately scrambled
        let standard = standard_with_categories(vec![
            Category::new("b", "B").with_parent("a"),
            Category::new("c", "C").with_parent("b"),
            Category::new("a", "A"),
        ]);
        let index = category_index(&standard);

        let chain = ancestor_chain(&index, "c");
        let ids: Vec<_> = chain.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_ancestor_chain_stops_at_broken_parent() {
        let standard = standard_with_categories(vec![
            Category::new("level1", "Level 1").with_parent("missing_root"),
            Category::new("target", "Target").with_parent("level1"),
        ]);
        let index = category_index(&standard);

        let chain = ancestor_chain(&index, "target");
        let ids: Vec<_> = chain.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["level1", "target"]);
    }

    #[test]
    fn test_ancestor_chain_terminates_on_parent_cycle() {
        let standard = standard_with_categories(vec![
            Category::new("a", "A").with_parent("b"),
            Category::new("b", "B").with_parent("a"),
        ]);
        let index = category_index(&standard);

        let chain = ancestor_chain(&index, "a");
        let ids: Vec<_> = chain.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_attribute_index() {
        let standard = Datastandard {
            attributes: vec![
                Attribute::new("a1", "Color", AttributeType::new("string")),
                Attribute::new("a2", "Size", AttributeType::new("integer")),
            ],
            ..Default::default()
        };

        let index = attribute_index(&standard);
        assert_eq!(index.len(), 2);
        assert_eq!(index["a1"].name, "Color");
        assert_eq!(index["a2"].name, "Size");
    }

    #[test]
    fn test_group_name_resolution() {
        let standard = Datastandard {
            attribute_groups: vec![
                crate::model::AttributeGroup {
                    id: "g1".into(),
                    name: "Technical".into(),
                },
                crate::model::AttributeGroup {
                    id: "g2".into(),
                    name: "Marketing".into(),
                },
            ],
            ..Default::default()
        };
        let index = group_name_index(&standard);

        let names = resolve_group_names(&index, &["g1".into(), "g2".into()]);
        assert_eq!(names, vec!["Technical", "Marketing"]);
    }

    #[test]
    fn test_group_name_resolution_drops_unknown_ids() {
        let standard = Datastandard {
            attribute_groups: vec![crate::model::AttributeGroup {
                id: "g1".into(),
                name: "Technical".into(),
            }],
            ..Default::default()
        };
        let index = group_name_index(&standard);

        let names = resolve_group_names(&index, &["g1".into(), "missing".into()]);
        assert_eq!(names, vec!["Technical"]);

        assert!(resolve_group_names(&index, &[]).is_empty());
    }

    #[test]
    fn test_group_name_resolution_preserves_duplicates() {
        let standard = Datastandard {
            attribute_groups: vec![crate::model::AttributeGroup {
                id: "g1".into(),
                name: "Technical".into(),
            }],
            ..Default::default()
        };
        let index = group_name_index(&standard);

        let names = resolve_group_names(&index, &["g1".into(), "g1".into()]);
        assert_eq!(names, vec!["Technical", "Technical"]);
    }
}
