//! Report row assembly
//!
//! Walks a resolved category chain root-to-leaf and lazily yields one row
//! per first-seen attribute. An attribute linked from both an ancestor and
//! a descendant is reported once, against the ancestor.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use tracing::debug;

use crate::format::{self, HEADERS, LINE_SEPARATOR};
use crate::lookup;
use crate::model::{Attribute, Category, Datastandard};

/// One report row: exactly five column values, in header order
pub type Row = Vec<String>;

/// Generate a report for a category and its ancestors.
///
/// Resolves the ancestor chain for `category_id`, builds the attribute and
/// group indexes, and returns the lazy row sequence. An unknown category id
/// yields a header-only report.
pub fn report<'a>(standard: &'a Datastandard, category_id: &str) -> ReportRows<'a> {
    let started = Instant::now();

    let categories = lookup::category_index(standard);
    let chain = lookup::ancestor_chain(&categories, category_id);
    let attributes = lookup::attribute_index(standard);
    let rows = generate(chain, attributes, standard);

    debug!(
        category_id,
        chain_len = rows.categories.len(),
        elapsed = ?started.elapsed(),
        "resolved report inputs"
    );
    rows
}

/// Build the lazy row sequence for an already-resolved category chain.
///
/// `categories` is expected root-to-leaf, as produced by
/// [`lookup::ancestor_chain`]; dedup order follows it.
pub fn generate<'a>(
    categories: Vec<&'a Category>,
    attributes: HashMap<&'a str, &'a Attribute>,
    standard: &'a Datastandard,
) -> ReportRows<'a> {
    ReportRows {
        categories,
        attributes,
        group_names: lookup::group_name_index(standard),
        emitted: HashSet::new(),
        header_pending: true,
        category_pos: 0,
        link_pos: 0,
    }
}

/// Lazy sequence of report rows.
///
/// Yields the fixed header row first, then one row per first-seen
/// attribute. Consuming it is destructive; call [`report`] or [`generate`]
/// again to re-iterate. The dedup set is owned by this value, so separate
/// reports over the same data standard do not interfere.
pub struct ReportRows<'a> {
    categories: Vec<&'a Category>,
    attributes: HashMap<&'a str, &'a Attribute>,
    group_names: HashMap<&'a str, &'a str>,
    emitted: HashSet<&'a str>,
    header_pending: bool,
    category_pos: usize,
    link_pos: usize,
}

impl<'a> Iterator for ReportRows<'a> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.header_pending {
            self.header_pending = false;
            return Some(HEADERS.iter().map(|label| label.to_string()).collect());
        }

        while self.category_pos < self.categories.len() {
            let category = self.categories[self.category_pos];

            while self.link_pos < category.attribute_links.len() {
                let link = &category.attribute_links[self.link_pos];
                self.link_pos += 1;

                if self.emitted.contains(link.id.as_str()) {
                    continue;
                }
                // Dangling links are skipped without marking the id as
                // seen; only an emitted row claims its attribute.
                let Some(attribute) = self.attributes.get(link.id.as_str()).copied() else {
                    continue;
                };
                self.emitted.insert(attribute.id.as_str());

                let groups =
                    lookup::resolve_group_names(&self.group_names, &attribute.group_ids);
                return Some(vec![
                    category.name.clone(),
                    format::attribute_name(link, attribute),
                    format::attribute_description(attribute),
                    format::type_signature(&self.attributes, attribute),
                    groups.join(LINE_SEPARATOR),
                ]);
            }

            self.category_pos += 1;
            self.link_pos = 0;
        }

        None
    }
}
