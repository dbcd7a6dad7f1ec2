//! Category tree for the admin screen: flattening, filtering, parent choices,
//! form validation and the delete guard.
//!
//! `/categories/all` may return nested `children`, a flat list carrying
//! `parentId`, or both. Everything is normalized into a flat node list and
//! rebuilt depth-first, so either shape renders the same tree.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use std::collections::{HashMap, HashSet};

use crate::net::types::{Category, CategoryPayload};
use crate::util::slug::slug_or_from_name;

/// One row of the indented tree.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryRow {
    pub category: Category,
    pub depth: usize,
    /// Child ids in display order.
    pub child_ids: Vec<String>,
}

fn collect_nodes(categories: &[Category], parent: Option<&str>, out: &mut Vec<Category>, seen: &mut HashSet<String>) {
    for category in categories {
        if seen.insert(category.id.clone()) {
            let mut node = category.clone();
            if node.parent_id.is_none() {
                node.parent_id = parent.map(str::to_owned);
            }
            node.children = Vec::new();
            out.push(node);
        }
        collect_nodes(&category.children, Some(category.id.as_str()), out, seen);
    }
}

/// Flatten the category tree depth-first, siblings sorted by name.
pub fn flatten_tree(categories: &[Category]) -> Vec<CategoryRow> {
    let mut nodes = Vec::new();
    collect_nodes(categories, None, &mut nodes, &mut HashSet::new());

    let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let mut children: HashMap<&str, Vec<&Category>> = HashMap::new();
    let mut roots: Vec<&Category> = Vec::new();
    for node in &nodes {
        match node.parent_id.as_deref() {
            Some(parent) if ids.contains(parent) && parent != node.id => {
                children.entry(parent).or_default().push(node);
            }
            _ => roots.push(node),
        }
    }
    roots.sort_by_key(|c| c.name.to_lowercase());
    for list in children.values_mut() {
        list.sort_by_key(|c| c.name.to_lowercase());
    }

    let mut rows = Vec::with_capacity(nodes.len());
    let mut visited = HashSet::new();
    for root in roots {
        walk(root, &children, &mut visited, &mut rows);
    }
    // Nodes caught in a parent cycle are unreachable from any root.
    for node in &nodes {
        if !visited.contains(node.id.as_str()) {
            walk(node, &children, &mut visited, &mut rows);
        }
    }
    rows
}

fn walk<'a>(
    root: &'a Category,
    children: &HashMap<&str, Vec<&'a Category>>,
    visited: &mut HashSet<&'a str>,
    rows: &mut Vec<CategoryRow>,
) {
    let mut stack = vec![(root, 0)];
    while let Some((node, depth)) = stack.pop() {
        if !visited.insert(node.id.as_str()) {
            continue;
        }
        let kids = children.get(node.id.as_str()).cloned().unwrap_or_default();
        rows.push(CategoryRow {
            category: node.clone(),
            depth,
            child_ids: kids.iter().map(|k| k.id.clone()).collect(),
        });
        for kid in kids.into_iter().rev() {
            stack.push((kid, depth + 1));
        }
    }
}

/// Rows matching `query` by name or slug, plus every ancestor of a match.
pub fn filter_rows(rows: &[CategoryRow], query: &str) -> Vec<CategoryRow> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    let parents: HashMap<&str, &str> = rows
        .iter()
        .filter_map(|r| r.category.parent_id.as_deref().map(|p| (r.category.id.as_str(), p)))
        .collect();
    let mut keep: HashSet<&str> = HashSet::new();
    for row in rows {
        let c = &row.category;
        if c.name.to_lowercase().contains(&needle) || c.slug.to_lowercase().contains(&needle) {
            let mut cursor = Some(c.id.as_str());
            while let Some(id) = cursor {
                if !keep.insert(id) {
                    break;
                }
                cursor = parents.get(id).copied();
            }
        }
    }
    rows.iter().filter(|r| keep.contains(r.category.id.as_str())).cloned().collect()
}

/// Ids of `id` and every category below it.
pub fn subtree_ids(rows: &[CategoryRow], id: &str) -> HashSet<String> {
    let by_id: HashMap<&str, &CategoryRow> = rows.iter().map(|r| (r.category.id.as_str(), r)).collect();
    let mut out = HashSet::new();
    let mut stack = vec![id.to_owned()];
    while let Some(current) = stack.pop() {
        if !out.insert(current.clone()) {
            continue;
        }
        if let Some(row) = by_id.get(current.as_str()) {
            stack.extend(row.child_ids.iter().cloned());
        }
    }
    out
}

/// Parent choices for the form. Editing excludes the category itself and its
/// descendants so a cycle cannot be proposed.
pub fn parent_options(rows: &[CategoryRow], editing_id: Option<&str>) -> Vec<CategoryRow> {
    let excluded = editing_id.map(|id| subtree_ids(rows, id)).unwrap_or_default();
    rows.iter().filter(|r| !excluded.contains(&r.category.id)).cloned().collect()
}

/// Why a category cannot be deleted, or `None` when deletion may proceed.
pub fn delete_block_reason(row: &CategoryRow) -> Option<String> {
    let children = row.category.count.children.max(u32::try_from(row.child_ids.len()).unwrap_or(u32::MAX));
    if children > 0 {
        return Some(format!(
            "Kategori \"{}\" masih memiliki {children} subkategori. Hapus atau pindahkan subkategori terlebih dahulu.",
            row.category.name
        ));
    }
    let products = row.category.count.products;
    if products > 0 {
        return Some(format!(
            "Kategori \"{}\" masih digunakan oleh {products} produk. Pindahkan produk ke kategori lain terlebih dahulu.",
            row.category.name
        ));
    }
    None
}

/// Local state of the create/edit modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image: String,
    pub parent_id: String,
}

impl CategoryForm {
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            slug: category.slug.clone(),
            description: category.description.clone().unwrap_or_default(),
            image: category.image.clone().unwrap_or_default(),
            parent_id: category.parent_id.clone().unwrap_or_default(),
        }
    }

    /// Build the request body, or the message to show instead of sending it.
    pub fn validate(&self) -> Result<CategoryPayload, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Nama kategori wajib diisi".to_owned());
        }
        let slug = slug_or_from_name(&self.slug, name);
        if slug.is_empty() {
            return Err("Slug tidak valid, gunakan huruf atau angka".to_owned());
        }
        Ok(CategoryPayload {
            name: name.to_owned(),
            slug,
            description: non_blank(&self.description),
            image: non_blank(&self.image),
            parent_id: non_blank(&self.parent_id),
        })
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
