use super::*;
use crate::net::types::CategoryCount;

fn cat(id: &str, name: &str, parent: Option<&str>) -> Category {
    Category {
        id: id.to_owned(),
        name: name.to_owned(),
        slug: crate::util::slug::slugify(name),
        description: None,
        image: None,
        parent_id: parent.map(str::to_owned),
        children: Vec::new(),
        count: CategoryCount::default(),
    }
}

/// Makanan > (Minuman > Kopi, Roti), Fashion
fn flat() -> Vec<Category> {
    vec![
        cat("1", "Makanan", None),
        cat("2", "Minuman", Some("1")),
        cat("3", "Kopi", Some("2")),
        cat("4", "Roti", Some("1")),
        cat("5", "Fashion", None),
    ]
}

fn names(rows: &[CategoryRow]) -> Vec<(&str, usize)> {
    rows.iter().map(|r| (r.category.name.as_str(), r.depth)).collect()
}

// =============================================================
// Tree
// =============================================================

#[test]
fn flat_list_builds_sorted_tree() {
    let rows = flatten_tree(&flat());
    assert_eq!(
        names(&rows),
        vec![("Fashion", 0), ("Makanan", 0), ("Minuman", 1), ("Kopi", 2), ("Roti", 1)]
    );
    let makanan = rows.iter().find(|r| r.category.id == "1").map(|r| r.child_ids.clone());
    assert_eq!(makanan, Some(vec!["2".to_owned(), "4".to_owned()]));
}

#[test]
fn nested_children_build_same_tree() {
    let mut minuman = cat("2", "Minuman", None);
    minuman.children = vec![cat("3", "Kopi", None)];
    let mut makanan = cat("1", "Makanan", None);
    makanan.children = vec![minuman, cat("4", "Roti", None)];
    let rows = flatten_tree(&[makanan, cat("5", "Fashion", None)]);
    assert_eq!(names(&rows), names(&flatten_tree(&flat())));
}

#[test]
fn orphan_parent_is_rendered_as_root() {
    let rows = flatten_tree(&[cat("9", "Yatim", Some("missing"))]);
    assert_eq!(names(&rows), vec![("Yatim", 0)]);
}

#[test]
fn cyclic_parents_do_not_loop() {
    let rows = flatten_tree(&[cat("a", "A", Some("b")), cat("b", "B", Some("a"))]);
    assert_eq!(rows.len(), 2);
}

// =============================================================
// Filter and parent options
// =============================================================

#[test]
fn filter_keeps_ancestors_of_matches() {
    let rows = flatten_tree(&flat());
    let filtered = filter_rows(&rows, "kopi");
    assert_eq!(names(&filtered), vec![("Makanan", 0), ("Minuman", 1), ("Kopi", 2)]);
}

#[test]
fn blank_filter_keeps_everything() {
    let rows = flatten_tree(&flat());
    assert_eq!(filter_rows(&rows, "   ").len(), rows.len());
}

#[test]
fn parent_options_exclude_self_and_descendants() {
    let rows = flatten_tree(&flat());
    let options = parent_options(&rows, Some("2"));
    let ids: Vec<&str> = options.iter().map(|r| r.category.id.as_str()).collect();
    assert_eq!(ids, vec!["5", "1", "4"]);
}

#[test]
fn parent_options_for_new_category_include_all() {
    let rows = flatten_tree(&flat());
    assert_eq!(parent_options(&rows, None).len(), 5);
}

// =============================================================
// Delete guard
// =============================================================

#[test]
fn delete_blocked_when_children_present() {
    let rows = flatten_tree(&flat());
    let makanan = rows.iter().find(|r| r.category.id == "1");
    let reason = makanan.and_then(delete_block_reason);
    assert!(reason.is_some_and(|r| r.contains("subkategori")));
}

#[test]
fn delete_blocked_by_child_count_alone() {
    let mut c = cat("7", "Elektronik", None);
    c.count.children = 2;
    let rows = flatten_tree(&[c]);
    assert!(delete_block_reason(&rows[0]).is_some());
}

#[test]
fn delete_blocked_when_products_linked() {
    let mut c = cat("7", "Elektronik", None);
    c.count.products = 3;
    let rows = flatten_tree(&[c]);
    let reason = delete_block_reason(&rows[0]);
    assert!(reason.is_some_and(|r| r.contains("3 produk")));
}

#[test]
fn leaf_without_products_can_be_deleted() {
    let rows = flatten_tree(&flat());
    let kopi = rows.iter().find(|r| r.category.id == "3");
    assert_eq!(kopi.and_then(delete_block_reason), None);
}

// =============================================================
// Form
// =============================================================

#[test]
fn empty_name_is_rejected() {
    let form = CategoryForm { name: "   ".to_owned(), ..CategoryForm::default() };
    assert_eq!(form.validate(), Err("Nama kategori wajib diisi".to_owned()));
}

#[test]
fn blank_slug_is_derived_from_name() {
    let form = CategoryForm { name: " Kopi & Teh ".to_owned(), ..CategoryForm::default() };
    let payload = form.validate();
    assert!(payload.as_ref().is_ok_and(|p| p.slug == "kopi-teh" && p.name == "Kopi & Teh"));
    assert!(payload.is_ok_and(|p| p.parent_id.is_none() && p.description.is_none()));
}

#[test]
fn given_slug_is_normalized() {
    let form = CategoryForm {
        name: "Kopi".to_owned(),
        slug: "--Kopi Susu!!".to_owned(),
        parent_id: "2".to_owned(),
        ..CategoryForm::default()
    };
    let payload = form.validate();
    assert!(payload.is_ok_and(|p| p.slug == "kopi-susu" && p.parent_id.as_deref() == Some("2")));
}

#[test]
fn form_round_trips_existing_category() {
    let mut c = cat("3", "Kopi", Some("2"));
    c.description = Some("Biji kopi lokal".to_owned());
    let form = CategoryForm::from_category(&c);
    assert_eq!(form.parent_id, "2");
    assert_eq!(form.description, "Biji kopi lokal");
}
