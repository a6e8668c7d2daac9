use super::*;

fn terms(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn profile() -> Element {
    Element::new("div")
        .with_text("Hospital director and accountant. ")
        .with_child(
            Element::new("p")
                .with_text("Skills: ")
                .with_child(Element::new("b").with_text("Excel"))
                .with_text(", PowerPoint"),
        )
        .with_text(" Director of nursing.")
}

#[test]
fn test_apply_marks_all_occurrences() {
    let mut container = profile();
    apply_highlighting(&mut container, Some(terms(&["director", "excel"]).as_slice()));

    assert_eq!(container.mark_count(), 3);
    assert_eq!(container.text_content(), profile().text_content());
    assert_eq!(
        container.children[0..3],
        [
            Node::text("Hospital "),
            Node::Mark("director".to_string()),
            Node::text(" and accountant. "),
        ]
    );
}

#[test]
fn test_apply_twice_is_idempotent() {
    let list = terms(&["director", "skills"]);
    let mut once = profile();
    apply_highlighting(&mut once, Some(list.as_slice()));

    let mut twice = profile();
    apply_highlighting(&mut twice, Some(list.as_slice()));
    apply_highlighting(&mut twice, Some(list.as_slice()));

    assert_eq!(once, twice);
    assert_eq!(once.text_content(), twice.text_content());
    assert_eq!(once.mark_count(), twice.mark_count());
}

#[test]
fn test_remove_restores_original() {
    let original = profile();
    let mut container = original.clone();
    apply_highlighting(&mut container, Some(terms(&["hospital director", "a"]).as_slice()));
    assert!(container.mark_count() > 0);

    remove_highlighting(&mut container);
    assert_eq!(container.text_content(), original.text_content());
    assert_eq!(container, original);
    assert_eq!(container.mark_count(), 0);
}

#[test]
fn test_no_match_leaves_structure_unchanged() {
    let original = Element::new("div")
        .with_text("split ")
        .with_text("text nodes")
        .with_child(Element::new("i").with_text("inner"));
    let mut container = original.clone();

    apply_highlighting(&mut container, Some(terms(&["xyz"]).as_slice()));
    assert_eq!(container, original);
}

#[test]
fn test_case_insensitive_match() {
    let mut container = Element::new("p").with_text("We use angular daily");
    apply_highlighting(&mut container, Some(terms(&["Angular"]).as_slice()));
    assert_eq!(container.children[1], Node::Mark("angular".to_string()));
}

#[test]
fn test_empty_or_missing_terms_clear_stale_marks() {
    let mut container = profile();
    apply_highlighting(&mut container, Some(terms(&["director"]).as_slice()));
    assert_eq!(container.mark_count(), 2);

    apply_highlighting(&mut container, Some(&[] as &[String]));
    assert_eq!(container.mark_count(), 0);
    assert_eq!(container, profile());

    apply_highlighting(&mut container, Some(terms(&["director"]).as_slice()));
    apply_highlighting(&mut container, None);
    assert_eq!(container, profile());
}

#[test]
fn test_changed_terms_replace_old_marks() {
    let mut container = profile();
    apply_highlighting(&mut container, Some(terms(&["director"]).as_slice()));
    apply_highlighting(&mut container, Some(terms(&["accountant"]).as_slice()));

    assert_eq!(container.mark_count(), 1);
    assert_eq!(container.children[1], Node::Mark("accountant".to_string()));
}

#[test]
fn test_matches_do_not_cross_elements() {
    let mut container = Element::new("div")
        .with_text("hospital ")
        .with_child(Element::new("b").with_text("director"));
    apply_highlighting(&mut container, Some(terms(&["hospital director"]).as_slice()));
    assert_eq!(container.mark_count(), 0);
}

#[test]
fn test_remove_merges_text_nodes() {
    let mut container = Element::new("p").with_text("a nurse b");
    apply_highlighting(&mut container, Some(terms(&["nurse"]).as_slice()));
    assert_eq!(container.children.len(), 3);

    remove_highlighting(&mut container);
    assert_eq!(container.children, vec![Node::text("a nurse b")]);

    remove_highlighting(&mut container);
    assert_eq!(container.children, vec![Node::text("a nurse b")]);
}

#[test]
fn test_whole_text_node_match() {
    let mut container = Element::new("b").with_text("Excel");
    apply_highlighting(&mut container, Some(terms(&["excel"]).as_slice()));
    assert_eq!(container.children, vec![Node::Mark("Excel".to_string())]);

    remove_highlighting(&mut container);
    assert_eq!(container.children, vec![Node::text("Excel")]);
}

#[test]
fn test_matcher_failure_leaves_container_plain() {
    let original = profile();
    let mut container = original.clone();
    apply_highlighting(&mut container, Some(terms(&["director"]).as_slice()));
    assert!(container.mark_count() > 0);

    // 正则大小上限设得过小，构造必然失败
    apply_with_size_limit(&mut container, Some(terms(&["excel"]).as_slice()), 16);

    assert_eq!(container.mark_count(), 0);
    assert_eq!(container, original);
}
