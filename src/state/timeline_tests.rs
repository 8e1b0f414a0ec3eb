//! Tests for timeline expansion state.

use super::*;

fn sample() -> Vec<TimelineNode> {
    vec![
        TimelineNode::new(1, "Project kickoff", "Jan 2024", "Initial planning")
            .with_child(TimelineEntry::new("Requirements", "Jan 5", "Gathered needs"))
            .with_child(TimelineEntry::new("Design", "Jan 20", "Wireframes")),
        TimelineNode::new(2, "Launch", "Mar 2024", "Shipped"),
        TimelineNode::new(3, "Retro", "Apr 2024", "Lessons learned")
            .with_child(TimelineEntry::new("Survey", "Apr 2", "")),
    ]
}

fn id(n: i64) -> NodeId {
    NodeId::from(n)
}

// ===== default expansion =====

#[test]
fn default_policy_expands_parents_only() {
    let nodes = sample();
    let state = TimelineState::new(&nodes, DefaultExpansion::Expanded);
    assert!(state.is_expanded(&id(1)));
    assert!(!state.is_expanded(&id(2)), "leaf never expands");
    assert!(state.is_expanded(&id(3)));
}

#[test]
fn collapsed_policy_starts_empty() {
    let nodes = sample();
    let state = TimelineState::new(&nodes, DefaultExpansion::Collapsed);
    assert_eq!(state.expanded_count(), 0);
}

#[test]
fn default_expansion_parses_config_values() {
    assert_eq!(
        DefaultExpansion::parse("collapsed"),
        Some(DefaultExpansion::Collapsed)
    );
    assert_eq!(
        DefaultExpansion::parse("expanded"),
        Some(DefaultExpansion::Expanded)
    );
    assert_eq!(DefaultExpansion::parse("sideways"), None);
}

// ===== toggle =====

#[test]
fn toggle_flips_only_target_node() {
    let nodes = sample();
    let mut state = TimelineState::new(&nodes, DefaultExpansion::Expanded);

    assert!(state.toggle(&nodes, &id(1)));
    assert!(!state.is_expanded(&id(1)));
    assert!(state.is_expanded(&id(3)), "other node unaffected");

    assert!(state.toggle(&nodes, &id(1)));
    assert!(state.is_expanded(&id(1)));
    assert!(state.is_expanded(&id(3)));
}

#[test]
fn toggle_leaf_is_noop() {
    let nodes = sample();
    let mut state = TimelineState::new(&nodes, DefaultExpansion::Collapsed);
    for _ in 0..3 {
        assert!(!state.toggle(&nodes, &id(2)));
        assert!(!state.is_expanded(&id(2)));
    }
}

#[test]
fn toggle_unknown_id_is_noop() {
    let nodes = sample();
    let mut state = TimelineState::new(&nodes, DefaultExpansion::Collapsed);
    assert!(!state.toggle(&nodes, &NodeId::from("nope")));
    assert_eq!(state.expanded_count(), 0);
}

// ===== visible rows =====

#[test]
fn children_render_only_while_expanded() {
    let nodes = sample();
    let mut state = TimelineState::new(&nodes, DefaultExpansion::Expanded);
    assert_eq!(state.visible_rows(&nodes).len(), 3 + 2 + 1);

    state.toggle(&nodes, &id(1));
    let rows = state.visible_rows(&nodes);
    assert_eq!(rows.len(), 3 + 1);
    assert!(matches!(rows[1], TimelineRow::Node { index: 1, .. }));
}

#[test]
fn children_keep_source_order_and_mark_last() {
    let nodes = sample();
    let state = TimelineState::new(&nodes, DefaultExpansion::Expanded);
    let rows = state.visible_rows(&nodes);
    match (rows[1], rows[2]) {
        (
            TimelineRow::Child {
                entry: first,
                last: false,
                ..
            },
            TimelineRow::Child {
                entry: second,
                last: true,
                ..
            },
        ) => {
            assert_eq!(first.title, "Requirements");
            assert_eq!(second.title, "Design");
        }
        other => panic!("unexpected rows: {:?}", other),
    }
}

// ===== sync =====

#[test]
fn sync_preserves_state_for_surviving_ids() {
    let nodes = sample();
    let mut state = TimelineState::new(&nodes, DefaultExpansion::Expanded);
    state.toggle(&nodes, &id(1)); // collapse 1

    // Reorder and drop node 3, add node 4.
    let updated = vec![
        TimelineNode::new(4, "New", "May", "")
            .with_child(TimelineEntry::new("a", "", "")),
        nodes[1].clone(),
        nodes[0].clone(),
    ];
    state.sync(&updated);

    assert!(!state.is_expanded(&id(1)), "user collapse survives reorder");
    assert!(state.is_expanded(&id(4)), "new parent follows policy");
    assert!(!state.is_expanded(&id(3)), "departed id forgotten");
}

#[test]
fn sync_collapses_node_that_lost_children() {
    let nodes = sample();
    let mut state = TimelineState::new(&nodes, DefaultExpansion::Expanded);
    let mut updated = nodes.clone();
    updated[0].children.clear();
    state.sync(&updated);
    assert!(!state.is_expanded(&id(1)));
}

#[test]
fn sync_does_not_reexpand_known_collapsed_node() {
    let nodes = sample();
    let mut state = TimelineState::new(&nodes, DefaultExpansion::Expanded);
    state.toggle(&nodes, &id(3));
    state.sync(&nodes);
    assert!(!state.is_expanded(&id(3)));
}

// ===== cursor =====

#[test]
fn cursor_moves_within_bounds() {
    let nodes = sample();
    let mut state = TimelineState::new(&nodes, DefaultExpansion::Collapsed);
    assert_eq!(state.focused(), Some(0));
    state.focus_prev();
    assert_eq!(state.focused(), Some(0));
    state.focus_next(&nodes);
    state.focus_next(&nodes);
    state.focus_next(&nodes);
    assert_eq!(state.focused(), Some(2));
}

#[test]
fn toggle_focused_toggles_node_under_cursor() {
    let nodes = sample();
    let mut state = TimelineState::new(&nodes, DefaultExpansion::Collapsed);
    state.focus_id(&nodes, &id(3));
    assert!(state.toggle_focused(&nodes));
    assert!(state.is_expanded(&id(3)));
    assert!(!state.is_expanded(&id(1)));
}

#[test]
fn empty_timeline_has_no_cursor() {
    let state = TimelineState::new(&[], DefaultExpansion::Expanded);
    assert_eq!(state.focused(), None);
    assert!(state.visible_rows(&[]).is_empty());
}

#[test]
fn sync_clamps_cursor_when_list_shrinks() {
    let nodes = sample();
    let mut state = TimelineState::new(&nodes, DefaultExpansion::Collapsed);
    state.focus_id(&nodes, &id(3));
    state.sync(&nodes[..1]);
    assert_eq!(state.focused(), Some(0));
}
