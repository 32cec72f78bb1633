//! Property-based tests for the layout compiler using proptest.
//!
//! Invariants tested:
//! - Pattern geometry (leaf counts, container sizes, nesting depth)
//! - Leaf order always follows declaration order
//! - Unknown pattern names behave like manual mode
//! - Focus markers come only from the pane's own flag
//! - Compilation is deterministic and always parses as KDL

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use proptest::prelude::*;
use zellijinator_core::{
    kdl_validation::{count_panes, validate_kdl_syntax},
    model::{PaneSpec, Percent, ProjectSpec, SplitDirection, TabSpec},
    zellij::{
        build_document, compile_layout,
        tree::{body_leaves, even_horizontal, pane_tree, Leaf, Node, Slot},
        CompileOptions, LayoutPattern, PaneCommand, PaneMode,
    },
};

fn layout_config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        max_shrink_iters: 256,
        ..ProptestConfig::default()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// STRATEGIES
// ═══════════════════════════════════════════════════════════════════════════

fn leaf(id: usize, focus: bool) -> Leaf {
    Leaf {
        command: PaneCommand {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), format!("pane-{id}")],
        },
        focus,
    }
}

fn slots(n: usize) -> Vec<Slot> {
    (0..n)
        .map(|id| Slot {
            leaf: leaf(id, false),
            split: Some(SplitDirection::Vertical),
            size: Percent::new(77).ok(),
        })
        .collect()
}

fn leaf_ids(body: &[Node]) -> Vec<String> {
    body_leaves(body)
        .iter()
        .map(|(leaf, _)| leaf.command.args[1].clone())
        .collect()
}

fn split_strategy() -> impl Strategy<Value = Option<SplitDirection>> {
    prop_oneof![
        Just(None),
        Just(Some(SplitDirection::Horizontal)),
        Just(Some(SplitDirection::Vertical)),
    ]
}

fn pane_strategy() -> impl Strategy<Value = PaneSpec> {
    (
        any::<bool>(),
        proptest::collection::vec("[a-z]{1,6}( -[a-z])?", 0..3),
        proptest::option::of(1_u8..=100),
        split_strategy(),
    )
        .prop_map(|(focus, commands, size, split)| PaneSpec {
            focus,
            commands,
            size: size.and_then(|s| Percent::new(s).ok()),
            split,
        })
}

fn pattern_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("even-horizontal".to_string())),
        Just(Some("even-vertical".to_string())),
        Just(Some("main-vertical".to_string())),
        Just(Some("main-horizontal".to_string())),
        Just(Some("tiled".to_string())),
        "[a-z]{3,8}".prop_map(Some),
    ]
}

fn tab_strategy() -> impl Strategy<Value = TabSpec> {
    (
        "[ -~]{0,12}",
        any::<bool>(),
        pattern_strategy(),
        proptest::collection::vec(pane_strategy(), 0..7),
    )
        .prop_map(|(name, focus, pattern, panes)| TabSpec {
            name,
            focus,
            pattern,
            panes,
        })
}

fn project_strategy() -> impl Strategy<Value = ProjectSpec> {
    (
        "[a-z][a-z0-9-]{0,10}",
        "/[ -~]{0,20}",
        proptest::option::of(prop_oneof![
            Just("compact".to_string()),
            "[a-z]{1,8}"
        ]),
        proptest::collection::vec(tab_strategy(), 0..4),
        proptest::collection::btree_map("[A-Z]{1,5}", "[a-z0-9]{0,5}", 0..3),
    )
        .prop_map(|(name, root, base_template, tabs, env)| ProjectSpec {
            name,
            root,
            base_template,
            tabs,
            env,
            ..ProjectSpec::default()
        })
}

// ═══════════════════════════════════════════════════════════════════════════
// PATTERN GEOMETRY
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(layout_config())]

    #[test]
    fn prop_even_patterns_wrap_all_but_anchor(n in 1_usize..40, vertical in any::<bool>()) {
        let (pattern, direction) = if vertical {
            (LayoutPattern::EvenVertical, SplitDirection::Vertical)
        } else {
            (LayoutPattern::EvenHorizontal, SplitDirection::Horizontal)
        };

        let body = pane_tree(PaneMode::Pattern(pattern), slots(n));

        prop_assert_eq!(body.len(), n);
        prop_assert!(matches!(body[0], Node::Leaf(_)));
        for node in &body[1..] {
            match node {
                Node::Split(split) => {
                    prop_assert_eq!(split.direction, direction);
                    prop_assert_eq!(split.size, Percent::share(n));
                    prop_assert_eq!(split.children.len(), 1);
                }
                Node::Leaf(_) => prop_assert!(false, "expected a split container"),
            }
        }
        prop_assert_eq!(body.iter().map(Node::leaf_count).sum::<usize>(), n);
    }

    #[test]
    fn prop_tiled_above_four_is_even_horizontal(n in 5_usize..40) {
        let tiled = pane_tree(PaneMode::Pattern(LayoutPattern::Tiled), slots(n));
        let leaves = slots(n).into_iter().map(|slot| slot.leaf).collect();
        prop_assert_eq!(tiled, even_horizontal(leaves));
    }

    #[test]
    fn prop_leaf_order_matches_declaration(n in 0_usize..20, pattern in pattern_strategy()) {
        let body = pane_tree(PaneMode::for_tab(pattern.as_deref()), slots(n));
        let expected: Vec<String> = (0..n).map(|id| format!("pane-{id}")).collect();
        prop_assert_eq!(leaf_ids(&body), expected);
    }

    #[test]
    fn prop_unknown_pattern_is_manual(tab in tab_strategy(), unknown in "[a-z]{3,8}") {
        prop_assume!(unknown.parse::<LayoutPattern>().is_err());

        let with_pattern = ProjectSpec {
            name: "p".to_string(),
            tabs: vec![TabSpec { pattern: Some(unknown), ..tab.clone() }],
            ..ProjectSpec::default()
        };
        let without = ProjectSpec {
            name: "p".to_string(),
            tabs: vec![TabSpec { pattern: None, ..tab }],
            ..ProjectSpec::default()
        };

        let options = CompileOptions::default();
        prop_assert_eq!(
            compile_layout(&with_pattern, &options),
            compile_layout(&without, &options)
        );
    }

    #[test]
    fn prop_focus_follows_pane_flags(project in project_strategy()) {
        let doc = build_document(&project, &CompileOptions::default());

        for (tab, node) in project.tabs.iter().zip(&doc.tabs) {
            let declared: Vec<bool> = tab.panes.iter().map(|pane| pane.focus).collect();
            let emitted: Vec<bool> = body_leaves(&node.body).iter().map(|(leaf, _)| leaf.focus).collect();
            prop_assert_eq!(emitted, declared);
        }
    }

    #[test]
    fn prop_exactly_one_tab_focused(project in project_strategy()) {
        let doc = build_document(&project, &CompileOptions::default());
        let focused = doc.tabs.iter().filter(|tab| tab.focus).count();
        prop_assert_eq!(focused, usize::from(!project.tabs.is_empty()));
    }

    #[test]
    fn prop_compile_is_deterministic_and_valid(project in project_strategy()) {
        let options = CompileOptions::new("/bin/zsh");
        let first = compile_layout(&project, &options);
        let second = compile_layout(&project, &options);

        prop_assert_eq!(&first, &second);
        prop_assert!(validate_kdl_syntax(&first).is_ok(), "invalid KDL:\n{}", first);

        let panes: usize = project.tabs.iter().map(|tab| tab.panes.len()).sum();
        let containers: usize = build_document(&project, &options)
            .tabs
            .iter()
            .flat_map(|tab| tab.body.iter())
            .map(count_splits)
            .sum();
        let template_panes = match project.base_template.as_deref() {
            None | Some("") => 2,
            Some("compact") => 1,
            Some(_) => 0,
        };
        prop_assert_eq!(count_panes(&first).ok(), Some(panes + containers + template_panes));
    }
}

fn count_splits(node: &Node) -> usize {
    match node {
        Node::Leaf(_) => 0,
        Node::Split(split) => 1 + split.children.iter().map(count_splits).sum::<usize>(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// FIXED CASES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn tiled_four_bottom_right_is_two_deep() {
    let body = pane_tree(PaneMode::Pattern(LayoutPattern::Tiled), slots(4));
    let leaves = body_leaves(&body);

    assert_eq!(leaves.len(), 4);
    assert_eq!(leaf_ids(&body), vec!["pane-0", "pane-1", "pane-2", "pane-3"]);
    assert_eq!(leaves.last().map(|(_, depth)| *depth), Some(2));
}

#[test]
fn even_three_uses_truncated_share() {
    let body = pane_tree(PaneMode::Pattern(LayoutPattern::EvenHorizontal), slots(3));
    let sizes: Vec<Option<u8>> = body
        .iter()
        .filter_map(|node| match node {
            Node::Split(split) => Some(split.size.map(Percent::get)),
            Node::Leaf(_) => None,
        })
        .collect();
    assert_eq!(sizes, vec![Some(33), Some(33)]);
}

#[test]
fn manual_pane_without_directives_is_horizontal_unsized() {
    let project = ProjectSpec {
        name: "p".to_string(),
        root: "/r".to_string(),
        tabs: vec![TabSpec {
            name: "t".to_string(),
            panes: vec![PaneSpec::default(), PaneSpec::default()],
            ..TabSpec::default()
        }],
        env: BTreeMap::new(),
        ..ProjectSpec::default()
    };
    let doc = build_document(&project, &CompileOptions::default());

    match &doc.tabs[0].body[1] {
        Node::Split(split) => {
            assert_eq!(split.direction, SplitDirection::Horizontal);
            assert_eq!(split.size, None);
        }
        Node::Leaf(_) => panic!("expected a split container"),
    }
}
