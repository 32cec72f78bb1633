//! Split trees for a tab's panes
//!
//! A tab body is an ordered list of sibling nodes. The first pane is always
//! a bare leaf (the anchor); every other pane ends up inside a split
//! container whose shape depends on the pane mode.

use super::{
    command::PaneCommand,
    config::{LayoutPattern, PaneMode},
};
use crate::model::{Percent, SplitDirection};

/// A node in a tab's pane tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(Leaf),
    Split(Split),
}

/// A terminal pane running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub command: PaneCommand,
    pub focus: bool,
}

/// A container that splits its area between its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub direction: SplitDirection,
    pub size: Option<Percent>,
    pub children: Vec<Node>,
}

/// A leaf together with the manual split directives declared for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub leaf: Leaf,
    pub split: Option<SplitDirection>,
    pub size: Option<Percent>,
}

impl Node {
    /// Wrap children in a split container.
    pub fn split(
        direction: SplitDirection,
        size: Option<Percent>,
        children: Vec<Self>,
    ) -> Self {
        Self::Split(Split {
            direction,
            size,
            children,
        })
    }

    /// Wrap a single leaf in a split container.
    pub fn wrap(direction: SplitDirection, size: Option<Percent>, leaf: Leaf) -> Self {
        Self::split(direction, size, vec![Self::Leaf(leaf)])
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Split(split) => split.children.iter().map(Self::leaf_count).sum(),
        }
    }

    /// Leaves in document order, each with the number of containers above it.
    pub fn leaves_with_depth(&self) -> Vec<(&Leaf, usize)> {
        let mut out = Vec::new();
        collect_leaves(self, 0, &mut out);
        out
    }
}

fn collect_leaves<'a>(node: &'a Node, depth: usize, out: &mut Vec<(&'a Leaf, usize)>) {
    match node {
        Node::Leaf(leaf) => out.push((leaf, depth)),
        Node::Split(split) => split
            .children
            .iter()
            .for_each(|child| collect_leaves(child, depth + 1, out)),
    }
}

/// Leaves of a whole tab body with their container depth.
pub fn body_leaves(body: &[Node]) -> Vec<(&Leaf, usize)> {
    body.iter().flat_map(Node::leaves_with_depth).collect()
}

/// Build the tab body for `slots` (pure).
///
/// In pattern mode the slots' own `split` / `size` are ignored.
pub fn pane_tree(mode: PaneMode, slots: Vec<Slot>) -> Vec<Node> {
    match mode {
        PaneMode::Manual => manual_chain(slots),
        PaneMode::Pattern(pattern) => {
            let leaves = slots.into_iter().map(|slot| slot.leaf).collect();
            (pattern.builder())(leaves)
        }
    }
}

/// Pure builder for one named pattern.
pub type PatternBuilder = fn(Vec<Leaf>) -> Vec<Node>;

impl LayoutPattern {
    pub fn builder(self) -> PatternBuilder {
        match self {
            Self::EvenHorizontal => even_horizontal,
            Self::EvenVertical => even_vertical,
            Self::MainVertical => main_vertical,
            Self::MainHorizontal => main_horizontal,
            Self::Tiled => tiled,
        }
    }
}

/// Anchor leaf followed by one container per remaining slot, each using the
/// slot's own direction (horizontal when unset) and size.
pub fn manual_chain(slots: Vec<Slot>) -> Vec<Node> {
    let mut slots = slots.into_iter();
    let Some(anchor) = slots.next() else {
        return Vec::new();
    };

    std::iter::once(Node::Leaf(anchor.leaf))
        .chain(slots.map(|slot| {
            Node::wrap(slot.split.unwrap_or_default(), slot.size, slot.leaf)
        }))
        .collect()
}

pub fn even_horizontal(leaves: Vec<Leaf>) -> Vec<Node> {
    even(SplitDirection::Horizontal, leaves)
}

pub fn even_vertical(leaves: Vec<Leaf>) -> Vec<Node> {
    even(SplitDirection::Vertical, leaves)
}

/// Anchor leaf plus one `100/N` container per remaining leaf.
///
/// Past 100 leaves the share truncates to zero and the containers carry no
/// size at all, leaving the split to zellij, instead of a `0%` size.
fn even(direction: SplitDirection, leaves: Vec<Leaf>) -> Vec<Node> {
    let size = Percent::share(leaves.len());
    let mut leaves = leaves.into_iter();
    let Some(anchor) = leaves.next() else {
        return Vec::new();
    };

    std::iter::once(Node::Leaf(anchor))
        .chain(leaves.map(|leaf| Node::wrap(direction, size, leaf)))
        .collect()
}

pub fn main_vertical(leaves: Vec<Leaf>) -> Vec<Node> {
    main_stack(SplitDirection::Vertical, Percent::THIRTY, leaves)
}

pub fn main_horizontal(leaves: Vec<Leaf>) -> Vec<Node> {
    main_stack(SplitDirection::Horizontal, Percent::THIRTY, leaves)
}

/// Anchor leaf beside one `size` container holding the second leaf and,
/// one level deeper, the rest split the other way at `100/(N-1)` each.
fn main_stack(direction: SplitDirection, size: Percent, leaves: Vec<Leaf>) -> Vec<Node> {
    let inner_size = Percent::share(leaves.len().saturating_sub(1));
    let mut leaves = leaves.into_iter();
    let Some(anchor) = leaves.next() else {
        return Vec::new();
    };
    let Some(second) = leaves.next() else {
        return vec![Node::Leaf(anchor)];
    };

    let stack = std::iter::once(Node::Leaf(second))
        .chain(leaves.map(|leaf| Node::wrap(direction.flipped(), inner_size, leaf)))
        .collect();

    vec![Node::Leaf(anchor), Node::split(direction, Some(size), stack)]
}

/// Grid arrangement for up to four panes; other counts reuse the even
/// builders.
pub fn tiled(leaves: Vec<Leaf>) -> Vec<Node> {
    match leaves.len() {
        0..=2 => even_vertical(leaves),
        3 => main_stack(SplitDirection::Vertical, Percent::HALF, leaves),
        4 => {
            let mut top = leaves;
            let bottom = top.split_off(2);
            let mut body = even_vertical(top);
            body.push(Node::split(
                SplitDirection::Horizontal,
                Some(Percent::HALF),
                even_vertical(bottom),
            ));
            body
        }
        _ => even_horizontal(leaves),
    }
}
