//! Project to layout document
//!
//! Builds the typed document for a whole session: the base template and one
//! `TabNode` per declared tab. Compilation is total; sparse or odd input
//! produces sparse output rather than an error.

use super::{
    command::synthesize,
    config::{BaseTemplate, CompileOptions, PaneMode},
    kdl::render,
    tree::{pane_tree, Leaf, Node, Slot},
};
use crate::model::{ProjectSpec, TabSpec};

/// A whole generated layout before serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutDocument {
    pub session_name: String,
    pub template: BaseTemplate,
    pub tabs: Vec<TabNode>,
}

/// One tab with its pane tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabNode {
    pub name: String,
    pub cwd: String,
    pub focus: bool,
    pub body: Vec<Node>,
}

/// Compile a project into layout text (pure).
pub fn compile_layout(project: &ProjectSpec, options: &CompileOptions) -> String {
    render(&build_document(project, options))
}

/// Build the typed document for a project (pure).
pub fn build_document(project: &ProjectSpec, options: &CompileOptions) -> LayoutDocument {
    let focused = focused_tab_index(&project.tabs);

    let tabs = project
        .tabs
        .iter()
        .enumerate()
        .map(|(index, tab)| TabNode {
            name: tab.name.clone(),
            cwd: project.root.clone(),
            focus: index == focused,
            body: tab_body(project, tab, options),
        })
        .collect();

    LayoutDocument {
        session_name: project.effective_session_name().to_string(),
        template: BaseTemplate::from_name(project.base_template.as_deref()),
        tabs,
    }
}

/// Index of the tab that gets focus: the first flagged one, else 0.
pub fn focused_tab_index(tabs: &[TabSpec]) -> usize {
    tabs.iter().position(|tab| tab.focus).unwrap_or(0)
}

fn tab_body(project: &ProjectSpec, tab: &TabSpec, options: &CompileOptions) -> Vec<Node> {
    let slots = tab
        .panes
        .iter()
        .map(|pane| Slot {
            leaf: Leaf {
                command: synthesize(&pane.commands, &project.root, &project.env, options),
                focus: pane.focus,
            },
            split: pane.split,
            size: pane.size,
        })
        .collect();

    pane_tree(PaneMode::for_tab(tab.pattern.as_deref()), slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PaneSpec;

    fn tab(name: &str, focus: bool) -> TabSpec {
        TabSpec {
            name: name.to_string(),
            focus,
            ..TabSpec::default()
        }
    }

    #[test]
    fn test_focused_tab_first_match() {
        let tabs = vec![tab("a", false), tab("b", true), tab("c", true)];
        assert_eq!(focused_tab_index(&tabs), 1);
    }

    #[test]
    fn test_focused_tab_defaults_to_first() {
        assert_eq!(focused_tab_index(&[tab("a", false), tab("b", false)]), 0);
        assert_eq!(focused_tab_index(&[]), 0);
    }

    #[test]
    fn test_document_tabs_share_root() {
        let project = ProjectSpec {
            name: "web".to_string(),
            root: "/srv/web".to_string(),
            tabs: vec![tab("one", false), tab("two", true)],
            ..ProjectSpec::default()
        };
        let doc = build_document(&project, &CompileOptions::default());

        assert_eq!(doc.session_name, "web");
        assert_eq!(doc.template, BaseTemplate::Standard);
        assert!(doc.tabs.iter().all(|t| t.cwd == "/srv/web"));
        assert_eq!(
            doc.tabs.iter().map(|t| t.focus).collect::<Vec<_>>(),
            vec![false, true]
        );
        assert!(doc.tabs.iter().all(|t| t.body.is_empty()));
    }

    #[test]
    fn test_pane_focus_passes_through() {
        let project = ProjectSpec {
            name: "p".to_string(),
            tabs: vec![TabSpec {
                panes: vec![
                    PaneSpec {
                        focus: true,
                        ..PaneSpec::default()
                    },
                    PaneSpec {
                        focus: true,
                        ..PaneSpec::default()
                    },
                ],
                ..tab("t", false)
            }],
            ..ProjectSpec::default()
        };
        let doc = build_document(&project, &CompileOptions::default());
        let focused = crate::zellij::tree::body_leaves(&doc.tabs[0].body)
            .iter()
            .filter(|(leaf, _)| leaf.focus)
            .count();
        assert_eq!(focused, 2);
    }
}
