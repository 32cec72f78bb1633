//! KDL serialization - Functional Core with zero I/O
//!
//! The only place layout text is produced. Every quoted value goes through
//! `escape_kdl_string`.

use itertools::Itertools;

use super::{
    compile::{LayoutDocument, TabNode},
    config::BaseTemplate,
    tree::Node,
};

const INDENT: &str = "    ";

/// Line-oriented KDL builder that tracks block depth.
#[derive(Debug, Default)]
pub struct KdlWriter {
    out: String,
    depth: usize,
}

impl KdlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one indented line.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text.as_ref());
        self.out.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    /// Write `<header> {` and indent what follows.
    pub fn open(&mut self, header: impl AsRef<str>) -> &mut Self {
        self.line(format!("{} {{", header.as_ref()));
        self.depth += 1;
        self
    }

    /// Dedent and write `}`.
    pub fn close(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self.line("}")
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Escape a value for use inside a KDL quoted string.
pub fn escape_kdl_string(s: &str) -> String {
    s.chars()
        .flat_map(|c| match c {
            '\\' => vec!['\\', '\\'],
            '"' => vec!['\\', '"'],
            '\n' => vec!['\\', 'n'],
            '\r' => vec!['\\', 'r'],
            '\t' => vec!['\\', 't'],
            c if c.is_control() => format!("\\u{{{:x}}}", c as u32).chars().collect(),
            c => vec![c],
        })
        .collect()
}

fn quoted(s: &str) -> String {
    format!("\"{}\"", escape_kdl_string(s))
}

/// Serialize a layout document.
pub fn render(doc: &LayoutDocument) -> String {
    let mut w = KdlWriter::new();

    w.line(format!("session_name {}", quoted(&doc.session_name)))
        .blank()
        .open("layout");

    render_template(&mut w, &doc.template);
    doc.tabs.iter().for_each(|tab| render_tab(&mut w, tab));

    w.close();
    w.finish()
}

fn render_template(w: &mut KdlWriter, template: &BaseTemplate) {
    match template {
        BaseTemplate::Standard => {
            w.open("default_tab_template");
            bar(w, 1, "zellij:tab-bar");
            w.line("children");
            bar(w, 2, "zellij:status-bar");
            w.close().blank();
        }
        BaseTemplate::Compact => {
            w.line("// Extending from compact layout")
                .open("default_tab_template")
                .line("children");
            bar(w, 1, "zellij:compact-bar");
            w.close().blank();
        }
        BaseTemplate::Named(name) => {
            let name: String = name.chars().filter(|c| !c.is_control()).collect();
            w.line(format!("// Extending from {name} layout"));
        }
    }
}

fn bar(w: &mut KdlWriter, rows: u8, plugin: &str) {
    w.open(format!("pane size={rows} borderless=true"))
        .line(format!("plugin location={}", quoted(plugin)))
        .close();
}

fn render_tab(w: &mut KdlWriter, tab: &TabNode) {
    let focus = if tab.focus { " focus=true" } else { "" };
    w.open(format!(
        "tab name={} cwd={}{focus}",
        quoted(&tab.name),
        quoted(&tab.cwd)
    ));
    tab.body.iter().for_each(|node| render_node(w, node));
    w.close();
}

fn render_node(w: &mut KdlWriter, node: &Node) {
    match node {
        Node::Leaf(leaf) => {
            w.open(if leaf.focus { "pane focus=true" } else { "pane" })
                .line(format!("command {}", quoted(&leaf.command.program)));
            if !leaf.command.args.is_empty() {
                w.line(format!(
                    "args {}",
                    leaf.command.args.iter().map(String::as_str).map(quoted).join(" ")
                ));
            }
            w.close();
        }
        Node::Split(split) => {
            let size = split
                .size
                .map(|size| format!(" size={}", quoted(&size.to_string())))
                .unwrap_or_default();
            w.open(format!(
                "pane split_direction={}{size}",
                quoted(split.direction.as_ref())
            ));
            split.children.iter().for_each(|child| render_node(w, child));
            w.close();
        }
    }
}
