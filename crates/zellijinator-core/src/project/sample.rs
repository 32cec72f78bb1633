//! Starter file written by `zellijinator new`

/// Commented YAML for a fresh project called `name`.
pub fn sample_project(name: &str) -> String {
    format!(
        r#"# zellijinator project: {name}
#
# Every key below except `name` may be omitted.

name: {name}

# Working directory for every tab and pane. `~` and $VARS are expanded.
root: ~/projects/{name}

# Zellij session name. Defaults to the project name.
# session_name: {name}-dev

# Use a hand-written .kdl layout instead of the tabs below.
# layout: ~/.config/zellij/layouts/{name}.kdl

# Base template to extend. "compact" swaps the tab and status bars for
# Zellij's single compact bar.
# default_layout: compact

# Exported in every pane that runs commands.
env:
  # RUST_LOG: debug

tabs:
  - name: editor
    focus: true
    panes:
      - focus: true
        commands:
          - $EDITOR .
      - split: vertical
        size: 30
        commands:
          - git status

  # Named patterns: even-horizontal, even-vertical, main-vertical,
  # main-horizontal, tiled. Per-pane split/size are ignored here.
  - name: shells
    layout: tiled
    panes:
      - commands: []
      - commands: []
      - commands: []
"#
    )
}
