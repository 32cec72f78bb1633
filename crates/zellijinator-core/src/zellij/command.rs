//! Pane startup commands
//!
//! Every pane runs `<interpreter> -c "<line>"`, where the line changes into
//! the project root, runs the pane's commands and then execs the user's
//! shell so the pane stays interactive.

use std::collections::BTreeMap;

use itertools::Itertools;

use super::config::CompileOptions;

/// The program and arguments a pane is started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneCommand {
    pub program: String,
    pub args: Vec<String>,
}

/// Build the invocation for one pane (pure).
pub fn synthesize(
    commands: &[String],
    cwd: &str,
    env: &BTreeMap<String, String>,
    options: &CompileOptions,
) -> PaneCommand {
    PaneCommand {
        program: options.interpreter.clone(),
        args: vec![
            "-c".to_string(),
            startup_line(commands, cwd, env, &options.shell),
        ],
    }
}

/// The shell line a pane runs on startup (pure).
///
/// Environment exports are only emitted when the pane has commands; a
/// bare pane just changes directory and execs the shell. Paths and
/// commands are passed through verbatim.
pub fn startup_line(
    commands: &[String],
    cwd: &str,
    env: &BTreeMap<String, String>,
    shell: &str,
) -> String {
    if commands.is_empty() {
        return format!("cd '{cwd}'; exec {shell}");
    }

    let exports: String = env
        .iter()
        .map(|(key, value)| format!("export {key}='{value}'; "))
        .collect();

    format!(
        "{exports}cd '{cwd}' && {}; exec {shell}",
        commands.iter().join(" && ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmds(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_commands_without_env() {
        let line = startup_line(
            &cmds(&["echo hi", "ls -la"]),
            "/tmp/proj",
            &BTreeMap::new(),
            "/bin/bash",
        );
        assert_eq!(line, "cd '/tmp/proj' && echo hi && ls -la; exec /bin/bash");
        assert!(!line.contains("export"));
    }

    #[test]
    fn test_env_is_not_exported_without_commands() {
        let env = BTreeMap::from([("FOO".to_string(), "bar".to_string())]);
        let line = startup_line(&[], "/tmp/proj", &env, "/bin/bash");

        assert_eq!(line, "cd '/tmp/proj'; exec /bin/bash");
        assert!(!line.contains("export FOO='bar'"));
    }

    #[test]
    fn test_env_exports_sorted_before_cd() {
        let env = BTreeMap::from([
            ("ZED".to_string(), "last".to_string()),
            ("ALPHA".to_string(), "first".to_string()),
        ]);
        let line = startup_line(&cmds(&["make"]), "/src", &env, "/bin/zsh");

        assert_eq!(
            line,
            "export ALPHA='first'; export ZED='last'; cd '/src' && make; exec /bin/zsh"
        );
    }

    #[test]
    fn test_synthesize_uses_interpreter() {
        let options = CompileOptions::default();
        let command = synthesize(&cmds(&["htop"]), "/", &BTreeMap::new(), &options);

        assert_eq!(command.program, "sh");
        assert_eq!(command.args.len(), 2);
        assert_eq!(command.args[0], "-c");
        assert_eq!(command.args[1], "cd '/' && htop; exec /bin/bash");
    }

    #[test]
    fn test_quotes_pass_through_unescaped() {
        let line = startup_line(&cmds(&[r#"echo "hi""#]), "/x", &BTreeMap::new(), "sh");
        assert_eq!(line, r#"cd '/x' && echo "hi"; exec sh"#);
    }
}
