//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::TodoError;

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns `TodoError::InvalidInput` if the generated script is not UTF-8.
pub fn completions(shell: Shell) -> Result<String, TodoError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "smartdo", &mut buf);
    String::from_utf8(buf).map_err(|e| TodoError::InvalidInput(format!("UTF-8 error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_mention_commands() {
        let script = completions(Shell::Bash).unwrap();
        assert!(script.contains("smartdo"));
        assert!(script.contains("filter"));
    }

    #[test]
    fn test_zsh_completions() {
        let script = completions(Shell::Zsh).unwrap();
        assert!(script.contains("#compdef smartdo"));
    }
}
