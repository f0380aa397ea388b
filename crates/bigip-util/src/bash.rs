//! Bash command runner (`util/bash`).
//!
//! The device executes `bash -c '<command>'` with whatever arrives in
//! `utilCmdArgs`, so the command string must be wrapped in single quotes
//! with embedded quotes escaped before it goes on the wire.

use bigip_core::{Endpoint, Module, Result, Session};
use serde::{Deserialize, Serialize};

/// Wire shape of the `util/bash` run endpoint (request and response).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BashCommand {
    /// Response kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Always `run` for command execution
    pub command: String,
    /// Arguments handed to bash (`-c '<command>'`)
    pub util_cmd_args: String,
    /// Combined stdout/stderr of the command, set in responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_result: Option<String>,
}

/// Quote a string for safe use inside `bash -c`.
///
/// The argument is wrapped in single quotes; embedded single quotes are
/// closed, escaped, and reopened (`'` becomes `'\''`).
#[must_use]
pub fn shell_quote(command: &str) -> String {
    let mut quoted = String::with_capacity(command.len() + 2);
    quoted.push('\'');
    for ch in command.chars() {
        if ch == '\'' {
            quoted.push_str("'\\''");
        } else {
            quoted.push(ch);
        }
    }
    quoted.push('\'');
    quoted
}

/// Handler for the bash runner.
#[derive(Debug, Clone)]
pub struct Bash {
    session: Session,
}

impl Bash {
    /// Create a handler over the given session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    fn endpoint() -> Endpoint {
        Endpoint::tm(Module::Util).resource("bash")
    }

    /// Run a shell command on the device and return its output.
    ///
    /// The command is quoted for `bash -c`; quoting of the payload is the
    /// only transformation applied.
    pub async fn run(&self, command: &str) -> Result<String> {
        let response = self.run_raw(command).await?;
        Ok(response.command_result.unwrap_or_default())
    }

    /// Run a shell command and return the full response object.
    pub async fn run_raw(&self, command: &str) -> Result<BashCommand> {
        let body = BashCommand {
            kind: None,
            command: "run".to_string(),
            util_cmd_args: format!("-c {}", shell_quote(command)),
            command_result: None,
        };
        self.session.post_json(&Self::endpoint(), &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn quote_plain_command() {
        assert_eq!(shell_quote("ls /var/log"), "'ls /var/log'");
    }

    #[test]
    fn quote_empty_command() {
        assert_eq!(shell_quote(""), "''");
    }

    #[test]
    fn quote_escapes_single_quotes() {
        assert_eq!(
            shell_quote("echo 'hello world'"),
            r#"'echo '\''hello world'\'''"#
        );
    }

    #[test]
    fn quote_leaves_double_quotes_alone() {
        assert_eq!(
            shell_quote(r#"grep "error" /var/log/ltm"#),
            r#"'grep "error" /var/log/ltm'"#
        );
    }

    #[test]
    fn quote_handles_only_quotes() {
        assert_eq!(shell_quote("'"), r#"''\'''"#);
        assert_eq!(shell_quote("''"), r#"''\'''\'''"#);
    }

    #[tokio::test]
    async fn run_posts_quoted_command() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/mgmt/tm/util/bash"))
            .and(body_json(json!({
                "command": "run",
                "utilCmdArgs": "-c 'cat /var/prompt/ps1'"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "tm:util:bash:runstate",
                "command": "run",
                "utilCmdArgs": "-c 'cat /var/prompt/ps1'",
                "commandResult": "Active\n"
            })))
            .mount(&server)
            .await;

        let bash = Bash::new(Session::new(server.uri(), "admin", "secret").unwrap());
        let output = bash.run("cat /var/prompt/ps1").await.unwrap();
        assert_eq!(output, "Active\n");
    }

    #[tokio::test]
    async fn run_raw_returns_full_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/mgmt/tm/util/bash"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "tm:util:bash:runstate",
                "command": "run",
                "utilCmdArgs": "-c 'uptime'",
                "commandResult": " 10:05:32 up 42 days\n"
            })))
            .mount(&server)
            .await;

        let bash = Bash::new(Session::new(server.uri(), "admin", "secret").unwrap());
        let response = bash.run_raw("uptime").await.unwrap();
        assert_eq!(response.kind.as_deref(), Some("tm:util:bash:runstate"));
        assert!(response.command_result.unwrap().contains("up 42 days"));
    }

    #[tokio::test]
    async fn run_without_result_yields_empty_output() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/mgmt/tm/util/bash"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "tm:util:bash:runstate",
                "command": "run",
                "utilCmdArgs": "-c 'true'"
            })))
            .mount(&server)
            .await;

        let bash = Bash::new(Session::new(server.uri(), "admin", "secret").unwrap());
        let output = bash.run("true").await.unwrap();
        assert!(output.is_empty());
    }
}
