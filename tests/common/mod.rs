//! Integration test common infrastructure.
//!
//! Runs the flowgate binary against a temporary config and collects what it
//! writes to stdout.

use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Base config shared by the integration tests.
pub const BASE_CONFIG: &str = r##"
[server]
name = "irc.test"
network = "TestNet"

[session]
nick = "me"

[logging]
level = "debug"

[[users]]
id = "1"
nick = "alice"
name = "Alice"
email = "alice@example.com"

[[users]]
id = "2"
nick = "bob"
name = "Bob"

[[channels]]
id = "main"
name = "#main"
members = ["1", "2"]

[[channels]]
id = "archive"
name = "#archive"
open = false
members = ["1"]
"##;

/// A gateway process fed from a fixed script of input lines.
pub struct TestGateway {
    dir: TempDir,
}

impl TestGateway {
    pub fn with_config(config: &str) -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("flowgate.toml"), config)?;
        Ok(Self { dir })
    }

    /// Feed `input` on stdin, close it, and return stdout split into lines.
    pub fn run(&self, input: &[&str]) -> anyhow::Result<Vec<String>> {
        let lines: Vec<&[u8]> = input.iter().map(|line| line.as_bytes()).collect();
        self.run_bytes(&lines)
    }

    /// Like [`TestGateway::run`], for input lines that may not be UTF-8.
    pub fn run_bytes(&self, input: &[&[u8]]) -> anyhow::Result<Vec<String>> {
        let mut child = Command::new(env!("CARGO_BIN_EXE_flowgate"))
            .arg(self.dir.path().join("flowgate.toml"))
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        {
            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| anyhow::anyhow!("stdin not captured"))?;
            for line in input {
                stdin.write_all(line)?;
                stdin.write_all(b"\n")?;
            }
        }

        let output = child.wait_with_output()?;
        anyhow::ensure!(output.status.success(), "gateway exited with {}", output.status);

        Ok(String::from_utf8(output.stdout)?
            .lines()
            .map(str::to_string)
            .collect())
    }
}
