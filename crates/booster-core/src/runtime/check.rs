//! Toolchain detection for Node.js, npm, and npx
//!
//! Advisory only: a missing tool is reported, the run still proceeds and the
//! process runner surfaces the real failure.

use std::fmt;
use std::process::Command;

/// Toolchain detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl fmt::Display for RuntimeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.available {
            write!(
                f,
                "{} ({})",
                self.name,
                self.version.as_deref().unwrap_or("unknown")
            )
        } else {
            write!(f, "{} (not installed)", self.name)
        }
    }
}

/// Run `<binary> --version` and report what came back
fn probe(name: &'static str, binary: &str) -> RuntimeInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Windows ships npm and npx as `.cmd` shims
fn shim(binary: &str) -> String {
    if cfg!(windows) {
        format!("{}.cmd", binary)
    } else {
        binary.to_string()
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if npm is available
pub fn check_npm() -> RuntimeInfo {
    probe("npm", &shim("npm"))
}

/// Check if npx is available
pub fn check_npx() -> RuntimeInfo {
    probe("npx", &shim("npx"))
}

/// Probe every tool the pipeline shells out to
pub fn check_toolchain() -> Vec<RuntimeInfo> {
    vec![check_node(), check_npm(), check_npx()]
}

/// Tools from `runtimes` that were not found
pub fn missing(runtimes: &[RuntimeInfo]) -> Vec<&'static str> {
    runtimes
        .iter()
        .filter(|r| !r.available)
        .map(|r| r.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_toolchain_reports_every_tool() {
        let names: Vec<_> = check_toolchain().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Node.js", "npm", "npx"]);
    }

    #[test]
    fn test_probe_missing_binary() {
        let info = probe("Ghost", "definitely-not-a-real-binary-7c1e");
        assert!(!info.available);
        assert!(info.version.is_none());
        assert_eq!(info.to_string(), "Ghost (not installed)");
    }

    #[test]
    fn test_missing_lists_unavailable_only() {
        let runtimes = vec![
            RuntimeInfo {
                name: "Node.js",
                version: Some("v20.11.0".to_string()),
                available: true,
            },
            RuntimeInfo {
                name: "npx",
                version: None,
                available: false,
            },
        ];
        assert_eq!(missing(&runtimes), vec!["npx"]);
        assert_eq!(runtimes[0].to_string(), "Node.js (v20.11.0)");
    }
}
