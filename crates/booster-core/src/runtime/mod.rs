//! Process execution and toolchain detection
//!
//! This module provides:
//! - The shell command runner every external effect goes through
//! - Advisory detection of Node.js, npm, and npx

pub mod check;
pub mod runner;

pub use check::{check_node, check_npm, check_npx, check_toolchain, RuntimeInfo};
pub use runner::{CommandRunner, ShellRunner};
