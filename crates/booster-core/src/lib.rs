//! Booster Core - Shared library for the Next.js booster CLI
//!
//! This library bootstraps a Next.js project by delegating to the official generator and
//! the package manager, then overwriting the framework and Tailwind configs with tuned
//! templates.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Config templates, the UI library table, the process runner
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and the `scaffold` pipeline
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use booster_core::{pipeline, Answers, ShellRunner, UiLibrary};
//!
//! let answers = Answers {
//!     project_name: "demo-app".to_string(),
//!     ui_library: UiLibrary::DaisyUi,
//! };
//! let workdir = std::env::current_dir()?;
//! let mut runner = ShellRunner::new(&workdir);
//! pipeline::scaffold(&MyConfig, &answers, &workdir, &mut runner).await?;
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod product;
pub mod runtime;
pub mod ui;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use pipeline::{scaffold, Answers};
pub use product::ProductConfig;
pub use runtime::{check_toolchain, CommandRunner, RuntimeInfo, ShellRunner};
pub use ui::UiLibrary;

#[cfg(feature = "tui")]
pub use tui::run;
