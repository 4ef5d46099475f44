//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface a binary implements to configure the
//! bootstrap pipeline: who it is, and which external tools it delegates to.

/// Configuration trait for CLI products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name)
/// - The project generator and its fixed flags
/// - The package manager and the always-installed purge helper
/// - Post-setup instructions
///
/// The tool-related methods default to the Next.js toolchain.
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Project name offered when the user submits an empty answer
    fn default_project_name(&self) -> &'static str {
        "nextjs-app"
    }

    /// Generator invocation, without the target directory and flags
    fn generator_command(&self) -> &'static str {
        "npx create-next-app@latest"
    }

    /// Fixed generator flags: linting, Tailwind, and the app router
    fn generator_flags(&self) -> &'static [&'static str] {
        &["--eslint", "--tailwind", "--app"]
    }

    /// Package manager binary used for installs
    fn package_manager(&self) -> &'static str {
        "npm"
    }

    /// CSS purging helper installed as a dev dependency on every run
    fn purge_helper(&self) -> &'static str {
        "next-purgecss"
    }

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, project_name: &str) -> Vec<String> {
        vec![format!(
            "cd {} && {} run dev",
            project_name,
            self.package_manager()
        )]
    }
}
