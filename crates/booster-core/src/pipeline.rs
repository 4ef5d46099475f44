//! The bootstrap pipeline
//!
//! Strictly sequential: generate, install the purge helper, write both configs,
//! install the UI library. The first failure stops the run; nothing already on
//! disk is rolled back.

use crate::config::{write_framework_config, write_styling_config};
use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::runtime::CommandRunner;
use crate::ui::UiLibrary;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Answers collected by the interview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    /// Used verbatim as the directory name and in shell commands
    pub project_name: String,
    pub ui_library: UiLibrary,
}

/// Generator invocation targeting `project_name`
pub fn generator_command<C: ProductConfig>(config: &C, project_name: &str) -> String {
    let mut command = format!("{} {}", config.generator_command(), project_name);
    for flag in config.generator_flags() {
        command.push(' ');
        command.push_str(flag);
    }
    command
}

/// "change directory then install" command for one package
pub fn install_command<C: ProductConfig>(
    config: &C,
    project_dir: &str,
    package: &str,
    dev: bool,
) -> String {
    let mut command = format!(
        "cd {} && {} install {}",
        project_dir,
        config.package_manager(),
        package
    );
    if dev {
        command.push_str(" --save-dev");
    }
    command
}

/// Run the generator; hands the project name back for the later steps
pub async fn generate_project<C: ProductConfig, R: CommandRunner>(
    config: &C,
    project_name: &str,
    runner: &mut R,
) -> Result<String, ScaffoldError> {
    println!(
        "🚀 Creating a new {} app: {}...",
        config.display_name(),
        project_name
    );
    runner.run(&generator_command(config, project_name)).await?;
    Ok(project_name.to_string())
}

/// Install `package` inside `project_dir`
pub async fn install_dependency<C: ProductConfig, R: CommandRunner>(
    config: &C,
    project_dir: &str,
    package: &str,
    dev: bool,
    runner: &mut R,
) -> Result<(), ScaffoldError> {
    runner
        .run(&install_command(config, project_dir, package, dev))
        .await
}

/// Run every step for `answers`, with relative paths resolved against `workdir`
///
/// `runner` must execute its commands in `workdir` as well. Returns the project
/// directory.
pub async fn scaffold<C: ProductConfig, R: CommandRunner>(
    config: &C,
    answers: &Answers,
    workdir: &Path,
    runner: &mut R,
) -> Result<PathBuf, ScaffoldError> {
    let project_name = generate_project(config, &answers.project_name, runner).await?;
    let project_dir = workdir.join(&project_name);

    let purge = config.purge_helper();
    println!("📦 Installing {}...", purge);
    install_dependency(config, &project_name, purge, true, runner).await?;
    println!("{}", format!("✅ Successfully installed {}.", purge).green());

    let path = write_framework_config(&project_dir).await?;
    println!("{}", format!("✅ {} has been successfully updated.", file_name(&path)).green());

    let path = write_styling_config(&project_dir, answers.ui_library).await?;
    println!("{}", format!("✅ {} has been successfully updated.", file_name(&path)).green());

    let ui = answers.ui_library;
    println!("📦 Installing {}...", ui);
    install_dependency(config, &project_name, ui.package(), false, runner).await?;
    println!("{}", format!("✅ Successfully installed {}.", ui).green());

    println!(
        "{}",
        format!(
            "🎉 {} project setup completed successfully!",
            config.display_name()
        )
        .green()
        .bold()
    );

    Ok(project_dir)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
