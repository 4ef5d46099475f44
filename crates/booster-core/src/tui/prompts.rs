//! Charm-style CLI prompts using cliclack

use crate::error::ScaffoldError;
use crate::pipeline::{self, Answers};
use crate::product::ProductConfig;
use crate::runtime::{check, ShellRunner};
use crate::ui::UiLibrary;
use anyhow::Result;

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C) -> Result<()> {
    cliclack::intro(config.name()).map_err(prompt_error)?;
    cliclack::log::info(config.cli_description())?;

    // Step 1: Advisory toolchain check
    check_toolchain()?;

    // Step 2: Interview
    let answers = interview(config)?;

    // Step 3: Generate, install, configure
    let workdir = std::env::current_dir()?;
    let mut runner = ShellRunner::new(&workdir);
    pipeline::scaffold(config, &answers, &workdir, &mut runner).await?;

    // Step 4: Show next steps
    print_next_steps(config, &answers.project_name)?;

    Ok(())
}

/// Ask for the project name, then the UI library
pub fn interview<C: ProductConfig>(config: &C) -> Result<Answers, ScaffoldError> {
    let default_name = config.default_project_name();
    let project_name: String = cliclack::input("📁 Enter your project name:")
        .placeholder(default_name)
        .default_input(default_name)
        .interact()
        .map_err(prompt_error)?;

    let mut select = cliclack::select("🎨 Select a UI library to use:");
    for lib in UiLibrary::ALL {
        select = select.item(lib, lib.id(), lib.package());
    }
    let ui_library: UiLibrary = select.interact().map_err(prompt_error)?;

    Ok(Answers {
        project_name,
        ui_library,
    })
}

/// cliclack reports Ctrl+C / Esc as an interrupted I/O error
fn prompt_error(err: std::io::Error) -> ScaffoldError {
    if err.kind() == std::io::ErrorKind::Interrupted {
        ScaffoldError::Aborted
    } else {
        ScaffoldError::Io(err)
    }
}

fn check_toolchain() -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking toolchain...");

    let runtimes = check::check_toolchain();
    let summary: Vec<String> = runtimes.iter().map(ToString::to_string).collect();
    spinner.stop(format!("Detected: {}", summary.join(", ")));

    let missing = check::missing(&runtimes);
    if !missing.is_empty() {
        cliclack::log::warning(format!(
            "Not found: {}. The generator and installs will likely fail (install from https://nodejs.org)",
            missing.join(", ")
        ))?;
    }

    Ok(())
}

fn print_next_steps<C: ProductConfig>(config: &C, project_name: &str) -> Result<()> {
    let steps = config.next_steps(project_name);

    println!();
    println!("💻 Run the following command to start your project:");

    for step in &steps {
        println!("  {}", step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_maps_to_abort() {
        let err = prompt_error(std::io::Error::from(std::io::ErrorKind::Interrupted));
        assert!(matches!(err, ScaffoldError::Aborted));
        assert_eq!(err.exit_code(), 130);
    }

    #[test]
    fn test_other_prompt_errors_stay_io() {
        let err = prompt_error(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert!(matches!(err, ScaffoldError::Io(_)));
    }
}
