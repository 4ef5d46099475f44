//! Next.js booster CLI - bootstraps a Next.js project with tuned build and Tailwind configs

use anyhow::Result;
use booster_core::{ProductConfig, ScaffoldError};
use clap::Parser;

/// Next.js booster product configuration
#[derive(Clone)]
pub struct NextBoosterConfig;

impl ProductConfig for NextBoosterConfig {
    fn name(&self) -> &'static str {
        "next-booster"
    }

    fn display_name(&self) -> &'static str {
        "Next.js"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for bootstrapping Next.js projects with tuned build and Tailwind configs"
    }
}

/// All parameters are gathered interactively
#[derive(Parser, Debug)]
#[command(name = "next-booster")]
#[command(about = "CLI for bootstrapping Next.js projects with tuned build and Tailwind configs")]
#[command(version)]
pub struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let _args = Args::parse();
    let config = NextBoosterConfig;

    let result = booster_core::run(&config).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(()) => Ok(()),
        Err(err) => match err.downcast_ref::<ScaffoldError>() {
            Some(failure) if failure.command().is_some() => {
                eprintln!("❌ {}", failure);
                std::process::exit(failure.exit_code());
            }
            Some(ScaffoldError::Aborted) => {
                eprintln!("{}", ScaffoldError::Aborted);
                std::process::exit(ScaffoldError::Aborted.exit_code());
            }
            _ => Err(err),
        },
    }
}
