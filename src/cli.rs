//! Command-line interfaces of the avrkit utilities.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::makefile::Overrides;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Arguments of `gen-c-cpp-props`.
#[derive(Parser, Debug)]
#[command(
    name = "gen-c-cpp-props",
    version,
    about = "Generate the VS Code C/C++ IntelliSense configuration for the host OS",
    long_about = None
)]
pub struct EmitArgs {
    /// Workspace root holding the .vscode directory
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub workspace: PathBuf,

    /// Platform identifier to generate for instead of the detected one (Darwin, Linux)
    #[arg(long, value_name = "NAME")]
    pub platform: Option<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments of `new-project`.
#[derive(Parser, Debug)]
#[command(
    name = "new-project",
    version,
    about = "Copy the template directory and adjust Makefile defaults for a new AVR project",
    long_about = None
)]
pub struct ScaffoldArgs {
    /// Directory name for the new project
    #[arg(value_name = "NAME")]
    pub name: String,

    /// MCU device (default attiny85)
    #[arg(long)]
    pub device: Option<String>,

    /// Clock frequency in Hz
    #[arg(long)]
    pub clock: Option<String>,

    /// Programmer string (eg. -c usbasp)
    #[arg(long, allow_hyphen_values = true)]
    pub programmer: Option<String>,

    /// Fuse settings (eg. -U lfuse:w:0x62:m ...)
    #[arg(long, allow_hyphen_values = true)]
    pub fuses: Option<String>,

    /// Workspace root holding the template directory
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub workspace: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl ScaffoldArgs {
    /// Collects the supplied Makefile overrides.
    pub fn overrides(&self) -> Overrides {
        Overrides::from_options(
            self.device.clone(),
            self.clock.clone(),
            self.programmer.clone(),
            self.fuses.clone(),
        )
    }
}

/// Parses command line arguments of a utility.
///
/// # Exits
/// * With status code 1 after printing the help if required arguments are missing;
///   a failure to print the help is reported on stderr
/// * With clap's default error handling for other argument errors
pub fn get_args<A: Parser>() -> A {
    match A::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                if let Err(err) = A::command().help_template(HELP_TEMPLATE).print_help() {
                    eprintln!("{}", err);
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
