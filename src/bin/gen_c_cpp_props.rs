//! Writes `.vscode/c_cpp_properties.json` for the host platform.

use avrkit::{
    cli::{get_args, EmitArgs},
    error::{default_error_handler, Result},
    logger::init_logger,
    platform::host_system,
    properties::{emit, EmitConfig},
    workspace::Workspace,
};

fn main() {
    let args: EmitArgs = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: EmitArgs) -> Result<()> {
    let platform = args.platform.unwrap_or_else(host_system);
    log::debug!("Detected platform: {}", platform);

    let config = EmitConfig { workspace: Workspace::new(args.workspace), platform };
    let emitted = emit(&config)?;

    println!("Wrote {} for {}", emitted.path.display(), emitted.platform);
    Ok(())
}
