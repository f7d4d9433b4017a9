//! Creates a new AVR project from the workspace template.

use avrkit::{
    cli::{get_args, ScaffoldArgs},
    error::{default_error_handler, Result},
    logger::init_logger,
    scaffold::Scaffolder,
    workspace::Workspace,
};

fn main() {
    let args: ScaffoldArgs = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: ScaffoldArgs) -> Result<()> {
    let overrides = args.overrides();
    let scaffolder = Scaffolder::new(Workspace::new(&args.workspace));
    let target = scaffolder.scaffold(&args.name, &overrides)?;

    println!("Created {}", target.display());
    Ok(())
}
