use log::LevelFilter;

/// Level used by the utilities: `Debug` with `--verbose`, `Info` otherwise.
pub fn level_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

pub fn init_logger(verbose: bool) {
    env_logger::Builder::new().filter_level(level_filter(verbose)).init();
}
