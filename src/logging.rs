use env_logger::{Builder, Env};

/// Install the global logger. `RUST_LOG` takes precedence over the default filter.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let _ = Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_target(false)
        .try_init();
}
