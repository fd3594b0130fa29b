use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialise logging. The default level is `info`; with `debug` it is
/// `debug` and may be overridden via the `RUST_LOG` environment variable.
/// When `log_file` is given output goes to that file instead of stderr.
pub fn init(debug: bool, log_file: Option<&Path>) {
    // Without debug the level is fixed so a stray `RUST_LOG` in the user's
    // environment cannot turn on verbose output.
    let level = if debug { "debug" } else { "info" };
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let _ = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .map(|n| n.to_os_string())
                .unwrap_or_else(|| "tab_launcher.log".into());
            let appender = tracing_appender::rolling::never(dir, name);
            builder.with_ansi(false).with_writer(appender).try_init()
        }
        None => builder.try_init(),
    };
}
