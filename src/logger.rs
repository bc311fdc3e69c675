use log::LevelFilter;
use std::io::Write;

/// Initialize console logging
///
/// The level can be controlled via the `RUST_LOG` environment variable:
/// - `RUST_LOG=warn` - Only failed history saves
/// - `RUST_LOG=info` - Every saved history file (default)
/// - `RUST_LOG=debug` - Also history file name collisions
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger() {
    let default_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{:5}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(default_level)
        .target(env_logger::Target::Stderr)
        .try_init()
        .ok();
}
