/// Log level used when neither the config file nor `RUST_LOG` sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Environment variable naming a config file when none is passed on the command line
pub const CONFIG_PATH_ENV: &str = "KEYED_TRANSFORMER_CONFIG";
/// Response metadata key written by the timing wrapper, in seconds
pub const PROCESS_TIME_KEY: &str = "process_time";
