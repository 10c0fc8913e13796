//! Logger setup shared by the CLI, the bench binary and the wasm entry point.

#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Environment variable that turns on debug logging for native builds.
pub const DEBUG_ENV_VAR: &str = "CRYPTARITHM_DEBUG";

/// Whether debug logging was asked for, either by flag or by [`DEBUG_ENV_VAR`].
///
/// The variable counts as set unless it is empty, `0` or `false`.
#[must_use]
pub fn debug_requested(flag: bool, env_value: Option<&str>) -> bool {
    flag || env_value.is_some_and(|v| !matches!(v.trim(), "" | "0" | "false"))
}

/// Initialize logging for the cryptarithm tools.
///
/// - **Native:** debug level when `debug_enabled` or [`DEBUG_ENV_VAR`] is set, info otherwise.
///   `RUST_LOG`, when set, overrides both.
/// - **WASM:** console logging at debug or info level.
///
/// Later calls are ignored.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled { log::Level::Debug } else { log::Level::Info };

        if let Err(e) = console_log::init_with_level(level) {
            // no logger yet, so write to the console directly
            let msg = format!("console_log unavailable ({e}); cryptarithm logging is off");
            web_sys::console::error_1(&msg.into());
        } else {
            log::info!("cryptarithm wasm logging at {level:?}");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let env_value = std::env::var(DEBUG_ENV_VAR).ok();
        let level = if debug_requested(debug_enabled, env_value.as_deref()) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }

        if builder.try_init().is_ok() {
            log::debug!("cryptarithm logging at {level:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_requested() {
        assert!(debug_requested(true, None));
        assert!(debug_requested(false, Some("1")));
        assert!(debug_requested(false, Some("yes")));
        assert!(!debug_requested(false, None));
        assert!(!debug_requested(false, Some("")));
        assert!(!debug_requested(false, Some("0")));
        assert!(!debug_requested(false, Some("false")));
    }

    #[test]
    fn test_init_logger_twice_is_harmless() {
        init_logger(false);
        init_logger(true);
        log::info!("still logging");
    }
}
