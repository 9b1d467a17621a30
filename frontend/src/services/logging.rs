use super::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        if AppConfig::from_build_env().verbose_logging {
            Self::log(LogLevel::Debug, component, message);
        }
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Error, component, message);
    }

    fn log(level: LogLevel, component: &str, message: &str) {
        let timestamp: String = js_sys::Date::new_0().to_iso_string().into();
        let line = format_line(&timestamp, level, component, message);

        match level {
            LogLevel::Debug => gloo::console::debug!(line),
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Error => gloo::console::error!(line),
        }
    }
}

fn format_line(timestamp: &str, level: LogLevel, component: &str, message: &str) -> String {
    format!("{} [{}] {}: {}", timestamp, level.as_str(), component, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_format_line() {
        assert_eq!(
            format_line("2024-01-01T00:00:00.000Z", LogLevel::Warn, "api", "slow response"),
            "2024-01-01T00:00:00.000Z [warn] api: slow response"
        );
    }
}
