use gloo::net::http::Request;
use shared::LogEntry;
use wasm_bindgen_futures::spawn_local;

/// Forwards log lines to the backend (`POST /api/logs`) and mirrors them to
/// the browser console
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log("debug", message, Some(component.to_string()));
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log("info", message, Some(component.to_string()));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log("warn", message, Some(component.to_string()));
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log("error", message, Some(component.to_string()));
    }

    fn log(level: &str, message: &str, component: Option<String>) {
        let entry = LogEntry {
            level: level.to_string(),
            message: message.to_string(),
            component,
        };

        let line = console_line(&entry);
        match level {
            "error" => gloo::console::error!(line),
            "warn" => gloo::console::warn!(line),
            "debug" => gloo::console::debug!(line),
            _ => gloo::console::log!(line),
        }

        // fire and forget; a failed forward must not affect the widget
        spawn_local(async move {
            if let Ok(request) = Request::post("/api/logs").json(&entry) {
                let _ = request.send().await;
            }
        });
    }
}

fn console_line(entry: &LogEntry) -> String {
    format!(
        "[{}] {}",
        entry.component.as_deref().unwrap_or("frontend"),
        entry.message
    )
}
