use rand::seq::IndexedRandom;
use serde_json::Value;

const RESET: &str = "\x1b[0m";
const COLORS: [&str; 6] = [
    "\x1b[31m", "\x1b[32m", "\x1b[33m", "\x1b[34m", "\x1b[35m", "\x1b[36m",
];

/// Render the response document for the terminal. The color is picked per
/// invocation from a thread-local rng; no process-wide state is touched.
pub fn render(document: &Value, color: bool, compact: bool, lowercase: bool) -> String {
    let mut out = if compact {
        document.to_string()
    } else {
        serde_json::to_string_pretty(document).unwrap_or_else(|_| document.to_string())
    };

    if lowercase {
        out = out.to_lowercase();
    }

    if color {
        let mut rng = rand::rng();
        if let Some(code) = COLORS.choose(&mut rng) {
            out = format!("{code}{out}{RESET}");
        }
    }

    out
}
