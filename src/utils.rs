use std::path::Path;

/// Turn a local file path into a URL the webview media elements can
/// load. Paths with spaces or non-ASCII characters must be
/// percent-encoded for the file scheme.
pub fn local_file_url(path: &Path) -> String {
    let normalized = path.to_string_lossy().replace('\\', "/");
    let encoded: Vec<String> = normalized
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();
    format!("file:///{}", encoded.join("/").trim_start_matches('/'))
}

pub fn parse_f32_input(value: &str, fallback: f32) -> f32 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return fallback;
    }
    trimmed.parse::<f32>().unwrap_or(fallback)
}

pub fn parse_f64_input(value: &str, fallback: f64) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return fallback;
    }
    trimmed.parse::<f64>().unwrap_or(fallback)
}

/// Format seconds as HH:MM:SS for the transport readout.
pub fn format_timecode(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{:02}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}
