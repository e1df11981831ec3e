//! Program information and result-count banners

use std::process::Command;

use super::style::Palette;

/// Versions and links shown by `--info`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgInfo {
    /// Version of the locally installed Node.js runtime
    pub runtime_version: String,
    pub tool_version: String,
    pub repository: String,
}

impl ProgInfo {
    /// Gathers the information for this build and machine
    pub fn current() -> Self {
        Self {
            runtime_version: node_version().unwrap_or_else(|| "not installed".to_string()),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            repository: env!("CARGO_PKG_REPOSITORY").to_string(),
        }
    }
}

/// `node --version`, if a runtime is on the PATH
fn node_version() -> Option<String> {
    let output = Command::new("node").arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!version.is_empty()).then_some(version)
}

/// Key/value listing in fixed order
pub fn prog_info(info: &ProgInfo, palette: Palette) -> String {
    let rows = [
        (" node version ", info.runtime_version.clone()),
        (" node-help version ", info.tool_version.clone()),
        (" github ", palette.link(&info.repository)),
    ];

    rows.iter()
        .map(|(key, value)| format!("{} {}", palette.banner(key), value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line banner announcing how many entries matched
pub fn summary(count: usize, palette: Palette) -> String {
    format!(
        "\n{}",
        palette.alert(&format!("[ {} Result(s) for Node.js. ]", count))
    )
}
