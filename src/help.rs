//! Help and version rendering
//!
//! Formats the option registry and static version metadata into the
//! human-readable text printed for `-h/--help` and `-v/--version`.

use crate::registry::OptionRegistry;

/// Static version metadata reported for `-v/--version` and in help footers.
#[derive(Debug, Clone)]
pub struct VersionInfo {
    version: String,
    extras: Vec<(String, String)>,
    include_runtime: bool,
}

impl VersionInfo {
    /// Create version info for the given version string.
    ///
    /// Use the [`version_info!`](crate::version_info) macro to capture the
    /// calling crate's `CARGO_PKG_VERSION` automatically.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            extras: Vec::new(),
            include_runtime: true,
        }
    }

    /// Add an extra `key=value` pair to the version line.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.push((key.into(), value.into()));
        self
    }

    /// Whether to append a `runtime` entry for the host OS and architecture.
    /// Defaults to true.
    pub fn with_runtime_enabled(mut self, enabled: bool) -> Self {
        self.include_runtime = enabled;
        self
    }

    /// Render the full version line, e.g.
    /// `version 1.2.0 -- (build=nightly; runtime=linux-x86_64)`.
    pub fn render(&self) -> String {
        let mut extras: Vec<String> = self
            .extras
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();

        if self.include_runtime {
            extras.push(format!(
                "runtime={}-{}",
                std::env::consts::OS,
                std::env::consts::ARCH
            ));
        }

        let mut line = format!("version {}", self.version).trim_end().to_string();
        if !extras.is_empty() {
            line.push_str(&format!(" -- ({})", extras.join("; ")));
        }

        line
    }
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self::new("")
    }
}

/// Build a [`VersionInfo`] from the calling crate's Cargo package metadata.
///
/// Cargo embeds the package version at compile time, so this is the
/// counterpart of reading version attributes out of a build manifest.
#[macro_export]
macro_rules! version_info {
    () => {
        $crate::VersionInfo::new(env!("CARGO_PKG_VERSION"))
    };
}

/// Render the full help text: usage line, aligned option rows, version footer.
pub(crate) fn render_help(
    syntax: &str,
    registry: &OptionRegistry,
    version: &VersionInfo,
) -> String {
    let mut out = format!("usage: {syntax}\n");

    let labels: Vec<String> = registry
        .iter()
        .map(|spec| {
            let mut label = format!(" -{},--{}", spec.short, spec.long);
            if spec.takes_arg {
                label.push_str(" <arg>");
            }
            label
        })
        .collect();

    let width = labels.iter().map(String::len).max().unwrap_or(0);

    for (label, spec) in labels.iter().zip(registry.iter()) {
        let row = format!("{label:<width$}   {}", spec.description);
        out.push_str(row.trim_end());
        out.push('\n');
    }

    out.push_str(&version.render());
    out.push('\n');
    out
}
