//! Per-run package outcomes.

/// Which packages ended up available after a run, in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageReport {
    /// Packages that were present or installed.
    pub ok: Vec<String>,
    /// Packages that are still unavailable.
    pub failed: Vec<String>,
}

impl PackageReport {
    /// Record one package outcome.
    pub fn record(&mut self, name: &str, ok: bool) {
        if ok {
            self.ok.push(name.to_string());
        } else {
            self.failed.push(name.to_string());
        }
    }

    /// Whether every package succeeded.
    pub fn all_ok(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of packages processed.
    pub fn total(&self) -> usize {
        self.ok.len() + self.failed.len()
    }
}
