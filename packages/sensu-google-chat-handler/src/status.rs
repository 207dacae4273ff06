use std::fmt;

/// Check status as reported by Sensu.
///
/// Codes outside 0..=2 are carried through as `Unknown` rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Resolved,
    Warning,
    Alert,
    Unknown(i64),
}

impl CheckStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Resolved => "RESOLVED",
            CheckStatus::Warning => "WARNING",
            CheckStatus::Alert => "ALERT",
            CheckStatus::Unknown(_) => "UNKNOWN",
        }
    }
}

impl From<i64> for CheckStatus {
    fn from(code: i64) -> Self {
        match code {
            0 => CheckStatus::Resolved,
            1 => CheckStatus::Warning,
            2 => CheckStatus::Alert,
            other => CheckStatus::Unknown(other),
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width/alignment flags apply to the label
        f.pad(self.label())
    }
}

/// Human-readable label for a raw status code.
pub fn status_label(code: i64) -> &'static str {
    CheckStatus::from(code).label()
}
