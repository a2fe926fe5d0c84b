/// Project name parsing for the version lookup.
///
/// A trailing `-stamp` asks for a shields.io badge instead of the plain
/// payload. The suffix is never part of the storage key.

/// Suffix marking a badge request.
pub const STAMP_SUFFIX: &str = "-stamp";

/// A requested project name split into storage key and response mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName {
    /// Key used for the store lookup.
    pub key: String,
    /// True if the badge payload was requested.
    pub is_stamp: bool,
}

impl ProjectName {
    /// Parse a raw project name.
    ///
    /// Returns None when there is nothing left to look up, i.e. the name is
    /// empty or consists of the suffix alone.
    pub fn parse(raw: &str) -> Option<Self> {
        let (key, is_stamp) = match raw.strip_suffix(STAMP_SUFFIX) {
            Some(key) => (key, true),
            None => (raw, false),
        };

        if key.is_empty() {
            return None;
        }

        Some(ProjectName {
            key: key.to_string(),
            is_stamp,
        })
    }
}

impl std::fmt::Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_stamp {
            write!(f, "{}{}", self.key, STAMP_SUFFIX)
        } else {
            write!(f, "{}", self.key)
        }
    }
}
