use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Status {
    Pending,
    Watched,
    Dropped,
}

impl Status {
    pub(crate) const ALL: [Status; 3] = [Self::Pending, Self::Watched, Self::Dropped];

    /// Literal used by the data file. Changing these breaks existing files.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Watched => "Watched",
            Self::Dropped => "Dropped",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Pending => "To Watch",
            Self::Watched => "Watched",
            Self::Dropped => "Dropped",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) name: String,
    pub(crate) status: Status,
}

impl Entry {
    pub(crate) fn new(name: impl Into<String>, status: Status) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }
}

/// Returns why `name` cannot be stored, if it cannot.
pub(crate) fn name_rejection(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        return Some("name is empty");
    }
    if name.contains(';') {
        return Some("name contains ';'");
    }
    if name.contains(['\n', '\r']) {
        return Some("name contains a line break");
    }
    None
}
