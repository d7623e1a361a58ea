//! The configuration fields the engine knows how to patch.

use std::fmt;

/// A named configuration value inside the constants file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Base URL of the service control REST API.
    ServiceControlUrl,
    /// Release version string displayed by the dashboard.
    Version,
}

impl Field {
    /// All known fields, in reporting order.
    pub const ALL: [Self; 2] = [Self::ServiceControlUrl, Self::Version];

    /// Returns the literal key as written in the constants file.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ServiceControlUrl => "service_control_url",
            Self::Version => "version",
        }
    }

    /// Returns `true` if values of this field must be absolute URIs.
    #[must_use]
    pub const fn requires_uri(self) -> bool {
        matches!(self, Self::ServiceControlUrl)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
