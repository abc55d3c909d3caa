//! Stripe API version pinning.
//!
//! Stripe versions are release dates (`YYYY-MM-DD`). When set, the version is
//! sent in the `Stripe-Version` header; otherwise the account default applies.

use crate::error::ConfigError;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// A Stripe API version, validated as a calendar date.
///
/// # Example
///
/// ```rust
/// use stripe_cards::ApiVersion;
///
/// let version: ApiVersion = "2014-08-04".parse().unwrap();
/// assert_eq!(version.to_string(), "2014-08-04");
/// assert!("2014-13-01".parse::<ApiVersion>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiVersion(NaiveDate);

impl ApiVersion {
    const FORMAT: &'static str = "%Y-%m-%d";

    /// Creates a version from its release date.
    #[must_use]
    pub const fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the release date of this version.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), Self::FORMAT)
            .map(Self)
            .map_err(|_| ConfigError::InvalidApiVersion {
                version: s.to_string(),
            })
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parses_and_displays() {
        let version: ApiVersion = "2014-08-04".parse().unwrap();
        assert_eq!(version.to_string(), "2014-08-04");
        assert_eq!(
            version.date(),
            NaiveDate::from_ymd_opt(2014, 8, 4).unwrap()
        );
    }

    #[test]
    fn test_version_rejects_malformed_strings() {
        for raw in ["", "2014-08", "unstable", "2014-02-30", "04-08-2014"] {
            let result = raw.parse::<ApiVersion>();
            assert!(
                matches!(result, Err(ConfigError::InvalidApiVersion { ref version }) if version == raw),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_versions_order_by_date() {
        let older: ApiVersion = "2013-12-03".parse().unwrap();
        let newer: ApiVersion = "2014-08-04".parse().unwrap();
        assert!(older < newer);
    }
}
