//! Belief-system categories used to filter candidate sites.
//!
//! The set is closed; anything outside it is rejected at the request
//! boundary before a store is consulted.
//!
//! # Examples
//! ```
//! use pilgrim_core::Category;
//!
//! assert_eq!(Category::Buddhism.as_str(), "Buddhism");
//! assert_eq!("Islam".parse::<Category>(), Ok(Category::Islam));
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A religion tag attached to every site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Buddhist temples and shrines.
    Buddhism,
    /// Mosques and Islamic heritage sites.
    Islam,
    /// Hindu kovils and temples.
    Hinduism,
    /// Churches and Christian shrines.
    Christianity,
}

/// Error returned when a string names no known [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown religion '{0}'")]
pub struct UnknownCategory(pub String);

impl Category {
    /// Every category in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Buddhism,
        Self::Islam,
        Self::Hinduism,
        Self::Christianity,
    ];

    /// Return the canonical capitalised name.
    ///
    /// # Examples
    /// ```
    /// use pilgrim_core::Category;
    ///
    /// assert_eq!(Category::Christianity.as_str(), "Christianity");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buddhism => "Buddhism",
            Self::Islam => "Islam",
            Self::Hinduism => "Hinduism",
            Self::Christianity => "Christianity",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Parse the canonical name. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Buddhism", Category::Buddhism)]
    #[case("Islam", Category::Islam)]
    #[case("Hinduism", Category::Hinduism)]
    #[case("Christianity", Category::Christianity)]
    fn parses_canonical_names(#[case] raw: &str, #[case] expected: Category) {
        assert_eq!(raw.parse::<Category>(), Ok(expected));
        assert_eq!(expected.to_string(), raw);
    }

    #[rstest]
    #[case("Atheism")]
    #[case("buddhism")]
    #[case("")]
    fn rejects_unknown_or_miscased(#[case] raw: &str) {
        let err = raw.parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory(raw.to_owned()));
    }

    #[test]
    fn serialises_as_capitalised_name() {
        let json = serde_json::to_string(&Category::Hinduism).unwrap();
        assert_eq!(json, "\"Hinduism\"");
    }
}
