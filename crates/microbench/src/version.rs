use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A dotted numeric version such as `16.0.3`.
///
/// Versions compare segment by segment over their common prefix; when the
/// prefix is equal the version with more segments is greater, so
/// `2.0 < 2.0.1` and `1.9.0 < 1.10.0`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(Vec<u64>);

impl Version {
    /// Parse a dot-separated version string.
    ///
    /// Every segment must be a non-empty run of ASCII digits. Signs,
    /// whitespace and empty segments (`1..2`, `1.2.`) are rejected.
    pub fn parse(version: &str) -> Result<Self> {
        version
            .split('.')
            .map(|segment| {
                if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(Error::parse(version, segment));
                }
                segment
                    .parse::<u64>()
                    .map_err(|_| Error::parse(version, segment))
            })
            .collect::<Result<Vec<_>>>()
            .map(Version)
    }

    pub fn segments(&self) -> &[u64] {
        &self.0
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segments = self.0.iter();
        if let Some(first) = segments.next() {
            write!(f, "{first}")?;
        }
        for segment in segments {
            write!(f, ".{segment}")?;
        }
        Ok(())
    }
}

/// Compare two version strings numerically.
pub fn compare(a: &str, b: &str) -> Result<std::cmp::Ordering> {
    Ok(Version::parse(a)?.cmp(&Version::parse(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cmp::Ordering;

    mod parse {
        use super::*;

        #[test]
        fn parses_dotted_segments() {
            let version = Version::parse("16.0.3").unwrap();
            assert_eq!(version.segments(), &[16, 0, 3]);
        }

        #[test]
        fn ignores_leading_zeros() {
            assert_eq!(
                Version::parse("1.01.007").unwrap(),
                Version::parse("1.1.7").unwrap()
            );
        }

        #[rstest]
        #[case("1.x.0", "x")]
        #[case("1..0", "")]
        #[case("1.2.", "")]
        #[case("", "")]
        #[case("-1.0", "-1")]
        #[case("+1.0", "+1")]
        #[case("1.0 ", "0 ")]
        #[case("v1.0.0", "v1")]
        fn rejects_invalid_segments(#[case] input: &str, #[case] segment: &str) {
            assert_eq!(
                Version::parse(input),
                Err(Error::Parse {
                    version: input.to_string(),
                    segment: segment.to_string(),
                })
            );
        }

        #[test]
        fn rejects_overflowing_segment() {
            assert!(Version::parse("1.99999999999999999999999").is_err());
        }
    }

    #[rstest]
    #[case("1.9.0", "1.10.0", Ordering::Less)]
    #[case("2.0", "2.0.1", Ordering::Less)]
    #[case("2.0.1", "2.0", Ordering::Greater)]
    #[case("12.0.1", "12.0.0", Ordering::Greater)]
    #[case("9.0.5", "12.0.0", Ordering::Less)]
    #[case("3.1.4", "3.1.4", Ordering::Equal)]
    #[case("03.1", "3.1", Ordering::Equal)]
    fn compares_numerically(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(compare(a, b).unwrap(), expected);
    }

    #[test]
    fn compare_propagates_parse_errors() {
        assert!(compare("1.0", "1.beta").is_err());
        assert!(compare("alpha", "1.0").is_err());
    }

    #[test]
    fn displays_canonical_form() {
        assert_eq!(Version::parse("01.002.3").unwrap().to_string(), "1.2.3");
    }
}
