use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::{Error, Result, Version};

const RELEASE_TAG_PREFIX: &str = "refs/tags/v";

lazy_static! {
    static ref RELEASE_TAG_REGEX: Regex = Regex::new(r"^refs/tags/v\d+\.\d+\.\d+$").unwrap();
}

/// A tagged release of the benchmarked project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Version string without the `v` tag prefix, e.g. `12.0.1`.
    pub name: String,
    pub commit_hash: String,
}

impl Release {
    pub fn new(name: impl Into<String>, commit_hash: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commit_hash: commit_hash.into(),
        }
    }

    /// Build a release from a full tag reference such as `refs/tags/v12.0.1`.
    ///
    /// Returns `None` for anything that is not a `vMAJOR.MINOR.PATCH` tag.
    pub fn from_tag_ref(tag_ref: &str, commit_hash: &str) -> Option<Self> {
        if !RELEASE_TAG_REGEX.is_match(tag_ref) {
            trace!("Skipping non-release ref {tag_ref}");
            return None;
        }
        Some(Self::new(&tag_ref[RELEASE_TAG_PREFIX.len()..], commit_hash))
    }

    pub fn version(&self) -> Result<Version> {
        Version::parse(&self.name)
    }
}

/// Picks the most recent release out of a tag listing.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReleaseSelector;

impl ReleaseSelector {
    /// Return the release with the highest version.
    ///
    /// When several releases share the highest version the first one wins.
    pub fn select_latest<'a>(&self, releases: &'a [Release]) -> Result<&'a Release> {
        let (first, rest) = releases.split_first().ok_or(Error::EmptyInput)?;

        let mut latest = first;
        let mut latest_version = first.version()?;
        for release in rest {
            let version = release.version()?;
            if latest_version.cmp(&version) == Ordering::Less {
                latest = release;
                latest_version = version;
            }
        }

        debug!(
            "Selected release {} ({}) out of {} releases",
            latest.name,
            shorten_sha(&latest.commit_hash),
            releases.len()
        );
        Ok(latest)
    }
}

/// Return the first 7 characters of a SHA, or the SHA untouched if shorter.
pub fn shorten_sha(sha: &str) -> &str {
    match sha.char_indices().nth(7) {
        Some((idx, _)) => &sha[..idx],
        None => sha,
    }
}
