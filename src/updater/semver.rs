use std::cmp::Ordering;

use semver::{BuildMetadata, Prerelease, Version};

/// A release tag parsed for ordering.
///
/// Holds a `semver::Version` for the first three numeric segments plus any
/// further segments (`1.2.3.4`). Ordering follows semver precedence: numeric
/// segments first (missing ones count as zero), then the pre-release. Build
/// metadata never affects ordering or equality.
#[derive(Debug, Clone)]
pub struct TagVersion {
    version: Version,
    extra: Vec<u64>,
}

impl TagVersion {
    /// The major.minor.patch part, with pre-release and build metadata
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Numeric segments after the patch number
    pub fn extra_segments(&self) -> &[u64] {
        &self.extra
    }

    fn cmp_extra(&self, other: &Self) -> Ordering {
        let len = self.extra.len().max(other.extra.len());
        (0..len)
            .map(|i| {
                let a = self.extra.get(i).copied().unwrap_or(0);
                let b = other.extra.get(i).copied().unwrap_or(0);
                a.cmp(&b)
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl From<Version> for TagVersion {
    fn from(version: Version) -> Self {
        Self {
            version,
            extra: Vec::new(),
        }
    }
}

impl Ord for TagVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = &self.version;
        let b = &other.version;
        (a.major, a.minor, a.patch)
            .cmp(&(b.major, b.minor, b.patch))
            .then_with(|| self.cmp_extra(other))
            .then_with(|| match (a.pre.is_empty(), b.pre.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => a.pre.cmp(&b.pre),
            })
    }
}

impl PartialOrd for TagVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for TagVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TagVersion {}

/// The version every unparseable string collapses to.
pub fn zero_version() -> TagVersion {
    Version::new(0, 0, 0).into()
}

/// Parse a version string leniently.
///
/// A leading `v` is stripped, leading zeros in numeric segments are dropped,
/// partial versions are padded with zeros and segments past the patch number
/// are kept for ordering. Anything that still fails to parse becomes `0.0.0`,
/// so a malformed tag never wins a comparison against a valid one.
///
/// Examples:
/// - "v1.2.3" -> 1.2.3
/// - "1.2" -> 1.2.0
/// - "1.02.3.4" -> 1.2.3.4
/// - "latest" -> 0.0.0
pub fn parse(version: &str) -> TagVersion {
    try_parse(version).unwrap_or_else(zero_version)
}

fn try_parse(version: &str) -> Option<TagVersion> {
    let trimmed = version.trim();
    let stripped = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    let (core, suffix) = match stripped.find(['-', '+']) {
        Some(idx) => stripped.split_at(idx),
        None => (stripped, ""),
    };

    let mut segments = core
        .split('.')
        .map(|segment| {
            if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            segment.parse::<u64>().ok()
        })
        .collect::<Option<Vec<u64>>>()?;
    segments.resize(segments.len().max(3), 0);
    let extra = segments.split_off(3);

    let (pre, build) = match suffix.split_once('+') {
        Some((pre, build)) => (pre, Some(build)),
        None => (suffix, None),
    };
    let pre = match pre.strip_prefix('-') {
        Some("") => return None,
        Some(pre) => Prerelease::new(pre).ok()?,
        None if pre.is_empty() => Prerelease::EMPTY,
        None => return None,
    };
    let build = match build {
        Some("") => return None,
        Some(build) => BuildMetadata::new(build).ok()?,
        None => BuildMetadata::EMPTY,
    };

    Some(TagVersion {
        version: Version {
            major: segments[0],
            minor: segments[1],
            patch: segments[2],
            pre,
            build,
        },
        extra,
    })
}

/// Returns true iff `candidate` is strictly newer than `baseline`.
pub fn is_newer(candidate: &str, baseline: &str) -> bool {
    parse(candidate) > parse(baseline)
}

/// Fold `candidates` into the greatest version, starting from `current`.
///
/// Only a strictly greater candidate replaces the running maximum, so on ties
/// the earlier string (and ultimately `current`) is kept verbatim.
pub fn max_version<'a, I>(current: &str, candidates: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .fold(current.to_string(), |latest, candidate| {
            if is_newer(candidate, &latest) {
                candidate.to_string()
            } else {
                latest
            }
        })
}
