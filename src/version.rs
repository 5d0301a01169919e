use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

/// An RPM "version" specifier has 3 different components - Epoch, Version, and Release.
///
/// Epoch overrides all other fields and is generally only used as a last resort - in cases where
/// a change to the versioning scheme or packaging error creates a situation where newer packages
/// might otherwise sort as being older. A missing epoch is equivalent to an epoch of zero.
///
/// Version is the normal version string used by the upstream project. This shouldn't be tweaked
/// by the packager.
///
/// Release indicates firstly the number of times this package has been released - for instance,
/// with custom patches and backports not present in the upstream, but may also indicate other
/// details such as the OS it was built for (fc38, el9) or portions of a git commit hash.
///
/// Tilde (~) is a special value used for denoting pre-releases and will force a version to sort
/// as less than the same version without it, e.g. 0.5.0~rc1 vs 0.5.0.
///
/// Parsing never fails. Malformed input is interpreted on a best-effort basis, in the same way
/// rpm itself does: an epoch that isn't an integer becomes 0, and characters that are neither
/// alphanumeric nor a tilde only act as separators during comparison.
#[derive(Clone, Debug, Default)]
pub struct Version {
    epoch: i64,
    version: String,
    release: String,
}

impl Version {
    /// Create a new version from its components
    pub fn new<T: Into<String>>(epoch: i64, version: T, release: T) -> Version {
        Version {
            epoch,
            version: version.into(),
            release: release.into(),
        }
    }

    /// Create a version parsed from a string of the form `[epoch:]version[-release]`
    pub fn parse(evr: &str) -> Self {
        Version::parse_values(evr).into()
    }

    /// The epoch value
    pub fn epoch(&self) -> i64 {
        self.epoch
    }

    /// The version value
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The release value
    pub fn release(&self) -> &str {
        &self.release
    }

    /// Return the epoch, version and release values as a 3-element tuple
    pub fn values(&self) -> (i64, &str, &str) {
        (self.epoch, self.version(), self.release())
    }

    /// Parse the epoch, version and release values and return them as a 3-element tuple
    ///
    /// Only the first `:` separates the epoch and only the first `-` separates the release,
    /// so `0:0-0-0` has the version `0` and the release `0-0`.
    pub fn parse_values(evr: &str) -> (i64, &str, &str) {
        let (epoch, vr) = match evr.split_once(':') {
            Some((epoch, vr)) => (parse_epoch(epoch), vr),
            None => (0, evr),
        };
        let (version, release) = vr.split_once('-').unwrap_or((vr, ""));

        (epoch, version, release)
    }

    /// Write a version string in a normalized form which always includes an epoch
    ///
    /// The standard string representation will ignore the epoch if it is zero. Sometimes it is
    /// useful to write versions in a form such that equivalent values are represented
    /// identically, therefore, this "normalized" form will always include it.
    pub fn as_normalized_form(&self) -> String {
        let mut normalized = format!("{}:{}", self.epoch, self.version);
        if !self.release.is_empty() {
            normalized.push('-');
            normalized.push_str(&self.release);
        }
        normalized
    }

    /// Three-way comparison: epoch first, then version, then release
    pub fn compare(&self, other: &Version) -> Ordering {
        let epoch_cmp = self.epoch.cmp(&other.epoch);
        if epoch_cmp != Ordering::Equal {
            return epoch_cmp;
        }

        let version_cmp = rpmvercmp(&self.version, &other.version);
        if version_cmp != Ordering::Equal {
            return version_cmp;
        }

        rpmvercmp(&self.release, &other.release)
    }

    /// Whether both versions sort as equal, which doesn't require identical strings
    /// (`1.0` and `1_0` are equal)
    pub fn equal(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Equal
    }

    pub fn greater_than(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Greater
    }

    pub fn less_than(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Less
    }
}

/// Leading whitespace is ignored. Anything that doesn't fit an i64 falls back to 0.
fn parse_epoch(epoch: &str) -> i64 {
    epoch.trim_start().parse().unwrap_or_else(|e| {
        log::trace!("Treating unparseable epoch {:?} as 0: {}", epoch, e);
        0
    })
}

impl<'a> From<(i64, &'a str, &'a str)> for Version {
    fn from(val: (i64, &'a str, &'a str)) -> Self {
        Version::new(val.0, val.1, val.2)
    }
}

impl From<&str> for Version {
    fn from(evr: &str) -> Self {
        Version::parse(evr)
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Version::parse(s))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.epoch != 0 {
            write!(f, "{}:", self.epoch)?;
        }

        write!(f, "{}", self.version)?;

        if !self.release.is_empty() {
            write!(f, "-{}", self.release)?;
        }

        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

/// A single classified run of characters within a version or release string
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Segment<'a> {
    /// A maximal run of ASCII digits, leading zeroes included
    Digits(&'a str),
    /// A maximal run of ASCII letters
    Letters(&'a str),
    /// A single `~`
    Tilde,
}

/// Iterator over the [`Segment`]s of a version or release string.
///
/// Every character that is not an ASCII letter, an ASCII digit or a tilde is a separator and
/// is skipped. A clone is an independent cursor at the same position.
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Segments<'a> {
    pub fn new(value: &'a str) -> Self {
        Segments { rest: value }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        self.rest = self
            .rest
            .trim_start_matches(|c: char| !c.is_ascii_alphanumeric() && c != '~');

        if let Some(rest) = self.rest.strip_prefix('~') {
            self.rest = rest;
            return Some(Segment::Tilde);
        }

        let first = self.rest.chars().next()?;
        if first.is_ascii_digit() {
            let (digits, rest) = split_contiguous(self.rest, |c| c.is_ascii_digit());
            self.rest = rest;
            Some(Segment::Digits(digits))
        } else {
            let (letters, rest) = split_contiguous(self.rest, |c| c.is_ascii_alphabetic());
            self.rest = rest;
            Some(Segment::Letters(letters))
        }
    }
}

impl FusedIterator for Segments<'_> {}

/// split off the contiguous prefix of characters matching the provided pattern
fn split_contiguous<F>(string: &str, pat: F) -> (&str, &str)
where
    F: Fn(char) -> bool,
{
    string.split_at(string.find(|c| !pat(c)).unwrap_or(string.len()))
}

/// Compare two version (or release) strings segment by segment, the way rpm's `rpmvercmp` does.
///
/// * a tilde sorts lower than anything else, including the end of the string
/// * a string with segments remaining sorts higher than one without
/// * a numeric segment sorts higher than an alphabetic one
/// * numeric segments compare by value, ignoring leading zeroes
/// * alphabetic segments compare byte-wise, case-sensitively
pub fn rpmvercmp(version1: &str, version2: &str) -> Ordering {
    if version1 == version2 {
        return Ordering::Equal;
    }

    let mut segments1 = Segments::new(version1);
    let mut segments2 = Segments::new(version2);

    loop {
        let ordering = match (segments1.next(), segments2.next()) {
            (None, None) => return Ordering::Equal,

            // Tilde separator parses as "older" or lesser version
            (Some(Segment::Tilde), Some(Segment::Tilde)) => continue,
            (Some(Segment::Tilde), _) => return Ordering::Less,
            (_, Some(Segment::Tilde)) => return Ordering::Greater,

            // if two strings are equal but one is longer, the longer one is considered greater
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,

            (Some(Segment::Digits(_)), Some(Segment::Letters(_))) => return Ordering::Greater,
            (Some(Segment::Letters(_)), Some(Segment::Digits(_))) => return Ordering::Less,

            (Some(Segment::Digits(digits1)), Some(Segment::Digits(digits2))) => {
                let digits1 = digits1.trim_start_matches('0');
                let digits2 = digits2.trim_start_matches('0');

                digits1
                    .len()
                    .cmp(&digits2.len())
                    .then_with(|| digits1.cmp(digits2))
            }
            (Some(Segment::Letters(letters1)), Some(Segment::Letters(letters2))) => {
                letters1.cmp(letters2)
            }
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

/// Compare two strings as RPM EVR values
pub fn rpm_evr_compare(evr1: &str, evr2: &str) -> Ordering {
    let evr1 = Version::parse(evr1);
    let evr2 = Version::parse(evr2);
    evr1.cmp(&evr2)
}
