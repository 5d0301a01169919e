use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use nom::bytes::complete::{take_till, take_till1, take_while1};
use nom::character::complete::multispace0;
use nom::combinator::opt;
use nom::sequence::preceded;
use nom::{IResult, Parser};

use crate::{DependencyFlags, Error, Version, rpmvercmp};

/// A named dependency, optionally constrained to a range of versions.
///
/// This is the same shape as the `Requires` / `Provides` / `Conflicts` / `Obsoletes` entries in
/// an RPM header: a name, a comparison sense and a version. A dependency without a version (or
/// with [`DependencyFlags::ANY`]) matches every version of the name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dependency {
    name: String,
    flags: DependencyFlags,
    version: Option<Version>,
}

impl Dependency {
    /// Create a dependency on any version of `name`
    pub fn any(name: impl Into<String>) -> Self {
        Self::new(name, DependencyFlags::ANY, None)
    }

    /// Create a dependency on a version strictly less than `version`
    pub fn less(name: impl Into<String>, version: impl Into<Version>) -> Self {
        Self::new(name, DependencyFlags::LESS, Some(version.into()))
    }

    /// Create a dependency on a version less than or equal to `version`
    pub fn less_eq(name: impl Into<String>, version: impl Into<Version>) -> Self {
        Self::new(name, DependencyFlags::LE, Some(version.into()))
    }

    /// Create a dependency on exactly `version`
    pub fn eq(name: impl Into<String>, version: impl Into<Version>) -> Self {
        Self::new(name, DependencyFlags::EQUAL, Some(version.into()))
    }

    /// Create a dependency on a version strictly greater than `version`
    pub fn greater(name: impl Into<String>, version: impl Into<Version>) -> Self {
        Self::new(name, DependencyFlags::GREATER, Some(version.into()))
    }

    /// Create a dependency on a version greater than or equal to `version`
    pub fn greater_eq(name: impl Into<String>, version: impl Into<Version>) -> Self {
        Self::new(name, DependencyFlags::GE, Some(version.into()))
    }

    pub fn new(name: impl Into<String>, flags: DependencyFlags, version: Option<Version>) -> Self {
        Dependency {
            name: name.into(),
            flags,
            version,
        }
    }

    /// Parse a dependency expression such as `foo`, `foo >= 1.2` or `foo = 1:2.3-4.fc40`.
    ///
    /// Whitespace around the operator is optional. The accepted operators are `<`, `<=`, `=`,
    /// `==`, `>=` and `>`. The version itself is parsed leniently, like [`Version::parse`].
    pub fn parse(input: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidDependency {
            input: input.to_string(),
        };

        let (rest, (name, constraint)) = dependency_expression(input).map_err(|e| {
            log::debug!("Rejected dependency expression {:?}: {}", input, e);
            invalid()
        })?;
        if !rest.is_empty() {
            log::debug!(
                "Rejected dependency expression {:?}: trailing input {:?}",
                input,
                rest
            );
            return Err(invalid());
        }

        let Some((operator, version)) = constraint else {
            return Ok(Dependency::any(name));
        };

        let flags = DependencyFlags::from_operator(operator)
            .ok_or_else(|| Error::UnknownOperator(operator.to_string()))?;
        if version.is_empty() {
            return Err(Error::MissingVersion {
                input: input.to_string(),
            });
        }

        Ok(Dependency::new(name, flags, Some(Version::parse(version))))
    }

    /// The name value
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The comparison flags
    pub fn flags(&self) -> DependencyFlags {
        self.flags
    }

    /// The version value, if the dependency is versioned
    pub fn version(&self) -> Option<&Version> {
        self.version.as_ref()
    }

    /// Check whether the version ranges of two dependencies on the same name intersect.
    ///
    /// This is how rpm decides whether a `Provides` satisfies a `Requires`: each side describes
    /// a range (`< 2.0`, `= 1.4-3`, ...) and they match if at least one version lies in both.
    /// Releases only take part in the comparison if both sides specify one.
    pub fn overlaps(&self, other: &Dependency) -> bool {
        if self.name != other.name {
            return false;
        }

        match (&self.version, &other.version) {
            (Some(evr1), Some(evr2)) => ranges_overlap(self.flags, evr1, other.flags, evr2),
            _ => true,
        }
    }

    /// Check whether a package of this name at `version` would satisfy the dependency
    pub fn is_satisfied_by(&self, version: &Version) -> bool {
        match &self.version {
            Some(evr) => ranges_overlap(self.flags, evr, DependencyFlags::EQUAL, version),
            None => true,
        }
    }
}

impl FromStr for Dependency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dependency::parse(s)
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let (Some(operator), Some(version)) = (self.flags.operator(), &self.version) {
            write!(f, " {} {}", operator, version)?;
        }
        Ok(())
    }
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '<' | '>' | '=' | '!')
}

/// `name [operator version]`, returning the operator and version unvalidated
fn dependency_expression(input: &str) -> IResult<&str, (&str, Option<(&str, &str)>)> {
    let (input, _) = multispace0(input)?;
    let (input, name) =
        take_till1(|c: char| c.is_whitespace() || is_operator_char(c)).parse(input)?;
    let (input, constraint) = opt((
        preceded(multispace0, take_while1(is_operator_char)),
        preceded(multispace0, take_till(char::is_whitespace)),
    ))
    .parse(input)?;
    let (input, _) = multispace0(input)?;

    Ok((input, (name, constraint)))
}

fn ranges_overlap(
    flags1: DependencyFlags,
    evr1: &Version,
    flags2: DependencyFlags,
    evr2: &Version,
) -> bool {
    let sense_mask = DependencyFlags::LESS | DependencyFlags::GREATER | DependencyFlags::EQUAL;
    let sense1 = flags1 & sense_mask;
    let sense2 = flags2 & sense_mask;

    // an unversioned side matches everything
    if sense1.is_empty() || sense2.is_empty() {
        return true;
    }

    match compare_evr_for_range(evr1, evr2) {
        Ordering::Less => {
            sense1.contains(DependencyFlags::GREATER) || sense2.contains(DependencyFlags::LESS)
        }
        Ordering::Greater => {
            sense1.contains(DependencyFlags::LESS) || sense2.contains(DependencyFlags::GREATER)
        }
        Ordering::Equal => sense1.intersects(sense2),
    }
}

/// a missing release on either side means "any release"
fn compare_evr_for_range(evr1: &Version, evr2: &Version) -> Ordering {
    evr1.epoch()
        .cmp(&evr2.epoch())
        .then_with(|| rpmvercmp(evr1.version(), evr2.version()))
        .then_with(|| {
            if evr1.release().is_empty() || evr2.release().is_empty() {
                Ordering::Equal
            } else {
                rpmvercmp(evr1.release(), evr2.release())
            }
        })
}
