use crate::error::{Result, RoseError};
use std::fmt;
use std::str::FromStr;

/// Single-quoted Python string literal, escaping `\\` and `'`
pub fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// One component of a version: a number, or a release qualifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    Number(u64),
    Release(String),
}

impl Component {
    /// Render the component as a Python literal (numbers bare, strings quoted)
    pub fn literal(&self) -> String {
        match self {
            Component::Number(n) => n.to_string(),
            Component::Release(s) => quote(s),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Number(n) => write!(f, "{}", n),
            Component::Release(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for Component {
    fn from(n: u64) -> Self {
        Component::Number(n)
    }
}

impl From<&str> for Component {
    fn from(s: &str) -> Self {
        Component::Release(s.to_string())
    }
}

/// A version, stored as its ordered component sequence.
///
/// [`Version::parse`] only ever produces three numbers optionally followed by
/// one release string. The renderers accept any sequence, so
/// [`Version::from_components`] can build shapes parsing never yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    components: Vec<Component>,
}

impl Version {
    /// Create a plain major.minor.patch version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            components: vec![major.into(), minor.into(), patch.into()],
        }
    }

    /// Same version with a trailing release qualifier
    pub fn with_release(mut self, release: impl Into<String>) -> Self {
        self.components.push(Component::Release(release.into()));
        self
    }

    pub fn from_components(components: Vec<Component>) -> Self {
        Version { components }
    }

    /// Parse `major.minor.patch[-release]`.
    ///
    /// A wrong number of `-` or `.` segments is a [`RoseError::VersionFormat`];
    /// a non-numeric segment is a [`RoseError::TypeConversion`].
    ///
    /// # Example
    /// ```ignore
    /// let v = Version::parse("0.9.13-alpha/security")?;
    /// assert_eq!(v, Version::new(0, 9, 13).with_release("alpha/security"));
    /// ```
    pub fn parse(version_string: &str) -> Result<Self> {
        let bits: Vec<&str> = version_string.split('-').collect();
        if bits.len() > 2 {
            return Err(RoseError::version_format(format!("{:?}", bits)));
        }

        let major_minor_patch: Vec<&str> = bits[0].split('.').collect();
        if major_minor_patch.len() != 3 {
            return Err(RoseError::version_format(format!(
                "{:?}",
                major_minor_patch
            )));
        }

        let mut components = Vec::with_capacity(4);
        for segment in major_minor_patch {
            let number = segment
                .parse::<u64>()
                .map_err(|source| RoseError::TypeConversion {
                    segment: segment.to_string(),
                    source,
                })?;
            components.push(Component::Number(number));
        }

        if let Some(release) = bits.get(1) {
            components.push(Component::Release(release.to_string()));
        }

        Ok(Version { components })
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn release(&self) -> Option<&str> {
        match self.components.get(3) {
            Some(Component::Release(s)) => Some(s),
            _ => None,
        }
    }

    /// Leading components only, joined by `.` (e.g. "2.3.4")
    pub fn short(&self) -> String {
        self.components
            .iter()
            .take(3)
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Short form plus every trailing component, joined by `-` (e.g. "2.3.4-rc-2")
    pub fn full(&self) -> String {
        let mut version = self.short();
        for extra in self.components.iter().skip(3) {
            version.push('-');
            version.push_str(&extra.to_string());
        }
        version
    }

    /// Python tuple literal of the components, e.g. `(1, 0, 1, 'final')`
    pub fn tuple_literal(&self) -> String {
        let items: Vec<String> = self.components.iter().map(Component::literal).collect();
        if items.len() == 1 {
            format!("({},)", items[0])
        } else {
            format!("({})", items.join(", "))
        }
    }
}

impl FromStr for Version {
    type Err = RoseError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full())
    }
}
