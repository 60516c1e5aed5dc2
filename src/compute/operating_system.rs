// ABOUTME: Operating system descriptor attached to an image.
// ABOUTME: OsFamily normalizes free-form vendor names with an Unrecognized fallback.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Well-known operating system families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OsFamily {
    #[default]
    Unrecognized,
    Linux,
    Windows,
    Ubuntu,
    Debian,
    Centos,
    Rhel,
    Fedora,
    Suse,
    AmznLinux,
    Oel,
    Rocky,
    Alma,
    Freebsd,
    Openbsd,
    Solaris,
    Coreos,
    Gentoo,
    Arch,
    Darwin,
}

impl OsFamily {
    const NAMED: [OsFamily; 19] = [
        OsFamily::Linux,
        OsFamily::Windows,
        OsFamily::Ubuntu,
        OsFamily::Debian,
        OsFamily::Centos,
        OsFamily::Rhel,
        OsFamily::Fedora,
        OsFamily::Suse,
        OsFamily::AmznLinux,
        OsFamily::Oel,
        OsFamily::Rocky,
        OsFamily::Alma,
        OsFamily::Freebsd,
        OsFamily::Openbsd,
        OsFamily::Solaris,
        OsFamily::Coreos,
        OsFamily::Gentoo,
        OsFamily::Arch,
        OsFamily::Darwin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OsFamily::Unrecognized => "unrecognized",
            OsFamily::Linux => "linux",
            OsFamily::Windows => "windows",
            OsFamily::Ubuntu => "ubuntu",
            OsFamily::Debian => "debian",
            OsFamily::Centos => "centos",
            OsFamily::Rhel => "rhel",
            OsFamily::Fedora => "fedora",
            OsFamily::Suse => "suse",
            OsFamily::AmznLinux => "amzn-linux",
            OsFamily::Oel => "oel",
            OsFamily::Rocky => "rocky",
            OsFamily::Alma => "alma",
            OsFamily::Freebsd => "freebsd",
            OsFamily::Openbsd => "openbsd",
            OsFamily::Solaris => "solaris",
            OsFamily::Coreos => "coreos",
            OsFamily::Gentoo => "gentoo",
            OsFamily::Arch => "arch",
            OsFamily::Darwin => "darwin",
        }
    }

    /// Maps a vendor-supplied family name onto a known family.
    ///
    /// Case, underscores and spaces are ignored. Never fails: names that match
    /// nothing yield [`OsFamily::Unrecognized`].
    pub fn from_value(value: &str) -> OsFamily {
        let normalized: String = value
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "redhat" | "red-hat" => return OsFamily::Rhel,
            "amazon" | "amazon-linux" | "amzn" => return OsFamily::AmznLinux,
            "opensuse" | "sles" => return OsFamily::Suse,
            "almalinux" => return OsFamily::Alma,
            "rocky-linux" => return OsFamily::Rocky,
            "macos" | "osx" => return OsFamily::Darwin,
            _ => {}
        }

        OsFamily::NAMED
            .into_iter()
            .find(|family| family.as_str() == normalized)
            .unwrap_or(OsFamily::Unrecognized)
    }

    pub fn is_unrecognized(&self) -> bool {
        *self == OsFamily::Unrecognized
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OsFamily {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OsFamily {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(OsFamily::from_value(&s))
    }
}

/// The operating system installed on an image.
///
/// The shape of this descriptor is provisional and may gain fields as more
/// providers are covered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OperatingSystem {
    #[serde(default)]
    family: OsFamily,
    #[serde(default)]
    name: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    arch: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    is_64bit: bool,
}

impl OperatingSystem {
    pub fn builder() -> OperatingSystemBuilder {
        OperatingSystemBuilder::default()
    }

    pub fn family(&self) -> OsFamily {
        self.family
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn arch(&self) -> &str {
        &self.arch
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_64bit(&self) -> bool {
        self.is_64bit
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.family)?;
        if !self.version.is_empty() {
            write!(f, " {}", self.version)?;
        }
        if !self.arch.is_empty() {
            write!(f, " ({})", self.arch)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct OperatingSystemBuilder {
    inner: OperatingSystem,
}

impl OperatingSystemBuilder {
    pub fn family(mut self, family: OsFamily) -> Self {
        self.inner.family = family;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = name.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.inner.version = version.into();
        self
    }

    pub fn arch(mut self, arch: impl Into<String>) -> Self {
        self.inner.arch = arch.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = description.into();
        self
    }

    pub fn is_64bit(mut self, is_64bit: bool) -> Self {
        self.inner.is_64bit = is_64bit;
        self
    }

    pub fn build(self) -> OperatingSystem {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_from_value_ignores_case_and_separators() {
        assert_eq!(OsFamily::from_value("Ubuntu"), OsFamily::Ubuntu);
        assert_eq!(OsFamily::from_value("AMZN_LINUX"), OsFamily::AmznLinux);
        assert_eq!(OsFamily::from_value("amzn linux"), OsFamily::AmznLinux);
        assert_eq!(OsFamily::from_value(" rhel "), OsFamily::Rhel);
    }

    #[test]
    fn family_aliases() {
        assert_eq!(OsFamily::from_value("RedHat"), OsFamily::Rhel);
        assert_eq!(OsFamily::from_value("AlmaLinux"), OsFamily::Alma);
        assert_eq!(OsFamily::from_value("sles"), OsFamily::Suse);
    }

    #[test]
    fn unknown_family_is_unrecognized() {
        assert_eq!(OsFamily::from_value("plan9"), OsFamily::Unrecognized);
        assert_eq!(OsFamily::from_value(""), OsFamily::Unrecognized);
    }

    #[test]
    fn every_named_family_round_trips_through_its_name() {
        for family in OsFamily::NAMED {
            assert_eq!(OsFamily::from_value(family.as_str()), family);
        }
    }

    #[test]
    fn display_includes_version_and_arch() {
        let os = OperatingSystem::builder()
            .family(OsFamily::Debian)
            .version("12")
            .arch("arm64")
            .build();
        assert_eq!(os.to_string(), "debian 12 (arm64)");
    }
}
