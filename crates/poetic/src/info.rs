//! # Package Information
//!
//! Banner data rendered at the top of diagnostic reports.

/// Static package description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct PackageInfo {
    /// Display name.
    pub name: &'static str,

    /// Version string.
    pub version: &'static str,

    /// Build status label; e.g. `"Stable"` or `"Dev"`.
    pub build: &'static str,

    /// Where to find updates.
    pub homepage: &'static str,
}

/// The [`PackageInfo`] for this build of the crate.
pub const PACKAGE_INFO: PackageInfo = PackageInfo {
    name: "Poetic",
    version: env!("CARGO_PKG_VERSION"),
    build: "Stable",
    homepage: "www.github.com/kevin931/Poetic",
};

impl Default for PackageInfo {
    fn default() -> Self {
        PACKAGE_INFO
    }
}

impl PackageInfo {
    /// ``"{name} {version} {build}"``, as printed by `--version` style output.
    pub fn version_line(&self) -> String {
        format!("{} {} {}", self.name, self.version, self.build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_line() {
        let info = PackageInfo {
            name: "Poetic",
            version: "1.2.3",
            build: "Dev",
            homepage: "example.com",
        };
        assert_eq!(info.version_line(), "Poetic 1.2.3 Dev");
        assert_eq!(PackageInfo::default(), PACKAGE_INFO);
        assert_eq!(PACKAGE_INFO.version, env!("CARGO_PKG_VERSION"));
    }
}
