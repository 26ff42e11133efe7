//! Canonical date values

/// Sentinel written wherever a value could not be determined
pub const NOT_DETERMINED: &str = "n.c.";

/// A date reformatted to `YYYY-MM-DD`
///
/// This is a textual form only: nothing guarantees the value is a real
/// calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalDate(String);

impl CanonicalDate {
    /// Build from the three reordered parts
    pub fn from_parts(year: &str, month: &str, day: &str) -> Self {
        Self(format!("{}-{}-{}", year, month, day))
    }

    /// Wrap an already canonical string (e.g. a ground-truth cell)
    pub fn from_raw(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Borrow the canonical text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Read an optional date cell, treating empty and `n.c.` as absent
    pub fn parse_cell(cell: &str) -> Option<Self> {
        let trimmed = cell.trim();
        if trimmed.is_empty() || trimmed == NOT_DETERMINED {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Render an optional date, using the `n.c.` sentinel for `None`
    pub fn to_cell(date: Option<&CanonicalDate>) -> String {
        date.map(|d| d.0.clone())
            .unwrap_or_else(|| NOT_DETERMINED.to_string())
    }
}

impl std::fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts() {
        let d = CanonicalDate::from_parts("2020", "05", "12");
        assert_eq!(d.as_str(), "2020-05-12");
    }

    #[test]
    fn test_cells() {
        assert_eq!(CanonicalDate::parse_cell(""), None);
        assert_eq!(CanonicalDate::parse_cell("n.c."), None);
        assert_eq!(
            CanonicalDate::parse_cell(" 2021-03-15 "),
            Some(CanonicalDate::from_raw("2021-03-15"))
        );
        assert_eq!(CanonicalDate::to_cell(None), "n.c.");
    }
}
