//! Gender module - the label inferred for the person a document is about

/// Gender label
///
/// Two label vocabularies exist at the serialization boundary:
/// - French: `homme` / `femme` / `n.c.` (extraction output, ground truth)
/// - English: `male` / `female` / `neutral` (feature table)
///
/// Internally there is only this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Gender {
    /// Male evidence dominates
    Male,

    /// Female evidence dominates
    Female,

    /// No evidence, or a tie
    #[default]
    Unknown,
}

impl Gender {
    /// French label (`homme`, `femme`, `n.c.`)
    pub fn as_french(&self) -> &'static str {
        match self {
            Gender::Male => "homme",
            Gender::Female => "femme",
            Gender::Unknown => "n.c.",
        }
    }

    /// English label (`male`, `female`, `neutral`)
    pub fn as_english(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unknown => "neutral",
        }
    }

    /// Parse a label from either vocabulary
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. The
    /// empty string parses as [`Gender::Unknown`].
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "homme" | "male" | "m" | "h" => Some(Gender::Male),
            "femme" | "female" | "f" => Some(Gender::Female),
            "n.c." | "nc" | "neutral" | "unknown" | "" => Some(Gender::Unknown),
            _ => None,
        }
    }

    /// Decide between two evidence counts
    ///
    /// Strictly more male evidence gives `Male`, strictly more female evidence
    /// gives `Female`, a tie gives `Unknown`.
    pub fn from_counts(male: usize, female: usize) -> Self {
        match male.cmp(&female) {
            std::cmp::Ordering::Greater => Gender::Male,
            std::cmp::Ordering::Less => Gender::Female,
            std::cmp::Ordering::Equal => Gender::Unknown,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_french())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid gender label: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Gender::Male.as_french(), "homme");
        assert_eq!(Gender::Female.as_french(), "femme");
        assert_eq!(Gender::Unknown.as_french(), "n.c.");
        assert_eq!(Gender::Male.as_english(), "male");
        assert_eq!(Gender::Female.as_english(), "female");
        assert_eq!(Gender::Unknown.as_english(), "neutral");
    }

    #[test]
    fn test_parse_both_vocabularies() {
        assert_eq!(Gender::parse("homme"), Some(Gender::Male));
        assert_eq!(Gender::parse("Female"), Some(Gender::Female));
        assert_eq!(Gender::parse(" n.c. "), Some(Gender::Unknown));
        assert_eq!(Gender::parse("neutral"), Some(Gender::Unknown));
        assert_eq!(Gender::parse(""), Some(Gender::Unknown));
        assert_eq!(Gender::parse("robot"), None);
    }

    #[test]
    fn test_from_counts_ties_are_unknown() {
        assert_eq!(Gender::from_counts(3, 1), Gender::Male);
        assert_eq!(Gender::from_counts(0, 2), Gender::Female);
        assert_eq!(Gender::from_counts(0, 0), Gender::Unknown);
        assert_eq!(Gender::from_counts(4, 4), Gender::Unknown);
    }

    proptest::proptest! {
        #[test]
        fn prop_from_counts_is_antisymmetric(male in 0usize..1000, female in 0usize..1000) {
            let forward = Gender::from_counts(male, female);
            let swapped = Gender::from_counts(female, male);
            let expected = match forward {
                Gender::Male => Gender::Female,
                Gender::Female => Gender::Male,
                Gender::Unknown => Gender::Unknown,
            };
            proptest::prop_assert_eq!(swapped, expected);
        }

        #[test]
        fn prop_labels_round_trip(idx in 0usize..3, english in proptest::bool::ANY) {
            let gender = [Gender::Male, Gender::Female, Gender::Unknown][idx];
            let label = if english { gender.as_english() } else { gender.as_french() };
            proptest::prop_assert_eq!(Gender::parse(label), Some(gender));
        }
    }

    #[test]
    fn test_from_str() {
        let g: Gender = "femme".parse().unwrap();
        assert_eq!(g, Gender::Female);
        assert!("x".parse::<Gender>().is_err());
    }
}
