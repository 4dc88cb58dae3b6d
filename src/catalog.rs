//! The alteration catalog: a static table of post-processing codes and the
//! resolution of raw alteration tokens against it.
//!
//! Tokens are short alphanumeric codes such as `LCP`, `AV360`, or `Z12`.
//! Resolution prefers the longest matching pattern, then applies the matched
//! rule's numeric-suffix policy to whatever characters remain.

mod table;

use std::{collections::BTreeMap, fmt, sync::LazyLock};

use serde::Serialize;

/// Post-processing category of an alteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    /// Tapped holes in one or both extrusion ends.
    EndTapping,
    /// Tight-tolerance length cut.
    HighPrecisionCut,
    /// 45-degree end cut.
    FortyFiveDegreeCut,
    /// Access hole for fastening wrenches near an end.
    WrenchAccessHole,
    /// Wrench hole at a factory-fixed position.
    WrenchHoleFixedPosition,
    /// Relocated hole for press-fit end caps.
    EndCapHolePositionChange,
    /// Wrench hole at a caller-specified distance from the left end.
    WrenchHoleSpecifiedPosition,
    /// Wrench hole diameter override.
    WrenchHoleDiameter,
    /// Counterbored through-hole.
    Counterboring,
    /// Blind-joint D hole (pre-assembly insertion double joint).
    BlindJointHoleD,
    /// Blind-joint S hole (post-assembly insertion double joint).
    BlindJointHoleS,
    /// Blind-joint M hole (post connection).
    BlindJointHoleM,
    /// Blind-joint L hole (parallel joint).
    BlindJointHoleL,
    /// End tapping for special end-plate series.
    SpecialEndPlate,
    /// End-face chamfering.
    Chamfering,
    /// Serial or unit number labeling.
    Labeling,
    /// Produced only by the tolerant decode path for tokens the catalog
    /// rejects; never stored in the table itself.
    Unknown,
}

impl Category {
    /// Human-readable name of the category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EndTapping => "End Tapping",
            Self::HighPrecisionCut => "High Precision Cut",
            Self::FortyFiveDegreeCut => "45-Degree Cut",
            Self::WrenchAccessHole => "Wrench Access Hole",
            Self::WrenchHoleFixedPosition => "Wrench Hole in Fixed Position",
            Self::EndCapHolePositionChange => "End Cap Hole Position Change",
            Self::WrenchHoleSpecifiedPosition => "Wrench Hole in Specified Position",
            Self::WrenchHoleDiameter => "Wrench Hole Diameter",
            Self::Counterboring => "Counterboring",
            Self::BlindJointHoleD => "Blind Joint D Hole",
            Self::BlindJointHoleS => "Blind Joint S Hole",
            Self::BlindJointHoleM => "Blind Joint M Hole",
            Self::BlindJointHoleL => "Blind Joint L Hole",
            Self::SpecialEndPlate => "Special End Plate",
            Self::Chamfering => "Chamfering",
            Self::Labeling => "Labeling",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Numeric-suffix policy of an alteration rule.
///
/// Anything other than [`Suffix::None`] means trailing digits are required
/// and carry the given meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    /// The pattern is the whole token; trailing characters are an error.
    None,
    /// Distance from the left end of the extrusion, in millimetres.
    PositionMm,
    /// Hole pitch in millimetres.
    PitchMm,
    /// Serial number for labeling.
    Serial,
    /// Unit number for labeling.
    Unit,
}

impl Suffix {
    /// Whether this policy requires trailing digits.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// A single entry in the alteration catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterationRule {
    pattern: String,
    category: Category,
    suffix: Suffix,
    description: String,
}

impl AlterationRule {
    fn new(pattern: String, category: Category, suffix: Suffix, description: String) -> Self {
        Self {
            pattern,
            category,
            suffix,
            description,
        }
    }

    /// The code this rule matches, as it appears in a part number.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The rule's category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// The rule's numeric-suffix policy.
    #[must_use]
    pub const fn suffix(&self) -> Suffix {
        self.suffix
    }

    /// The base description, without any suffix value substituted.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Errors from resolving a token against the catalog.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum LookupError {
    /// No catalog pattern matches any prefix of the token.
    #[error("unrecognised alteration code '{0}'")]
    UnknownToken(String),

    /// The matched rule requires a numeric suffix, but the token carries
    /// none (or a non-numeric one).
    #[error("alteration code '{token}' requires a numeric suffix after '{pattern}'")]
    MissingRequiredSuffix {
        /// The offending token.
        token: String,
        /// The pattern that matched.
        pattern: String,
    },

    /// The matched rule takes no suffix, but the token carries trailing
    /// characters.
    #[error("alteration code '{token}' has unexpected trailing characters after '{pattern}'")]
    UnexpectedSuffix {
        /// The offending token.
        token: String,
        /// The pattern that matched.
        pattern: String,
    },
}

/// A successful catalog lookup: the matched rule plus any parsed suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'a> {
    rule: &'a AlterationRule,
    value: Option<u32>,
}

impl RuleMatch<'_> {
    /// The rule the token matched.
    #[must_use]
    pub const fn rule(&self) -> &AlterationRule {
        self.rule
    }

    /// The parsed numeric suffix, when the rule requires one.
    #[must_use]
    pub const fn value(&self) -> Option<u32> {
        self.value
    }

    /// Render the rule's description with the suffix value substituted.
    #[must_use]
    pub fn describe(&self) -> String {
        let base = &self.rule.description;
        match (self.rule.suffix, self.value) {
            (Suffix::None, _) | (_, None) => base.clone(),
            (Suffix::PositionMm, Some(n)) => format!("{base} ({n}mm from left end)"),
            (Suffix::PitchMm, Some(n)) => format!("{base} (hole pitch: {n}mm)"),
            (Suffix::Serial, Some(n)) => format!("{base} (serial: {n})"),
            (Suffix::Unit, Some(n)) => format!("{base} (unit: {n})"),
        }
    }
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    rules: table::build(),
});

/// The table of known alteration codes.
#[derive(Debug)]
pub struct Catalog {
    rules: BTreeMap<String, AlterationRule>,
}

impl Catalog {
    /// The process-wide catalog. Built once, read-only thereafter.
    #[must_use]
    pub fn global() -> &'static Self {
        &CATALOG
    }

    /// Look up a pattern verbatim, without suffix handling.
    #[must_use]
    pub fn get(&self, pattern: &str) -> Option<&AlterationRule> {
        self.rules.get(pattern)
    }

    /// Iterate all rules in pattern order.
    pub fn rules(&self) -> impl Iterator<Item = &AlterationRule> {
        self.rules.values()
    }

    /// Resolve a raw alteration token.
    ///
    /// The whole token is tried first, so patterns that themselves contain
    /// digits (`Z12`, `X5`, `L_T45`) win outright. Failing that, leading
    /// alphabetic prefixes are tried from longest to shortest; the first
    /// match wins and the rule's suffix policy is applied to the remainder.
    /// The catalog never guesses: a token matching no pattern is an error,
    /// not a best-effort result.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::UnknownToken`] when nothing matches,
    /// [`LookupError::MissingRequiredSuffix`] when a required numeric suffix
    /// is absent or malformed, and [`LookupError::UnexpectedSuffix`] when a
    /// suffix-less rule is followed by trailing characters.
    pub fn lookup(&self, token: &str) -> Result<RuleMatch<'_>, LookupError> {
        if let Some(rule) = self.rules.get(token) {
            return apply_suffix(rule, token, "");
        }

        let alphabetic = token
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(token.len());
        for len in (1..=alphabetic).rev() {
            if let Some(rule) = self.rules.get(&token[..len]) {
                return apply_suffix(rule, token, &token[len..]);
            }
        }

        Err(LookupError::UnknownToken(token.to_string()))
    }
}

fn apply_suffix<'a>(
    rule: &'a AlterationRule,
    token: &str,
    rest: &str,
) -> Result<RuleMatch<'a>, LookupError> {
    if rule.suffix.is_required() {
        let numeric = !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit());
        let value = if numeric { rest.parse().ok() } else { None };
        let value = value.ok_or_else(|| LookupError::MissingRequiredSuffix {
            token: token.to_string(),
            pattern: rule.pattern.clone(),
        })?;
        Ok(RuleMatch {
            rule,
            value: Some(value),
        })
    } else if rest.is_empty() {
        Ok(RuleMatch { rule, value: None })
    } else {
        Err(LookupError::UnexpectedSuffix {
            token: token.to_string(),
            pattern: rule.pattern.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    fn fixture(rules: Vec<AlterationRule>) -> Catalog {
        Catalog {
            rules: rules
                .into_iter()
                .map(|rule| (rule.pattern.clone(), rule))
                .collect(),
        }
    }

    #[test]
    fn exact_match_digit_bearing_patterns() {
        let found = Catalog::global().lookup("Z6").unwrap();
        assert_eq!(found.rule().category(), Category::Counterboring);
        assert!(found.describe().contains("Counterbore"));
        assert_eq!(found.value(), None);

        let found = Catalog::global().lookup("X5").unwrap();
        assert_eq!(found.rule().category(), Category::WrenchHoleDiameter);
        assert!(found.describe().contains("5mm"));

        let found = Catalog::global().lookup("L_T45").unwrap();
        assert_eq!(found.rule().category(), Category::FortyFiveDegreeCut);
        assert_eq!(found.describe(), "Left 45-Degree Cut");
    }

    #[test]
    fn wrench_access_hole_cross_product() {
        let found = Catalog::global().lookup("LCP").unwrap();
        assert_eq!(found.rule().category(), Category::WrenchAccessHole);
        assert_eq!(found.describe(), "Left Wrench Access Hole (1 Slot, Crisscross)");

        let found = Catalog::global().lookup("RWH").unwrap();
        assert_eq!(found.describe(), "Right Wrench Access Hole (2 Slots, Horizontal)");

        let found = Catalog::global().lookup("LEV").unwrap();
        assert_eq!(found.describe(), "Left Wrench Access Hole (3 Slots, Vertical)");
    }

    #[test_case("AV360", 360, "Wrench Hole in Specified Position (Vertical, A position) (360mm from left end)"; "vertical A")]
    #[test_case("CH120", 120, "Wrench Hole in Specified Position (Horizontal, C position) (120mm from left end)"; "horizontal C")]
    #[test_case("EP42", 42, "Wrench Hole in Specified Position (Crisscross, E position) (42mm from left end)"; "crisscross E")]
    #[test_case("XA200", 200, "Counterbore (Top to Bottom, Vertical, A position) (200mm from left end)"; "counterbore XA")]
    #[test_case("YE85", 85, "Counterbore (Right to Left, Horizontal, E position) (85mm from left end)"; "counterbore YE")]
    fn position_codes_extract_suffix(token: &str, value: u32, description: &str) {
        let found = Catalog::global().lookup(token).unwrap();
        assert_eq!(found.value(), Some(value));
        assert_eq!(found.describe(), description);
    }

    #[test]
    fn pitch_and_labeling_suffixes() {
        let found = Catalog::global().lookup("JLP1100").unwrap();
        assert_eq!(found.rule().category(), Category::BlindJointHoleL);
        assert_eq!(
            found.describe(),
            "L Hole (Crisscross on Top, Parallel Joint) (hole pitch: 1100mm)"
        );

        let found = Catalog::global().lookup("ZZZ123").unwrap();
        assert_eq!(found.describe(), "Labeling (Serial Number) (serial: 123)");

        let found = Catalog::global().lookup("LL42").unwrap();
        assert_eq!(found.describe(), "Labeling (Unit Number) (unit: 42)");
    }

    #[test]
    fn longest_prefix_wins_over_shorter() {
        // The real table has no single-letter patterns, so pin the
        // precedence rule down with an overlapping fixture pair.
        let catalog = fixture(vec![
            AlterationRule::new(
                "A".to_string(),
                Category::Counterboring,
                Suffix::PositionMm,
                "short".to_string(),
            ),
            AlterationRule::new(
                "AB".to_string(),
                Category::Chamfering,
                Suffix::None,
                "long".to_string(),
            ),
        ]);

        let found = catalog.lookup("AB").unwrap();
        assert_eq!(found.rule().pattern(), "AB");

        let found = catalog.lookup("A5").unwrap();
        assert_eq!(found.rule().pattern(), "A");
        assert_eq!(found.value(), Some(5));
    }

    #[test]
    fn missing_required_suffix() {
        let err = Catalog::global().lookup("AV").unwrap_err();
        assert_eq!(
            err,
            LookupError::MissingRequiredSuffix {
                token: "AV".to_string(),
                pattern: "AV".to_string(),
            }
        );

        // Non-numeric remainder is the same failure.
        let err = Catalog::global().lookup("AVX5").unwrap_err();
        assert!(matches!(err, LookupError::MissingRequiredSuffix { .. }));
    }

    #[test]
    fn unexpected_suffix() {
        let err = Catalog::global().lookup("CW5").unwrap_err();
        assert_eq!(
            err,
            LookupError::UnexpectedSuffix {
                token: "CW5".to_string(),
                pattern: "CW".to_string(),
            }
        );

        // Trailing garbage after a full match is not silently truncated.
        let err = Catalog::global().lookup("LCPX").unwrap_err();
        assert!(matches!(err, LookupError::UnexpectedSuffix { .. }));
    }

    #[test]
    fn unknown_token() {
        let err = Catalog::global().lookup("QQQ").unwrap_err();
        assert_eq!(err, LookupError::UnknownToken("QQQ".to_string()));

        assert!(matches!(
            Catalog::global().lookup("").unwrap_err(),
            LookupError::UnknownToken(_)
        ));
        assert!(matches!(
            Catalog::global().lookup("123").unwrap_err(),
            LookupError::UnknownToken(_)
        ));
    }

    #[test]
    fn plus_sign_is_not_a_numeric_suffix() {
        let err = Catalog::global().lookup("AV+5").unwrap_err();
        assert!(matches!(err, LookupError::MissingRequiredSuffix { .. }));
    }

    #[test]
    fn table_shape() {
        let catalog = Catalog::global();

        // 40 fixed entries plus three generated families:
        // 2 sides x 3 slot counts x 3 orientations = 18 wrench access holes,
        // 5 positions x 3 orientations = 15 specified-position holes,
        // 2 axes x 5 positions = 10 counterbore positions.
        assert_eq!(catalog.rules().count(), 83);

        for rule in catalog.rules() {
            assert!(!rule.pattern().is_empty());
            assert!(
                rule.pattern()
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'),
                "unexpected character in pattern {:?}",
                rule.pattern()
            );
            assert_ne!(rule.category(), Category::Unknown);
        }
    }
}
