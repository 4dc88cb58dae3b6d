use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::catalog::{Catalog, Category, LookupError};

/// A fully decoded part number.
///
/// Format:
/// `{SERIES}-{SIZE}-{LENGTH}[-{ALTERATION}...]`, where:
/// - `SERIES` is the cross-section family (e.g. `HFSB5`), taken verbatim;
///   the series table is open-ended and not validated here
/// - `SIZE` is an even run of digits split at its midpoint into width and
///   height in millimetres (e.g. `2020` is 20mm x 20mm)
/// - `LENGTH` is the cut length in millimetres
/// - each `ALTERATION` is a catalog code, optionally carrying a numeric
///   suffix (e.g. `AV360`)
///
/// Examples: `HFSB5-2020-500`, `HFS6-3030-500-Z6-XA200`,
/// `HFSB5-2020-500-LCP-RCP-AV360`
///
/// A `Decoded` value is immutable once produced and carries no identity
/// beyond its contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoded {
    raw: String,
    series: String,
    width: u32,
    height: u32,
    length: u32,
    alterations: Vec<ResolvedAlteration>,
}

impl Decoded {
    /// The part number as it was given.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The series code, verbatim.
    #[must_use]
    pub fn series(&self) -> &str {
        &self.series
    }

    /// Cross-section width in millimetres.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Cross-section height in millimetres.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Cut length in millimetres.
    #[must_use]
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// The alterations, in the order they appeared in the part number.
    #[must_use]
    pub fn alterations(&self) -> &[ResolvedAlteration] {
        &self.alterations
    }

    /// Whether the given raw alteration token appears in this part number.
    #[must_use]
    pub fn has_alteration(&self, token: &str) -> bool {
        self.alterations.iter().any(|alt| alt.token == token)
    }

    /// The cross-section as a display string, e.g. `20mm × 20mm`.
    #[must_use]
    pub fn size_display(&self) -> String {
        format!("{}mm × {}mm", self.width, self.height)
    }
}

impl FromStr for Decoded {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// One alteration token resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedAlteration {
    /// The raw token as it appeared in the part number.
    pub token: String,
    /// The catalog category, or [`Category::Unknown`] when resolution
    /// failed and the tolerant decode contained it.
    pub category: Category,
    /// Human-readable description with any numeric value substituted; for
    /// contained failures this carries the lookup diagnostic instead.
    pub description: String,
    /// The parsed numeric suffix, when the matched rule carries one.
    pub value: Option<u32>,
}

/// Errors from decoding a part number.
///
/// The structural variants abort the decode. [`Error::Alteration`] is only
/// produced by [`decode_strict`]; the tolerant [`decode`] contains per-token
/// failures as [`Category::Unknown`] entries instead.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// Fewer than three hyphen-delimited segments, or an empty series.
    #[error("invalid part number '{0}': expected SERIES-SIZE-LENGTH[-ALTERATIONS...]")]
    Malformed(String),

    /// The size segment is not an even-length run of digits.
    #[error("invalid size code '{0}': expected an even count of digits")]
    Size(String),

    /// The length segment is not a run of digits.
    #[error("invalid length code '{0}': expected a length in millimetres")]
    Length(String),

    /// An alteration token failed catalog resolution (strict mode only).
    #[error("invalid alteration code '{token}'")]
    Alteration {
        /// The offending token.
        token: String,
        /// The underlying catalog failure.
        #[source]
        source: LookupError,
    },
}

/// Decode a part number.
///
/// Decoding is pure and deterministic: the same input always produces the
/// same [`Decoded`] value, and concurrent calls share nothing but the
/// read-only catalog. Alteration tokens the catalog rejects are contained
/// as [`Category::Unknown`] entries rather than failing the decode, so one
/// bad code in a long part number does not hide the rest.
///
/// # Errors
///
/// Returns a structural [`Error`] when the part number has fewer than three
/// segments, a malformed size segment, or a malformed length segment.
pub fn decode(raw: &str) -> Result<Decoded, Error> {
    decode_inner(raw, false)
}

/// Decode a part number, failing on the first alteration token the catalog
/// rejects.
///
/// # Errors
///
/// As [`decode`], plus [`Error::Alteration`] for the first unresolvable
/// alteration token.
pub fn decode_strict(raw: &str) -> Result<Decoded, Error> {
    decode_inner(raw, true)
}

/// Assemble a part number from its components.
///
/// The inverse of [`decode`] for well-formed inputs; no validation is
/// applied to the pieces.
#[must_use]
pub fn encode(series: &str, size: &str, length: u32, alterations: &[String]) -> String {
    let mut out = format!("{series}-{size}-{length}");
    for alteration in alterations {
        out.push('-');
        out.push_str(alteration);
    }
    out
}

fn decode_inner(raw: &str, strict: bool) -> Result<Decoded, Error> {
    let segments: Vec<&str> = raw.split('-').collect();
    if segments.len() < 3 || segments[0].is_empty() {
        return Err(Error::Malformed(raw.to_string()));
    }

    let series = segments[0];
    let (width, height) = parse_size(segments[1])?;
    let length = parse_length(segments[2])?;

    let catalog = Catalog::global();
    let mut alterations = Vec::with_capacity(segments.len() - 3);
    for token in &segments[3..] {
        match catalog.lookup(token) {
            Ok(found) => alterations.push(ResolvedAlteration {
                token: (*token).to_string(),
                category: found.rule().category(),
                description: found.describe(),
                value: found.value(),
            }),
            Err(source) if strict => {
                return Err(Error::Alteration {
                    token: (*token).to_string(),
                    source,
                });
            }
            Err(source) => alterations.push(ResolvedAlteration {
                token: (*token).to_string(),
                category: Category::Unknown,
                description: source.to_string(),
                value: None,
            }),
        }
    }

    Ok(Decoded {
        raw: raw.to_string(),
        series: series.to_string(),
        width,
        height,
        length,
        alterations,
    })
}

fn parse_size(code: &str) -> Result<(u32, u32), Error> {
    let all_digits = !code.is_empty() && code.chars().all(|c| c.is_ascii_digit());
    if !all_digits || code.len() % 2 != 0 {
        return Err(Error::Size(code.to_string()));
    }

    let midpoint = code.len() / 2;
    let width = code[..midpoint]
        .parse()
        .map_err(|_| Error::Size(code.to_string()))?;
    let height = code[midpoint..]
        .parse()
        .map_err(|_| Error::Size(code.to_string()))?;
    Ok((width, height))
}

fn parse_length(code: &str) -> Result<u32, Error> {
    let all_digits = !code.is_empty() && code.chars().all(|c| c.is_ascii_digit());
    if !all_digits {
        return Err(Error::Length(code.to_string()));
    }
    code.parse().map_err(|_| Error::Length(code.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    #[test]
    fn basic_part_number() {
        let decoded = decode("HFSB5-2020-500").unwrap();
        assert_eq!(decoded.series(), "HFSB5");
        assert_eq!(decoded.width(), 20);
        assert_eq!(decoded.height(), 20);
        assert_eq!(decoded.length(), 500);
        assert!(decoded.alterations().is_empty());
        assert_eq!(decoded.size_display(), "20mm × 20mm");
    }

    #[test]
    fn documented_example_end_to_end() {
        let decoded = decode("HFSB5-2020-500-LCP-RCP-AV360").unwrap();
        assert_eq!(decoded.series(), "HFSB5");
        assert_eq!(decoded.width(), 20);
        assert_eq!(decoded.height(), 20);
        assert_eq!(decoded.length(), 500);

        let descriptions: Vec<&str> = decoded
            .alterations()
            .iter()
            .map(|alt| alt.description.as_str())
            .collect();
        assert_eq!(
            descriptions,
            [
                "Left Wrench Access Hole (1 Slot, Crisscross)",
                "Right Wrench Access Hole (1 Slot, Crisscross)",
                "Wrench Hole in Specified Position (Vertical, A position) (360mm from left end)",
            ]
        );

        let last = &decoded.alterations()[2];
        assert_eq!(last.category, Category::WrenchHoleSpecifiedPosition);
        assert_eq!(last.value, Some(360));
    }

    #[test_case("2020", 20, 20; "square")]
    #[test_case("3060", 30, 60; "rectangular")]
    #[test_case("1515", 15, 15; "fifteen")]
    #[test_case("4040", 40, 40; "forty")]
    #[test_case("404020", 404, 20; "six digits split at midpoint")]
    fn size_round_trip(code: &str, width: u32, height: u32) {
        let decoded = decode(&format!("X-{code}-500")).unwrap();
        assert_eq!(decoded.width(), width);
        assert_eq!(decoded.height(), height);
    }

    #[test]
    fn order_is_preserved() {
        let decoded = decode("X-2020-500-LCP-RCP-AV360").unwrap();
        let tokens: Vec<&str> = decoded
            .alterations()
            .iter()
            .map(|alt| alt.token.as_str())
            .collect();
        assert_eq!(tokens, ["LCP", "RCP", "AV360"]);

        // Repeated tokens are not deduplicated.
        let decoded = decode("X-2020-500-CW-CW").unwrap();
        assert_eq!(decoded.alterations().len(), 2);
    }

    #[test]
    fn unknown_token_is_contained() {
        let decoded = decode("X-2020-500-ZZZZZZ").unwrap();
        assert_eq!(decoded.alterations().len(), 1);
        let alteration = &decoded.alterations()[0];
        assert_eq!(alteration.category, Category::Unknown);
        assert_eq!(alteration.token, "ZZZZZZ");
        assert_eq!(alteration.value, None);
        assert!(alteration.description.contains("ZZZZZZ"));
    }

    #[test]
    fn contained_failure_does_not_hide_the_rest() {
        let decoded = decode("X-2020-500-QQQ-LCP").unwrap();
        assert_eq!(decoded.alterations()[0].category, Category::Unknown);
        assert_eq!(
            decoded.alterations()[1].description,
            "Left Wrench Access Hole (1 Slot, Crisscross)"
        );
    }

    #[test]
    fn strict_mode_surfaces_token_failures() {
        let err = decode_strict("X-2020-500-QQQ").unwrap_err();
        assert_eq!(
            err,
            Error::Alteration {
                token: "QQQ".to_string(),
                source: LookupError::UnknownToken("QQQ".to_string()),
            }
        );

        let err = decode_strict("X-2020-500-CW5").unwrap_err();
        assert!(matches!(
            err,
            Error::Alteration {
                source: LookupError::UnexpectedSuffix { .. },
                ..
            }
        ));

        // The same input decodes tolerantly.
        assert!(decode("X-2020-500-CW5").is_ok());
    }

    #[test_case("HFSB5"; "single segment")]
    #[test_case("HFSB5-2020"; "two segments")]
    #[test_case("-2020-500"; "empty series")]
    fn malformed_part_numbers(raw: &str) {
        assert!(matches!(decode(raw), Err(Error::Malformed(_))));
    }

    #[test_case("20X0"; "non numeric")]
    #[test_case("202"; "odd length")]
    #[test_case(""; "empty")]
    fn invalid_sizes(code: &str) {
        let err = decode(&format!("HFSB5-{code}-500")).unwrap_err();
        assert_eq!(err, Error::Size(code.to_string()));
    }

    #[test_case("50x"; "non numeric")]
    #[test_case(""; "empty")]
    fn invalid_lengths(code: &str) {
        let err = decode(&format!("HFSB5-2020-{code}")).unwrap_err();
        assert_eq!(err, Error::Length(code.to_string()));
    }

    #[test]
    fn decode_is_deterministic() {
        let first = decode("HFS6-3030-500-Z6-XA200-XB256").unwrap();
        let second = decode("HFS6-3030-500-Z6-XA200-XB256").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn complex_part_number() {
        let decoded = decode("HFS6-3030-300-X8-AH30-BH280").unwrap();
        assert_eq!(decoded.series(), "HFS6");
        assert!(decoded.has_alteration("X8"));
        assert!(decoded.has_alteration("AH30"));
        assert!(decoded.has_alteration("BH280"));
        assert_eq!(decoded.alterations()[1].value, Some(30));
        assert_eq!(decoded.alterations()[2].value, Some(280));
    }

    #[test]
    fn from_str_matches_decode() {
        let parsed: Decoded = "HFSB5-2020-500-LCP".parse().unwrap();
        assert_eq!(parsed, decode("HFSB5-2020-500-LCP").unwrap());
        assert_eq!(parsed.to_string(), "HFSB5-2020-500-LCP");
    }

    #[test]
    fn encode_round_trips_through_decode() {
        let alterations = vec![
            "LCP".to_string(),
            "RCP".to_string(),
            "AV360".to_string(),
        ];
        let raw = encode("HFSB5", "2020", 500, &alterations);
        assert_eq!(raw, "HFSB5-2020-500-LCP-RCP-AV360");

        let decoded = decode(&raw).unwrap();
        assert_eq!(decoded.length(), 500);
        assert_eq!(decoded.alterations().len(), 3);
    }

    #[test]
    fn encode_without_alterations() {
        assert_eq!(encode("HFS6", "3030", 250, &[]), "HFS6-3030-250");
    }
}
