//! Construction of the alteration rule table.
//!
//! Fixed entries are listed directly. The side x slot-count x orientation
//! wrench-access family and the position-letter families are generated as
//! cross-products of small enumerations, which keeps the table free of
//! transcription drift.

use std::collections::BTreeMap;

use super::{AlterationRule, Category, Suffix};

const SIDES: [(char, &str); 2] = [('L', "Left"), ('R', "Right")];
const SLOT_COUNTS: [(char, &str); 3] = [('C', "1 Slot"), ('W', "2 Slots"), ('E', "3 Slots")];
const ORIENTATIONS: [(char, &str); 3] =
    [('H', "Horizontal"), ('V', "Vertical"), ('P', "Crisscross")];
const POSITIONS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];

pub(super) fn build() -> BTreeMap<String, AlterationRule> {
    let mut rules = BTreeMap::new();

    // End tapping (center hole, side holes, Heli-Coil variants).
    fixed(&mut rules, "LTP", Category::EndTapping, "Left End Tapping (Center Hole)");
    fixed(&mut rules, "RTP", Category::EndTapping, "Right End Tapping (Center Hole)");
    fixed(&mut rules, "TPM", Category::EndTapping, "End Tapping (Center Hole)");
    fixed(
        &mut rules,
        "TPW",
        Category::EndTapping,
        "End Tapping (Center Hole, Both Sides, Heli-Coil Insert)",
    );
    fixed(&mut rules, "LHP", Category::EndTapping, "Left End Tapping (Center Hole)");
    fixed(&mut rules, "RHP", Category::EndTapping, "Right End Tapping (Center Hole)");
    fixed(
        &mut rules,
        "HPW",
        Category::EndTapping,
        "End Tapping (Center Hole, Heli-Coil Insert)",
    );
    fixed(&mut rules, "LSP", Category::EndTapping, "Left End Tapping (4 Side Holes)");
    fixed(&mut rules, "RSP", Category::EndTapping, "Right End Tapping (4 Side Holes)");
    fixed(&mut rules, "SPW", Category::EndTapping, "End Tapping (4 Side Holes)");

    // Sitting method changes.
    fixed(
        &mut rules,
        "SC",
        Category::HighPrecisionCut,
        "High Precision Cut (L=0.2 tolerance)",
    );
    fixed(&mut rules, "L_T45", Category::FortyFiveDegreeCut, "Left 45-Degree Cut");
    fixed(&mut rules, "R_T45", Category::FortyFiveDegreeCut, "Right 45-Degree Cut");

    // Wrench access holes at the fastening locations, one entry per
    // side x slot count x orientation.
    for (side_code, side) in SIDES {
        for (slot_code, slots) in SLOT_COUNTS {
            for (orientation_code, orientation) in ORIENTATIONS {
                entry(
                    &mut rules,
                    format!("{side_code}{slot_code}{orientation_code}"),
                    Category::WrenchAccessHole,
                    Suffix::None,
                    format!("{side} Wrench Access Hole ({slots}, {orientation})"),
                );
            }
        }
    }

    fixed(
        &mut rules,
        "RWIP",
        Category::WrenchHoleFixedPosition,
        "Right Wrench Hole in Fixed Position",
    );

    // Wrench hole diameter overrides (Series 6 profiles).
    fixed(
        &mut rules,
        "X5",
        Category::WrenchHoleDiameter,
        "Wrench Hole Diameter Specification (5mm)",
    );
    fixed(
        &mut rules,
        "X8",
        Category::WrenchHoleDiameter,
        "Wrench Hole Diameter Specification (8mm)",
    );

    fixed(
        &mut rules,
        "FL",
        Category::EndCapHolePositionChange,
        "Extrusion End Caps Hole Position Change (Left, for 3mm cap)",
    );
    fixed(
        &mut rules,
        "FR",
        Category::EndCapHolePositionChange,
        "Extrusion End Caps Hole Position Change (Right, for 3mm cap)",
    );

    // Wrench holes at a specified distance from the left end, up to five
    // per extrusion (positions A through E).
    for position in POSITIONS {
        for (orientation_code, orientation) in ORIENTATIONS {
            entry(
                &mut rules,
                format!("{position}{orientation_code}"),
                Category::WrenchHoleSpecifiedPosition,
                Suffix::PositionMm,
                format!("Wrench Hole in Specified Position ({orientation}, {position} position)"),
            );
        }
    }

    // Counterbore diameters.
    fixed(
        &mut rules,
        "Z5",
        Category::Counterboring,
        "Counterbore in Specified Position (Z5, d=5.5mm)",
    );
    fixed(
        &mut rules,
        "Z6",
        Category::Counterboring,
        "Counterbore in Specified Position (Z6, d=6.5mm)",
    );
    fixed(
        &mut rules,
        "Z8",
        Category::Counterboring,
        "Counterbore in Specified Position (Z8, d=9mm)",
    );
    fixed(
        &mut rules,
        "Z12",
        Category::Counterboring,
        "Counterbore in Specified Position (Z12, d=13mm)",
    );

    // Counterbore positions, X = top to bottom, Y = right to left.
    for position in POSITIONS {
        entry(
            &mut rules,
            format!("X{position}"),
            Category::Counterboring,
            Suffix::PositionMm,
            format!("Counterbore (Top to Bottom, Vertical, {position} position)"),
        );
        entry(
            &mut rules,
            format!("Y{position}"),
            Category::Counterboring,
            Suffix::PositionMm,
            format!("Counterbore (Right to Left, Horizontal, {position} position)"),
        );
    }

    // Blind-joint dedicated holes. The descriptions are not a clean
    // cross-product (the M family has no vertical variants), so these stay
    // hand-listed.
    fixed(
        &mut rules,
        "LDH",
        Category::BlindJointHoleD,
        "Left D Hole (Horizontal on Left End, Pre-Assembly Insertion Double Joint)",
    );
    fixed(
        &mut rules,
        "LDV",
        Category::BlindJointHoleD,
        "Left D Hole (Vertical on Left End, Pre-Assembly Insertion Double Joint)",
    );
    fixed(
        &mut rules,
        "RDH",
        Category::BlindJointHoleD,
        "Right D Hole (Horizontal on Right End, Pre-Assembly Insertion Double Joint)",
    );
    fixed(
        &mut rules,
        "RDV",
        Category::BlindJointHoleD,
        "Right D Hole (Vertical on Right End, Pre-Assembly Insertion Double Joint)",
    );
    fixed(
        &mut rules,
        "LSH",
        Category::BlindJointHoleS,
        "Left S Hole (Horizontal on Left End, Post-Assembly Insertion Double Joint, Center Joint)",
    );
    fixed(
        &mut rules,
        "LSV",
        Category::BlindJointHoleS,
        "Left S Hole (Vertical on Left End, Post-Assembly Insertion Double Joint, Center Joint)",
    );
    fixed(
        &mut rules,
        "RSH",
        Category::BlindJointHoleS,
        "Right S Hole (Horizontal on Right End, Post-Assembly Insertion Double Joint, Center Joint)",
    );
    fixed(
        &mut rules,
        "RSV",
        Category::BlindJointHoleS,
        "Right S Hole (Vertical on Right End, Post-Assembly Insertion Double Joint, Center Joint)",
    );
    fixed(
        &mut rules,
        "LMH",
        Category::BlindJointHoleM,
        "Left M Hole (Post-Assembly Insertion Double Joint, Post Connection)",
    );
    fixed(
        &mut rules,
        "RMH",
        Category::BlindJointHoleM,
        "Right M Hole (Horizontal on Right End, Post-Assembly Insertion Double Joint, Post Connection)",
    );
    entry(
        &mut rules,
        "JLP".to_string(),
        Category::BlindJointHoleL,
        Suffix::PitchMm,
        "L Hole (Crisscross on Top, Parallel Joint)".to_string(),
    );
    entry(
        &mut rules,
        "KLP".to_string(),
        Category::BlindJointHoleL,
        Suffix::PitchMm,
        "L Hole (Crisscross on Bottom, Parallel Joint)".to_string(),
    );

    // Special end-plate series.
    fixed(&mut rules, "LTS", Category::SpecialEndPlate, "Left End Tapping (GFS/HFSR Series)");
    fixed(&mut rules, "RTS", Category::SpecialEndPlate, "Right End Tapping (GFS/HFSR Series)");
    fixed(&mut rules, "TSW", Category::SpecialEndPlate, "End Tapping (GFS/HFSR Series)");

    fixed(&mut rules, "CW", Category::Chamfering, "End Face C Chamfering");

    // Labeling.
    entry(
        &mut rules,
        "ZZZ".to_string(),
        Category::Labeling,
        Suffix::Serial,
        "Labeling (Serial Number)".to_string(),
    );
    entry(
        &mut rules,
        "LL".to_string(),
        Category::Labeling,
        Suffix::Unit,
        "Labeling (Unit Number)".to_string(),
    );

    rules
}

fn fixed(
    rules: &mut BTreeMap<String, AlterationRule>,
    pattern: &str,
    category: Category,
    description: &str,
) {
    entry(
        rules,
        pattern.to_string(),
        category,
        Suffix::None,
        description.to_string(),
    );
}

fn entry(
    rules: &mut BTreeMap<String, AlterationRule>,
    pattern: String,
    category: Category,
    suffix: Suffix,
    description: String,
) {
    let previous = rules.insert(
        pattern.clone(),
        AlterationRule::new(pattern.clone(), category, suffix, description),
    );
    assert!(previous.is_none(), "duplicate catalog pattern {pattern:?}");
}
