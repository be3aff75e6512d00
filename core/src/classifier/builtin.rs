use crate::classifier::definition::{description, Condition, ContrastPolicy, RuleDefinition};
use crate::types::AcquisitionType::{ThreeD, TwoD, Unknown};
use crate::types::{Orientation, SeriesCategory};

/// The built-in rule table, in evaluation order
///
/// Enhanced categories precede their generic counterparts so the more
/// specific pattern is tried first.
pub fn builtin_rules() -> Vec<RuleDefinition> {
    vec![
        RuleDefinition::new(SeriesCategory::Dwi, "DWI")
            .acquisition(&[TwoD])
            .include(&["DWI", "AUTODIFF"])
            .variant("DWI0", vec![Condition::BValue(0.0)])
            .variant("DWI1000", vec![Condition::BValue(1000.0)])
            .require_variant()
            .orientations(&[Orientation::Axial])
            .without_orientation_suffix(),
        RuleDefinition::new(SeriesCategory::Eadc, "eADC")
            .include(&["eADC", r"enhanced[\s_-]*ADC"]),
        RuleDefinition::new(SeriesCategory::Adc, "ADC")
            .acquisition(&[TwoD, Unknown])
            .include(&["ADC", "Apparent Diffusion Coefficient"])
            .image_type_first("DERIVED"),
        RuleDefinition::new(SeriesCategory::Eswan, "eSWAN")
            .include(&["eSWAN", r"enhanced[\s_-]*SWAN"])
            .variant("eSWANmIP", vec![Condition::ImageTypeLast("MIN IP".to_string())]),
        RuleDefinition::new(SeriesCategory::Swan, "SWAN")
            .acquisition(&[ThreeD])
            .include(&["SWAN"])
            .exclude(&["eSWAN", "enhanced"])
            .variant("SWANmIP", vec![Condition::ImageTypeLast("MIN IP".to_string())]),
        RuleDefinition::new(SeriesCategory::MraBrain, "MRA_BRAIN")
            .acquisition(&[ThreeD])
            .include(&["TOF"])
            .exclude(&["neck"])
            .image_type_first("ORIGINAL"),
        RuleDefinition::new(SeriesCategory::MraNeck, "MRA_NECK")
            .acquisition(&[ThreeD])
            .include(&["TOF.*neck", "neck.*TOF"])
            .image_type_first("ORIGINAL"),
        RuleDefinition::new(SeriesCategory::MravrBrain, "MRAVR_BRAIN")
            .acquisition(&[ThreeD])
            .include(&["MRA"])
            .exclude(&["TOF", "neck"]),
        RuleDefinition::new(SeriesCategory::MravrNeck, "MRAVR_NECK")
            .acquisition(&[ThreeD])
            .include(&["neck.*MRA", "MRA.*neck"])
            .exclude(&["TOF"]),
        RuleDefinition::new(SeriesCategory::T1, "T1")
            .acquisition(&[TwoD, ThreeD])
            .include(&["T1", "BRAVO", "FSPGR"])
            .contrast(ContrastPolicy::Suffix)
            .variant("T1FLAIRCUBE", vec![description("FLAIR"), description("CUBE")])
            .variant("T1CUBE", vec![description("CUBE")])
            .variant("T1BRAVO", vec![description("BRAVO|FSPGR")])
            .variant("T1FLAIR", vec![description("FLAIR")])
            .all_orientations(),
        RuleDefinition::new(SeriesCategory::T2, "T2")
            .acquisition(&[TwoD, ThreeD])
            .include(&["T2", "FLAIR"])
            .contrast(ContrastPolicy::Suffix)
            .variant("T2FLAIRCUBE", vec![description("FLAIR"), description("CUBE")])
            .variant("T2CUBE", vec![description("CUBE")])
            .variant("T2FLAIR", vec![description("FLAIR")])
            .all_orientations(),
        RuleDefinition::new(SeriesCategory::Asl, "ASLPROD")
            .acquisition(&[ThreeD, Unknown])
            .include(&["ASL", "Cerebral Blood Flow"])
            .variant("ASLSEQATT_COLOR", vec![description(r"\(Color Transit delay\)")])
            .variant("ASLSEQATT", vec![description(r"\(Transit delay\)")])
            .variant(
                "ASLSEQCBF_COLOR",
                vec![description(r"\(Color Transit corrected CBF\)")],
            )
            .variant("ASLSEQCBF", vec![description(r"\(Transit corrected CBF\)")])
            .variant("ASLSEQPW", vec![description(r"\(per del, mean PW, REF\)")])
            .variant("ASLSEQ", vec![description(r"multi-Delay ASL SEQ")])
            .variant("ASLPRODCBF", vec![description("CBF|Cerebral Blood Flow")]),
        RuleDefinition::new(SeriesCategory::Dsc, "DSC")
            .acquisition(&[TwoD, Unknown])
            .include(&["AUTOPWI", "Perfusion", "CBF", "CBV", "MTT"])
            .variant("DSCCBF_COLOR", vec![description("CBF")])
            .variant("DSCCBV_COLOR", vec![description("CBV")])
            .variant("DSCMTT_COLOR", vec![description("MTT")]),
        RuleDefinition::new(SeriesCategory::Resting, "RESTING")
            .acquisition(&[TwoD])
            .include(&["resting"])
            .variant("RESTING2000", vec![Condition::RepetitionTime(2000.0)]),
        RuleDefinition::new(SeriesCategory::Cvr, "CVR")
            .acquisition(&[TwoD])
            .include(&["CVR"])
            .variant(
                "CVR2000_EAR",
                vec![
                    Condition::RepetitionTime(2000.0),
                    description(r"(^|[^a-z])ear([^a-z]|$)"),
                ],
            )
            .variant(
                "CVR2000_EYE",
                vec![
                    Condition::RepetitionTime(2000.0),
                    description(r"(^|[^a-z])eye([^a-z]|$)"),
                ],
            )
            .variant("CVR2000", vec![Condition::RepetitionTime(2000.0)])
            .variant("CVR1000", vec![Condition::RepetitionTime(1000.0)]),
        RuleDefinition::new(SeriesCategory::Dti, "DTI")
            .acquisition(&[TwoD])
            .include(&["DTI"])
            .variant("DTI32D", vec![Condition::DiffusionDirections(32)])
            .variant("DTI64D", vec![Condition::DiffusionDirections(64)]),
    ]
}
