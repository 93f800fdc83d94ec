use crate::model::{Drug, PhenotypeCode, RiskLabel};

use PhenotypeCode::{Intermediate, Normal, Poor, Rapid, UltraRapid};

pub const NOTES_FALLBACK: &str = "Consult clinical pharmacist for individualized guidance.";
pub const NOTES_UNKNOWN_DRUG: &str = "Drug-gene interaction data not available.";

pub const CLINICAL_ACTIONS: &[(RiskLabel, &str)] = &[
    (RiskLabel::Safe, "Administer standard dose as prescribed."),
    (
        RiskLabel::AdjustDosage,
        "Consider dose modification based on metabolizer status. Consult pharmacist.",
    ),
    (
        RiskLabel::Toxic,
        "Avoid this drug or use alternative agent. Risk of serious adverse events.",
    ),
    (
        RiskLabel::Ineffective,
        "Standard dosing unlikely to achieve therapeutic effect. Consider alternative.",
    ),
    (
        RiskLabel::Unknown,
        "Insufficient data. Proceed with caution and standard monitoring.",
    ),
];

#[derive(Debug, Clone, Copy)]
pub struct DrugNotesDef {
    pub drug: Drug,
    pub notes: &'static [(PhenotypeCode, &'static str)],
}

pub const CLINICAL_NOTES: &[DrugNotesDef] = &[
    DrugNotesDef {
        drug: Drug::Codeine,
        notes: &[
            (
                Poor,
                "CYP2D6 poor metabolizers cannot convert codeine to morphine — no analgesic effect.",
            ),
            (
                UltraRapid,
                "Ultra-rapid metabolizers produce excess morphine — life-threatening toxicity risk.",
            ),
            (
                Intermediate,
                "Reduced codeine-to-morphine conversion. Consider lower dose or tramadol.",
            ),
            (Normal, "Normal CYP2D6 activity. Standard codeine dosing appropriate."),
            (Rapid, "Slightly increased conversion. Monitor for opioid side effects."),
        ],
    },
    DrugNotesDef {
        drug: Drug::Clopidogrel,
        notes: &[
            (
                Poor,
                "CYP2C19 PM status severely reduces clopidogrel activation — increased MACE risk.",
            ),
            (Intermediate, "Reduced platelet inhibition. Consider prasugrel or ticagrelor."),
            (Normal, "Normal clopidogrel activation. Standard antiplatelet therapy appropriate."),
            (Rapid, "Enhanced activation may increase bleeding risk. Monitor closely."),
            (UltraRapid, "Enhanced activation may increase bleeding risk. Monitor closely."),
        ],
    },
    DrugNotesDef {
        drug: Drug::Warfarin,
        notes: &[
            (Poor, "CYP2C9 PM status leads to warfarin accumulation and severe bleeding risk."),
            (
                Intermediate,
                "Reduced warfarin metabolism. Start at 20-30% lower dose. Frequent INR monitoring.",
            ),
            (Normal, "Normal warfarin metabolism. Standard dosing with routine INR monitoring."),
            (Rapid, "Slightly faster metabolism. May require slightly higher dose."),
            (UltraRapid, "Faster metabolism. May require higher dose. Close INR monitoring."),
        ],
    },
    DrugNotesDef {
        drug: Drug::Simvastatin,
        notes: &[
            (
                Poor,
                "SLCO1B1 variant reduces hepatic uptake — increased myopathy/rhabdomyolysis risk.",
            ),
            (
                Intermediate,
                "Moderate increase in plasma simvastatin. Consider lower dose (≤20mg) or pravastatin.",
            ),
            (Normal, "Normal statin transport. Standard simvastatin dosing appropriate."),
            (Rapid, "Normal statin transport. Standard dosing appropriate."),
            (UltraRapid, "Normal statin transport. Standard dosing appropriate."),
        ],
    },
    DrugNotesDef {
        drug: Drug::Azathioprine,
        notes: &[
            (
                Poor,
                "TPMT PM status causes toxic thiopurine accumulation — severe myelosuppression risk.",
            ),
            (Intermediate, "Reduced TPMT activity. Start at 30-70% of standard dose. Monitor CBC."),
            (
                Normal,
                "Normal TPMT activity. Standard azathioprine dosing with routine CBC monitoring.",
            ),
            (Rapid, "Normal TPMT activity. Standard dosing appropriate."),
            (UltraRapid, "Normal TPMT activity. Standard dosing appropriate."),
        ],
    },
    DrugNotesDef {
        drug: Drug::Fluorouracil,
        notes: &[
            (Poor, "DPYD deficiency causes severe 5-FU toxicity — avoid or reduce by ≥50%."),
            (
                Intermediate,
                "Partial DPYD deficiency. Reduce starting dose by 25-50%. Monitor closely.",
            ),
            (
                Normal,
                "Normal DPYD activity. Standard 5-FU dosing with routine toxicity monitoring.",
            ),
            (Rapid, "Normal DPYD activity. Standard dosing appropriate."),
            (UltraRapid, "Normal DPYD activity. Standard dosing appropriate."),
        ],
    },
];
