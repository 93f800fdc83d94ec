use serde::Serialize;

use crate::model::{PhenotypeCode, RiskVerdict};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub summary: String,
    pub mechanism: String,
    pub clinical_impact: String,
}

/// Deterministic narrative for a verdict: a curated text for the
/// highest-impact drug/phenotype pairs, otherwise a generic template.
pub fn explain(drug: &str, verdict: &RiskVerdict) -> Explanation {
    let diplotype = verdict.diplotype;
    let curated = match (drug, verdict.phenotype) {
        ("CODEINE", PhenotypeCode::UltraRapid) => Some((
            format!(
                "This patient is an Ultra-Rapid Metabolizer (URM) of CYP2D6 with diplotype {diplotype}. Codeine is rapidly converted to morphine, leading to dangerously high opioid plasma levels."
            ),
            "CYP2D6 gene duplication increases enzymatic activity, converting codeine to morphine at an accelerated rate, overwhelming normal clearance mechanisms.",
            "Risk of life-threatening respiratory depression. Avoid codeine and tramadol. Use non-opioid analgesics or carefully titrated opioids not metabolized by CYP2D6.",
        )),
        ("CODEINE", PhenotypeCode::Poor) => Some((
            format!(
                "This patient is a Poor Metabolizer (PM) of CYP2D6 with diplotype {diplotype}. Codeine cannot be converted to its active form (morphine), rendering it ineffective."
            ),
            "Loss-of-function CYP2D6 variants prevent O-demethylation of codeine to morphine. No analgesic effect is achieved at standard doses.",
            "Codeine will not provide pain relief. Consider alternative analgesics such as NSAIDs, acetaminophen, or opioids not requiring CYP2D6 activation.",
        )),
        ("WARFARIN", PhenotypeCode::Poor) => Some((
            format!(
                "This patient has reduced CYP2C9 metabolic capacity with diplotype {diplotype}. Warfarin will accumulate to toxic levels, significantly increasing hemorrhage risk."
            ),
            "CYP2C9 loss-of-function variants reduce S-warfarin hydroxylation, dramatically extending the drug's half-life and anticoagulant effect.",
            "Initiate warfarin at 20-40% of standard dose. Perform INR every 3-5 days during initiation. Target INR 2.0-3.0 with close monitoring for signs of bleeding.",
        )),
        ("AZATHIOPRINE", PhenotypeCode::Poor) => Some((
            format!(
                "Critical TPMT deficiency detected ({diplotype}). Azathioprine will cause severe, potentially fatal hematopoietic toxicity."
            ),
            "TPMT inactivates thiopurine metabolites. PM status leads to accumulation of cytotoxic 6-thioguanine nucleotides in hematopoietic tissue.",
            "Azathioprine is contraindicated. If thiopurine therapy is essential, use 10% of standard dose with intensive CBC monitoring, or switch to a non-thiopurine immunosuppressant.",
        )),
        ("FLUOROURACIL", PhenotypeCode::Poor) => Some((
            format!(
                "Severe DPYD deficiency identified ({diplotype}). Standard 5-FU dosing carries life-threatening toxicity risk in this patient."
            ),
            "DPYD enzyme degrades >80% of administered 5-FU. PM status leads to massive drug accumulation causing systemic toxicity.",
            "Reduce 5-FU dose by at least 50% or avoid entirely. Consider capecitabine dose reduction. Pre-treatment DPYD genotyping is now standard of care in many guidelines.",
        )),
        _ => None,
    };

    if let Some((summary, mechanism, clinical_impact)) = curated {
        return Explanation {
            summary,
            mechanism: mechanism.to_string(),
            clinical_impact: clinical_impact.to_string(),
        };
    }

    let gene = verdict.gene_symbol();
    let phenotype = verdict.phenotype_label();
    let risk = verdict.risk;
    Explanation {
        summary: format!(
            "Pharmacogenomic analysis identified {gene} diplotype {diplotype} ({phenotype}) in this patient. Risk assessment for {drug}: {risk}."
        ),
        mechanism: format!(
            "{gene} enzyme activity is altered by the detected variant, affecting {drug} metabolism and/or transport in the body."
        ),
        clinical_impact: format!(
            "Risk classification: {risk}. Healthcare providers should review dosing guidelines and consider therapeutic drug monitoring where applicable."
        ),
    }
}
