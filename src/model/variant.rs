use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::model::gene::Gene;

/// Value of one entry in the INFO column: `KEY=value` or a bare `KEY` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationValue {
    Text(String),
    Flag,
}

impl AnnotationValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnnotationValue::Text(v) => Some(v.as_str()),
            AnnotationValue::Flag => None,
        }
    }
}

impl Serialize for AnnotationValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AnnotationValue::Text(v) => serializer.serialize_str(v),
            AnnotationValue::Flag => serializer.serialize_bool(true),
        }
    }
}

pub type Annotations = BTreeMap<String, AnnotationValue>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantRecord {
    #[serde(rename = "chrom")]
    pub chromosome: String,
    #[serde(rename = "pos")]
    pub position: String,
    #[serde(rename = "id")]
    pub identifier: String,
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(rename = "alt")]
    pub alternate: String,
    pub gene: Gene,
    pub star_allele: Option<String>,
    #[serde(rename = "info")]
    pub annotations: Annotations,
}

impl VariantRecord {
    /// Bare record with no annotations, used for synthetic inputs.
    pub fn new(
        chromosome: &str,
        position: &str,
        identifier: &str,
        reference: &str,
        alternate: &str,
        gene: Gene,
    ) -> Self {
        Self {
            chromosome: chromosome.to_string(),
            position: position.to_string(),
            identifier: identifier.to_string(),
            reference: reference.to_string(),
            alternate: alternate.to_string(),
            gene,
            star_allele: None,
            annotations: Annotations::new(),
        }
    }

    pub fn with_star_allele(mut self, star: &str) -> Self {
        self.star_allele = Some(star.to_string());
        self
    }

    #[cfg(test)]
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).and_then(AnnotationValue::as_text)
    }
}

/// Placeholder identifier for records whose ID column is `.`.
pub fn synthesize_identifier(chromosome: &str, position: &str) -> String {
    format!("chr{chromosome}:{position}")
}
