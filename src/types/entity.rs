use serde::{Deserialize, Serialize};

/// Raw institution counters fed to the institution scorer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InstitutionMetrics {
    pub submission_count: u64,
    pub accepted_count: u64,
    pub oa_count: u64,
    pub subscription_count: u64,
    pub apc_spend: f64,
}

/// Raw funder counters fed to the funder scorer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FunderMetrics {
    pub total_funded_articles: u64,
    pub oa_articles: u64,
    pub subscription_articles: u64,
    pub total_spend: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    pub id: u32,
    pub name: String,
    pub country: String,
    pub department: Option<String>,
    #[serde(flatten)]
    pub metrics: InstitutionMetrics,
    #[serde(default)]
    pub has_existing_deal: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunderKind {
    Government,
    Private,
    Ngo,
    Academic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Funder {
    pub id: u32,
    pub name: String,
    pub country: String,
    pub kind: FunderKind,
    #[serde(flatten)]
    pub metrics: FunderMetrics,
    #[serde(default)]
    pub has_existing_deal: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Institution,
    Funder,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub institutions: Vec<Institution>,
    #[serde(default)]
    pub funders: Vec<Funder>,
}
