use crate::types::report::OpportunityReport;

pub fn to_json(report: &OpportunityReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
