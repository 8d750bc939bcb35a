use crate::error::{OpportunityError, Result};
use crate::types::entity::Dataset;
use std::path::Path;
use tracing::info;

/// Reads institutions and funders from a `.toml` or `.json` file.
pub fn load(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        return Err(OpportunityError::DatasetNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let content = std::fs::read_to_string(path)?;
    let dataset: Dataset = match extension.as_deref() {
        Some("toml") => toml::from_str(&content)?,
        Some("json") => serde_json::from_str(&content)?,
        _ => {
            return Err(OpportunityError::UnsupportedDatasetFormat(
                path.display().to_string(),
            ))
        }
    };

    info!(
        path = %path.display(),
        institutions = dataset.institutions.len(),
        funders = dataset.funders.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_reads_toml_dataset() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("dataset.toml");
        fs::write(
            &path,
            r#"
[[funders]]
id = 5
name = "Japan Society for the Promotion of Science"
country = "Japan"
kind = "government"
total_funded_articles = 1245
oa_articles = 743
subscription_articles = 502
total_spend = 1486000
"#,
        )
        .expect("dataset should write");

        let dataset = load(&path).expect("dataset should load");
        assert_eq!(dataset.funders.len(), 1);
        assert_eq!(dataset.funders[0].metrics.subscription_articles, 502);
        assert!(dataset.institutions.is_empty());
    }

    #[test]
    fn load_reads_json_dataset_case_insensitively() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("dataset.JSON");
        fs::write(&path, r#"{"institutions": [], "funders": []}"#).expect("dataset should write");

        let dataset = load(&path).expect("dataset should load");
        assert_eq!(dataset, Dataset::default());
    }

    #[test]
    fn load_rejects_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load(&dir.path().join("missing.toml")).expect_err("missing file should fail");
        assert!(matches!(err, OpportunityError::DatasetNotFound(_)));
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("dataset.csv");
        fs::write(&path, "id,name").expect("dataset should write");

        let err = load(&path).expect_err("csv should be rejected");
        assert!(matches!(err, OpportunityError::UnsupportedDatasetFormat(_)));
    }

    #[test]
    fn load_surfaces_negative_counts_as_parse_errors() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("dataset.json");
        fs::write(
            &path,
            r#"{"institutions": [{"id": 1, "name": "X", "country": "UK",
                "submission_count": 10, "accepted_count": -1, "oa_count": 0,
                "subscription_count": 0, "apc_spend": 0}]}"#,
        )
        .expect("dataset should write");

        let err = load(&path).expect_err("negative count should fail");
        assert!(matches!(err, OpportunityError::Json(_)));
    }
}
