use crate::domain::model::MoldCandidate;
use crate::domain::ports::MoldCatalog;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;

/// Mold catalog backed by a local CSV file, for offline use and fixtures.
///
/// Expected header: `id,shape_type,diameter_inches,height_inches,style_tags,
/// is_active`, with `style_tags` as a single `|`-separated column. Inactive
/// rows are filtered here since a flat file cannot do it for us.
pub struct CsvCatalog {
    path: PathBuf,
}

impl CsvCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Debug, Deserialize)]
struct MoldRow {
    id: String,
    shape_type: String,
    diameter_inches: Option<f64>,
    height_inches: Option<f64>,
    #[serde(default)]
    style_tags: String,
    is_active: bool,
}

impl From<MoldRow> for MoldCandidate {
    fn from(row: MoldRow) -> Self {
        let style_tags = row
            .style_tags
            .split('|')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();

        MoldCandidate {
            id: row.id,
            shape_type: row.shape_type,
            diameter_inches: row.diameter_inches,
            height_inches: row.height_inches,
            style_tags,
            is_active: row.is_active,
        }
    }
}

#[async_trait]
impl MoldCatalog for CsvCatalog {
    async fn list_active(&self) -> Result<Vec<MoldCandidate>> {
        tracing::debug!("reading mold catalog from {}", self.path.display());

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut molds = Vec::new();

        for row in reader.deserialize::<MoldRow>() {
            let mold = MoldCandidate::from(row?);
            if mold.is_active {
                molds.push(mold);
            }
        }

        tracing::debug!("loaded {} active molds", molds.len());
        Ok(molds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_catalog(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_loads_active_rows_and_splits_tags() {
        let file = write_catalog(
            "id,shape_type,diameter_inches,height_inches,style_tags,is_active\n\
             mold-1,cylinder,3.0,4.0,ribbed|modern,true\n\
             mold-2,bowl,5.0,,smooth,true\n",
        );

        let catalog = CsvCatalog::new(file.path());
        let molds = catalog.list_active().await.unwrap();

        assert_eq!(molds.len(), 2);
        assert_eq!(molds[0].style_tags, vec!["ribbed", "modern"]);
        assert_eq!(molds[1].height_inches, None);
        assert_eq!(molds[1].style_tags, vec!["smooth"]);
    }

    #[tokio::test]
    async fn test_inactive_rows_are_filtered() {
        let file = write_catalog(
            "id,shape_type,diameter_inches,height_inches,style_tags,is_active\n\
             mold-1,cylinder,3.0,4.0,ribbed,false\n\
             mold-2,bowl,5.0,3.0,,true\n",
        );

        let catalog = CsvCatalog::new(file.path());
        let molds = catalog.list_active().await.unwrap();

        assert_eq!(molds.len(), 1);
        assert_eq!(molds[0].id, "mold-2");
        assert!(molds[0].style_tags.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_a_csv_error() {
        let catalog = CsvCatalog::new("does/not/exist.csv");
        let result = catalog.list_active().await;

        assert!(result.is_err());
    }
}
