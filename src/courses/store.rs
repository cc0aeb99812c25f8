use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::{AppError, AppResult};

/// Read-only lookup over the course files: one catalog array file for the
/// listing, one `<id>.json` per course for details. Every call re-reads from
/// disk; courses are placed there out-of-band and never mutated here.
#[derive(Clone)]
pub struct CourseStore {
    catalog_path: PathBuf,
    courses_dir: PathBuf,
}

impl CourseStore {
    pub fn new(catalog_path: &Path, courses_dir: &Path) -> CourseStore {
        CourseStore {
            catalog_path: catalog_path.to_path_buf(),
            courses_dir: courses_dir.to_path_buf(),
        }
    }

    pub async fn all(&self) -> AppResult<Vec<Value>> {
        let bytes = match tokio::fs::read(&self.catalog_path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(AppError::not_found("Courses file not found."));
            }
            Err(err) => return Err(err.into()),
        };

        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn get(&self, id: &str) -> AppResult<Value> {
        if !valid_id(id) {
            return Err(AppError::not_found("Course not found."));
        }

        let path = self.courses_dir.join(format!("{id}.json"));
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(AppError::not_found("Course not found."));
            }
            Err(err) => return Err(err.into()),
        };

        Ok(serde_json::from_slice(&bytes)?)
    }
}

// Ids become file names, so anything that could leave the courses directory
// is treated as an unknown course.
fn valid_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Catalog entries may carry a string or an integer id.
pub(crate) fn course_id(course: &Value) -> Option<String> {
    match course.get("id")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
