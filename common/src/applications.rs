use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ArtifactInfo {
    pub name: String,
    pub description: String,
    pub category: String,
    /**Glob patterns relative to the extraction root */
    pub paths: Vec<String>,
    pub minimum_version: Option<String>,
}
