use serde::{Deserialize, Serialize};

/// A project as the remote service serializes it. The service owns the
/// record; the client only ever holds transient copies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub description: String,
    /// Server-defined lifecycle token. The set of legal values and the
    /// transitions between them live on the server.
    pub status: String,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub update_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub project_id: String,
    pub description: String,
    pub status: String,
    #[serde(default)]
    pub creation_date: Option<String>,
    #[serde(default)]
    pub update_date: Option<String>,
}

/// Envelope the service wraps every list response in. Only the item list is
/// of interest here; no page parameters are ever sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord<T> {
    pub actual_page: u32,
    pub total_records: u64,
    pub total_pages: u32,
    pub item_list: Vec<T>,
}
