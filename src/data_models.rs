use serde::{Deserialize, Serialize};

/// Top-level envelope returned by the search endpoint.
#[derive(Deserialize, Debug, Clone)]
pub struct SearchResponse {
    pub hits: SearchPage,
}

/// One bounded slice of the result set: the server's total count plus the
/// hits for the requested offset.
#[derive(Deserialize, Debug, Clone)]
pub struct SearchPage {
    pub total: u64,
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SearchHit {
    #[serde(rename = "_source")]
    pub source: BrokerRecord,
}

/// The broker data itself. Field names follow the upstream schema on both
/// decode and encode, so the JSON output mirrors what the API returns.
/// Every field is best-effort: missing in the response means empty here.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BrokerRecord {
    #[serde(rename = "ind_source_id", default)]
    pub id: String,

    #[serde(rename = "ind_firstname", default)]
    pub first_name: String,

    #[serde(rename = "ind_lastname", default)]
    pub last_name: String,

    #[serde(rename = "ind_current_employments", default)]
    pub employments: Vec<EmploymentRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EmploymentRecord {
    #[serde(rename = "firm_name", default)]
    pub firm_name: String,

    #[serde(rename = "branch_city", default)]
    pub city: String,

    #[serde(rename = "branch_state", default)]
    pub state: String,

    #[serde(rename = "branch_zip", default)]
    pub zip: String,
}

impl BrokerRecord {
    /// A broker may have zero current employments.
    pub fn primary_employment(&self) -> Option<&EmploymentRecord> {
        self.employments.first()
    }
}
