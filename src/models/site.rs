//! Network site records.

use serde::{Deserialize, Serialize};

/// Details of one ISP link at a site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IspInfo {
    pub info: String,
    pub capacity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l2_ip: Option<String>,
}

/// A network site with its SD-WAN identity and three ISP links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    pub site_location_name: String,
    pub device_name: String,
    pub sdwan_site_id: String,
    pub lan_ip: String,
    pub el_info: IspInfo,
    pub ilevant_info: IspInfo,
    pub horizon_info: IspInfo,
}

impl Site {
    /// Case-insensitive substring match against the identifying fields.
    ///
    /// A blank term matches every site.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            &self.site_location_name,
            &self.device_name,
            &self.sdwan_site_id,
            &self.lan_ip,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Returns the sites matching `term`, preserving order.
pub fn search_sites<'a>(sites: &'a [Site], term: &str) -> Vec<&'a Site> {
    sites.iter().filter(|s| s.matches(term)).collect()
}
