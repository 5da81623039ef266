//! Site form with the ISP links flattened into plain fields.

use super::required;
use crate::error_handling::ValidationError;
use crate::models::{IspInfo, Site};

/// Site fields as entered by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteForm {
    pub site_location_name: String,
    pub device_name: String,
    pub sdwan_site_id: String,
    pub lan_ip: String,
    pub el_info: String,
    pub el_capacity: String,
    pub el_l2_ip: String,
    pub ilevant_info: String,
    pub ilevant_capacity: String,
    pub horizon_info: String,
    pub horizon_capacity: String,
    pub horizon_l2_ip: String,
}

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl SiteForm {
    pub fn from_site(site: &Site) -> Self {
        Self {
            site_location_name: site.site_location_name.clone(),
            device_name: site.device_name.clone(),
            sdwan_site_id: site.sdwan_site_id.clone(),
            lan_ip: site.lan_ip.clone(),
            el_info: site.el_info.info.clone(),
            el_capacity: site.el_info.capacity.clone(),
            el_l2_ip: site.el_info.l2_ip.clone().unwrap_or_default(),
            ilevant_info: site.ilevant_info.info.clone(),
            ilevant_capacity: site.ilevant_info.capacity.clone(),
            horizon_info: site.horizon_info.info.clone(),
            horizon_capacity: site.horizon_info.capacity.clone(),
            horizon_l2_ip: site.horizon_info.l2_ip.clone().unwrap_or_default(),
        }
    }

    /// Validates the identifying fields and builds a site with the given id.
    pub fn into_site(self, id: impl Into<String>) -> Result<Site, ValidationError> {
        required(&self.site_location_name, "Site Location")?;
        required(&self.device_name, "Device Name")?;
        required(&self.sdwan_site_id, "SDWAN Site ID")?;
        required(&self.lan_ip, "LAN IP")?;

        Ok(Site {
            id: id.into(),
            site_location_name: self.site_location_name,
            device_name: self.device_name,
            sdwan_site_id: self.sdwan_site_id,
            lan_ip: self.lan_ip,
            el_info: IspInfo {
                info: self.el_info,
                capacity: self.el_capacity,
                l2_ip: optional(self.el_l2_ip),
            },
            ilevant_info: IspInfo {
                info: self.ilevant_info,
                capacity: self.ilevant_capacity,
                l2_ip: None,
            },
            horizon_info: IspInfo {
                info: self.horizon_info,
                capacity: self.horizon_capacity,
                l2_ip: optional(self.horizon_l2_ip),
            },
        })
    }
}
