//! Data model: problem reports, sites, user groups and the theme preference.

mod report;
mod site;
mod theme;
mod user;

pub use report::{ProblemReport, ReportStatus};
pub use site::{search_sites, IspInfo, Site};
pub use theme::Theme;
pub use user::UserGroup;
