//! Manual entry forms.
//!
//! Forms hold field values exactly as typed (dates in the display format) and
//! convert into records on submission. A rejected submission returns a
//! [`ValidationError`] and mutates nothing.

mod report;
mod site;

use crate::error_handling::ValidationError;

pub use report::ReportForm;
pub use site::SiteForm;

fn required(value: &str, label: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(label));
    }
    Ok(())
}
