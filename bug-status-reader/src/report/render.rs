//! HTML row rendering.

use handlebars::{no_escape, Handlebars};
use serde_json::json;

use super::ReportError;
use crate::parser::IssueRecord;

/// Header row shared by both reports.
pub(crate) const HEADER_ROW: &str = "<tr><td></td><td>Bug</td><td>Description</td><td>Status</td><td>Resolution</td><td>fixVersion</td></tr>";

/// Row template; the bug-key cell links back to the tracker.
const ROW_TEMPLATE: &str = "<tr><td>{{seq}}</td>\
<td style=\"white-space: nowrap\"><a href=\"{{link}}\">{{key}}</a></td>\
<td>{{description}}</td>\
<td style=\"white-space: nowrap\">{{status}}[{{status_id}}]</td>\
<td>{{resolution}}[{{resolution_id}}]</td>\
<td>{{fix_version}}</td></tr>";

/// Renders report table rows from issue records.
pub struct ReportRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer {
    /// Creates a renderer with the fixed row template.
    #[must_use]
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Raw HTML output; field values come straight from the tracker.
        handlebars.register_escape_fn(no_escape);
        handlebars.set_strict_mode(true);

        Self { handlebars }
    }

    /// Renders one table row with its 1-based sequence number.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::RenderError`] if template rendering fails.
    pub fn render_row(&self, seq: usize, record: &IssueRecord) -> Result<String, ReportError> {
        let data = json!({
            "seq": seq,
            "link": record.link,
            "key": record.key,
            "description": record.description,
            "status": record.status,
            "status_id": record.status_id,
            "resolution": record.resolution,
            "resolution_id": record.resolution_id,
            "fix_version": record.fix_version,
        });

        Ok(self.handlebars.render_template(ROW_TEMPLATE, &data)?)
    }
}
