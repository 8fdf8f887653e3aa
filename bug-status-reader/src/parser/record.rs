//! Parsed issue records.

/// One issue as it appears in a search response `item` element.
///
/// Fields whose XML node is absent default to the empty string; a missing
/// resolution id decodes to 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueRecord {
    /// Browse URL of the issue.
    pub link: String,

    /// Issue key, e.g. `JDK-8150225`.
    pub key: String,

    /// Issue summary line.
    pub description: String,

    /// Status text, e.g. `Resolved`.
    pub status: String,

    /// Status code, kept textual as the tracker sends it.
    pub status_id: String,

    /// Resolution text, e.g. `Fixed`.
    pub resolution: String,

    /// Decoded resolution code; 0 when the issue has no resolution.
    pub resolution_id: i64,

    /// Version the fix shipped in.
    pub fix_version: String,
}
