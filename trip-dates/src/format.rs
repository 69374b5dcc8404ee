use chrono::NaiveDate;

/// Display patterns for dates shown in the selector views, as chrono
/// strftime strings.
///
/// The summary view and the in-dialog badges are formatted independently;
/// both default to `dd/mm/yyyy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFormat {
    /// Pattern for the committed-summary view
    pub summary: String,
    /// Pattern for the in-dialog badges
    pub badge: String,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        DisplayFormat {
            summary: "%d/%m/%Y".to_string(),
            badge: "%d/%m/%Y".to_string(),
        }
    }
}

impl DisplayFormat {
    /// Format a date for the committed-summary view.
    pub fn summary_date(&self, date: &NaiveDate) -> String {
        date.format(&self.summary).to_string()
    }

    /// Format a date for an in-dialog badge.
    pub fn badge_date(&self, date: &NaiveDate) -> String {
        date.format(&self.badge).to_string()
    }
}

/// Parse a date string in "YYYY-MM-DD" format.
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
}
