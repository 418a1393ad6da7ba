// SPDX-FileCopyrightText: 2026 Jonathan Steele <hello@jonathansteele.net>
//
// SPDX-License-Identifier: Apache-2.0

/// A holiday as described by the `holidays.json` catalog.
///
/// A definition is either pinned to a fixed calendar date via the
/// `month`/`day` pair, or described by a positional rule in `note`
/// ("Third Monday in January", "Last Monday in May"). When both are
/// supplied the fixed date wins.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct HolidayDefinition {
    /// Display label for the holiday.
    pub name: String,

    /// Month 1-12, present only for fixed-date holidays.
    #[serde(default)]
    pub month: Option<u32>,

    /// Day of month 1-31, paired with `month` for fixed-date holidays.
    #[serde(default)]
    pub day: Option<u32>,

    /// Free-text positional rule for weekday-based holidays.
    #[serde(default)]
    pub note: Option<String>,

    /// Decorative emoji, passed through unchanged.
    #[serde(default)]
    pub emoji: Option<String>,
}

impl HolidayDefinition {
    /// The fixed `(month, day)` pair, if both halves are present.
    pub(crate) fn fixed_date(&self) -> Option<(u32, u32)> {
        self.month.zip(self.day)
    }

    /// The rule note, if present and non-blank.
    pub(crate) fn rule_note(&self) -> Option<&str> {
        self.note
            .as_deref()
            .map(str::trim)
            .filter(|note| !note.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_fixed_date_record() {
        let json = r#"{ "name": "Christmas", "month": 12, "day": 25, "emoji": "🎄" }"#;
        let holiday: HolidayDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.name, "Christmas");
        assert_eq!(holiday.fixed_date(), Some((12, 25)));
        assert_eq!(holiday.rule_note(), None);
        assert_eq!(holiday.emoji.as_deref(), Some("🎄"));
    }

    #[test]
    fn decodes_rule_record() {
        let json = r#"{ "name": "Labor Day", "note": "First Monday in September" }"#;
        let holiday: HolidayDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(holiday.fixed_date(), None);
        assert_eq!(holiday.rule_note(), Some("First Monday in September"));
        assert_eq!(holiday.emoji, None);
    }

    #[test]
    fn half_of_a_fixed_pair_is_not_a_fixed_date() {
        let holiday = HolidayDefinition {
            name: "Broken".into(),
            month: Some(7),
            day: None,
            note: None,
            emoji: None,
        };
        assert_eq!(holiday.fixed_date(), None);
    }

    #[test]
    fn blank_note_is_not_a_rule() {
        let holiday = HolidayDefinition {
            name: "Blank".into(),
            month: None,
            day: None,
            note: Some("   ".into()),
            emoji: None,
        };
        assert_eq!(holiday.rule_note(), None);
    }
}
