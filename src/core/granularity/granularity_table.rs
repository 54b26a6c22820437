use std::collections::HashMap;

use crate::domain::stats::model::granularity::{CalendarUnit, GranularityDescriptor};

use super::granularity_lookup_trait::GranularityLookup;

/// Built-in granularity table.
pub struct GranularityTable {
    entries: HashMap<String, GranularityDescriptor>,
}

impl GranularityTable {
    pub fn new(entries: impl IntoIterator<Item = GranularityDescriptor>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|g| (g.name.clone(), g))
                .collect(),
        }
    }
}

impl Default for GranularityTable {
    fn default() -> Self {
        use CalendarUnit::*;

        Self::new([
            GranularityDescriptor::new("minute", Minute, 1),
            GranularityDescriptor::new("5-minutes", Minute, 5),
            GranularityDescriptor::new("15-minutes", Minute, 15),
            GranularityDescriptor::new("30-minutes", Minute, 30),
            GranularityDescriptor::new("hour", Hour, 1),
            GranularityDescriptor::new("6-hours", Hour, 6),
            GranularityDescriptor::new("day", Day, 1),
            GranularityDescriptor::new("week", Week, 1),
            GranularityDescriptor::new("month", Month, 1),
            GranularityDescriptor::new("quarter", Month, 3),
            GranularityDescriptor::new("year", Year, 1),
        ])
    }
}

impl GranularityLookup for GranularityTable {
    fn lookup(&self, name: &str) -> Option<GranularityDescriptor> {
        self.entries.get(name).cloned()
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort_by_key(|n| self.entries[n].duration_millis);
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_covers_calendar_units() {
        let table = GranularityTable::default();
        for (name, unit) in [
            ("hour", CalendarUnit::Hour),
            ("day", CalendarUnit::Day),
            ("week", CalendarUnit::Week),
            ("month", CalendarUnit::Month),
            ("year", CalendarUnit::Year),
        ] {
            let g = table.lookup(name).expect("calendar unit entry");
            assert_eq!(g.unit, unit);
            assert_eq!(g.quantity, 1);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = GranularityTable::default();
        assert!(table.lookup("Day").is_none());
        assert!(table.lookup("fortnight").is_none());
    }

    #[test]
    fn test_sub_hour_entries() {
        let table = GranularityTable::default();
        let g = table.lookup("15-minutes").unwrap();
        assert_eq!(g.unit, CalendarUnit::Minute);
        assert_eq!(g.quantity, 15);
        assert_eq!(g.duration_millis, 15 * 60_000);
    }

    #[test]
    fn test_names_are_ordered_by_width() {
        let names = GranularityTable::default().names();
        assert_eq!(names.first().map(String::as_str), Some("minute"));
        assert_eq!(names.last().map(String::as_str), Some("year"));
    }
}
