/// Calendar unit a bucket width is expressed in.
///
/// `Week` follows ISO semantics: weeks start on Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl CalendarUnit {
    /// Nominal length of one unit in milliseconds.
    ///
    /// Months count as 30 days and years as 365 days. Only used for span
    /// validation and bucket counting, never for stepping between buckets.
    pub fn nominal_millis(self) -> i64 {
        const MINUTE: i64 = 60_000;
        const DAY: i64 = 24 * 60 * MINUTE;

        match self {
            CalendarUnit::Minute => MINUTE,
            CalendarUnit::Hour => 60 * MINUTE,
            CalendarUnit::Day => DAY,
            CalendarUnit::Week => 7 * DAY,
            CalendarUnit::Month => 30 * DAY,
            CalendarUnit::Year => 365 * DAY,
        }
    }
}

/// A named bucket width: `quantity` consecutive calendar `unit`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GranularityDescriptor {
    pub name: String,
    pub unit: CalendarUnit,
    pub quantity: u32,
    pub duration_millis: i64,
}

impl GranularityDescriptor {
    pub fn new(name: impl Into<String>, unit: CalendarUnit, quantity: u32) -> Self {
        let quantity = quantity.max(1);
        Self {
            name: name.into(),
            unit,
            quantity,
            duration_millis: unit.nominal_millis() * i64::from(quantity),
        }
    }
}
