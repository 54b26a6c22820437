use crate::domain::stats::model::granularity::GranularityDescriptor;

/// Read-only name → bucket width mapping. Names match case-sensitively.
pub trait GranularityLookup: Send + Sync {
    fn lookup(&self, name: &str) -> Option<GranularityDescriptor>;

    fn names(&self) -> Vec<String>;
}
