pub mod granularity_lookup_trait;
pub mod granularity_table;
