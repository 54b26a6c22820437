pub mod granularity;
pub mod util;
