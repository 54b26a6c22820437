pub mod calendar_util;
pub mod duration_util;
