pub mod amount;
pub mod month;
pub mod time_utils;

pub use month::MonthKey;
