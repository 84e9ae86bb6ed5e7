mod academic_year;
pub use academic_year::*;
mod date;
pub use date::*;
mod month;
pub use month::*;
mod time_stamp;
pub use time_stamp::*;
mod week_day;
pub use week_day::*;
mod working_duration;
pub use working_duration::*;
mod year;
pub use year::*;
