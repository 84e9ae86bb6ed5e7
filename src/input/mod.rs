mod activity;
mod month_data;
mod registry_data;

pub use activity::*;
pub use month_data::*;
pub use registry_data::*;
