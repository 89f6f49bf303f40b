pub mod dashboard;
pub mod util;
