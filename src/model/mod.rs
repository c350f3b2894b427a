pub mod constants;
pub mod records;
pub mod results;
pub mod roles;
