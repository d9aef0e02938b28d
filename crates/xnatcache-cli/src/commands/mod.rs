pub mod assessors;
pub mod fetch;
pub mod label;
pub mod resources;
pub mod scans;
pub mod session;
