pub mod designs;
pub mod names;
