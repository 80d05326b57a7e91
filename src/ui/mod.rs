pub mod messages;
pub mod profile;
pub mod tables;
