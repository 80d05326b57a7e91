pub mod config;
pub mod init;
pub mod run;
pub mod session;
pub mod view;
