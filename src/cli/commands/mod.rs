pub mod clients;
pub mod common;
pub mod config;
pub mod days;
pub mod employee;
pub mod export;
pub mod init;
pub mod login;
pub mod report;
