pub mod backup;
pub mod config;
pub mod contract;
pub mod db;
pub mod del;
pub mod employee;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod period;
pub mod set;
pub mod show;
