pub mod buy;
pub mod connect;
pub mod update_config;
