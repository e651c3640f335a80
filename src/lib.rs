pub mod api;
pub mod config;
pub mod constants;
pub mod env_state;
pub mod epoch_matcher;
pub mod feed;
pub mod logging;
pub mod oem;
pub mod report;
pub mod speed;
pub mod store;
pub mod time;
pub mod tracker_errors;
