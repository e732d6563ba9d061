//! Request middleware

pub mod process_time;
