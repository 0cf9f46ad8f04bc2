pub mod a001_destination;
pub mod a002_homepage;
pub mod a003_package;
pub mod common;
