pub mod browser;
pub mod dom;
pub mod fetch;
pub mod input;
pub mod log;
pub mod network;
pub mod page;
pub mod storage;
pub mod target;
