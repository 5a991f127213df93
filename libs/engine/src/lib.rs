pub mod args;
pub mod error;
pub mod event;
pub mod reader;
pub mod runner;
pub mod syncer;
pub mod window;
pub mod sink {
    pub mod handle;
    pub mod listing;
}
