pub mod client;
pub mod utils;
pub mod checkpoint {
    pub mod model;
    pub mod store;
}
pub mod listing {
    pub mod model;
    pub mod pretty;
    pub mod store;
}
