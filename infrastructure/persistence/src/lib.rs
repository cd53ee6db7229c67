pub mod client;
pub mod catalog {
    pub mod entity;
    pub mod static_source;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
