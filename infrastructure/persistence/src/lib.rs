pub mod db;
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod catalog {
    pub mod entity;
    pub mod repository;
}
pub mod checkout {
    pub mod repository;
}
