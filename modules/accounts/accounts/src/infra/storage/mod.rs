pub mod db;
pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod sea_orm_repo;

pub use db::{connect, migrate, open};
pub use sea_orm_repo::SeaOrmAccountsRepository;
