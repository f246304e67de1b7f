mod db;

pub use db::{Database, connect_to_mongo};
