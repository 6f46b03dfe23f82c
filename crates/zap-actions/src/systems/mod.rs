pub mod manager;
pub mod pool;
