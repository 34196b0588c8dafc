pub mod health;
pub mod market;
