pub mod health;
pub mod tags;
