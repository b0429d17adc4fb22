pub mod appointment;
pub mod availability;
pub mod email;
pub mod health;
pub mod service;
pub mod staff;
pub mod user;
