pub mod appointment;
pub mod email;
pub mod employee;
pub mod payment;
pub mod service;
pub mod slot;
pub mod user;
