pub mod appointment;
pub mod availability;
pub mod email;
pub mod employee;
pub mod payment;
pub mod service;
pub mod user;
