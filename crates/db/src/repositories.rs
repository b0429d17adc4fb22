pub mod appointment;
pub mod blocked_slot;
pub mod employee;
pub mod payment;
pub mod service;
pub mod user;
