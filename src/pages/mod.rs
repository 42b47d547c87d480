//! Route components: login, registration, and the student dashboard.

pub mod login;
pub mod register;
pub mod student;
