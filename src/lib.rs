pub mod arith;
pub mod config;
pub mod greeting;
pub mod person;

pub use arith::{add, multiply};
pub use greeting::{greet, greeting, write_greeting};
pub use person::Person;
