// This file makes the screen modules available to the rest of the application.

pub mod balance;
pub mod receive;
