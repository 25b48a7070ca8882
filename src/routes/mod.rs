pub mod admin;
pub mod catalog;
pub mod content;
pub mod health;
pub mod quiz;
pub mod search;
