// src/handlers/mod.rs

pub mod assessment;
pub mod auth;
pub mod blogs;
pub mod careers;
pub mod chatbot;
pub mod colleges;
pub mod contact;
pub mod mentor;
pub mod profile;
pub mod roadmaps;
