// src/models/mod.rs

pub mod assessment;
pub mod blog;
pub mod career;
pub mod chat;
pub mod college;
pub mod contact;
pub mod mentor;
pub mod roadmap;
pub mod user;
