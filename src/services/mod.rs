// src/services/mod.rs

pub mod assessment;
pub mod chatbot;
pub mod roadmap_matcher;
