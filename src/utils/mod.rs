// src/utils/mod.rs

pub mod filter;
pub mod hash;
pub mod html;
pub mod jwt;
pub mod pagination;
