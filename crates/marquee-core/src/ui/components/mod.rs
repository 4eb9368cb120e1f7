// src/ui/components/mod.rs
//! Reusable UI components

pub mod button;

pub use button::Button;
