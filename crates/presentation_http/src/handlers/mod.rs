//! HTTP request handlers

pub mod form;
pub mod health;
pub mod predict;
