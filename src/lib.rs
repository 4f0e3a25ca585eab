//! Coursehub: online-course management backend.
//!
//! Students enroll in courses, instructors track per-course progress, and
//! administrators run the course review queue and manage accounts.

pub mod admin;
pub mod app_config;
pub mod db;
pub mod denylist;
pub mod enrollment;
pub mod error;
pub mod instructor;
pub mod orm;
pub mod web;
