//! Reusable UI components shared by pages.

pub mod header;
