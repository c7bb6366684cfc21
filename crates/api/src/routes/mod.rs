//! Route modules, one per resource.

pub mod health;
pub mod inquiries;
pub mod programs;
pub mod testimonials;
