//! Domain types for the Impact Avenue backend.
//!
//! Everything here is pure data and pure logic: the static content catalog
//! (programs and testimonials) and the inquiry contact-form record. Storage
//! and HTTP concerns live in `impact-db` and `impact-api`.

pub mod catalog;
pub mod inquiry;
