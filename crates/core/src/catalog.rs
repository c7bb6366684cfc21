//! Static content catalog.
//!
//! Programs and testimonials are marketing-site content that changes only
//! with a deploy: there is no admin write path, so the catalog is seeded
//! once at startup and shared read-only for the lifetime of the process.

use serde::Serialize;

/// A training program offered on the website.
#[derive(Debug, Clone, Serialize)]
pub struct Program {
    /// Catalog-unique identifier (`p1`, `p2`, ...).
    pub id: &'static str,
    /// Free-form grouping label, matched case-insensitively when filtering.
    pub category: &'static str,
    pub name: &'static str,
    /// Free-text duration ("3 days", "6 weeks"), not a structured quantity.
    pub duration: &'static str,
    pub description: &'static str,
}

/// A client testimonial shown on the website.
#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    /// Optional photo reference; serialized as `null` when absent.
    pub photo: Option<&'static str>,
}

/// The full static catalog, seeded once at startup.
#[derive(Debug)]
pub struct Catalog {
    pub programs: Vec<Program>,
    pub testimonials: Vec<Testimonial>,
}

impl Catalog {
    /// Build the seeded catalog. Definition order here is the order every
    /// listing endpoint returns.
    pub fn seed() -> Self {
        let programs = vec![
            Program {
                id: "p1",
                category: "Technical",
                name: "Networking Essentials",
                duration: "3 days",
                description:
                    "Hands-on fundamentals of modern networks, security, and troubleshooting.",
            },
            Program {
                id: "p2",
                category: "Technical",
                name: "Introduction to AI",
                duration: "2 days",
                description:
                    "Practical AI concepts, prompting, and responsible implementation.",
            },
            Program {
                id: "p3",
                category: "Leadership",
                name: "Leading with Impact",
                duration: "2 days",
                description:
                    "Core leadership frameworks, influence and communication skills.",
            },
            Program {
                id: "p4",
                category: "Soft Skills",
                name: "High-Impact Communication",
                duration: "1 day",
                description: "Storytelling, presentation and stakeholder engagement.",
            },
            Program {
                id: "p5",
                category: "Corporate Programs",
                name: "Manager Accelerator",
                duration: "6 weeks",
                description: "Blended learning program to upskill first-time managers.",
            },
        ];

        let testimonials = vec![
            Testimonial {
                name: "Ama Boateng",
                role: "HR Director, FinServe",
                quote:
                    "Impact Avenue transformed our leadership bench. The facilitation was world-class.",
                photo: None,
            },
            Testimonial {
                name: "Kwesi Mensah",
                role: "IT Manager, TechHub",
                quote: "The technical training was practical and immediately applicable.",
                photo: None,
            },
            Testimonial {
                name: "Nana Adjei",
                role: "Founder, GrowthX",
                quote: "Our teams are communicating better than ever. Highly recommend.",
                photo: None,
            },
        ];

        Self {
            programs,
            testimonials,
        }
    }

    /// Programs whose category equals `category` under ASCII
    /// case-insensitive comparison, in catalog order.
    ///
    /// An unknown category yields an empty vec, not an error.
    pub fn programs_in_category(&self, category: &str) -> Vec<&Program> {
        self.programs
            .iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category))
            .collect()
    }
}
