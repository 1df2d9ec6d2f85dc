//! Sections of the landing page, in render order.

mod hero;
pub use hero::Hero;

mod services;
pub use services::ServicesSection;

mod courses;
pub use courses::CoursesSection;

mod archive_preview;
pub use archive_preview::ArchivePreview;

mod stats;
pub use stats::StatsSection;

mod partners;
pub use partners::PartnersSection;

mod team;
pub use team::TeamSection;

mod contact;
pub use contact::ContactSection;

mod footer;
pub use footer::SiteFooter;

mod modal;
pub use modal::CourseModal;
