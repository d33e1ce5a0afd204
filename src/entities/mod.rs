//! Entity type definitions
//!
//! Showroom keeps five collections:
//!
//! **Public showroom:**
//! - [`Vehicle`] - Inventory listings with category and availability
//! - [`Testimonial`] - Client quotes shown on the home page
//! - [`HeroMedia`] - Rotating landing-page slides
//!
//! **Back office:**
//! - [`Inquiry`] - General, walk-in and corporate requests
//! - [`PreOrder`] - Deposit-backed vehicle reservations

pub mod hero_media;
pub mod inquiry;
pub mod preorder;
pub mod testimonial;
pub mod vehicle;

pub use hero_media::{HeroMedia, MediaKind};
pub use inquiry::{Inquiry, InquiryKind, InquiryStatus};
pub use preorder::{PreOrder, PreOrderStatus};
pub use testimonial::Testimonial;
pub use vehicle::{Availability, NewVehicle, Vehicle, VehicleCategory};
