//! Landing page sections, top to bottom

mod cta;
mod features;
mod hero;

pub use cta::CtaSection;
pub use features::FeaturesSection;
pub use hero::HeroSection;
