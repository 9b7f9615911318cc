//! Landing page component
//!
//! Composes the hero, feature showcase and call-to-action sections, plus
//! the meta tags and the keyframes the sections animate with.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::ui::sections::{CtaSection, FeaturesSection, HeroSection};

/// Landing page
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <main class="min-h-screen bg-background text-foreground overflow-x-hidden">
            <HeroSection />
            <FeaturesSection />
            <CtaSection />
        </main>

        <LandingStyles />
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="HR Digital Agent - AI Candidate Screening, 24/7" />

        <Meta name="description" content="An AI HR agent that screens candidates, evaluates fit, and identifies top talent around the clock. Start a free trial or book a demo." />
        <Meta name="keywords" content="AI recruiter, candidate screening, HR automation, hiring, talent acquisition" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Meet Your Next HR Digital Agent" />
        <Meta property="og:description" content="Transform your hiring process with an AI agent that screens candidates 24/7." />

        // Twitter
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content="Meet Your Next HR Digital Agent" />
    }
}

/// Keyframes for the section entrance animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            @keyframes landing-fade-in {
                from { opacity: 0; transform: translateY(10px); }
                to { opacity: 1; transform: translateY(0); }
            }

            @keyframes landing-slide-in-left {
                from { opacity: 0; transform: translateX(-30px); }
                to { opacity: 1; transform: translateX(0); }
            }

            @keyframes landing-slide-in-right {
                from { opacity: 0; transform: translateX(30px); }
                to { opacity: 1; transform: translateX(0); }
            }

            @keyframes landing-scale-in {
                from { opacity: 0; transform: scale(0.95); }
                to { opacity: 1; transform: scale(1); }
            }

            @keyframes landing-pulse-glow {
                0%, 100% { box-shadow: 0 0 0 0 rgba(59, 130, 246, 0.5); }
                50% { box-shadow: 0 0 20px 8px rgba(59, 130, 246, 0.25); }
            }

            .landing-fade-in { animation: landing-fade-in 0.6s ease-out both; }
            .landing-slide-in-left { animation: landing-slide-in-left 0.6s ease-out both; }
            .landing-slide-in-right { animation: landing-slide-in-right 0.6s ease-out both; }
            .landing-scale-in { animation: landing-scale-in 0.4s ease-out both; }
            .landing-pulse-glow { animation: landing-pulse-glow 2s ease-in-out infinite; }
            .landing-delay-500 { animation-delay: 0.5s; }
            "#
        </style>
    }
}
