use leptos::prelude::*;

use crate::core::content::{
    DEMO_HIGHLIGHTS, SCHEDULING_FALLBACK_HREF, SCHEDULING_URL, scheduling_url,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::lead_form::LeadForm;

/// Call to action: social proof, signup form, demo booking and testimonial
#[component]
pub fn CtaSection() -> impl IntoView {
    view! {
        <section id="signup" class="py-24 relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-primary/5 via-background to-accent/5" aria-hidden="true"></div>

            <div class="container mx-auto px-6 relative z-10">
                // Social proof
                <div class="text-center mb-16 landing-fade-in">
                    <div class="flex items-center justify-center gap-8 mb-8 text-muted-foreground">
                        <ProofItem icon=icons::STAR icon_class="h-5 w-5 text-yellow-500 fill-current" label="4.9/5 Rating" />
                        <ProofItem icon=icons::USERS icon_class="h-5 w-5 text-blue-500" label="500+ Companies" />
                        <ProofItem icon=icons::ZAP icon_class="h-5 w-5 text-green-500" label="50% Faster Hiring" />
                    </div>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="landing-slide-in-left">
                        <LeadForm />
                    </div>

                    <div class="landing-slide-in-right">
                        <DemoBooking />
                    </div>
                </div>

                <Testimonial />
            </div>
        </section>
    }
}

#[component]
fn ProofItem(icon: &'static str, icon_class: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <Icon name=icon class=icon_class />
            <span class="text-sm">{label}</span>
        </div>
    }
}

/// Card linking out to the external scheduling page, or to the signup
/// form when no scheduling page is configured
#[component]
fn DemoBooking() -> impl IntoView {
    let booking = scheduling_url(SCHEDULING_URL);
    let href = booking.unwrap_or(SCHEDULING_FALLBACK_HREF);
    let target = booking.map(|_| "_blank");
    let rel = booking.map(|_| "noopener noreferrer");

    view! {
        <div class="space-y-8">
            <div>
                <h3 class="text-3xl font-bold mb-4">"Want to See It in Action?"</h3>
                <p class="text-xl text-muted-foreground mb-6">
                    "Schedule a personalized demo and see how our AI agent can transform your hiring process in just 15 minutes."
                </p>
            </div>

            <div class="bg-gradient-to-r from-primary to-primary/80 rounded-2xl p-8 text-primary-foreground">
                <div class="flex items-center mb-6">
                    <Icon name=icons::CALENDAR class="h-8 w-8 mr-3" />
                    <div>
                        <h4 class="text-xl font-semibold">"Book Your Demo"</h4>
                        <p class="opacity-90">"Available slots this week"</p>
                    </div>
                </div>

                <ul class="space-y-4 mb-6">
                    {DEMO_HIGHLIGHTS
                        .into_iter()
                        .map(|item| view! {
                            <li class="flex items-center gap-2 bg-white/10 rounded-lg p-3">
                                <Icon name=icons::CHECK_CIRCLE class="h-4 w-4" />
                                <span>{item}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>

                <a
                    href=href
                    target=target
                    rel=rel
                    class="group w-full h-12 inline-flex items-center justify-center rounded-md bg-secondary text-secondary-foreground font-medium hover:bg-secondary/80 transition-colors"
                >
                    "Schedule Demo Call"
                    <Icon name=icons::CALENDAR class="ml-2 h-4 w-4 transition-transform group-hover:scale-110" />
                </a>
            </div>

            <div class="text-center">
                <p class="text-sm text-muted-foreground flex items-center justify-center gap-2">
                    <Icon name=icons::LOCK class="h-4 w-4" />
                    "Your data is secure and will never be shared"
                </p>
            </div>
        </div>
    }
}

#[component]
fn Testimonial() -> impl IntoView {
    view! {
        <div class="mt-16 text-center landing-fade-in">
            <div class="bg-card border rounded-xl p-6 max-w-2xl mx-auto">
                <div class="flex justify-center mb-4">
                    {(0..5)
                        .map(|_| view! { <Icon name=icons::STAR class="h-5 w-5 text-yellow-500 fill-current" /> })
                        .collect_view()}
                </div>
                <blockquote class="text-lg mb-4">
                    "\"Our AI HR agent reduced our time-to-hire by 60% and improved candidate quality significantly. It's like having a senior recruiter working 24/7.\""
                </blockquote>
                <cite class="text-sm text-muted-foreground">
                    "- Sarah Johnson, Head of Talent at TechCorp"
                </cite>
            </div>
        </div>
    }
}
