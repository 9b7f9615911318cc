//! Feature showcase
//!
//! Cards appear one at a time, driven by an interval timer over a
//! [`RevealSchedule`]. The timer is dropped as soon as every card is
//! visible, and on unmount.

use leptos::prelude::*;

use crate::core::content::{ANALYSIS_SCORES, CANDIDATE_QUOTES, FEATURES, Feature};
use crate::core::reveal::{RevealSchedule, card_animation_delay_ms, progress_bar_delay_ms};
use crate::ui::icon::Icon;

#[component]
pub fn FeaturesSection() -> impl IntoView {
    let schedule = RwSignal::new(RevealSchedule::new(FEATURES.len()));

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::reveal::FEATURE_REVEAL_INTERVAL_MS;
        use gloo_timers::callback::Interval;

        let interval = StoredValue::new_local(None::<Interval>);

        // Start once after hydration
        Effect::new(move |_| {
            let handle = Interval::new(FEATURE_REVEAL_INTERVAL_MS, move || {
                schedule.update(|s| {
                    s.tick();
                });
            });
            interval.set_value(Some(handle));
        });

        // Stop firing once everything is shown
        Effect::new(move |_| {
            if schedule.with(RevealSchedule::is_complete) {
                interval.update_value(|i| {
                    i.take();
                });
            }
        });

        on_cleanup(move || {
            interval.update_value(|i| {
                i.take();
            });
        });
    }

    view! {
        <section class="py-12 sm:py-16 lg:py-24 bg-muted/30 px-4">
            <div class="container mx-auto px-4 sm:px-6">
                <div class="text-center mb-12 sm:mb-16 landing-fade-in">
                    <h2 class="text-2xl sm:text-3xl lg:text-5xl font-bold mb-4 sm:mb-6">
                        "Your AI Agent is"
                        <span class="block text-primary">"Always Working"</span>
                    </h2>
                    <p class="text-lg sm:text-xl text-muted-foreground max-w-3xl mx-auto px-4">
                        "Watch as our AI agent handles every aspect of initial candidate screening with precision, consistency, and 24/7 availability."
                    </p>
                </div>

                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6 sm:gap-8">
                    {FEATURES
                        .into_iter()
                        .enumerate()
                        .map(|(index, feature)| {
                            let visible = Signal::derive(move || schedule.with(|s| s.is_visible(index)));
                            view! { <FeatureCard index=index feature=feature visible=visible /> }
                        })
                        .collect_view()}
                </div>

                <AnalysisDemo />
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(index: usize, feature: Feature, visible: Signal<bool>) -> impl IntoView {
    let card_class = move || {
        if visible.get() {
            "relative group transition-all duration-500 landing-scale-in"
        } else {
            "relative group transition-all duration-500 opacity-0"
        }
    };
    let bar_style = move || {
        format!(
            "width: {}; transition-delay: {}ms;",
            if visible.get() { "100%" } else { "0%" },
            progress_bar_delay_ms(index)
        )
    };

    view! {
        <div
            class=card_class
            style=format!("animation-delay: {}ms;", card_animation_delay_ms(index))
        >
            <div class="bg-card border rounded-xl p-4 sm:p-6 h-full hover:shadow-lg transition-all duration-300 hover:border-primary/20">
                <div class="flex items-start space-x-3 sm:space-x-4">
                    <div class=format!("{} p-2 sm:p-3 bg-background rounded-lg flex-shrink-0", feature.accent.text_class())>
                        <Icon name=feature.icon class="h-5 w-5 sm:h-6 sm:w-6" />
                    </div>
                    <div class="flex-1 min-w-0">
                        <h3 class="text-base sm:text-lg font-semibold mb-2 group-hover:text-primary transition-colors">
                            {feature.title}
                        </h3>
                        <p class="text-muted-foreground text-sm leading-relaxed">
                            {feature.description}
                        </p>
                    </div>
                </div>

                // Progress indicator
                <div class="mt-3 sm:mt-4 w-full bg-muted rounded-full h-1">
                    <div
                        class=format!("h-1 rounded-full transition-all duration-1000 {}", feature.accent.bg_class())
                        style=bar_style
                    ></div>
                </div>
            </div>
        </div>
    }
}

/// Static "See It In Action" panel with candidate input and scores
#[component]
fn AnalysisDemo() -> impl IntoView {
    view! {
        <div class="mt-12 sm:mt-16 landing-fade-in">
            <div class="bg-card border rounded-2xl p-6 sm:p-8 max-w-4xl mx-auto">
                <div class="text-center mb-6 sm:mb-8">
                    <h3 class="text-xl sm:text-2xl font-bold mb-4">"See It In Action"</h3>
                    <p class="text-muted-foreground">
                        "Real-time demonstration of our AI agent processing a candidate interaction"
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-6 sm:gap-8">
                    <div class="space-y-4">
                        <h4 class="font-semibold text-base sm:text-lg">"Candidate Input"</h4>
                        <div class="bg-muted rounded-lg p-4 space-y-3">
                            {CANDIDATE_QUOTES
                                .into_iter()
                                .map(|quote| view! {
                                    <div class="bg-background rounded p-3 text-sm">{format!("\"{}\"", quote)}</div>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="space-y-4">
                        <h4 class="font-semibold text-base sm:text-lg">"AI Analysis"</h4>
                        <div class="space-y-2">
                            {ANALYSIS_SCORES
                                .into_iter()
                                .map(|score| view! {
                                    <div class="space-y-2">
                                        <div class="flex justify-between text-sm">
                                            <span>{score.label}</span>
                                            <span class="font-medium">{format!("{}%", score.value)}</span>
                                        </div>
                                        <div class="w-full bg-muted rounded-full h-2">
                                            <div
                                                class=format!("h-2 rounded-full {} transition-all duration-1000 delay-500", score.accent.bg_class())
                                                style=format!("width: {}%;", score.value)
                                            ></div>
                                        </div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
