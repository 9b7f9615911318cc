use leptos::prelude::*;

use crate::core::content::{DEMO_VIDEO_EMBED_URL, demo_video_src};
use crate::ui::icon::{Icon, icons};

/// Hero section: headline, calls to action and the demo video card
#[component]
pub fn HeroSection() -> impl IntoView {
    let (show_video, set_show_video) = signal(false);
    // None when no walkthrough video is configured for this build
    let video_src = demo_video_src(DEMO_VIDEO_EMBED_URL);
    let has_video = video_src.is_some();
    let play = has_video.then(|| Callback::new(move |_| set_show_video.set(true)));

    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden bg-gradient-to-br from-background via-background to-muted">
            // Background decoration
            <div class="absolute inset-0 overflow-hidden" aria-hidden="true">
                <div class="absolute -top-40 -right-40 w-80 h-80 bg-primary/20 rounded-full blur-3xl animate-pulse"></div>
                <div class="absolute -bottom-40 -left-40 w-80 h-80 bg-accent/20 rounded-full blur-3xl animate-pulse delay-1000"></div>
            </div>

            <div class="container mx-auto px-6 relative z-10">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="space-y-8 landing-slide-in-left">
                        <div class="space-y-4">
                            <div class="inline-flex items-center px-3 py-1 rounded-full bg-primary/10 text-primary text-sm font-medium">
                                "🤖 AI-Powered HR Revolution"
                            </div>
                            <h1 class="text-4xl lg:text-6xl font-bold leading-tight">
                                "Meet Your Next"
                                <span class="block text-primary">"HR Digital Agent"</span>
                            </h1>
                            <p class="text-xl text-muted-foreground leading-relaxed">
                                "Transform your hiring process with our AI agent that screens candidates, evaluates fit, and identifies top talent 24/7 - all while maintaining the human touch your candidates deserve."
                            </p>
                        </div>

                        <div class="flex flex-col sm:flex-row gap-4">
                            <a
                                href="#signup"
                                class="group inline-flex items-center justify-center h-11 px-8 rounded-md bg-primary text-primary-foreground font-medium hover:bg-primary/90 transition-colors"
                            >
                                "Get Started Free"
                                <Icon name=icons::CHEVRON_RIGHT class="ml-2 h-4 w-4 transition-transform group-hover:translate-x-1" />
                            </a>
                            <Show when=move || has_video>
                                <button
                                    type="button"
                                    class="group inline-flex items-center justify-center h-11 px-8 rounded-md border bg-background font-medium hover:bg-muted transition-colors"
                                    on:click=move |_| set_show_video.set(true)
                                >
                                    <Icon name=icons::PLAY class="mr-2 h-4 w-4" />
                                    "Watch Demo"
                                </button>
                            </Show>
                        </div>

                        <div class="flex items-center gap-6 text-sm text-muted-foreground">
                            <StatusDot color="bg-green-500" label="24/7 Active Screening" />
                            <StatusDot color="bg-blue-500" label="AI-Powered Insights" />
                        </div>
                    </div>

                    <div class="landing-slide-in-right">
                        <div class="relative">
                            <div class="absolute inset-0 bg-gradient-to-tr from-primary/20 to-accent/20 rounded-2xl blur-xl"></div>
                            <div class="relative bg-card border rounded-2xl p-6 shadow-2xl">
                                <div class="aspect-video bg-muted rounded-lg flex items-center justify-center relative overflow-hidden">
                                    <Show
                                        when=move || show_video.get()
                                        fallback=move || view! { <SimulatedConversation on_play=play /> }
                                    >
                                        <iframe
                                            class="absolute inset-0 w-full h-full"
                                            src=video_src.clone()
                                            title="HR Digital Agent demo"
                                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; picture-in-picture"
                                            allowfullscreen=true
                                        ></iframe>
                                    </Show>
                                </div>

                                <div class="mt-4 flex items-center justify-between text-sm text-muted-foreground">
                                    <span>"Live HR Agent Conversation"</span>
                                    <span class="flex items-center gap-1">
                                        <span class="w-2 h-2 bg-red-500 rounded-full animate-pulse"></span>
                                        "Recording"
                                    </span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatusDot(color: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <div class=format!("w-2 h-2 {} rounded-full animate-pulse", color)></div>
            <span>{label}</span>
        </div>
    }
}

/// Placeholder shown until the visitor starts the video. Without a
/// configured video the play control is not clickable.
#[component]
fn SimulatedConversation(on_play: Option<Callback<()>>) -> impl IntoView {
    view! {
        <div class="absolute inset-0 bg-gradient-to-br from-slate-900 to-slate-800"></div>
        <button
            type="button"
            class="relative z-10 text-center space-y-4 disabled:cursor-default"
            aria-label="Play demo video"
            disabled=on_play.is_none()
            on:click=move |_| {
                if let Some(on_play) = on_play {
                    on_play.run(());
                }
            }
        >
            <div class="w-16 h-16 bg-primary rounded-full flex items-center justify-center mx-auto landing-pulse-glow">
                <Icon name=icons::PLAY class="h-6 w-6 text-primary-foreground" />
            </div>
            <div class="space-y-2">
                <p class="text-white font-medium">"AI Agent Demo"</p>
                <p class="text-white/70 text-sm">"See it in action"</p>
            </div>
        </button>

        <div class="absolute bottom-4 left-4 right-4 space-y-2">
            <div class="bg-primary text-primary-foreground text-sm p-2 rounded-lg max-w-xs landing-fade-in">
                "Hi! I'm your AI HR assistant. Let's discuss this role."
            </div>
            <div class="bg-white text-slate-900 text-sm p-2 rounded-lg max-w-xs ml-auto landing-fade-in landing-delay-500">
                "I'm interested in learning more!"
            </div>
        </div>
    }
}
