//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Tell the server to answer with 404 instead of 200
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found" />

        <div class="min-h-screen bg-background flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-muted rounded-full flex items-center justify-center">
                    <Icon name=icons::HELP_CIRCLE class="w-12 h-12 text-muted-foreground" />
                </div>

                <h1 class="text-6xl font-bold mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold mb-2">"Page Not Found"</h2>

                <p class="text-muted-foreground mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href="/"
                        attr:class="px-6 py-3 bg-primary hover:bg-primary/90 text-primary-foreground font-medium rounded-lg transition-colors"
                    >
                        "Go Home"
                    </A>
                    <a
                        href="/#signup"
                        class="px-6 py-3 border text-foreground hover:bg-muted font-medium rounded-lg transition-colors"
                    >
                        "Start Free Trial"
                    </a>
                </div>
            </div>
        </div>
    }
}
