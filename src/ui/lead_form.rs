//! Signup form for the free trial
//!
//! Collects a [`LeadRecord`] field by field, validates it on submit and
//! posts it to `/api/leads`. The submit button stays disabled while a
//! request is in flight; after success the form is replaced by a
//! confirmation view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{LeadError, LeadField, LeadRecord, Notification, SubmissionFlow};
use crate::ui::common::{FormInput, SubmitButton};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;

/// Server endpoint that stores leads
pub const LEADS_ENDPOINT: &str = "/api/leads";

/// Send a lead to the server. Any transport error or non-2xx status is a
/// `SubmissionFailure`; details only go to the console.
#[cfg(not(feature = "ssr"))]
pub async fn submit_lead(lead: &LeadRecord) -> Result<(), LeadError> {
    use crate::core::SUBMIT_TIMEOUT_MS;
    use futures::future::{Either, select};
    use gloo_net::http::Request;
    use gloo_timers::future::TimeoutFuture;
    use leptos::logging::warn;

    let request = Request::post(LEADS_ENDPOINT).json(lead).map_err(|e| {
        warn!("Failed to encode lead: {}", e);
        LeadError::SubmissionFailure
    })?;

    // Unanswered requests fail so the form returns to editing
    let send = Box::pin(request.send());
    let deadline = Box::pin(TimeoutFuture::new(SUBMIT_TIMEOUT_MS));
    let response = match select(send, deadline).await {
        Either::Left((result, _)) => result.map_err(|e| {
            warn!("Lead request failed: {}", e);
            LeadError::SubmissionFailure
        })?,
        Either::Right(_) => {
            warn!("Lead request timed out after {} ms", SUBMIT_TIMEOUT_MS);
            return Err(LeadError::SubmissionFailure);
        }
    };

    if response.ok() {
        Ok(())
    } else {
        warn!("Lead request rejected with status {}", response.status());
        Err(LeadError::SubmissionFailure)
    }
}

#[cfg(feature = "ssr")]
pub async fn submit_lead(_lead: &LeadRecord) -> Result<(), LeadError> {
    Err(LeadError::SubmissionFailure)
}

/// Free-trial signup form
#[component]
pub fn LeadForm() -> impl IntoView {
    let notifications = use_notifications();
    let flow = RwSignal::new(SubmissionFlow::new());

    let submitting = Signal::derive(move || flow.with(SubmissionFlow::is_submitting));
    let submitted = move || flow.with(SubmissionFlow::is_submitted);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut attempt = Ok(None);
        flow.update(|f| attempt = f.begin_submit());

        match attempt {
            // Already in flight or done
            Ok(None) => {}
            Err(err) => notifications.notify(Notification::from(&err)),
            Ok(Some(lead)) => spawn_local(async move {
                let result = submit_lead(&lead).await;
                match &result {
                    Ok(()) => notifications.notify(Notification::lead_captured()),
                    Err(err) => notifications.notify(Notification::from(err)),
                }
                flow.update(|f| f.finish(result));
            }),
        }
    };

    let field_input = move |field: LeadField| {
        let value = Signal::derive(move || flow.with(|f| f.record().get(field).to_string()));
        let on_input = Callback::new(move |input: String| flow.update(|f| f.update(field, input)));

        view! {
            <FormInput
                name=field.column()
                input_type=field.input_type()
                placeholder=field.placeholder()
                autocomplete=field.autocomplete()
                value=value
                on_input=on_input
            />
        }
    };

    view! {
        <div class="bg-card border rounded-2xl p-8 shadow-xl">
            <Show
                when=move || !submitted()
                fallback=|| view! { <SignupConfirmation /> }
            >
                <div class="text-center mb-8">
                    <h3 class="text-3xl font-bold mb-4">"Start Your Free Trial"</h3>
                    <p class="text-muted-foreground">
                        "Get instant access to our AI HR agent. No credit card required."
                    </p>
                </div>

                <form on:submit=on_submit class="space-y-4" novalidate=true>
                    <div class="grid md:grid-cols-2 gap-4">
                        {field_input(LeadField::FirstName)}
                        {field_input(LeadField::LastName)}
                    </div>
                    {field_input(LeadField::Email)}
                    {field_input(LeadField::CompanyName)}
                    <SubmitButton
                        text="Start Free Trial"
                        loading_text="Submitting..."
                        loading=submitting
                    />
                </form>

                <div class="mt-6 text-center">
                    <p class="text-xs text-muted-foreground">
                        "By signing up, you agree to our "
                        <a href="#" class="text-primary hover:underline">"Terms of Service"</a>
                        " and "
                        <a href="#" class="text-primary hover:underline">"Privacy Policy"</a>
                    </p>
                </div>
            </Show>
        </div>
    }
}

/// Shown in place of the form once the lead is stored
#[component]
fn SignupConfirmation() -> impl IntoView {
    view! {
        <div class="text-center py-12 landing-scale-in">
            <div class="w-16 h-16 mx-auto mb-6 rounded-full bg-green-500/10 flex items-center justify-center">
                <Icon name=icons::CHECK class="w-8 h-8 text-green-500" />
            </div>
            <h3 class="text-2xl font-bold mb-2">"You're on the list!"</h3>
            <p class="text-muted-foreground">
                "Check your inbox. We'll reach out within one business day to get your AI agent running."
            </p>
        </div>
    }
}
