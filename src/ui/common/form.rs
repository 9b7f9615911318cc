use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Text input bound to a value signal
#[component]
pub fn FormInput(
    /// Input name and id
    name: &'static str,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text, also used as the accessible label
    placeholder: &'static str,
    /// Browser autofill hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            id=name
            name=name
            autocomplete=autocomplete
            placeholder=placeholder
            aria-label=placeholder
            class="w-full h-11 px-3 rounded-md border bg-background text-sm
                   transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-primary/20"
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

/// Full-width submit button with a spinner while `loading`
#[component]
pub fn SubmitButton(
    /// Button text when idle
    text: &'static str,
    /// Button text while loading
    loading_text: &'static str,
    /// Loading state; also disables the button
    loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="group w-full h-12 inline-flex items-center justify-center rounded-md
                   bg-primary text-primary-foreground font-medium
                   hover:bg-primary/90 transition-colors
                   disabled:opacity-50 disabled:cursor-not-allowed"
            disabled=move || loading.get()
        >
            {move || {
                if loading.get() {
                    view! {
                        <span class="flex items-center justify-center">
                            <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4" />
                            {loading_text}
                        </span>
                    }.into_any()
                } else {
                    view! {
                        <span class="flex items-center justify-center">
                            {text}
                            <Icon name=icons::ARROW_RIGHT class="ml-2 h-4 w-4 transition-transform group-hover:translate-x-1" />
                        </span>
                    }.into_any()
                }
            }}
        </button>
    }
}
