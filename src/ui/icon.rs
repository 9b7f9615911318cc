use leptos::prelude::*;

/// Stroke icon drawn inline on a 24x24 grid
#[component]
pub fn Icon(
    /// Icon name, one of [`icons`]
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <path d=icons::path(name) />
        </svg>
    }
}

/// Icon names used across the page
pub mod icons {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const AWARD: &str = "award";
    pub const BUILDING: &str = "building";
    pub const CALENDAR: &str = "calendar";
    pub const CHECK: &str = "check";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CLOCK: &str = "clock";
    pub const HELP_CIRCLE: &str = "help-circle";
    pub const LOADER: &str = "loader";
    pub const LOCK: &str = "lock";
    pub const MESSAGE_SQUARE: &str = "message-square";
    pub const PLAY: &str = "play";
    pub const SEARCH: &str = "search";
    pub const STAR: &str = "star";
    pub const USERS: &str = "users";
    pub const X: &str = "x";
    pub const ZAP: &str = "zap";

    /// SVG path data for an icon; unknown names draw nothing
    pub fn path(name: &str) -> &'static str {
        match name {
            ARROW_RIGHT => "M5 12h14M12 5l7 7-7 7",
            AWARD => "M12 15a7 7 0 1 0 0-14 7 7 0 0 0 0 14zM8.21 13.89L7 23l5-3 5 3-1.21-9.12",
            BUILDING => {
                "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18zM6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2M10 6h4M10 10h4M10 14h4M10 18h4"
            }
            CALENDAR => {
                "M8 2v4M16 2v4M3 10h18M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z"
            }
            CHECK => "M20 6L9 17l-5-5",
            CHECK_CIRCLE => "M22 11.08V12a10 10 0 1 1-5.93-9.14M22 4L12 14.01l-3-3",
            CHEVRON_RIGHT => "M9 18l6-6-6-6",
            CLOCK => "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 6v6l4 2",
            HELP_CIRCLE => {
                "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3M12 17h.01"
            }
            LOADER => "M21 12a9 9 0 1 1-6.22-8.56",
            LOCK => {
                "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2zM7 11V7a5 5 0 0 1 10 0v4"
            }
            MESSAGE_SQUARE => "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z",
            PLAY => "M6 3l14 9-14 9V3z",
            SEARCH => "M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16zM21 21l-4.35-4.35",
            STAR => {
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"
            }
            USERS => {
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75"
            }
            X => "M18 6L6 18M6 6l12 12",
            ZAP => "M13 2L3 14h9l-1 8 10-12h-9l1-8z",
            _ => "",
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::core::content::FEATURES;

        #[test]
        fn test_feature_icons_have_paths() {
            for feature in FEATURES {
                assert!(!path(feature.icon).is_empty(), "{}", feature.icon);
            }
        }

        #[test]
        fn test_unknown_icon_is_blank() {
            assert_eq!(path("does-not-exist"), "");
        }
    }
}
