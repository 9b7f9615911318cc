//! Static page content: feature cards, demo scores and external links.

// External links are read at build time so the server and WASM builds
// render identical markup.

/// Demo scheduling page (`HR_SCHEDULING_URL`), opened in a new tab
pub const SCHEDULING_URL: Option<&str> = option_env!("HR_SCHEDULING_URL");

/// Embed URL of the walkthrough video (`HR_DEMO_VIDEO_URL`), shown in the hero card
pub const DEMO_VIDEO_EMBED_URL: Option<&str> = option_env!("HR_DEMO_VIDEO_URL");

/// Where "Schedule Demo Call" goes without a scheduling page
pub const SCHEDULING_FALLBACK_HREF: &str = "#signup";

/// Scheduling link target, or `None` when no page is configured
pub fn scheduling_url(configured: Option<&'static str>) -> Option<&'static str> {
    configured.map(str::trim).filter(|url| !url.is_empty())
}

/// Autoplaying iframe source, or `None` when no video is configured
pub fn demo_video_src(configured: Option<&str>) -> Option<String> {
    let url = configured.map(str::trim).filter(|url| !url.is_empty())?;
    let separator = if url.contains('?') { '&' } else { '?' };
    Some(format!("{url}{separator}autoplay=1"))
}

/// Accent colour of a feature card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Green,
    Blue,
    Purple,
    Orange,
    Pink,
    Indigo,
}

impl Accent {
    pub fn text_class(&self) -> &'static str {
        match self {
            Accent::Green => "text-green-500",
            Accent::Blue => "text-blue-500",
            Accent::Purple => "text-purple-500",
            Accent::Orange => "text-orange-500",
            Accent::Pink => "text-pink-500",
            Accent::Indigo => "text-indigo-500",
        }
    }

    pub fn bg_class(&self) -> &'static str {
        match self {
            Accent::Green => "bg-green-500",
            Accent::Blue => "bg-blue-500",
            Accent::Purple => "bg-purple-500",
            Accent::Orange => "bg-orange-500",
            Accent::Pink => "bg-pink-500",
            Accent::Indigo => "bg-indigo-500",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

/// Screening capabilities, in reveal order
pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "check-circle",
        title: "Confirm Basic Qualifications",
        description: "Automatically verify education, experience, and core requirements before human review.",
        accent: Accent::Green,
    },
    Feature {
        icon: "search",
        title: "Identify Interest and Fit",
        description: "Assess candidate motivation, culture alignment, and genuine interest in the role.",
        accent: Accent::Blue,
    },
    Feature {
        icon: "building",
        title: "Explain Role and Company",
        description: "Provide detailed information about position, team dynamics, and company culture.",
        accent: Accent::Purple,
    },
    Feature {
        icon: "clock",
        title: "Screen for Logistics",
        description: "Handle availability, salary expectations, location preferences, and start dates.",
        accent: Accent::Orange,
    },
    Feature {
        icon: "message-square",
        title: "Evaluate Communication",
        description: "Assess written and verbal communication skills through natural conversation.",
        accent: Accent::Pink,
    },
    Feature {
        icon: "award",
        title: "Rate Professionalism",
        description: "Evaluate professional demeanor, responsiveness, and overall candidate quality.",
        accent: Accent::Indigo,
    },
];

/// One bar of the simulated analysis panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalysisScore {
    pub label: &'static str,
    /// Percentage, 0..=100
    pub value: u8,
    pub accent: Accent,
}

pub const ANALYSIS_SCORES: [AnalysisScore; 3] = [
    AnalysisScore {
        label: "Qualifications Match",
        value: 95,
        accent: Accent::Green,
    },
    AnalysisScore {
        label: "Interest Level",
        value: 88,
        accent: Accent::Blue,
    },
    AnalysisScore {
        label: "Communication Score",
        value: 92,
        accent: Accent::Purple,
    },
];

pub const CANDIDATE_QUOTES: [&str; 2] = [
    "I have 5 years of React experience and I'm looking for a senior role...",
    "I'm available to start in 2 weeks and open to $120k salary range.",
];

pub const DEMO_HIGHLIGHTS: [&str; 3] = [
    "Live AI agent demonstration",
    "Custom use case discussion",
    "ROI calculation for your team",
];
