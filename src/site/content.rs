//! Static copy for every page. All literals, no I/O.

use crate::site::page::Page;

pub const PRODUCT: &str = "Nomad";
pub const CURRENT_VERSION: &str = "1.0.4";
pub const COPYRIGHT: &str = "© 2024 Nomad Audio Inc.";

/// Icons used across the site. The `ui` layer picks a glyph for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Music,
    Cpu,
    Zap,
    Layers,
    Sliders,
    Terminal,
    Disc,
    Download,
    Check,
    Window,
    Shield,
    LifeBuoy,
    Search,
    Activity,
    ArrowLeft,
    ArrowRight,
    ChevronRight,
    Menu,
    Close,
}

pub struct NavLink {
    pub label: &'static str,
    pub page: Page,
}

pub static NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Features",
        page: Page::Features,
    },
    NavLink {
        label: "Docs",
        page: Page::Docs,
    },
    NavLink {
        label: "Pricing",
        page: Page::Pricing,
    },
    NavLink {
        label: "Changelog",
        page: Page::Changelog,
    },
];

pub const HERO_BADGE: &str = "Nomad v1.0.4 Stable is now live";
pub const HERO_TITLE: &str = "The DAW for those who";
pub const HERO_TITLE_ACCENT: &str = "live inside the audio.";
pub static HERO_COPY: [&str; 2] = [
    "Brutally optimized for speed and flow state.",
    "No bloat. Instant startup. Pure signal.",
];

pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES_HEADING: &str = "Engineered for";
pub const FEATURES_HEADING_ACCENT: &str = "Flow State";
pub const FEATURES_INTRO: &str = "We stripped away the clutter found in traditional DAWs. \
Nomad gives you exactly what you need to create, mix, and ship.";

pub static FEATURES: [Feature; 6] = [
    Feature {
        icon: Icon::Cpu,
        title: "Brutally Optimized",
        description: "Runs flawlessly on everything from a high-end Mac Studio to a \
5-year-old laptop. Zero latency engine written in Rust.",
    },
    Feature {
        icon: Icon::Zap,
        title: "Instant Startup",
        description: "Opens in under 800ms. No scanning for plugins on every launch. \
Get from desktop to recording in seconds.",
    },
    Feature {
        icon: Icon::Layers,
        title: "Sandboxed Plugins",
        description: "A single crashing VST will never take down your session again. \
Nomad isolates plugins so your work remains safe.",
    },
    Feature {
        icon: Icon::Sliders,
        title: "Unified Modulation",
        description: "Drag-and-drop LFOs and Envelopes onto ANY parameter. Third-party \
plugins, mixer faders, internal effects, everything is modulatable.",
    },
    Feature {
        icon: Icon::Terminal,
        title: "Scriptable API",
        description: "Build your own tools with Lua. The entire engine is exposed to \
developers who want to customize their workflow.",
    },
    Feature {
        icon: Icon::Disc,
        title: "Sampler Grade A",
        description: "A world-class sampler built directly into the timeline. \
Time-stretch, pitch-shift, and slice with surgical precision.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Stable,
    Beta,
}

pub struct Build {
    pub os: &'static str,
    pub arch: &'static str,
    pub version: &'static str,
    pub date: &'static str,
    pub channel: Channel,
}

pub const DOWNLOADS_TITLE: &str = "Downloads";
pub const DOWNLOADS_COPY: &str = "Select your platform. All builds include the full feature set.";

pub static BUILDS: [Build; 4] = [
    Build {
        os: "macOS",
        arch: "Apple Silicon",
        version: "1.0.4",
        date: "Oct 24",
        channel: Channel::Stable,
    },
    Build {
        os: "macOS",
        arch: "Intel",
        version: "1.0.4",
        date: "Oct 24",
        channel: Channel::Stable,
    },
    Build {
        os: "Windows",
        arch: "x64",
        version: "1.0.4",
        date: "Oct 24",
        channel: Channel::Stable,
    },
    Build {
        os: "Linux",
        arch: "Ubuntu/Debian",
        version: "1.1.0-beta",
        date: "Today",
        channel: Channel::Beta,
    },
];

pub struct Tier {
    pub name: &'static str,
    pub price: &'static str,
    pub blurb: &'static str,
    pub perks: &'static [&'static str],
    pub cta: &'static str,
    pub target: Page,
    pub recommended: bool,
}

pub const PRICING_TITLE: &str = "Simple, honest pricing";
pub const PRICING_COPY: &str = "Own your tools. No subscriptions. No hidden fees.";
pub const PRICING_CONTACT: &str = "Looking for educational or bulk pricing?";

pub static TIERS: [Tier; 2] = [
    Tier {
        name: "Nomad Evaluation",
        price: "$0",
        blurb: "Infinite trial period. WinRAR style.",
        perks: &[
            "Full feature set",
            "Unlimited tracks",
            "All native plugins",
            "Save & Export enabled",
            "Nag screen on startup",
        ],
        cta: "Download Trial",
        target: Page::Download,
        recommended: false,
    },
    Tier {
        name: "Nomad Studio",
        price: "$199",
        blurb: "Perpetual license. Lifetime updates.",
        perks: &[
            "Everything in Evaluation",
            "No startup nag screen",
            "Priority support",
            "Early access to Beta builds",
            "Support independent dev",
        ],
        cta: "Buy License",
        target: Page::Account,
        recommended: true,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    New,
    Fix,
    Perf,
    Change,
}

impl ChangeKind {
    pub fn tag(self) -> &'static str {
        match self {
            ChangeKind::New => "NEW",
            ChangeKind::Fix => "FIX",
            ChangeKind::Perf => "PERF",
            ChangeKind::Change => "CHANGE",
        }
    }
}

pub struct Change {
    pub kind: ChangeKind,
    pub text: &'static str,
}

pub struct Release {
    pub version: &'static str,
    pub date: &'static str,
    pub kind: &'static str,
    pub changes: &'static [Change],
}

pub const CHANGELOG_STATUS: &str = "All systems operational";

pub static RELEASES: [Release; 3] = [
    Release {
        version: "1.0.4",
        date: "Oct 24, 2024",
        kind: "Stable",
        changes: &[
            Change {
                kind: ChangeKind::Fix,
                text: "Fixed audio engine dropout on high buffer sizes (>2048 samples).",
            },
            Change {
                kind: ChangeKind::New,
                text: "Added 'Vintage Warmth' saturation module to the Mixer strip.",
            },
            Change {
                kind: ChangeKind::Perf,
                text: "Improved Piano Roll scrolling performance by 40% on 4K displays.",
            },
        ],
    },
    Release {
        version: "1.0.3",
        date: "Oct 10, 2024",
        kind: "Stable",
        changes: &[
            Change {
                kind: ChangeKind::New,
                text: "New Sampler interpolation modes (Sinc, Linear, Nearest).",
            },
            Change {
                kind: ChangeKind::Fix,
                text: "VST3 scanning is now multi-threaded (3x faster startup).",
            },
            Change {
                kind: ChangeKind::Change,
                text: "Moved 'Export' button to main toolbar for easier access.",
            },
        ],
    },
    Release {
        version: "1.0.0",
        date: "Sep 15, 2024",
        kind: "Major",
        changes: &[
            Change {
                kind: ChangeKind::New,
                text: "Initial public release.",
            },
            Change {
                kind: ChangeKind::New,
                text: "Complete Lua scripting API for custom tools.",
            },
        ],
    },
];

pub struct DocGroup {
    pub title: &'static str,
    pub topics: &'static [&'static str],
}

pub const DOCS_SEARCH_PLACEHOLDER: &str = "Search manual...";
pub const DOCS_CURRENT_TOPIC: &str = "Introduction";
pub const DOCS_BREADCRUMB: &str = "Getting Started / Introduction";
pub const DOCS_TITLE: &str = "Welcome to Nomad";

pub static DOC_GROUPS: [DocGroup; 2] = [
    DocGroup {
        title: "Getting Started",
        topics: &["Introduction", "Installation", "Audio Setup"],
    },
    DocGroup {
        title: "Core Concepts",
        topics: &[
            "The Timeline",
            "Mixer Routing",
            "Automation Clips",
            "Plugin Sandboxing",
        ],
    },
];

pub const DOCS_INTRO: &str = "Nomad is a digital audio workstation designed for speed, \
stability, and flow. Unlike other DAWs that try to be everything to everyone, Nomad \
focuses purely on the music creation process.";

pub const DOCS_TIP_TITLE: &str = "Quick Tip";
pub const DOCS_TIP: &str = "Press Cmd + K anywhere in the app to open the Command Palette. \
You can access every single feature of Nomad without lifting your hands from the keyboard.";

pub const DOCS_PHILOSOPHY_TITLE: &str = "Philosophy";
pub const DOCS_PHILOSOPHY: &str = "We believe that your tools should be invisible. When you \
are in the creative zone, you shouldn't be fighting with windows, waiting for plugins to \
scan, or dealing with crashes.";

pub static DOCS_PRINCIPLES: [(&str, &str); 3] = [
    ("Performance First:", "Every feature is benchmarked."),
    ("Crash Protection:", "Plugins run in separate processes."),
    (
        "Keyboard Centric:",
        "Mouse-free workflow is a first-class citizen.",
    ),
];

pub const DOCS_PREVIOUS: &str = "Previous: None";
pub const DOCS_NEXT: &str = "Next: Installation";

pub const DEEP_DIVE_TITLE: &str = "Deep Dive";
pub const DEEP_DIVE_COPY: &str = "Feature details coming soon.";

pub const NOT_FOUND: &str = "Page not found";

pub const FOOTER_BLURB: &str = "The DAW for people who actually live inside their music. \
Built by obsessed engineers for obsessed producers.";

pub struct FooterLink {
    pub label: &'static str,
    /// `None` for links the site shows but does not route anywhere.
    pub target: Option<Page>,
}

pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

pub static FOOTER_COLUMNS: [FooterColumn; 2] = [
    FooterColumn {
        title: "Product",
        links: &[
            FooterLink {
                label: "Features",
                target: Some(Page::Features),
            },
            FooterLink {
                label: "Pricing",
                target: Some(Page::Pricing),
            },
            FooterLink {
                label: "Changelog",
                target: Some(Page::Changelog),
            },
            FooterLink {
                label: "Download",
                target: Some(Page::Download),
            },
        ],
    },
    FooterColumn {
        title: "Resources",
        links: &[
            FooterLink {
                label: "Documentation",
                target: Some(Page::Docs),
            },
            FooterLink {
                label: "Community Forum",
                target: None,
            },
            FooterLink {
                label: "Developer SDK",
                target: None,
            },
            FooterLink {
                label: "Support",
                target: None,
            },
        ],
    },
];

pub const ACCOUNT_USER: &str = "John Doe";
pub const ACCOUNT_INITIALS: &str = "JD";
pub const ACCOUNT_PLAN: &str = "Pro Plan";
pub const LICENSE_KEY: &str = "XXXX-XXXX-XXXX-8921";
pub const LICENSE_EXPIRY: &str = "Expires Dec 2025";
pub const LATEST_BUILD_RELEASED: &str = "Released 2 days ago";

pub struct Installation {
    pub label: &'static str,
    pub version: &'static str,
    pub date: &'static str,
}

pub static INSTALLATIONS: [Installation; 3] = [
    Installation {
        label: "macOS Installer (Apple Silicon)",
        version: "v1.0.3",
        date: "Oct 24, 2024",
    },
    Installation {
        label: "macOS Installer (Apple Silicon)",
        version: "v1.0.2",
        date: "Oct 23, 2024",
    },
    Installation {
        label: "macOS Installer (Apple Silicon)",
        version: "v1.0.1",
        date: "Oct 22, 2024",
    },
];

pub const PLUGIN_SYNC_TITLE: &str = "Cloud Plugin Sync";
pub const PLUGIN_SYNC_COPY: &str =
    "Nomad will soon support syncing your VST favorites and presets across devices.";
pub const PLUGIN_SYNC_BADGE: &str = "Coming in v1.1";

pub const SUPPORT_TITLE: &str = "Open a Ticket";
pub const SUPPORT_PLACEHOLDER: &str = "Describe your issue...";
