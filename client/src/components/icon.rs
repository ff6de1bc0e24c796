//! Typed icon registry.
//!
//! Icons are a closed enumeration mapped exhaustively to inline SVG glyphs.
//! There is no string lookup: an icon that does not exist does not compile,
//! and every variant renders something.

use leptos::prelude::*;

/// Every icon the site can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Github,
    Mail,
    Linkedin,
    External,
    Chat,
    Close,
    Sun,
    Moon,
    Play,
    Document,
}

impl Icon {
    pub const ALL: [Self; 10] = [
        Self::Github,
        Self::Mail,
        Self::Linkedin,
        Self::External,
        Self::Chat,
        Self::Close,
        Self::Sun,
        Self::Moon,
        Self::Play,
        Self::Document,
    ];

    /// Accessible label for the glyph.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Mail => "Email",
            Self::Linkedin => "LinkedIn",
            Self::External => "External link",
            Self::Chat => "Chat",
            Self::Close => "Close",
            Self::Sun => "Light theme",
            Self::Moon => "Dark theme",
            Self::Play => "Play",
            Self::Document => "Document",
        }
    }
}

/// Render one icon as an inline SVG glyph.
#[component]
pub fn IconGlyph(icon: Icon) -> impl IntoView {
    let body = match icon {
        Icon::Github => view! {
            <path d="M10 2 C5.6 2 2 5.6 2 10 c0 3.5 2.3 6.5 5.5 7.6 0.4 0.1 0.5 -0.2 0.5 -0.4 v-1.4 c-2.2 0.5 -2.7 -1.1 -2.7 -1.1 -0.4 -0.9 -0.9 -1.2 -0.9 -1.2 -0.7 -0.5 0.1 -0.5 0.1 -0.5 0.8 0.1 1.2 0.8 1.2 0.8 0.7 1.3 1.9 0.9 2.4 0.7 0.1 -0.5 0.3 -0.9 0.5 -1.1 -1.8 -0.2 -3.6 -0.9 -3.6 -4 0 -0.9 0.3 -1.6 0.8 -2.2 -0.1 -0.2 -0.4 -1 0.1 -2.1 0 0 0.7 -0.2 2.2 0.8 a7.6 7.6 0 0 1 4 0 c1.5 -1 2.2 -0.8 2.2 -0.8 0.5 1.1 0.2 1.9 0.1 2.1 0.5 0.6 0.8 1.3 0.8 2.2 0 3.1 -1.8 3.8 -3.6 4 0.3 0.3 0.6 0.8 0.6 1.5 v2.2 c0 0.2 0.1 0.5 0.5 0.4 A8 8 0 0 0 18 10 c0 -4.4 -3.6 -8 -8 -8 Z"/>
        }
        .into_any(),
        Icon::Mail => view! {
            <rect x="2" y="4" width="16" height="12" rx="1"/>
            <path d="M2 5 L10 11 L18 5"/>
        }
        .into_any(),
        Icon::Linkedin => view! {
            <rect x="2" y="2" width="16" height="16" rx="2"/>
            <line x1="6" y1="8.5" x2="6" y2="14"/>
            <circle cx="6" cy="5.5" r="1"/>
            <path d="M9.5 14 V8.5 M9.5 10.5 c0 -1.2 1 -2 2.2 -2 s2.3 0.8 2.3 2.3 V14"/>
        }
        .into_any(),
        Icon::External => view! {
            <path d="M8 4 H4 V16 H16 V12"/>
            <path d="M11 3 H17 V9"/>
            <line x1="17" y1="3" x2="9" y2="11"/>
        }
        .into_any(),
        Icon::Chat => view! {
            <rect x="3" y="3" width="14" height="10" rx="1"/>
            <path d="M7 13 L7 17 L11 13"/>
        }
        .into_any(),
        Icon::Close => view! {
            <line x1="5" y1="5" x2="15" y2="15"/>
            <line x1="15" y1="5" x2="5" y2="15"/>
        }
        .into_any(),
        Icon::Sun => view! {
            <circle cx="10" cy="10" r="4"/>
            <path d="M10 2 V4 M10 16 V18 M2 10 H4 M16 10 H18 M4.3 4.3 L5.8 5.8 M14.2 14.2 L15.7 15.7 M15.7 4.3 L14.2 5.8 M5.8 14.2 L4.3 15.7"/>
        }
        .into_any(),
        Icon::Moon => view! {
            <path d="M16 12 A7 7 0 1 1 8 4 a5.5 5.5 0 0 0 8 8 Z"/>
        }
        .into_any(),
        Icon::Play => view! {
            <circle cx="10" cy="10" r="8"/>
            <path d="M8 6.5 L14 10 L8 13.5 Z"/>
        }
        .into_any(),
        Icon::Document => view! {
            <path d="M5 2 H12 L15 5 V18 H5 Z"/>
            <path d="M12 2 V5 H15"/>
            <line x1="7.5" y1="9" x2="12.5" y2="9"/>
            <line x1="7.5" y1="12" x2="12.5" y2="12"/>
        }
        .into_any(),
    };

    view! {
        <svg class="icon" viewBox="0 0 20 20" aria-label=icon.label() role="img">
            {body}
        </svg>
    }
}

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;
