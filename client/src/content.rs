//! Static site content: projects, experience, and videos.
//!
//! Everything here is compiled into the bundle. Structured data keeps the
//! page components free of copy and makes the catalog testable.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// One entry in the project gallery.
#[derive(Clone, Debug)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub tags: &'static [&'static str],
    pub repo_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
}

/// One entry in the resume's experience section.
#[derive(Clone, Debug)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub span: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
}

/// One entry in the video gallery.
#[derive(Clone, Debug)]
pub struct VideoEmbed {
    pub slug: &'static str,
    pub title: &'static str,
    pub embed_url: &'static str,
    pub note: &'static str,
}

#[must_use]
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            slug: "atrium",
            title: "Atrium",
            blurb: "This site: a Leptos + axum portfolio with a live chat widget that \
                    stays out of the initial render path.",
            tags: &["rust", "leptos", "axum", "websockets"],
            repo_url: Some("https://github.com/iriscalder/atrium"),
            live_url: Some("https://iriscalder.dev"),
        },
        Project {
            slug: "ledgerbird",
            title: "Ledgerbird",
            blurb: "Plain-text accounting importer that reconciles bank exports against \
                    a double-entry journal and flags drift.",
            tags: &["rust", "cli", "parsing"],
            repo_url: Some("https://github.com/iriscalder/ledgerbird"),
            live_url: None,
        },
        Project {
            slug: "driftwatch",
            title: "Driftwatch",
            blurb: "Uptime and latency probe that graphs percentile drift across \
                    regions, with a tiny embedded status page.",
            tags: &["rust", "tokio", "monitoring"],
            repo_url: Some("https://github.com/iriscalder/driftwatch"),
            live_url: Some("https://status.iriscalder.dev"),
        },
        Project {
            slug: "quartzpress",
            title: "Quartzpress",
            blurb: "Static site generator with incremental rebuilds; powers a handful \
                    of small community newsletters.",
            tags: &["rust", "markdown", "ssg"],
            repo_url: Some("https://github.com/iriscalder/quartzpress"),
            live_url: None,
        },
        Project {
            slug: "hallway",
            title: "Hallway",
            blurb: "Self-hosted shared whiteboard weekend build — realtime cursors \
                    over a websocket frame relay.",
            tags: &["rust", "websockets", "canvas"],
            repo_url: Some("https://github.com/iriscalder/hallway"),
            live_url: None,
        },
    ]
}

#[must_use]
pub fn experience() -> Vec<Experience> {
    vec![
        Experience {
            role: "Senior Software Engineer",
            company: "Fernworks",
            span: "2022 — present",
            summary: "Platform team for a logistics SaaS; owner of the realtime \
                      tracking pipeline.",
            highlights: &[
                "Moved fleet telemetry ingestion from polling to a websocket fan-out, \
                 cutting median update latency from 9s to 400ms.",
                "Led the migration of three services from Node to Rust with zero \
                 customer-visible downtime.",
                "On-call captain; wrote the team's incident playbooks.",
            ],
        },
        Experience {
            role: "Software Engineer",
            company: "Copper & Pine",
            span: "2019 — 2022",
            summary: "Full-stack product work on a booking platform for independent \
                      workshops.",
            highlights: &[
                "Built the availability search that became the top conversion path.",
                "Introduced contract tests between the SPA and the API gateway.",
            ],
        },
        Experience {
            role: "Junior Developer",
            company: "Bright Harbor Studio",
            span: "2017 — 2019",
            summary: "Agency work: marketing sites, small commerce builds, and the \
                      occasional rescue project.",
            highlights: &[
                "Shipped 14 client sites; kept every one under a 2s first paint.",
            ],
        },
    ]
}

#[must_use]
pub fn videos() -> Vec<VideoEmbed> {
    vec![
        VideoEmbed {
            slug: "rustconf-fan-out",
            title: "Fan-out Without Fallover",
            embed_url: "https://www.youtube-nocookie.com/embed/q2v8PqJ3c1E",
            note: "Conference talk on backpressure in websocket broadcast trees.",
        },
        VideoEmbed {
            slug: "meetup-leptos",
            title: "A React Dev Tries Leptos",
            embed_url: "https://www.youtube-nocookie.com/embed/Jr0zS4X9F7g",
            note: "Local meetup: porting a CRA portfolio to signals and WASM.",
        },
        VideoEmbed {
            slug: "podcast-oncall",
            title: "On-call Without Dread",
            embed_url: "https://www.youtube-nocookie.com/embed/kXhJ3h4r1Pq",
            note: "Podcast episode on humane incident rotations.",
        },
    ]
}
