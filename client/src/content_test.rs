use super::*;

use std::collections::HashSet;

#[test]
fn project_slugs_are_unique() {
    let projects = projects();
    let slugs: HashSet<_> = projects.iter().map(|p| p.slug).collect();
    assert_eq!(slugs.len(), projects.len());
}

#[test]
fn projects_have_copy_and_tags() {
    for project in projects() {
        assert!(!project.title.is_empty());
        assert!(!project.blurb.is_empty());
        assert!(!project.tags.is_empty());
    }
}

#[test]
fn project_links_are_https() {
    for project in projects() {
        for url in [project.repo_url, project.live_url].into_iter().flatten() {
            assert!(url.starts_with("https://"), "{url}");
        }
    }
}

#[test]
fn experience_is_reverse_chronological_and_nonempty() {
    let entries = experience();
    assert!(!entries.is_empty());
    assert!(entries[0].span.contains("present"));
    for entry in &entries {
        assert!(!entry.highlights.is_empty());
    }
}

#[test]
fn video_slugs_are_unique_and_embeds_are_https() {
    let videos = videos();
    let slugs: HashSet<_> = videos.iter().map(|v| v.slug).collect();
    assert_eq!(slugs.len(), videos.len());
    for video in &videos {
        assert!(video.embed_url.starts_with("https://"));
    }
}
