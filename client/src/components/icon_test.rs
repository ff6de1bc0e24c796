use super::*;

#[test]
fn all_lists_every_variant_once() {
    for (i, a) in Icon::ALL.iter().enumerate() {
        for (j, b) in Icon::ALL.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn labels_are_nonempty() {
    for icon in Icon::ALL {
        assert!(!icon.label().is_empty());
    }
}

#[test]
fn theme_icons_have_distinct_labels() {
    assert_ne!(Icon::Sun.label(), Icon::Moon.label());
}
