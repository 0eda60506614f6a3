use super::*;

#[test]
fn nav_links_point_at_page_anchors() {
    assert!(NAV_LINKS.iter().all(|link| link.href.starts_with('#')));
    assert_eq!(NAV_LINKS.first().map(|link| link.href), Some("#home"));
}

/// Location of a site-relative URL inside the `public/` assets directory.
fn public_asset(url: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../public")
        .join(url.trim_start_matches('/'))
}

#[test]
fn hobbies_have_local_reveal_images() {
    assert_eq!(HOBBIES.len(), 6);
    for hobby in HOBBIES {
        assert!(hobby.image_url.starts_with("/images/"), "{} has a remote image", hobby.title);
    }
}

#[test]
fn referenced_images_ship_with_the_site() {
    let urls = std::iter::once(HERO_IMAGE_URL).chain(HOBBIES.iter().map(|hobby| hobby.image_url));
    for url in urls {
        let path = public_asset(url);
        assert!(path.is_file(), "{url} is missing from public/ (looked for {})", path.display());
    }
}

#[test]
fn wide_hobbies_close_the_grid() {
    let wide = HOBBIES.iter().filter(|hobby| hobby.wide).count();
    assert_eq!(wide, 2);
    assert!(HOBBIES.iter().rev().take(wide).all(|hobby| hobby.wide));
}

#[test]
fn experience_entries_carry_all_colour_classes() {
    let palettes = ROLES
        .iter()
        .map(|role| role.colors)
        .chain(MILESTONES.iter().map(|milestone| milestone.colors));
    for colors in palettes {
        assert!(colors.background.starts_with("bg-"));
        assert!(colors.border.starts_with("border-"));
        assert!(colors.text.starts_with("text-"));
    }
}
