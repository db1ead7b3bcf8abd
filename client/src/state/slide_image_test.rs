use super::*;

fn gallery() -> Vec<SlideImage> {
    vec![
        SlideImage::new("/img/bolsos.jpg", "Bolsos"),
        SlideImage::new("/img/joyas.jpg", "Joyas"),
        SlideImage::new("/img/gafas.jpg", "Gafas"),
    ]
}

#[test]
fn load_error_swaps_in_placeholder() {
    let mut image = SlideImage::new("/img/missing.jpg", "Missing");
    assert!(image.on_load_error());
    assert_eq!(image.src, PLACEHOLDER_IMAGE);
    assert_eq!(image.alt, "Missing");
}

#[test]
fn repeated_load_errors_are_idempotent() {
    let mut image = SlideImage::new("/img/missing.jpg", "Missing");
    image.on_load_error();
    assert!(!image.on_load_error());
    assert!(image.is_placeholder());
}

#[test]
fn apply_load_error_only_touches_one_image() {
    let mut images = gallery();
    assert!(apply_load_error(&mut images, 1));
    assert_eq!(images[0].src, "/img/bolsos.jpg");
    assert_eq!(images[1].src, PLACEHOLDER_IMAGE);
    assert_eq!(images[2].src, "/img/gafas.jpg");
}

#[test]
fn apply_load_error_ignores_unknown_index() {
    let mut images = gallery();
    assert!(!apply_load_error(&mut images, 9));
    assert_eq!(images, gallery());
}
