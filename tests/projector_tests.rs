use scroll_core::constants::*;
use scroll_core::*;

#[test]
fn hero_endpoint_shows_only_the_hero() {
    let p = project(0.0, 3);
    assert_eq!(p.hero.opacity, 1.0);
    assert_eq!(p.hero.translate_y, 0.0);
    assert_eq!(p.work.opacity, 0.0);
    assert_eq!(p.work.translate_y, WORK_TRAVEL_PERCENT);
    assert_eq!(p.heading.opacity, 0.0);
    assert_eq!(p.items.len(), 3);
    for item in &p.items {
        assert_eq!(item.opacity, 0.0);
        assert_eq!(item.translate_y, ITEM_TRAVEL_PX);
    }
}

#[test]
fn work_endpoint_shows_only_the_work_screen() {
    let p = project(1.0, 3);
    assert_eq!(p.hero.opacity, 0.0);
    assert_eq!(p.hero.translate_y, -HERO_TRAVEL_VH);
    assert_eq!(p.work.opacity, 1.0);
    assert_eq!(p.work.translate_y, 0.0);
    assert_eq!(p.heading.opacity, 1.0);
    assert_eq!(p.heading.translate_y, 0.0);
    for item in &p.items {
        assert_eq!(item.opacity, 1.0);
        assert_eq!(item.translate_y, 0.0);
    }
}

#[test]
fn projection_is_a_pure_function_of_render() {
    for i in 0..=100 {
        let r = i as f64 / 100.0;
        assert_eq!(project(r, 5), project(r, 5));
        let p = project(r, 5);
        assert!((p.hero.opacity + p.work.opacity - 1.0).abs() < 1e-12);
    }
}

#[test]
fn out_of_range_render_is_clamped() {
    assert_eq!(project(1.7, 2), project(1.0, 2));
    assert_eq!(project(-0.4, 2), project(0.0, 2));
    assert_eq!(project(f64::NAN, 2), project(0.0, 2));
}

#[test]
fn items_reveal_in_stagger_order() {
    let r = 0.35;
    let p = project(r, 4);
    for pair in p.items.windows(2) {
        assert!(pair[0].opacity >= pair[1].opacity);
    }
    assert!(p.heading.opacity >= p.items[0].opacity);
    assert!((item_delay(1) - item_delay(0) - ITEM_STAGGER).abs() < 1e-12);
}

#[test]
fn reveal_progress_is_monotone_and_bounded() {
    let mut prev = 0.0;
    for i in 0..=200 {
        let r = i as f64 / 200.0;
        let p = reveal_progress(r, HEADING_DELAY);
        assert!((0.0..=1.0).contains(&p));
        assert!(p >= prev);
        prev = p;
    }
    assert_eq!(reveal_progress(HEADING_DELAY, HEADING_DELAY), 0.0);
}
