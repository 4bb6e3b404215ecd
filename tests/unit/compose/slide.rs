use super::*;

/// Every char advances `size_px / 2`.
struct Mono;

impl TextMeasure for Mono {
    fn advance(&mut self, _face: FaceKind, size_px: f32, text: &str) -> f32 {
        text.chars().count() as f32 * size_px / 2.0
    }
}

fn input<'a>(index: usize, title: &'a str, keywords: &'a [String]) -> SlideInput<'a> {
    SlideInput {
        index,
        total: 8,
        title,
        subtitle: Some("Start today"),
        keywords,
        branding: "@test",
    }
}

fn solid() -> Background {
    Background::Solid(Rgb8::new(10, 20, 30))
}

#[test]
fn arrow_on_every_slide_but_the_last() {
    let config = CarouselConfig::default();
    let keywords = vec!["growth".to_owned()];
    let titles = ["Boost Your Growth", "", "A much longer title that has to wrap twice at least"];

    for title in titles {
        for index in 1..=8 {
            let plan =
                compose_slide(input(index, title, &keywords), &solid(), &config, &mut Mono)
                    .unwrap();
            assert_eq!(plan.has_arrow(), index < 8, "slide {index} title {title:?}");
        }
    }
}

#[test]
fn arrow_uses_accent_and_fixed_origin() {
    let config = CarouselConfig::default();
    let plan = compose_slide(input(3, "Hi", &[]), &solid(), &config, &mut Mono).unwrap();
    let arrow = plan.ops_with_role(OpRole::Arrow).next().unwrap();
    assert_eq!(arrow.text, "\u{2192}");
    assert_eq!(arrow.color, config.palette.accent);
    assert_eq!((arrow.x, arrow.y), (980.0, 1250.0));
    assert_eq!(arrow.face, FaceKind::Bold);
    assert_eq!(arrow.size_px, 45.0);
}

#[test]
fn index_label_counts_slides() {
    let config = CarouselConfig::default();
    let plan = compose_slide(input(5, "Hi", &[]), &solid(), &config, &mut Mono).unwrap();
    let label = plan.ops_with_role(OpRole::Index).next().unwrap();
    assert_eq!(label.text, "5/8");
    assert_eq!((label.x, label.y), (950.0, 60.0));
    assert_eq!(label.color, Rgb8::new(150, 150, 150));
}

#[test]
fn last_slide_uses_closing_title_size() {
    let config = CarouselConfig::default();
    let first = compose_slide(input(1, "Hello", &[]), &solid(), &config, &mut Mono).unwrap();
    let last = compose_slide(input(8, "Hello", &[]), &solid(), &config, &mut Mono).unwrap();
    let size = |p: &SlidePlan| p.ops_with_role(OpRole::Title).next().unwrap().size_px;
    assert_eq!(size(&first), 70.0);
    assert_eq!(size(&last), 60.0);
}

#[test]
fn title_keywords_are_highlighted() {
    let config = CarouselConfig::default();
    let keywords = vec!["growth".to_owned()];
    let plan = compose_slide(
        input(1, "Boost Your Growth,", &keywords),
        &solid(),
        &config,
        &mut Mono,
    )
    .unwrap();
    let colors: Vec<Rgb8> = plan.ops_with_role(OpRole::Title).map(|op| op.color).collect();
    assert_eq!(
        colors,
        vec![config.palette.title, config.palette.title, config.palette.accent]
    );
}

#[test]
fn subtitle_starts_below_title_and_is_never_highlighted() {
    let config = CarouselConfig::default();
    let keywords = vec!["today".to_owned()];
    let plan = compose_slide(input(2, "One line", &keywords), &solid(), &config, &mut Mono)
        .unwrap();

    let title_y = plan.ops_with_role(OpRole::Title).next().unwrap().y;
    assert_eq!(title_y, 500.0);

    let subs: Vec<&DrawOp> = plan.ops_with_role(OpRole::Subtitle).collect();
    assert_eq!(subs.len(), 2);
    // One title line at 70px: 500 + 70 * 1.3, then the 60px gap.
    let expected = 500.0 + 70.0 * 1.3 + 60.0;
    assert!((subs[0].y - expected).abs() < 1e-3);
    assert!(subs.iter().all(|op| op.color == config.palette.subtitle));
}

#[test]
fn empty_subtitle_is_skipped() {
    let config = CarouselConfig::default();
    let mut slide = input(1, "Title", &[]);
    slide.subtitle = Some("");
    let plan = compose_slide(slide, &solid(), &config, &mut Mono).unwrap();
    assert_eq!(plan.ops_with_role(OpRole::Subtitle).count(), 0);

    slide.subtitle = None;
    let plan = compose_slide(slide, &solid(), &config, &mut Mono).unwrap();
    assert_eq!(plan.ops_with_role(OpRole::Subtitle).count(), 0);
}

#[test]
fn footer_is_centered() {
    let config = CarouselConfig::default();
    let plan = compose_slide(input(1, "T", &[]), &solid(), &config, &mut Mono).unwrap();
    let footer = plan.ops_with_role(OpRole::Footer).next().unwrap();
    // "@test" at 28px is 5 * 14 = 70px wide.
    assert!((footer.x - (1080.0 - 70.0) / 2.0).abs() < 1e-3);
    assert_eq!(footer.y, 1260.0);
    assert_eq!(footer.text, "@test");
}

#[test]
fn out_of_range_index_is_rejected() {
    let config = CarouselConfig::default();
    for index in [0, 9] {
        let res = compose_slide(input(index, "T", &[]), &solid(), &config, &mut Mono);
        assert!(matches!(res, Err(CarouselError::Validation(_))));
    }
}
