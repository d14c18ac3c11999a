use super::*;
use skeleton_animation::Highlight;
use skeleton_graphics::{Color, Palette};

const A: TemplateId = TemplateId(1);
const B: TemplateId = TemplateId(2);
const C: TemplateId = TemplateId(3);

#[test]
fn defaults_match_the_documented_values() {
    let config = PlaceholderConfig::default();
    assert_eq!(config.item_count, 10);
    assert_eq!(config.template, TemplateId::DEFAULT_ROW);
    assert!(config.templates.is_empty());
    assert!(config.frozen);

    let shimmer = &config.shimmer;
    assert!(shimmer.enabled);
    assert!(shimmer.colored);
    assert!(shimmer.auto_start);
    assert_eq!(shimmer.duration_millis, 1000);
    assert_eq!(shimmer.shape, Shape::Linear);
    assert_eq!(shimmer.direction, Direction::LeftToRight);
    assert!(shimmer.prebuilt.is_none());
}

#[test]
fn empty_template_list_means_single() {
    assert_eq!(RowSource::from_parts(A, &[]), RowSource::Single(A));
    assert_eq!(
        RowSource::from_parts(A, &[B, C]),
        RowSource::Multi(vec![B, C])
    );
}

#[test]
fn single_source_resolves_every_position_to_its_template() {
    let source = RowSource::Single(A);
    assert!((0..100).all(|position| source.resolve(position) == A));
    assert_eq!(source.templates(), &[A]);
}

#[test]
fn multi_source_cycles_by_position() {
    let source = RowSource::Multi(vec![A, B, C]);
    let resolved: Vec<_> = (0..7).map(|position| source.resolve(position)).collect();
    assert_eq!(resolved, vec![A, B, C, A, B, C, A]);
    assert_eq!(source.primary(), A);
}

#[test]
fn one_element_list_is_constant() {
    let source = RowSource::Multi(vec![B]);
    assert!((0..10).all(|position| source.resolve(position) == B));
}

#[test]
fn templates_list_wins_over_single_template() {
    let config = PlaceholderConfig {
        template: A,
        templates: vec![B, C],
        ..PlaceholderConfig::default()
    };
    assert_eq!(config.row_source(), RowSource::Multi(vec![B, C]));
}

#[test]
fn colored_shimmer_resolves_colors_through_the_resolver() {
    let red = Color::from_rgb_u8(255, 0, 0);
    let palette = Palette::new().with_named("accent", red);
    let options = ShimmerOptions {
        highlight_color: ColorRef::named("accent"),
        duration_millis: 1500,
        direction: Direction::TopToBottom,
        ..ShimmerOptions::default()
    };

    let shimmer = options.generate_shimmer(&palette);
    assert_eq!(
        shimmer.highlight,
        Highlight::Colored {
            base: Color::SHIMMER_BASE,
            highlight: red,
        }
    );
    assert_eq!(shimmer.duration_millis, 1500);
    assert_eq!(shimmer.direction, Direction::TopToBottom);
    assert!(shimmer.auto_start);
}

#[test]
fn uncolored_shimmer_uses_alpha_highlight() {
    let options = ShimmerOptions {
        colored: false,
        auto_start: false,
        shape: Shape::Radial,
        ..ShimmerOptions::default()
    };
    let shimmer = options.generate_shimmer(&Palette::default());
    assert!(!shimmer.highlight.is_colored());
    assert!(!shimmer.auto_start);
    assert_eq!(shimmer.shape, Shape::Radial);
}

#[test]
fn prebuilt_shimmer_overrides_individual_settings() {
    let prebuilt = ShimmerBuilder::alpha().duration_millis(300).build();
    let options = ShimmerOptions {
        duration_millis: 5000,
        prebuilt: Some(prebuilt),
        ..ShimmerOptions::default()
    };
    assert_eq!(options.generate_shimmer(&Palette::default()), prebuilt);
}
