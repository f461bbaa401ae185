use optimize_images::batch::is_image_file;
use optimize_images::processing::plan_resize;
use optimize_images::prompt::is_affirmative;
use proptest::prelude::*;
use std::path::Path;

proptest! {
    #[test]
    fn within_bounds_never_resizes(
        width in 1u32..=2000u32,
        height in 1u32..=2000u32,
    ) {
        prop_assert!(plan_resize(width, height, 2000).is_none());
    }

    #[test]
    fn longer_side_lands_exactly_on_max(
        width in 1u32..=8000u32,
        height in 1u32..=8000u32,
        max_dimension in 100u32..=4000u32,
    ) {
        prop_assume!(width.max(height) > max_dimension);

        let plan = plan_resize(width, height, max_dimension).unwrap();
        prop_assert_eq!(plan.from, (width, height));
        prop_assert_eq!(plan.to.0.max(plan.to.1), max_dimension);
        prop_assert!(plan.to.0 >= 1 && plan.to.1 >= 1);
    }

    #[test]
    fn aspect_ratio_preserved_within_rounding(
        width in 1u32..=8000u32,
        height in 1u32..=8000u32,
        max_dimension in 100u32..=4000u32,
    ) {
        prop_assume!(width.max(height) > max_dimension);

        let plan = plan_resize(width, height, max_dimension).unwrap();
        let (to_w, to_h) = plan.to;

        // Each target dimension is off by at most 0.5px from the exact scale,
        // so the cross products differ by at most 0.5 * (width + height).
        let cross = (to_w as f64 * height as f64 - to_h as f64 * width as f64).abs();
        prop_assert!(cross <= 0.5 * (width + height) as f64 + 1.0);
    }

    #[test]
    fn resize_planning_is_idempotent(
        width in 1u32..=8000u32,
        height in 1u32..=8000u32,
        max_dimension in 100u32..=4000u32,
    ) {
        prop_assume!(width.max(height) > max_dimension);

        let plan = plan_resize(width, height, max_dimension).unwrap();
        // Re-running on the scaled dimensions must be a no-op.
        prop_assert!(plan_resize(plan.to.0, plan.to.1, max_dimension).is_none());
    }

    #[test]
    fn only_the_exact_yes_token_confirms(input in "[a-zA-Z]{0,5}") {
        prop_assert_eq!(is_affirmative(&input), input.eq_ignore_ascii_case("yes"));
    }

    #[test]
    fn image_extensions_recognized(
        extension in prop::sample::select(
            &["png", "jpg", "jpeg", "PNG", "JPG", "webp", "gif", "bmp", "txt", "pdf"],
        )
    ) {
        let filename = format!("photo.{}", extension);
        let expected = matches!(
            extension.to_lowercase().as_str(),
            "png" | "jpg" | "jpeg"
        );
        prop_assert_eq!(is_image_file(Path::new(&filename)), expected);
    }
}
