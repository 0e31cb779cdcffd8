#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use test_case::test_case;

    use std::path::Path;

    use ccl::FIXTURE_SIZES_JSON;
    use ccl::ccl_driver::{CCLDriver, generate_sizes};
    use ccl::config::{CCLConfig, SizeSource};
    use ccl::io;
    use ccl::io::cloud_to_svg::cloud_to_svg;
    use ccl::io::output::CCLOutput;
    use tagcloud::LayouterConfig;
    use tagcloud::geometry::primitives::{Point, Size};
    use tagcloud::util::assertions;

    #[test_case(SizeSource::Fixture, 50; "fixture")]
    #[test_case(SizeSource::random(300), 300; "random")]
    fn driver_places_every_size(source: SizeSource, n_sizes: usize) {
        let config = CCLConfig {
            size_source: source,
            ..CCLConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(0);
        let sizes = generate_sizes(&config.size_source, &mut rng).unwrap();
        assert_eq!(sizes.len(), n_sizes);

        let (cloud, stats) = CCLDriver::new(config).unwrap().run(&sizes).unwrap();

        assert_eq!(cloud.sizes(), sizes);
        assert!(assertions::no_overlap(&cloud.rects));
        assert_eq!(stats.n_rects, n_sizes);
        assert!(stats.density >= 0.5, "density: {}", stats.density);
        assert!(stats.center_offset <= 60.0);
    }

    #[test]
    fn seeded_random_source_is_reproducible() {
        let source = SizeSource::random(100);
        let a = generate_sizes(&source, &mut SmallRng::seed_from_u64(9)).unwrap();
        let b = generate_sizes(&source, &mut SmallRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unplaceable_size_reports_its_index() {
        let sizes = [Size::new(10, 10), Size::new(0, 10)];
        let mut driver = CCLDriver::new(CCLConfig::default()).unwrap();
        let err = driver.run(&sizes).unwrap_err();
        assert!(format!("{err:#}").contains("failed to place tag #1"));
        assert_eq!(driver.layouter.n_placed(), 1);
    }

    #[test]
    fn invalid_layouter_config_is_rejected() {
        let config = CCLConfig {
            layouter_config: LayouterConfig {
                angle_step: -0.01,
                ..LayouterConfig::default()
            },
            ..CCLConfig::default()
        };
        assert!(CCLDriver::new(config).is_err());
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: CCLConfig = serde_json::from_str(
            r##"{
                "center": [10, 3],
                "size_source": { "type": "random", "n_sizes": 20, "min_width": 5, "max_width": 9, "min_height": 2, "max_height": 4 },
                "prng_seed": 7,
                "svg_draw_options": { "background": "#FFFFFF", "label": false }
            }"##,
        )
        .unwrap();

        assert_eq!(config.center, Point(10, 3));
        assert_eq!(config.prng_seed, Some(7));
        assert_eq!(config.layouter_config, LayouterConfig::default());
        assert!(!config.svg_draw_options.label);
        assert!(config.svg_draw_options.random_stroke_colors);
        assert_eq!(config.svg_draw_options.background.to_string(), "#FFFFFF");

        let sizes = generate_sizes(&config.size_source, &mut SmallRng::seed_from_u64(7)).unwrap();
        assert_eq!(sizes.len(), 20);
        assert!(sizes.iter().all(|s| (5..9).contains(&s.width) && (2..4).contains(&s.height)));
    }

    #[test]
    fn sizes_files_are_read_outside_the_size_source() {
        // files are passed with --sizes-file, not through the config
        assert!(serde_json::from_str::<SizeSource>(r#"{ "type": "file" }"#).is_err());

        let from_file = io::read_sizes(Path::new("../assets/fixture_sizes.json")).unwrap();
        let embedded: Vec<Size> = serde_json::from_str(FIXTURE_SIZES_JSON).unwrap();
        let generated = generate_sizes(&SizeSource::Fixture, &mut SmallRng::seed_from_u64(0)).unwrap();
        assert_eq!(from_file, embedded);
        assert_eq!(generated, embedded);
    }

    #[test]
    fn output_contains_cloud_and_renders() {
        let config = CCLConfig::default();
        let sizes = generate_sizes(&config.size_source, &mut SmallRng::seed_from_u64(0)).unwrap();
        let (cloud, stats) = CCLDriver::new(config).unwrap().run(&sizes).unwrap();

        let svg = cloud_to_svg(
            &cloud,
            config.svg_draw_options,
            &mut SmallRng::seed_from_u64(0),
            "fixture",
        )
        .to_string();
        assert_eq!(svg.matches("<rect").count(), sizes.len() + 1);

        let output = CCLOutput {
            config,
            cloud,
            stats,
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["stats"]["n_rects"], 50);
        assert_eq!(json["cloud"]["rects"].as_array().unwrap().len(), 50);
        assert_eq!(json["cloud"]["rects"][0]["origin"], serde_json::json!([-342, -38]));
    }
}
