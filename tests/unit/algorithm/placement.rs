//! Tests for spaced coordinate search and block-aware line routing

#[cfg(test)]
mod tests {
    use mondrian::algorithm::config::{BlockEdge, LineSchedule, LineScope, RouteStyle};
    use mondrian::algorithm::placement::{
        PlacementExtent, blocks_on_cut, find_spaced_coordinate, place_line, route_around,
    };
    use mondrian::geometry::line::{Line, Orientation};
    use mondrian::geometry::rectangle::Rectangle;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const EXTENT: PlacementExtent = PlacementExtent {
        across: 600.0,
        along: 800.0,
    };

    fn schedule(route_probability: f64, route: RouteStyle) -> LineSchedule {
        LineSchedule {
            period: 90,
            phase: 30,
            cap_scope: LineScope::Horizontal,
            cap: 5,
            cap_jitter: 0,
            spacing: None,
            route_probability,
            route,
            block_edge: BlockEdge::Inclusive,
        }
    }

    // Covers every coordinate on the canvas
    fn tall_block() -> Rectangle {
        Rectangle::new(100.0, 0.0, 50.0, 2000.0).with_color([8, 53, 112, 255])
    }

    // Tests that unspaced search accepts the first draw within range
    // Verified by drawing from [0, 2 * extent)
    #[test]
    fn test_unspaced_coordinate_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let c = find_spaced_coordinate(&mut rng, 600.0, &[10.0, 20.0], None, 1);
            assert!(c.is_some_and(|c| (0.0..600.0).contains(&c)));
        }
    }

    // Tests that accepted coordinates keep their distance from existing cuts
    // Verified by using inclusive distance comparison with a zero threshold
    #[test]
    fn test_spaced_coordinate_respects_spacing() {
        let existing = [100.0, 400.0, 650.0];
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let c = find_spaced_coordinate(&mut rng, 800.0, &existing, Some(40.0), 100);
            let Some(c) = c else {
                continue;
            };
            assert!(existing.iter().all(|e| (e - c).abs() > 40.0));
        }
    }

    // Tests that the search gives up instead of looping forever
    // Verified by looping until success
    #[test]
    fn test_spaced_coordinate_starves() {
        let mut rng = StdRng::seed_from_u64(3);
        let existing = [0.0, 25.0, 50.0, 75.0, 100.0];
        let c = find_spaced_coordinate(&mut rng, 100.0, &existing, Some(50.0), 64);
        assert_eq!(c, None);
    }

    // Tests origin-based half-extent detection of blocks on a cut
    // Verified by measuring from the block's center instead of its origin
    #[test]
    fn test_blocks_on_cut() {
        let colored = [Rectangle::new(100.0, 200.0, 50.0, 80.0).with_color([0, 0, 0, 255])];

        assert_eq!(blocks_on_cut(Orientation::Horizontal, 230.0, BlockEdge::Inclusive, &colored).len(), 1);
        assert_eq!(blocks_on_cut(Orientation::Horizontal, 160.0, BlockEdge::Inclusive, &colored).len(), 1);
        assert!(blocks_on_cut(Orientation::Horizontal, 250.0, BlockEdge::Inclusive, &colored).is_empty());
        assert_eq!(blocks_on_cut(Orientation::Vertical, 120.0, BlockEdge::Inclusive, &colored).len(), 1);
        assert!(blocks_on_cut(Orientation::Vertical, 130.0, BlockEdge::Inclusive, &colored).is_empty());
    }

    // Tests that an exclusive edge ignores a cut exactly half the extent away
    // Verified by using the inclusive comparison for both edges
    #[test]
    fn test_blocks_on_cut_exclusive_edge() {
        let colored = [Rectangle::new(100.0, 200.0, 50.0, 80.0).with_color([0, 0, 0, 255])];

        assert!(blocks_on_cut(Orientation::Horizontal, 240.0, BlockEdge::Exclusive, &colored).is_empty());
        assert_eq!(
            blocks_on_cut(Orientation::Horizontal, 240.0, BlockEdge::Inclusive, &colored).len(),
            1
        );
        assert_eq!(
            blocks_on_cut(Orientation::Horizontal, 239.0, BlockEdge::Exclusive, &colored).len(),
            1
        );
    }

    // Tests both halves of away-from-block routing
    // Verified by inverting the half-canvas comparison
    #[test]
    fn test_route_away_from_block() {
        let style = RouteStyle::AwayFromBlock { gap: 2.0 };
        let left = Rectangle::new(100.0, 0.0, 50.0, 50.0);
        let right = Rectangle::new(600.0, 0.0, 50.0, 50.0);

        assert_eq!(
            route_around(Orientation::Horizontal, 25.0, &left, style, 800.0),
            Line::horizontal(25.0, 102.0, 800.0)
        );
        assert_eq!(
            route_around(Orientation::Horizontal, 25.0, &right, style, 800.0),
            Line::horizontal(25.0, 0.0, 598.0)
        );

        let low = Rectangle::new(0.0, 450.0, 50.0, 100.0);
        assert_eq!(
            route_around(Orientation::Vertical, 30.0, &low, style, 600.0),
            Line::vertical(30.0, 0.0, 448.0)
        );
    }

    // Tests that along-block routing spans the block's extent exactly
    // Verified by spanning to the canvas edge
    #[test]
    fn test_route_along_block() {
        let block = Rectangle::new(100.0, 200.0, 50.0, 80.0);
        assert_eq!(
            route_around(
                Orientation::Vertical,
                120.0,
                &block,
                RouteStyle::AlongBlock,
                600.0
            ),
            Line::vertical(120.0, 200.0, 280.0)
        );
    }

    // Tests that a certain routing draw always routes around a block
    // Verified by ignoring the block list
    #[test]
    fn test_place_line_routes_when_certain() {
        let colored = [tall_block()];
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let line = place_line(
                &mut rng,
                Orientation::Horizontal,
                &schedule(1.0, RouteStyle::AlongBlock),
                EXTENT,
                &[],
                &colored,
                10,
            );
            let Some(line) = line else {
                unreachable!("unspaced placement never starves");
            };
            assert_eq!((line.from, line.to), (100.0, 150.0));
        }
    }

    // Tests the full-span fallback when routing never triggers
    // Verified by using <= for the probability draw
    #[test]
    fn test_place_line_full_span_fallback() {
        let colored = [tall_block()];
        let mut rng = StdRng::seed_from_u64(9);
        let line = place_line(
            &mut rng,
            Orientation::Horizontal,
            &schedule(0.0, RouteStyle::AlongBlock),
            EXTENT,
            &[],
            &colored,
            10,
        );
        assert_eq!(line.map(|l| (l.from, l.to)), Some((0.0, 800.0)));
        assert_eq!(line.map(|l| l.orientation), Some(Orientation::Horizontal));
    }

    // Tests that starvation propagates as None
    // Verified by falling back to an unspaced draw
    #[test]
    fn test_place_line_starved() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut rules = schedule(0.9, RouteStyle::AlongBlock);
        rules.spacing = Some(700.0);
        let parallel = [Line::horizontal(300.0, 0.0, 800.0)];
        let line = place_line(
            &mut rng,
            Orientation::Horizontal,
            &rules,
            EXTENT,
            &parallel,
            &[],
            32,
        );
        assert_eq!(line, None);
    }
}
