//! Tests for cell spans and cut position bookkeeping

#[cfg(test)]
mod tests {
    use mondrian::geometry::interval::{
        CUT_MARGIN, Span, cell_span, cut_positions, farther_than, strictly_within,
        within,
    };

    // Tests that a canvas edge contributes no inset on either side
    // Verified by applying the inset unconditionally
    #[test]
    fn test_cell_span_between_canvas_edges() {
        let span = cell_span(0.0, 800.0, 800.0, 3.0);
        assert_eq!(span, Span::new(0.0, 800.0));
    }

    // Tests the near-side inset of half the thickness plus the margin
    // Verified by dropping the margin term
    #[test]
    fn test_cell_span_after_interior_cut() {
        let span = cell_span(400.0, 800.0, 800.0, 3.0);
        assert!((span.start - (400.0 + 1.5 + CUT_MARGIN)).abs() < 1e-9);
        assert!((span.length - 397.5).abs() < 1e-9);
    }

    // Tests the far-side inset of a full thickness
    // Verified by insetting the far side by half the thickness
    #[test]
    fn test_cell_span_before_interior_cut() {
        let span = cell_span(0.0, 400.0, 800.0, 3.0);
        assert!(span.start.abs() < f64::EPSILON);
        assert!((span.length - 397.0).abs() < 1e-9);

        let between = cell_span(100.0, 200.0, 800.0, 3.0);
        assert!((between.start - 102.5).abs() < 1e-9);
        assert!((between.length - 94.5).abs() < 1e-9);
        assert!((between.start + between.length - 197.0).abs() < 1e-9);
    }

    // Tests that zero thickness tiles the axis without margins
    // Verified by keeping the margin at zero thickness
    #[test]
    fn test_cell_span_zero_thickness_tiles() {
        let left = cell_span(0.0, 250.0, 800.0, 0.0);
        let right = cell_span(250.0, 800.0, 800.0, 0.0);
        assert!((left.start + left.length - right.start).abs() < f64::EPSILON);
        assert!((left.length + right.length - 800.0).abs() < f64::EPSILON);
    }

    // Tests that cuts closer than the insets produce an empty span
    // Verified by removing the clamp in Span::new
    #[test]
    fn test_cell_span_never_negative() {
        let span = cell_span(100.0, 103.0, 800.0, 3.0);
        assert!(span.length.abs() < f64::EPSILON);
    }

    // Tests sorting, de-duplication, clamping and non-finite filtering
    // Verified by removing the dedup call
    #[test]
    fn test_cut_positions_normalizes_input() {
        let positions = cut_positions([400.0, 400.0, -5.0, 900.0, f64::NAN, 120.0], 800.0);
        assert_eq!(positions, vec![0.0, 120.0, 400.0, 800.0]);
    }

    // Tests that the canvas edges are always present
    // Verified by omitting the bound from the chain
    #[test]
    fn test_cut_positions_empty_input() {
        assert_eq!(cut_positions(std::iter::empty(), 600.0), vec![0.0, 600.0]);
    }

    // Tests inclusive and exclusive proximity helpers at the boundary
    // Verified by swapping <= and <
    #[test]
    fn test_proximity_boundaries() {
        assert!(within(10.0, 15.0, 5.0));
        assert!(!within(10.0, 15.1, 5.0));
        assert!(!farther_than(10.0, 50.0, 40.0));
        assert!(farther_than(10.0, 50.5, 40.0));
        assert!(!strictly_within(10.0, 15.0, 5.0));
        assert!(strictly_within(10.0, 14.9, 5.0));
    }
}
