//! Tests for cell inference from cut-lines

#[cfg(test)]
mod tests {
    use mondrian::geometry::line::Line;
    use mondrian::geometry::partition::{Bounds, GridPartitioner};
    use mondrian::geometry::rectangle::Rectangle;

    fn partitioner(thickness: f64) -> GridPartitioner {
        GridPartitioner::new(Bounds::new(800.0, 600.0), thickness)
    }

    // Tests that no lines yield the whole canvas
    // Verified by dropping the canvas edges from the cut positions
    #[test]
    fn test_no_lines_single_cell() {
        let cells = partitioner(3.0).partition(&[], &[]);
        assert_eq!(cells, vec![Rectangle::new(0.0, 0.0, 800.0, 600.0)]);
    }

    // Tests a single full-height vertical cut at the center
    // Verified by insetting the far side by half the thickness
    #[test]
    fn test_single_vertical_cut() {
        let cells = partitioner(3.0).partition(&[], &[Line::vertical(400.0, 0.0, 600.0)]);

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0], Rectangle::new(0.0, 0.0, 397.0, 600.0));
        assert_eq!(cells[1], Rectangle::new(402.5, 0.0, 397.5, 600.0));
    }

    // Tests column-major ordering of the output
    // Verified by swapping the loop nesting
    #[test]
    fn test_output_ordering() {
        let cells = partitioner(3.0).partition(
            &[Line::horizontal(300.0, 0.0, 800.0)],
            &[Line::vertical(400.0, 0.0, 600.0)],
        );

        assert_eq!(cells.len(), 4);
        let origins: Vec<(f64, f64)> = cells.iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(
            origins,
            vec![(0.0, 0.0), (0.0, 302.5), (402.5, 0.0), (402.5, 302.5)]
        );
    }

    // Tests that partial lines still cut the whole canvas
    // Verified by clipping cells against line runs
    #[test]
    fn test_partial_lines_cut_everything() {
        let full = partitioner(3.0).partition(&[Line::horizontal(200.0, 0.0, 800.0)], &[]);
        let partial = partitioner(3.0).partition(&[Line::horizontal(200.0, 500.0, 800.0)], &[]);
        assert_eq!(full, partial);
    }

    // Tests (|V| - 1) x (|H| - 1) cells with duplicate coordinates collapsed
    // Verified by removing de-duplication of cut positions
    #[test]
    fn test_cell_count_with_duplicates() {
        let cells = partitioner(3.0).partition_coordinates(
            [100.0, 500.0, 500.0, 700.0],
            [150.0, 450.0],
        );
        assert_eq!(cells.len(), 4 * 3);
    }

    // Tests exact tiling when the line thickness is zero
    // Verified by applying the margin at zero thickness
    #[test]
    fn test_zero_thickness_tiles_canvas() {
        let cells = partitioner(0.0).partition_coordinates([120.0, 333.0, 610.0], [90.0, 480.0]);
        let total: f64 = cells.iter().map(Rectangle::area).sum();
        assert!((total - 800.0 * 600.0).abs() < 1e-6);
        assert!(cells.iter().all(|c| c.color.is_none()));
    }

    // Tests that identical input yields identical output
    // Verified by caching state between calls
    #[test]
    fn test_partition_is_idempotent() {
        let horizontal = [Line::horizontal(77.0, 0.0, 800.0)];
        let vertical = [Line::vertical(640.0, 0.0, 600.0), Line::vertical(12.0, 0.0, 300.0)];
        let p = partitioner(3.0);
        assert_eq!(
            p.partition(&horizontal, &vertical),
            p.partition(&horizontal, &vertical)
        );
    }
}
