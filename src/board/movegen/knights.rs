use super::super::Coordinate;

/// Distance three on both a different row and a different column: exactly
/// the eight L-shaped jumps. Knights are never obstructed.
pub(super) fn knight_reach(from: Coordinate, target: Coordinate) -> bool {
    from.magnitude(target) == 3 && !from.same_row(target) && !from.same_column(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_reach_from_center() {
        let d4: Coordinate = "d4".parse().unwrap();
        let reached: Vec<String> = Coordinate::all()
            .filter(|&c| knight_reach(d4, c))
            .map(|c| c.to_string())
            .collect();
        assert_eq!(
            reached,
            ["c2", "e2", "b3", "f3", "b5", "f5", "c6", "e6"]
        );
    }

    #[test]
    fn test_knight_reach_rejects_straight_three() {
        let a1: Coordinate = "a1".parse().unwrap();
        assert!(!knight_reach(a1, "a4".parse().unwrap()));
        assert!(!knight_reach(a1, "d1".parse().unwrap()));
    }
}
