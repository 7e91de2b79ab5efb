//! Adjacency rules - 8-directional moves on an NxN grid

use arrayvec::ArrayVec;

use crate::types::Position;

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// True iff `a != b` and both coordinates differ by at most one
#[inline]
pub fn is_adjacent(a: Position, b: Position) -> bool {
    a.is_adjacent(b)
}

#[inline]
pub fn is_within_bounds(pos: Position, size: u8) -> bool {
    pos.row < size && pos.col < size
}

/// Surrounding cells clipped to the board: 3 at a corner, 5 on an edge, 8 inside
pub fn neighbors(pos: Position, size: u8) -> ArrayVec<Position, 8> {
    let mut out = ArrayVec::new();
    for (dr, dc) in DIRECTIONS {
        let row = pos.row as i16 + dr as i16;
        let col = pos.col as i16 + dc as i16;
        if row < 0 || col < 0 || row >= size as i16 || col >= size as i16 {
            continue;
        }
        out.push(Position::new(row as u8, col as u8));
    }
    out
}

/// Every consecutive pair is adjacent and no position repeats
pub fn is_continuous(path: &[Position]) -> bool {
    let adjacent = path.windows(2).all(|w| is_adjacent(w[0], w[1]));
    adjacent
        && path
            .iter()
            .enumerate()
            .all(|(i, p)| !path[..i].contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_counts() {
        for size in 4..=6u8 {
            for row in 0..size {
                for col in 0..size {
                    let pos = Position::new(row, col);
                    let n = neighbors(pos, size);
                    let edge_row = row == 0 || row == size - 1;
                    let edge_col = col == 0 || col == size - 1;
                    let expected = match (edge_row, edge_col) {
                        (true, true) => 3,
                        (true, false) | (false, true) => 5,
                        (false, false) => 8,
                    };
                    assert_eq!(n.len(), expected, "{pos:?} on {size}x{size}");
                    assert!(n.iter().all(|&p| is_within_bounds(p, size)));
                    assert!(n.iter().all(|&p| is_adjacent(pos, p)));
                }
            }
        }
    }

    #[test]
    fn test_is_within_bounds() {
        assert!(is_within_bounds(Position::new(3, 3), 4));
        assert!(!is_within_bounds(Position::new(4, 0), 4));
        assert!(is_within_bounds(Position::new(5, 5), 6));
    }

    #[test]
    fn test_is_continuous() {
        let ok = [Position::new(0, 0), Position::new(1, 1), Position::new(1, 2)];
        assert!(is_continuous(&ok));

        let gap = [Position::new(0, 0), Position::new(0, 2)];
        assert!(!is_continuous(&gap));

        let repeat = [Position::new(0, 0), Position::new(0, 1), Position::new(0, 0)];
        assert!(!is_continuous(&repeat));

        assert!(is_continuous(&[]));
        assert!(is_continuous(&[Position::new(2, 2)]));
    }
}
