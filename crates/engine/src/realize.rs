use arrayvec::ArrayVec;

use boggle_core::Board;
use boggle_types::{Position, MAX_CELLS};

use boggle_core::adjacency::neighbors;

type PathBuf = ArrayVec<Position, MAX_CELLS>;

/// Whether `word` can be traced on `board` without reusing a tile
///
/// Matching is case-insensitive. The `QU` tile matches a `q`, consuming the
/// following `u` when the word has one.
pub fn is_path_realizable(word: &str, board: &Board) -> bool {
    find_path(word, board).is_some()
}

/// First path (in row-major start order) that spells `word`, if any
pub fn find_path(word: &str, board: &Board) -> Option<Vec<Position>> {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    if chars.is_empty() || chars.len() > board.cells().len() * 2 {
        return None;
    }

    let mut path = PathBuf::new();
    for cell in board.cells() {
        let Some(next) = cell.letter.match_at(&chars, 0) else {
            continue;
        };
        let bit = 1u64 << cell.position.index(board.size());
        path.push(cell.position);
        if extend(board, &chars, next, bit, &mut path) {
            return Some(path.to_vec());
        }
        path.pop();
    }
    None
}

fn extend(board: &Board, chars: &[char], at: usize, visited: u64, path: &mut PathBuf) -> bool {
    if at == chars.len() {
        return true;
    }
    let Some(&last) = path.last() else {
        return false;
    };

    for pos in neighbors(last, board.size()) {
        let bit = 1u64 << pos.index(board.size());
        if visited & bit != 0 {
            continue;
        }
        let Some(letter) = board.letter(pos) else {
            continue;
        };
        let Some(next) = letter.match_at(chars, at) else {
            continue;
        };
        path.push(pos);
        if extend(board, chars, next, visited | bit, path) {
            return true;
        }
        path.pop();
    }
    false
}
