//! Face-turn permutation tables.
//!
//! A turn is stored as two same-length index lists, `old` and `new`:
//! applying it copies `state[old[i]]` to `state[new[i]]` for all `i`,
//! reading every source from the pre-turn snapshot. The lists are built
//! from a sticker-geometry model rather than written by hand: each sticker
//! maps to a cubie position plus an outward normal, a turn rotates one
//! slab of cubies 90° about a face axis, and the table records where each
//! sticker index lands.
//!
//! Tables are generated once per cube order into process-wide statics and
//! shared read-only across every instance and thread.

use std::sync::LazyLock;

/// One face turn as paired old/new sticker index lists.
pub(crate) struct CubeMove {
    pub(crate) old: Box<[u16]>,
    pub(crate) new: Box<[u16]>,
}

/// Face order: U, D, L, R, B, F. Axis 0 is x, 1 is y, 2 is z.
const FACE_AXIS: [usize; 6] = [1, 1, 0, 0, 2, 2];
/// Outward normal sign along the face axis.
const FACE_SIGN: [i8; 6] = [1, -1, -1, 1, -1, 1];

/// Cubie position of sticker `(face, r, c)` on an order-`n` cube.
fn sticker_pos(face: usize, r: usize, c: usize, n: usize) -> [usize; 3] {
    let m = n - 1;
    match face {
        0 => [c, m, r],
        1 => [c, 0, m - r],
        2 => [0, m - r, c],
        3 => [m, m - r, m - c],
        4 => [m - c, m - r, 0],
        5 => [c, m - r, m],
        _ => unreachable!("face index out of range"),
    }
}

/// Flat sticker index of the cubie at `p` whose normal is `(axis, sign)`.
fn sticker_index(p: [usize; 3], axis: usize, sign: i8, n: usize) -> usize {
    let m = n - 1;
    let [x, y, z] = p;
    let (face, r, c) = match (axis, sign) {
        (1, 1) => (0, z, x),
        (1, -1) => (1, m - z, x),
        (0, -1) => (2, m - y, z),
        (0, 1) => (3, m - y, m - z),
        (2, -1) => (4, m - y, m - x),
        (2, 1) => (5, m - y, x),
        _ => unreachable!("invalid normal"),
    };
    face * n * n + r * n + c
}

/// Build the table for turning `layer` of `face` in direction `dir`.
fn build_move(n: usize, face: usize, layer: usize, dir: i8) -> CubeMove {
    let m = n - 1;
    let a = FACE_AXIS[face];
    // Slab selection and spin are mirrored for faces on the negative end
    // of their axis, so opposite faces turn symmetrically.
    let slab = if FACE_SIGN[face] > 0 { m - layer } else { layer };
    let dir = if FACE_SIGN[face] > 0 { dir } else { -dir };
    let (b, c) = match a {
        0 => (1, 2),
        1 => (2, 0),
        _ => (0, 1),
    };

    let mut old = Vec::new();
    let mut new = Vec::new();
    for sf in 0..6 {
        for r in 0..n {
            for col in 0..n {
                let i = sf * n * n + r * n + col;
                let mut p = sticker_pos(sf, r, col, n);
                if p[a] != slab {
                    continue;
                }
                let (pb, pc) = (p[b], p[c]);
                if dir > 0 {
                    p[b] = m - pc;
                    p[c] = pb;
                } else {
                    p[b] = pc;
                    p[c] = m - pb;
                }
                let (axis, sign) = (FACE_AXIS[sf], FACE_SIGN[sf]);
                let (axis, sign) = if axis == b {
                    (c, if dir > 0 { sign } else { -sign })
                } else if axis == c {
                    (b, if dir > 0 { -sign } else { sign })
                } else {
                    (axis, sign)
                };
                let j = sticker_index(p, axis, sign, n);
                if i != j {
                    old.push(i as u16);
                    new.push(j as u16);
                }
            }
        }
    }

    CubeMove {
        old: old.into(),
        new: new.into(),
    }
}

/// All turns for an order-`n` cube in canonical action order: per face
/// (U, D, L, R, B, F), per layer (outer first), the counterclockwise then
/// the clockwise turn. Adjacent action pairs are therefore inverses.
fn build_turns(n: usize) -> Box<[CubeMove]> {
    let mut turns = Vec::new();
    for face in 0..6 {
        for layer in 0..n / 2 {
            for dir in [-1, 1] {
                turns.push(build_move(n, face, layer, dir));
            }
        }
    }
    turns.into()
}

static CUBE2_TURNS: LazyLock<Box<[CubeMove]>> = LazyLock::new(|| build_turns(2));
static CUBE3_TURNS: LazyLock<Box<[CubeMove]>> = LazyLock::new(|| build_turns(3));
static CUBE4_TURNS: LazyLock<Box<[CubeMove]>> = LazyLock::new(|| build_turns(4));

/// Turn tables for a supported cube order.
pub(crate) fn turns(n: usize) -> &'static [CubeMove] {
    match n {
        2 => &CUBE2_TURNS,
        3 => &CUBE3_TURNS,
        4 => &CUBE4_TURNS,
        // Cube<N> constructors reject other orders at compile time.
        _ => unreachable!("unsupported cube order {n}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_counts() {
        assert_eq!(turns(2).len(), 12);
        assert_eq!(turns(3).len(), 12);
        assert_eq!(turns(4).len(), 24);
    }

    #[test]
    fn test_moved_sticker_counts() {
        // Outer turn on a 2-cube: 4 face stickers + 8 band stickers.
        for turn in turns(2) {
            assert_eq!(turn.old.len(), 12);
        }
        // 3-cube: 8 face stickers move (center fixed) + 12 band.
        for turn in turns(3) {
            assert_eq!(turn.old.len(), 20);
        }
    }

    #[test]
    fn test_tables_are_permutations() {
        for n in [2usize, 3, 4] {
            let stickers = 6 * n * n;
            for turn in turns(n) {
                assert_eq!(turn.old.len(), turn.new.len());
                assert!(turn.old.iter().all(|&i| (i as usize) < stickers));
                assert!(turn.new.iter().all(|&i| (i as usize) < stickers));

                // Moved sources and destinations are the same index set.
                let mut sources: Vec<u16> = turn.old.to_vec();
                let mut dests: Vec<u16> = turn.new.to_vec();
                sources.sort_unstable();
                dests.sort_unstable();
                assert_eq!(sources, dests);
                sources.dedup();
                assert_eq!(sources.len(), turn.old.len());
            }
        }
    }

    #[test]
    fn test_inner_slice_skips_turned_face() {
        // 4-cube inner slices move only band stickers on adjacent faces.
        let turns4 = turns(4);
        for face in 0..6 {
            let inner = &turns4[face * 4 + 2]; // layer 1, counterclockwise
            assert_eq!(inner.old.len(), 16);
            let face_range = (face * 16) as u16..(face * 16 + 16) as u16;
            assert!(inner.old.iter().all(|i| !face_range.contains(i)));
        }
    }
}
