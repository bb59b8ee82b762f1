use std::collections::HashSet;

use crate::{
    error::RingError,
    types::{Position, RingResult},
};

/// Distance between consecutive tries when a random position is taken.
pub(crate) const COLLISION_STEP: u64 = 10;

/// Places nodes at `floor(space_size / count) * i`, in input order.
pub(crate) fn equidistant(count: usize, space_size: u64) -> RingResult<Vec<Position>> {
    let spacing = space_size / count as u64;
    if spacing == 0 {
        return Err(RingError::SpaceTooSmall {
            space_size,
            nodes: count,
        });
    }

    Ok((0..count as u64)
        .map(|i| (spacing * i) % space_size)
        .collect())
}

/// Resolves each hashed start position to a free slot, in input order.
///
/// A taken slot is skipped forward `COLLISION_STEP` at a time, wrapping at
/// `space_size`. That walk only reaches the `cycle_len` slots of its own
/// residue class, so once they are all taken the walk continues one slot at
/// a time. Placement only fails when every slot of the space is taken.
pub(crate) fn random<I>(starts: I, space_size: u64) -> RingResult<Vec<Position>>
where
    I: IntoIterator<Item = Position>,
{
    let mut taken = HashSet::new();
    let mut placed = Vec::new();

    for start in starts {
        let position = find_free(start % space_size, space_size, &taken)?;
        taken.insert(position);
        placed.push(position);
    }

    Ok(placed)
}

fn find_free(start: Position, space_size: u64, taken: &HashSet<Position>) -> RingResult<Position> {
    if taken.len() as u64 >= space_size {
        return Err(RingError::NoFreePosition { start });
    }

    let stepped = walk(start, COLLISION_STEP, cycle_len(space_size), space_size, taken);

    // a free slot exists, so the unit walk finds it within taken.len() + 1 steps
    stepped
        .or_else(|| walk(start, 1, taken.len() as u64 + 1, space_size, taken))
        .ok_or(RingError::NoFreePosition { start })
}

fn walk(
    start: Position,
    step: u64,
    steps: u64,
    space_size: u64,
    taken: &HashSet<Position>,
) -> Option<Position> {
    let mut position = start;

    for _ in 0..steps {
        if !taken.contains(&position) {
            return Some(position);
        }
        position = ((position as u128 + step as u128) % space_size as u128) as Position;
    }

    None
}

#[inline]
fn cycle_len(space_size: u64) -> u64 {
    space_size / gcd(space_size, COLLISION_STEP)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
