use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::board::Board;

/// Scramble the solved board with `steps` uniformly random legal slides.
///
/// Uses PCG 64-bit (rand_pcg::Pcg64) seeded via `seed_from_u64`, so equal
/// `(dim, steps, seed)` inputs reproduce the same board across runs. A step
/// never undoes the one before it. Every result is solvable: it is
/// reachable from the goal, and slides are their own inverses.
pub fn scramble(dim: usize, steps: u32, seed: u64) -> Result<Board, String> {
    if dim < 2 {
        return Err(format!("Scramble requires dimension >= 2, got {dim}"));
    }

    let mut rng = Pcg64::seed_from_u64(seed);
    let mut current = Board::goal(dim);
    let mut previous: Option<Board> = None;

    for _ in 0..steps {
        let mut options = current.neighbors();
        options.retain(|b| previous.as_ref() != Some(b));
        let pick = rng.gen_range(0..options.len());
        let next = options.swap_remove(pick);
        previous = Some(std::mem::replace(&mut current, next));
    }

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_steps_returns_goal() {
        let b = scramble(3, 0, 42).expect("scramble");
        assert!(b.is_goal());
    }

    #[test]
    fn rejects_degenerate_dimension() {
        assert!(scramble(1, 5, 0).is_err());
    }
}
