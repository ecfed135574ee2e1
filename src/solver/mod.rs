use std::rc::Rc;

use crate::board::Board;

mod node;

use node::{Frontier, SearchNode};

/// Which previous board the twin search compares neighbors against when
/// skipping the slide that would undo the one just made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TwinPrune {
    /// Check twin neighbors against the twin chain's own previous board.
    #[default]
    OwnParent,
    /// Check twin neighbors against the main chain's previous board. The
    /// two chains rarely hold the same configuration at the same depth, so
    /// this leaves the twin search with no effective undo check.
    MainParent,
}

/// Result of a dual synchronized A* search over one puzzle instance.
///
/// Two best-first searches advance in lockstep: one from the initial board,
/// one from its parity-flipped twin. Exactly one of the pair is solvable,
/// so whichever search reaches the goal first settles solvability, and the
/// losing search is simply abandoned. The whole search runs inside
/// [`Solver::new`]; afterwards the value only answers queries.
pub struct Solver {
    solvable: bool,
    result: Option<Rc<SearchNode>>,
}

impl Solver {
    /// Search for a minimum-move solution from `initial`.
    pub fn new(initial: Board) -> Result<Self, String> {
        Self::with_twin_prune(initial, TwinPrune::default())
    }

    /// Search with an explicit twin-pruning policy. Both policies reach the
    /// same solvability verdict and move count; they differ in which
    /// optimal-length path the twin race leaves room to find first.
    pub fn with_twin_prune(initial: Board, prune: TwinPrune) -> Result<Self, String> {
        if initial.dimension() < 2 {
            return Err(format!(
                "Solver requires a board of dimension >= 2 (twin is undefined below that), got {}",
                initial.dimension()
            ));
        }

        let twin_root = SearchNode::root(initial.twin());
        let mut open_main = Frontier::seeded(SearchNode::root(initial));
        let mut open_twin = Frontier::seeded(twin_root);

        loop {
            // Both heaps stay non-empty: a popped non-goal node always has
            // at least one neighbor besides its parent when n >= 2.
            let (Some(m), Some(t)) = (open_main.pop(), open_twin.pop()) else {
                return Err("open set exhausted before either search reached a goal".to_string());
            };

            // Main's goal test runs strictly before twin's each round.
            if m.board.is_goal() {
                return Ok(Self {
                    solvable: true,
                    result: Some(m),
                });
            }
            if t.board.is_goal() {
                return Ok(Self {
                    solvable: false,
                    result: None,
                });
            }

            expand(&mut open_main, &m, m.parent_board());

            let twin_skip = match prune {
                TwinPrune::OwnParent => t.parent_board(),
                TwinPrune::MainParent => m.parent_board(),
            };
            expand(&mut open_twin, &t, twin_skip);
        }
    }

    #[inline]
    pub fn is_solvable(&self) -> bool {
        self.solvable
    }

    /// Number of slides in the optimal solution, or -1 when unsolvable.
    #[inline]
    pub fn moves(&self) -> i32 {
        match &self.result {
            Some(goal) => goal.moves as i32,
            None => -1,
        }
    }

    /// The optimal path as full board snapshots, initial board first and
    /// goal board last. `None` when unsolvable.
    pub fn solution(&self) -> Option<Vec<Board>> {
        let goal = self.result.as_ref()?;
        let mut path = Vec::with_capacity(goal.moves as usize + 1);
        let mut node = Some(goal.as_ref());
        while let Some(n) = node {
            path.push(n.board.clone());
            node = n.parent.as_deref();
        }
        path.reverse();
        Some(path)
    }
}

/// Push every neighbor of `from` onto `open`, except the board that would
/// undo the previous slide. Skipping only the immediate predecessor is the
/// sole cycle avoidance performed; longer revisits are tolerated in exchange
/// for not carrying a visited set.
fn expand(open: &mut Frontier, from: &Rc<SearchNode>, skip: Option<&Board>) {
    for neighbor in from.board.neighbors() {
        if skip != Some(&neighbor) {
            open.push(SearchNode::child(from, neighbor));
        }
    }
}
