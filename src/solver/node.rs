use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

use crate::board::Board;

/// One frontier element of the A* search.
///
/// Nodes link back to the node they were expanded from, so the chain from
/// any node to the root is the move sequence that reached it. A node is
/// never mutated after construction; shared ancestry is held through `Rc`.
#[derive(Debug)]
pub(super) struct SearchNode {
    pub board: Board,
    pub parent: Option<Rc<SearchNode>>,
    pub moves: u32,
    /// moves + board.manhattan(), the A* cost estimate. Cached because the
    /// heap compares it on every sift.
    pub priority: u32,
}

impl SearchNode {
    pub fn root(board: Board) -> Rc<Self> {
        let priority = board.manhattan();
        Rc::new(Self {
            board,
            parent: None,
            moves: 0,
            priority,
        })
    }

    pub fn child(parent: &Rc<SearchNode>, board: Board) -> Rc<Self> {
        let moves = parent.moves + 1;
        let priority = moves + board.manhattan();
        Rc::new(Self {
            board,
            parent: Some(Rc::clone(parent)),
            moves,
            priority,
        })
    }

    #[inline]
    pub fn parent_board(&self) -> Option<&Board> {
        self.parent.as_deref().map(|p| &p.board)
    }

    #[inline]
    fn manhattan(&self) -> u32 {
        self.priority - self.moves
    }
}

/// Min-ordered open set over `SearchNode`s.
///
/// `BinaryHeap` is a max-heap, so the entry ordering is reversed: lower
/// priority compares greater. Equal priorities break toward the smaller
/// Manhattan distance; anything still tied pops in heap order.
pub(super) struct Frontier {
    heap: BinaryHeap<OpenEntry>,
}

impl Frontier {
    pub fn seeded(root: Rc<SearchNode>) -> Self {
        let mut heap = BinaryHeap::new();
        heap.push(OpenEntry(root));
        Self { heap }
    }

    #[inline]
    pub fn push(&mut self, node: Rc<SearchNode>) {
        self.heap.push(OpenEntry(node));
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Rc<SearchNode>> {
        self.heap.pop().map(|e| e.0)
    }
}

struct OpenEntry(Rc<SearchNode>);

impl Ord for OpenEntry {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match other.0.priority.cmp(&self.0.priority) {
            Ordering::Equal => other.0.manhattan().cmp(&self.0.manhattan()),
            ord => ord,
        }
    }
}

impl PartialOrd for OpenEntry {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: Vec<Vec<u32>>) -> Board {
        Board::new(rows).expect("valid board")
    }

    #[test]
    fn frontier_pops_lowest_priority_first() {
        let near = SearchNode::root(board(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]]));
        let far = SearchNode::root(board(vec![vec![8, 1, 3], vec![4, 0, 2], vec![7, 6, 5]]));
        assert!(near.priority < far.priority);

        let mut frontier = Frontier::seeded(far);
        frontier.push(Rc::clone(&near));
        let popped = frontier.pop().expect("non-empty");
        assert_eq!(popped.priority, near.priority);
    }

    #[test]
    fn child_counts_moves_and_reprices() {
        let root = SearchNode::root(board(vec![vec![1, 2], vec![0, 3]]));
        let next = root.board.neighbors().into_iter().next().expect("neighbor");
        let child = SearchNode::child(&root, next);
        assert_eq!(child.moves, 1);
        assert_eq!(child.priority, 1 + child.board.manhattan());
        assert_eq!(child.parent_board(), Some(&root.board));
    }
}
