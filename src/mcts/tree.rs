//! Arena-based MCTS tree.
//!
//! Uses a flat `Vec<MCTSNode>` with index-based references. Parent links are
//! plain `NodeId`s, so there is no reference counting and the whole tree is
//! dropped at once when a decision has been made.

use crate::core::{Action, GameError, GameRng, GameState};

use super::node::{MCTSNode, NodeId};

/// Arena-based MCTS tree for one decision.
///
/// The root borrows the caller's state; every other node owns a clone.
#[derive(Clone, Debug)]
pub struct MCTSTree<'a, S: GameState> {
    /// All nodes in the tree.
    nodes: Vec<MCTSNode<'a, S>>,

    /// The root node ID (always 0).
    root: NodeId,
}

impl<'a, S: GameState> MCTSTree<'a, S> {
    /// Create a new tree whose root observes `state`.
    pub fn new(state: &'a S) -> Self {
        Self::with_capacity(state, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(state: &'a S, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(MCTSNode::root(state));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MCTSNode<'a, S> {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut MCTSNode<'a, S> {
        &mut self.nodes[id.0 as usize]
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &MCTSNode<'a, S> {
        self.get(self.root)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MCTSNode<'a, S>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// UCB1 score of `child` as seen by the player choosing at `parent`.
    ///
    /// The child's value is recorded for the player to move at the child,
    /// so it is negated here.
    #[must_use]
    pub fn ucb1(&self, parent: NodeId, child: NodeId, exploration_constant: f64) -> f64 {
        let parent_visits = self.get(parent).visits as f64;
        let child = self.get(child);
        let visits = child.visits as f64;

        let exploitation = -(child.value / visits);
        let exploration = exploration_constant * (parent_visits.ln() / visits).sqrt();
        exploitation + exploration
    }

    /// Select the child of `id` with the greatest UCB1 score.
    ///
    /// Ties go to the child expanded first.
    ///
    /// # Panics
    ///
    /// If `id` has no children, is unvisited, or has an unvisited child.
    #[must_use]
    pub fn best_child(&self, id: NodeId, exploration_constant: f64) -> NodeId {
        let node = self.get(id);
        assert!(!node.children.is_empty(), "best_child on {} with no children", id);
        assert!(node.visits >= 1, "best_child on unvisited {}", id);

        let mut best = NodeId::NONE;
        let mut best_score = f64::NEG_INFINITY;
        for &child in &node.children {
            assert!(self.get(child).visits >= 1, "best_child found unvisited child {}", child);
            let score = self.ucb1(id, child, exploration_constant);
            if best.is_none() || score > best_score {
                best = child;
                best_score = score;
            }
        }
        best
    }

    /// Expand one untried action of `id`, chosen uniformly at random.
    ///
    /// The action is removed from the parent's untried list, applied to a
    /// clone of the parent's state, and the resulting child is returned.
    ///
    /// # Panics
    ///
    /// If `id` has no untried actions.
    pub fn expand(&mut self, id: NodeId, rng: &mut GameRng) -> Result<NodeId, GameError> {
        let child_id = NodeId::new(self.nodes.len() as u32);
        let parent = self.get_mut(id);
        assert!(
            !parent.untried_actions.is_empty(),
            "expand on {} with no untried actions",
            id
        );

        let idx = rng.gen_range_usize(0..parent.untried_actions.len());
        let action = parent.untried_actions.swap_remove(idx);

        let mut next_state = S::clone(&parent.state);
        let outcome = next_state.step(action)?;
        let depth = parent.depth + 1;
        parent.children.push(child_id);

        self.nodes
            .push(MCTSNode::child(next_state, id, action, depth, outcome));
        Ok(child_id)
    }

    /// Add `reward` to `id` and its ancestors, negating it at each step up.
    pub fn backpropagate(&mut self, id: NodeId, reward: f64) {
        let mut current = id;
        let mut reward = reward;

        while !current.is_none() {
            let node = self.get_mut(current);
            node.visits += 1;
            node.value += reward;

            current = node.parent;
            reward = -reward;
        }
    }

    /// Action of the most-visited child of `id`.
    ///
    /// Ties go to the child expanded first.
    ///
    /// # Panics
    ///
    /// If `id` has no children.
    #[must_use]
    pub fn best_action(&self, id: NodeId) -> Action {
        let mut best: Option<(Action, u32)> = None;
        for (action, visits) in self.action_visits(id) {
            if best.map_or(true, |(_, most)| visits > most) {
                best = Some((action, visits));
            }
        }
        match best {
            Some((action, _)) => action,
            None => panic!("best_action on {} with no children", id),
        }
    }

    /// `(action, visits)` for each child of `id`, in expansion order.
    pub fn action_visits(&self, id: NodeId) -> Vec<(Action, u32)> {
        self.get(id)
            .children
            .iter()
            .filter_map(|&child| {
                let child = self.get(child);
                child.action.map(|action| (action, child.visits))
            })
            .collect()
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let terminal_count = self.nodes.iter().filter(|n| n.is_terminal()).count();
        let untried_actions: usize = self.nodes.iter().map(|n| n.untried_actions.len()).sum();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            terminal_count,
            untried_actions,
        }
    }
}

/// Statistics about the MCTS tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Number of terminal nodes.
    pub terminal_count: usize,

    /// Legal actions not yet expanded, summed over all nodes.
    pub untried_actions: usize,
}

impl TreeStats {
    /// Expansion ratio: expanded edges / (expanded + untried).
    #[must_use]
    pub fn expansion_ratio(&self) -> f64 {
        let expanded = self.node_count.saturating_sub(1);
        let total = expanded + self.untried_actions;
        if total == 0 {
            0.0
        } else {
            expanded as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;
    use crate::games::TicTacToe;

    fn expand_all(tree: &mut MCTSTree<'_, TicTacToe>, id: NodeId, rng: &mut GameRng) -> Vec<NodeId> {
        let mut children = Vec::new();
        while !tree.get(id).is_fully_expanded() {
            children.push(tree.expand(id, rng).unwrap());
        }
        children
    }

    #[test]
    fn test_tree_new() {
        let game = TicTacToe::new();
        let tree = MCTSTree::new(&game);

        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert_eq!(tree.root(), NodeId::new(0));
        assert!(tree.root_node().parent().is_none());
    }

    #[test]
    fn test_expand_shrinks_untried_by_one() {
        let game = TicTacToe::new();
        let mut tree = MCTSTree::new(&game);
        let mut rng = GameRng::new(1);
        let root = tree.root();

        for expected_left in (0..9).rev() {
            let child = tree.expand(root, &mut rng).unwrap();

            assert_eq!(tree.get(root).untried_actions().len(), expected_left);
            assert_eq!(tree.get(child).parent(), root);
            assert_eq!(tree.get(child).depth(), 1);
            assert_eq!(tree.get(root).children().last(), Some(&child));

            let action = tree.get(child).action().unwrap();
            assert!(!tree.get(root).untried_actions().contains(&action));
        }

        assert!(tree.get(root).is_fully_expanded());
        let mut actions: Vec<_> = tree.action_visits(root).into_iter().map(|(a, _)| a).collect();
        actions.sort_unstable();
        assert_eq!(actions, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_expand_never_touches_root_state() {
        let game = TicTacToe::new();
        let mut tree = MCTSTree::new(&game);
        let mut rng = GameRng::new(2);
        let root = tree.root();

        let child = tree.expand(root, &mut rng).unwrap();

        assert_eq!(game.legal_actions().len(), 9);
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(tree.get(child).state().current_player(), Player::Two);
        assert_eq!(tree.get(child).state().legal_actions().len(), 8);
    }

    #[test]
    #[should_panic(expected = "no untried actions")]
    fn test_expand_fully_expanded_panics() {
        let mut game = TicTacToe::new();
        for m in [0, 1, 2, 4, 3, 5, 7, 6] {
            game.step(m).unwrap();
        }
        let mut tree = MCTSTree::new(&game);
        let mut rng = GameRng::new(3);
        let root = tree.root();

        tree.expand(root, &mut rng).unwrap();
        let _ = tree.expand(root, &mut rng);
    }

    #[test]
    fn test_backpropagate_alternates_sign() {
        let game = TicTacToe::new();
        let mut tree = MCTSTree::new(&game);
        let mut rng = GameRng::new(4);

        // Chain root -> a -> b -> c
        let a = tree.expand(tree.root(), &mut rng).unwrap();
        let b = tree.expand(a, &mut rng).unwrap();
        let c = tree.expand(b, &mut rng).unwrap();

        tree.backpropagate(c, 1.0);

        assert_eq!(tree.get(c).value(), 1.0);
        assert_eq!(tree.get(b).value(), -1.0);
        assert_eq!(tree.get(a).value(), 1.0);
        assert_eq!(tree.root_node().value(), -1.0);
        for id in [c, b, a, tree.root()] {
            assert_eq!(tree.get(id).visits(), 1);
        }

        tree.backpropagate(b, 0.5);

        assert_eq!(tree.get(c).visits(), 1);
        assert_eq!(tree.get(b).visits(), 2);
        assert_eq!(tree.get(b).value(), -0.5);
        assert_eq!(tree.get(a).value(), 0.5);
        assert_eq!(tree.root_node().value(), -0.5);
        assert_eq!(tree.root_node().visits(), 2);
    }

    #[test]
    fn test_best_child_prefers_less_visited_at_equal_value() {
        let game = TicTacToe::new();
        let mut tree = MCTSTree::new(&game);
        let mut rng = GameRng::new(5);
        let root = tree.root();
        let children = expand_all(&mut tree, root, &mut rng);

        for (i, &child) in children.iter().enumerate() {
            let node = tree.get_mut(child);
            node.visits = (i as u32 + 1) * 2;
            node.value = 0.0;
        }
        let total: u32 = children.iter().map(|&c| tree.get(c).visits).sum();
        tree.get_mut(root).visits = total;

        let scores: Vec<f64> = children.iter().map(|&c| tree.ucb1(root, c, 1.41)).collect();
        assert!(scores.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(tree.best_child(root, 1.41), children[0]);
    }

    #[test]
    fn test_best_child_negates_child_value() {
        let game = TicTacToe::new();
        let mut tree = MCTSTree::new(&game);
        let mut rng = GameRng::new(6);
        let root = tree.root();
        let a = tree.expand(root, &mut rng).unwrap();
        let b = tree.expand(root, &mut rng).unwrap();

        // `a` is good for the player to move at `a` (the opponent)
        tree.get_mut(a).visits = 10;
        tree.get_mut(a).value = 8.0;
        tree.get_mut(b).visits = 10;
        tree.get_mut(b).value = -8.0;
        tree.get_mut(root).visits = 20;

        assert_eq!(tree.best_child(root, 0.0), b);
        assert!((tree.ucb1(root, b, 0.0) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_best_child_tie_goes_to_first() {
        let game = TicTacToe::new();
        let mut tree = MCTSTree::new(&game);
        let mut rng = GameRng::new(7);
        let root = tree.root();
        let children = expand_all(&mut tree, root, &mut rng);

        for &child in &children {
            tree.get_mut(child).visits = 3;
        }
        tree.get_mut(root).visits = 27;

        assert_eq!(tree.best_child(root, 1.41), children[0]);
    }

    #[test]
    #[should_panic(expected = "unvisited child")]
    fn test_best_child_with_unvisited_child_panics() {
        let game = TicTacToe::new();
        let mut tree = MCTSTree::new(&game);
        let mut rng = GameRng::new(8);
        let root = tree.root();
        let _ = tree.expand(root, &mut rng).unwrap();
        tree.get_mut(root).visits = 1;

        let _ = tree.best_child(root, 1.41);
    }

    #[test]
    fn test_best_action_most_visited() {
        let game = TicTacToe::new();
        let mut tree = MCTSTree::new(&game);
        let mut rng = GameRng::new(9);
        let root = tree.root();

        let children: Vec<_> = (0..3).map(|_| tree.expand(root, &mut rng).unwrap()).collect();
        for (&child, visits) in children.iter().zip([1, 2, 5]) {
            tree.get_mut(child).visits = visits;
        }

        let expected = tree.get(children[2]).action().unwrap();
        assert_eq!(tree.best_action(root), expected);
    }

    #[test]
    fn test_best_action_tie_goes_to_first() {
        let game = TicTacToe::new();
        let mut tree = MCTSTree::new(&game);
        let mut rng = GameRng::new(10);
        let root = tree.root();

        let children: Vec<_> = (0..3).map(|_| tree.expand(root, &mut rng).unwrap()).collect();
        for (&child, visits) in children.iter().zip([4, 4, 2]) {
            tree.get_mut(child).visits = visits;
        }

        assert_eq!(tree.best_action(root), tree.get(children[0]).action().unwrap());
    }

    #[test]
    #[should_panic(expected = "no children")]
    fn test_best_action_without_children_panics() {
        let game = TicTacToe::new();
        let tree = MCTSTree::new(&game);
        let _ = tree.best_action(tree.root());
    }

    #[test]
    fn test_tree_stats() {
        let game = TicTacToe::new();
        let mut tree = MCTSTree::new(&game);
        let mut rng = GameRng::new(11);

        let a = tree.expand(tree.root(), &mut rng).unwrap();
        let _ = tree.expand(a, &mut rng).unwrap();

        let stats = tree.stats();
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.terminal_count, 0);
        // root 8 left, a 7 left, leaf 7 untouched
        assert_eq!(stats.untried_actions, 8 + 7 + 7);
        assert!((stats.expansion_ratio() - 2.0 / 24.0).abs() < 1e-12);
    }

    #[test]
    fn test_tree_iter() {
        let game = TicTacToe::new();
        let mut tree = MCTSTree::new(&game);
        let mut rng = GameRng::new(12);
        tree.expand(tree.root(), &mut rng).unwrap();

        let nodes: Vec<_> = tree.iter().collect();

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].0, NodeId::new(0));
        assert_eq!(nodes[1].0, NodeId::new(1));
        assert_eq!(nodes[1].1.parent(), NodeId::new(0));
    }
}
