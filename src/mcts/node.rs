//! MCTS node structures.
//!
//! Nodes live in an [`MCTSTree`](super::MCTSTree) arena and refer to their
//! parent and children by [`NodeId`]. The parent link is navigational only;
//! the arena owns every node and drops the tree as a unit.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Action, GameError, GameRng, GameState, StepOutcome};

/// Index into the MCTSTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the MCTS tree.
///
/// `value` accumulates rewards from the perspective of the player to move
/// at this node, i.e. the opponent of whoever played `action` to get here.
#[derive(Clone, Debug)]
pub struct MCTSNode<'a, S: GameState> {
    /// Game state at this node. Borrowed for the root, owned otherwise.
    pub(crate) state: Cow<'a, S>,

    /// Parent node (NONE for root).
    pub(crate) parent: NodeId,

    /// Action that led from the parent to this node (None for root).
    pub(crate) action: Option<Action>,

    /// Expanded children, in expansion order.
    pub(crate) children: SmallVec<[NodeId; 8]>,

    /// Legal actions not yet expanded into children.
    pub(crate) untried_actions: Vec<Action>,

    /// Number of simulations that passed through this node.
    pub(crate) visits: u32,

    /// Sum of backpropagated rewards.
    pub(crate) value: f64,

    /// Depth in tree (root = 0).
    pub(crate) depth: u16,

    /// Reward returned by the step that produced this node, if that step
    /// ended the game (mover's perspective).
    pub(crate) terminal_reward: Option<f64>,
}

impl<'a, S: GameState> MCTSNode<'a, S> {
    /// Create a root node observing the caller's state without cloning it.
    pub fn root(state: &'a S) -> Self {
        Self::with_state(Cow::Borrowed(state), NodeId::NONE, None, 0, None)
    }

    /// Create a child node owning its state.
    pub fn child(state: S, parent: NodeId, action: Action, depth: u16, outcome: StepOutcome) -> Self {
        Self::with_state(Cow::Owned(state), parent, Some(action), depth, outcome.reward())
    }

    fn with_state(
        state: Cow<'a, S>,
        parent: NodeId,
        action: Option<Action>,
        depth: u16,
        terminal_reward: Option<f64>,
    ) -> Self {
        let untried_actions = state.legal_actions();
        Self {
            state,
            parent,
            action,
            children: SmallVec::new(),
            untried_actions,
            visits: 0,
            value: 0.0,
            depth,
            terminal_reward,
        }
    }

    /// Game state at this node.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Parent node (NONE for root).
    #[must_use]
    pub fn parent(&self) -> NodeId {
        self.parent
    }

    /// Action that produced this node.
    #[must_use]
    pub fn action(&self) -> Option<Action> {
        self.action
    }

    /// Expanded children.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Actions not yet expanded.
    #[must_use]
    pub fn untried_actions(&self) -> &[Action] {
        &self.untried_actions
    }

    /// Visit count.
    #[must_use]
    pub fn visits(&self) -> u32 {
        self.visits
    }

    /// Accumulated value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Mean value (0 when unvisited).
    #[must_use]
    pub fn mean_value(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.value / self.visits as f64
        }
    }

    /// Depth in tree.
    #[must_use]
    pub fn depth(&self) -> u16 {
        self.depth
    }

    /// True iff every legal action has been expanded.
    #[must_use]
    pub fn is_fully_expanded(&self) -> bool {
        self.untried_actions.is_empty()
    }

    /// True iff the node's state has no legal actions.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Uniform-random rollout from a clone of this node's state.
    ///
    /// Returns the outcome from the perspective of the player to move at
    /// this node. A node produced by a game-ending move scores the negation
    /// of that move's reward without rolling out.
    pub fn simulate(&self, rng: &mut GameRng) -> Result<f64, GameError> {
        if let Some(reward) = self.terminal_reward {
            return Ok(-reward);
        }

        let mut state = S::clone(&self.state);
        let initial_player = state.current_player();

        loop {
            let actions = state.legal_actions();
            let Some(&action) = rng.choose(&actions) else {
                // Terminal without a recorded outcome (e.g. a finished root)
                return Ok(0.0);
            };

            let mover = state.current_player();
            if let StepOutcome::Finished { reward } = state.step(action)? {
                return Ok(if mover == initial_player { reward } else { -reward });
            }
        }
    }
}
