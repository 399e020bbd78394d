// game/session.rs

use super::config::GameConfig;
use super::levels::LevelCatalog;
use super::scoring::{ScoreBreakdown, apply_delta, compute_level_score};
use super::transition::Transition;
use crate::graph::*;
use bevy::math::Vec3;
use bevy::prelude::Resource;
use serde::Serialize;

/// Where a playthrough stands
#[derive(Debug, Clone)]
pub enum GamePhase {
    /// Accepting selection and coloring on this level
    Playing { level: usize },
    /// Animating between levels; input is ignored
    Transitioning(Transition),
    /// Final level solved; only a reset leaves this state
    Completed { level: usize },
}

impl GamePhase {
    pub fn name(&self) -> &'static str {
        match self {
            GamePhase::Playing { .. } => "playing",
            GamePhase::Transitioning(_) => "transitioning",
            GamePhase::Completed { .. } => "completed",
        }
    }
}

/// Why an input was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NotPlaying,
    NoSelection,
}

/// Result of a session action
#[derive(Debug, Clone, PartialEq)]
pub enum SessionResult {
    /// Input arrived when it could not apply
    Ignored(IgnoreReason),
    /// Selection changed (None clears it)
    Selected(Option<NodeId>),
    /// A node was colored but the level is not solved yet
    Colored {
        node: NodeId,
        color: Color,
        issue: ColoringError,
    },
    /// Level solved and scored; a transition to `next_level` has started
    LevelComplete {
        level: usize,
        breakdown: ScoreBreakdown,
        next_level: usize,
    },
    /// Final level solved and scored
    GameComplete {
        level: usize,
        breakdown: ScoreBreakdown,
        final_score: u32,
    },
}

/// Result of advancing time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickResult {
    /// Nothing is animating
    Idle,
    /// Transition still running, with its normalized progress
    Transitioning { progress: f32 },
    /// Transition finished and this level is now playable
    LevelStarted(usize),
}

/// What the renderer needs to draw one node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeView {
    pub id: NodeId,
    pub position: Vec3,
    pub color: Option<Color>,
    pub selected: bool,
}

/// Serializable summary for debug dumps
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub phase: &'static str,
    pub level: usize,
    pub score: u32,
    pub moves: u32,
    pub selected: Option<usize>,
    pub completed: bool,
    pub colors: Vec<Option<Color>>,
    pub transition_progress: Option<f32>,
}

/// One playthrough: working copies of every level plus scoring and phase
///
/// This is the only owner of puzzle state. Renderers read it; input goes through
/// [`GameSession::select_node`], [`GameSession::apply_color`] and [`GameSession::reset`].
#[derive(Debug, Clone, Resource)]
pub struct GameSession {
    config: GameConfig,
    catalog: LevelCatalog,
    /// Working copies, one per catalog entry (colors only ever change here)
    levels: Vec<ColorGraph>,
    phase: GamePhase,
    score: u32,
    /// Coloring moves since the last full reset (not per level)
    move_count: u32,
    selected: Option<NodeId>,
    camera_y: f32,
}

impl GameSession {
    /// Start a fresh playthrough on level 0
    pub fn new(config: GameConfig) -> Self {
        let catalog = LevelCatalog::standard();
        let camera_y = config.camera_start_y;
        GameSession {
            levels: catalog.working_copies(),
            catalog,
            config,
            phase: GamePhase::Playing { level: 0 },
            score: 0,
            move_count: 0,
            selected: None,
            camera_y,
        }
    }

    // === Query Methods (for Bevy systems to read state) ===

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    pub fn current_level_index(&self) -> usize {
        match &self.phase {
            GamePhase::Playing { level } | GamePhase::Completed { level } => *level,
            GamePhase::Transitioning(transition) => transition.from_level,
        }
    }

    pub fn level_count(&self) -> usize {
        self.catalog.len()
    }

    /// Working graph of the current level
    pub fn current_graph(&self) -> &ColorGraph {
        &self.levels[self.current_level_index()]
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn selected_node(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.phase, GamePhase::Playing { .. })
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, GamePhase::Transitioning(_))
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.phase, GamePhase::Completed { .. })
    }

    /// Edges are hidden while nodes are moving between layouts
    pub fn edges_visible(&self) -> bool {
        !self.is_transitioning()
    }

    pub fn transition(&self) -> Option<&Transition> {
        match &self.phase {
            GamePhase::Transitioning(transition) => Some(transition),
            _ => None,
        }
    }

    pub fn camera_y(&self) -> f32 {
        self.camera_y
    }

    /// Positions as currently displayed, interpolated mid-transition
    pub fn node_positions(&self) -> Vec<Vec3> {
        match &self.phase {
            GamePhase::Transitioning(transition) => transition.positions(),
            _ => self
                .current_graph()
                .nodes()
                .iter()
                .map(|node| node.position)
                .collect(),
        }
    }

    /// Everything needed to draw the nodes this frame
    pub fn render_nodes(&self) -> Vec<NodeView> {
        let graph = self.current_graph();
        self.node_positions()
            .into_iter()
            .enumerate()
            .map(|(i, position)| {
                let id = NodeId(i);
                NodeView {
                    id,
                    position,
                    color: graph.nodes().get(i).and_then(|node| node.color),
                    selected: self.selected == Some(id),
                }
            })
            .collect()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase.name(),
            level: self.current_level_index(),
            score: self.score,
            moves: self.move_count,
            selected: self.selected.map(|id| id.index()),
            completed: self.is_completed(),
            colors: self.current_graph().nodes().iter().map(|n| n.color).collect(),
            transition_progress: self.transition().map(Transition::progress),
        }
    }

    // === Mutation Methods (for handling user input) ===

    /// Store the node under the pointer (None clears the selection)
    pub fn select_node(&mut self, node: Option<NodeId>) -> SessionResult {
        if !self.is_playing() {
            return SessionResult::Ignored(IgnoreReason::NotPlaying);
        }
        if let Some(id) = node {
            assert!(
                self.current_graph().contains_node(id),
                "Selected node {} is not in level {}",
                id,
                self.current_level_index()
            );
        }

        self.selected = node;
        SessionResult::Selected(node)
    }

    /// Color the selected node, then validate and maybe score the level
    pub fn apply_color(&mut self, color: Color) -> SessionResult {
        let GamePhase::Playing { level } = self.phase else {
            return SessionResult::Ignored(IgnoreReason::NotPlaying);
        };
        let Some(node) = self.selected else {
            return SessionResult::Ignored(IgnoreReason::NoSelection);
        };

        self.levels[level].color_node(node, Some(color));
        self.move_count += 1;
        log::debug!(
            "Move {}: node {} -> {} on level {}",
            self.move_count,
            node,
            color,
            level
        );

        match check_coloring(&self.levels[level]) {
            Ok(()) => self.complete_level(level),
            Err(issue) => {
                log::debug!("Level {} not solved: {}", level, issue);
                SessionResult::Colored { node, color, issue }
            }
        }
    }

    /// Advance animation time by `delta` seconds
    pub fn tick(&mut self, delta: f32) -> TickResult {
        let GamePhase::Transitioning(transition) = &mut self.phase else {
            return TickResult::Idle;
        };

        let finished = transition.advance(delta);
        self.camera_y = transition.camera_y();
        if !finished {
            return TickResult::Transitioning {
                progress: transition.progress(),
            };
        }

        let next = transition.to_level;
        self.levels[next].reset_colors();
        self.camera_y = self.config.camera_end_y;
        self.phase = GamePhase::Playing { level: next };
        log::info!("Transition complete, now on level {}", next);
        TickResult::LevelStarted(next)
    }

    /// Advance by one nominal frame
    pub fn tick_frame(&mut self) -> TickResult {
        self.tick(self.config.frame_delta)
    }

    /// Back to level 0 with fresh graphs, zero score and moves
    pub fn reset(&mut self) {
        self.levels = self.catalog.working_copies();
        self.phase = GamePhase::Playing { level: 0 };
        self.score = 0;
        self.move_count = 0;
        self.selected = None;
        self.camera_y = self.config.camera_start_y;
        log::info!("Game reset");
    }

    fn complete_level(&mut self, level: usize) -> SessionResult {
        let breakdown = compute_level_score(&self.levels[level], self.move_count, level);
        self.score = apply_delta(self.score, breakdown.delta());
        self.selected = None;
        log::info!(
            "Level {} completed: {} (total {})",
            level + 1,
            breakdown,
            self.score
        );

        if !self.catalog.has_successor(level) {
            self.phase = GamePhase::Completed { level };
            log::info!("All levels completed! Final score: {}", self.score);
            return SessionResult::GameComplete {
                level,
                breakdown,
                final_score: self.score,
            };
        }

        let next_level = level + 1;
        let transition = Transition::start(
            level,
            &self.levels[level],
            next_level,
            &self.levels[next_level],
            self.config.transition_duration,
            (self.config.camera_start_y, self.config.camera_end_y),
        );
        self.camera_y = self.config.camera_start_y;
        self.phase = GamePhase::Transitioning(transition);
        log::info!("Starting transition to level {}", next_level + 1);

        SessionResult::LevelComplete {
            level,
            breakdown,
            next_level,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
