//! Graph-coloring puzzle: color every node so that no edge joins two nodes of the
//! same color, across a short sequence of hand-authored 3D levels.
//!
//! [`graph`] and [`game`] hold the puzzle state machine and have no rendering
//! dependencies beyond math types. [`camera`], [`input`] and [`visual`] are the Bevy
//! host that reads the session each frame and feeds player input back into it.

pub mod camera;
pub mod game;
pub mod graph;
pub mod input;
pub mod visual;
