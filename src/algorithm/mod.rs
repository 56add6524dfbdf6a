/// Simulation state and the auto-advance driver
pub mod executor;
/// Collapse application and the constraint cascade
pub mod propagation;
/// Adjacency compatibility between pipe orientations
pub mod rules;
/// Frontier recomputation and minimal-entropy tie-break selection
pub mod selection;
