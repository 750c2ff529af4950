//! Item renderer seam.
//!
//! The engine never produces item content itself; it only asks an external
//! renderer to materialize an item at a logical index or to tear one down.

/// Materializes and destroys item nodes on behalf of the engine.
///
/// Both operations are synchronous. The engine guarantees by construction
/// that `create` is only called with indices below the configured total item
/// count, and that each handle is destroyed at most once; destroying a
/// handle twice is a caller bug, not a renderer responsibility.
pub trait ItemRenderer {
    /// Opaque handle to a materialized item node.
    type Handle;

    /// Materializes the item at `index` and returns its handle.
    fn create(&mut self, index: usize) -> Self::Handle;

    /// Tears down a previously created item.
    fn destroy(&mut self, handle: Self::Handle);
}
