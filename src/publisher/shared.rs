//! Cheap read handle on the latest published context.

use std::cell::Cell;
use std::rc::Rc;

use crate::models::SurfaceContext;
use crate::traits::SurfaceContextProvider;

/// Shared view of a publisher's current [`SurfaceContext`].
///
/// Clones observe the same cell; every publication is visible through all
/// of them.
#[derive(Debug, Clone, Default)]
pub struct SharedSurfaceContext {
    cell: Rc<Cell<SurfaceContext>>,
}

impl SharedSurfaceContext {
    pub fn new(initial: SurfaceContext) -> Self {
        Self {
            cell: Rc::new(Cell::new(initial)),
        }
    }

    pub fn get(&self) -> SurfaceContext {
        self.cell.get()
    }

    pub(crate) fn set(&self, ctx: SurfaceContext) {
        self.cell.set(ctx);
    }
}

impl SurfaceContextProvider for SharedSurfaceContext {
    fn surface_context(&self) -> SurfaceContext {
        self.get()
    }
}
