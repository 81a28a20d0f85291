//! Mock implementations for test fixtures.
//!
//! Re-exports the mocks from `scaled_props::adapters::mock` and adds a
//! recording subscriber.

pub use scaled_props::adapters::mock::{ManualClock, MockSampler};

use std::cell::RefCell;
use std::rc::Rc;

use scaled_props::models::SurfaceContext;
use scaled_props::publisher::{Subscription, SurfacePublisher};

/// Records every context a publisher delivers.
#[derive(Clone, Default)]
pub struct Recorder {
    seen: Rc<RefCell<Vec<SurfaceContext>>>,
}

impl Recorder {
    pub fn attach(publisher: &mut SurfacePublisher) -> (Self, Subscription) {
        let recorder = Self::default();
        let sink = recorder.clone();
        let sub = publisher.subscribe(move |ctx| sink.seen.borrow_mut().push(*ctx));
        (recorder, sub)
    }

    pub fn count(&self) -> usize {
        self.seen.borrow().len()
    }

    pub fn widths(&self) -> Vec<Option<f64>> {
        self.seen.borrow().iter().map(|ctx| ctx.screen_width()).collect()
    }

    pub fn last(&self) -> Option<SurfaceContext> {
        self.seen.borrow().last().copied()
    }
}
