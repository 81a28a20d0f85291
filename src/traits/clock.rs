//! Clock trait abstraction.
//!
//! Rate limiting is expressed in deadlines. Reading "now" through this trait
//! lets tests move time forward explicitly instead of sleeping.

use std::time::Instant;

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
