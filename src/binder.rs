//! Binding scalable prop declarations to a surface context.
//!
//! Two ways in:
//!
//! - [`bind_scaled_props`] returns a compute function over any
//!   [`SurfaceContextProvider`]; callers decide when to run it.
//! - [`ScaledPropsBinder`] subscribes to a [`SurfacePublisher`] and keeps the
//!   last complete [`ScaledPropertySet`] up to date on every publication.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::ConfigError;
use crate::models::{ScalablePropSet, ScaledPropertySet, SurfaceContext, WithScaledProps};
use crate::publisher::{Subscription, SurfacePublisher};
use crate::scale::scale_prop;
use crate::traits::SurfaceContextProvider;

/// Scale every prop in `specs` against `ctx`.
///
/// The first failing prop aborts the whole computation.
///
/// ```
/// use scaled_props::binder::compute_scaled_props;
/// use scaled_props::models::{ScalableProp, ScalablePropSet, SurfaceBounds, SurfaceContext, SurfaceState};
///
/// let specs = ScalablePropSet::new().with("fontSize", ScalableProp::new(20.0, 40.0))?;
/// let ctx = SurfaceContext::new(
///     SurfaceBounds::new().with_width(400.0, 1200.0),
///     SurfaceState::new(800.0, 600.0),
/// );
///
/// let scaled = compute_scaled_props(&specs, &ctx)?;
/// assert_eq!(scaled.get("fontSize"), Some(30.0));
/// # Ok::<(), scaled_props::error::ConfigError>(())
/// ```
pub fn compute_scaled_props(
    specs: &ScalablePropSet,
    ctx: &SurfaceContext,
) -> Result<ScaledPropertySet, ConfigError> {
    specs
        .iter()
        .map(|(name, prop)| Ok((name.clone(), scale_prop(name, prop, ctx)?)))
        .collect()
}

/// A compute function reading the provider's current context on each call.
pub fn bind_scaled_props<P>(
    specs: ScalablePropSet,
    provider: P,
) -> impl Fn() -> Result<ScaledPropertySet, ConfigError>
where
    P: SurfaceContextProvider,
{
    move || compute_scaled_props(&specs, &provider.surface_context())
}

#[derive(Debug, Default)]
struct BinderState {
    latest: RefCell<Option<Result<ScaledPropertySet, ConfigError>>>,
    recomputes: Cell<u64>,
}

impl BinderState {
    fn recompute(&self, specs: &ScalablePropSet, ctx: &SurfaceContext) {
        let result = compute_scaled_props(specs, ctx);
        self.recomputes.set(self.recomputes.get() + 1);

        match &result {
            Ok(set) => tracing::debug!(props = set.len(), surface = %ctx.state, "recomputed scaled props"),
            Err(err) => tracing::warn!(
                code = err.error_code(),
                property = err.property().unwrap_or("-"),
                "scaled prop recomputation failed: {}",
                err
            ),
        }

        *self.latest.borrow_mut() = Some(result);
    }
}

/// Keeps a [`ScaledPropertySet`] in sync with a publisher.
///
/// Dropping the binder unsubscribes it.
#[derive(Debug)]
pub struct ScaledPropsBinder {
    specs: Rc<ScalablePropSet>,
    state: Rc<BinderState>,
    _subscription: Subscription,
}

impl ScaledPropsBinder {
    /// Subscribe to `publisher` and compute against its current context.
    pub fn attach(specs: ScalablePropSet, publisher: &mut SurfacePublisher) -> Self {
        let specs = Rc::new(specs);
        let state = Rc::new(BinderState::default());

        state.recompute(&specs, &publisher.context());

        let subscription = {
            let specs = Rc::clone(&specs);
            let state = Rc::clone(&state);
            publisher.subscribe(move |ctx| state.recompute(&specs, ctx))
        };

        Self {
            specs,
            state,
            _subscription: subscription,
        }
    }

    pub fn specs(&self) -> &ScalablePropSet {
        &self.specs
    }

    /// The latest computation: a complete set, or the error that aborted it.
    pub fn scaled_props(&self) -> Result<ScaledPropertySet, ConfigError> {
        match &*self.state.latest.borrow() {
            Some(result) => result.clone(),
            // attach() always computes once.
            None => Ok(ScaledPropertySet::default()),
        }
    }

    /// Pair `props` with the latest scaled set.
    pub fn wrap<P>(&self, props: P) -> Result<WithScaledProps<P>, ConfigError> {
        Ok(WithScaledProps::new(props, self.scaled_props()?))
    }

    pub fn recompute_count(&self) -> u64 {
        self.state.recomputes.get()
    }
}
