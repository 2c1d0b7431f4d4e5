//! Mathematical utilities and decisions.
//!
//! The contents of this module are defined in the `reactor-base` crate, so that they can
//! be used without the rest of `reactor`.

#[doc(inline)]
pub use reactor_base::math::*;

// reexport for callers that want to do their own vector math on grid points
#[doc(no_inline)]
pub use reactor_base::euclid;
