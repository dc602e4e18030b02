//! Argument marshalling between script values and native functions.
//!
//! - [`coercion`]: the [`Coercible`] protocol, one forward/reverse pair per
//!   native parameter type.
//! - [`handle`]: owning handles ([`Ref`], [`NullableRef`], [`AnyRef`]) that
//!   carry one counted reference each.
//! - [`unpack`]: the [`ArgUnpack`] cursor and the [`unpack_args`] slot list
//!   that apply coercions to a call's arguments.
//! - [`accessor`]: getter and setter natives generated from a coercible type.

pub mod accessor;
pub mod coercion;
pub mod handle;
pub mod unpack;

pub use coercion::Coercible;
pub use handle::{AnyRef, NullableRef, Ref};
pub use unpack::{unpack_args, ArgUnpack, ArityMode, Slot};
