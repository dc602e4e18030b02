//! Positional argument unpacking for native calls.
//!
//! An [`ArgUnpack`] walks one call's arguments left to right, binding each to
//! a caller-owned native variable through [`Coercible`]. Slots are applied in
//! the order they are declared and the first failure stops the walk: slots
//! already bound keep their new values, the failing slot and everything after
//! it are left alone.
//!
//! ```
//! use argconv::runner::argconv::{ArgUnpack, NullableRef};
//! use argconv::runner::ds::class::DisplayObject;
//! use argconv::runner::ds::value::JsValue;
//! use argconv::runner::plugin::types::EvalContext;
//!
//! let ctx = EvalContext::new();
//! let args = [JsValue::Integer(42)];
//! let mut depth = 0;
//! let mut visible = false;
//! let mut parent: NullableRef<DisplayObject> = None;
//! ArgUnpack::new(&ctx, &args)
//!     .required(&mut depth)?
//!     .defaulted(&mut visible, true)?
//!     .defaulted(&mut parent, None)?;
//! assert_eq!((depth, visible, parent.is_none()), (42, true, true));
//! # Ok::<(), argconv::runner::ds::error::JErrorType>(())
//! ```

use std::any::type_name;

use crate::runner::argconv::coercion::Coercible;
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::value::JsValue;
use crate::runner::plugin::types::{Diagnostic, EvalContext};

/// How leftover arguments are treated once every slot has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArityMode {
    /// Leftovers produce one unconsumed-argument diagnostic.
    Exact,
    /// Leftovers are expected; used by natives that take optional trailing
    /// arguments they never read.
    ExtraAllowed,
}

impl Default for ArityMode {
    fn default() -> Self {
        ArityMode::Exact
    }
}

/// Cursor over the arguments of a single native call.
pub struct ArgUnpack<'a> {
    ctx: &'a EvalContext,
    args: &'a [JsValue],
    mode: ArityMode,
    position: usize,
    remaining: usize,
    slots: usize,
}

impl<'a> ArgUnpack<'a> {
    /// Exact-arity cursor.
    pub fn new(ctx: &'a EvalContext, args: &'a [JsValue]) -> Self {
        Self::with_mode(ctx, args, ArityMode::Exact)
    }

    /// Cursor that stays quiet about unread trailing arguments.
    pub fn more_allowed(ctx: &'a EvalContext, args: &'a [JsValue]) -> Self {
        Self::with_mode(ctx, args, ArityMode::ExtraAllowed)
    }

    pub fn with_mode(ctx: &'a EvalContext, args: &'a [JsValue], mode: ArityMode) -> Self {
        ArgUnpack {
            ctx,
            args,
            mode,
            position: 0,
            remaining: args.len(),
            slots: 0,
        }
    }

    pub fn mode(&self) -> ArityMode {
        self.mode
    }

    /// Arguments not yet bound to a slot.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn consumed(&self) -> usize {
        self.position
    }

    /// Bind the next argument to `target`, failing if none is left.
    pub fn required<T: Coercible>(&mut self, target: &mut T) -> Result<&mut Self, JErrorType> {
        if let Some(value) = self.next_argument(true)? {
            let bound = T::to_concrete(self.ctx, value);
            *target = self.settle(bound, type_name::<T>())?;
        }
        Ok(self)
    }

    /// Bind the next argument to `target`, or store `default` if none is left.
    /// The default is stored as is; no coercion runs.
    pub fn defaulted<T: Coercible>(
        &mut self,
        target: &mut T,
        default: T,
    ) -> Result<&mut Self, JErrorType> {
        match self.next_argument(false)? {
            Some(value) => {
                let bound = T::to_concrete(self.ctx, value);
                *target = self.settle(bound, type_name::<T>())?;
            }
            None => {
                tracing::debug!(slot = self.slots - 1, ty = type_name::<T>(), "default applied");
                *target = default;
            }
        }
        Ok(self)
    }

    /// End the walk. Natives that declare no slots call this so extra
    /// arguments are still reported.
    pub fn finish(self) {}

    /// Apply one declared slot.
    pub fn slot(&mut self, slot: Slot<'_>) -> Result<&mut Self, JErrorType> {
        let Slot {
            mut target,
            required,
            ty,
        } = slot;
        match self.next_argument(required)? {
            Some(value) => {
                let bound = target.bind(self.ctx, value);
                self.settle(bound, ty)?;
            }
            None => {
                tracing::debug!(slot = self.slots - 1, ty, "default applied");
                target.apply_default();
            }
        }
        Ok(self)
    }

    /// Start a new slot and return the argument it should bind, if any.
    fn next_argument(&mut self, required: bool) -> Result<Option<&'a JsValue>, JErrorType> {
        let index = self.slots;
        self.slots += 1;
        let args: &'a [JsValue] = self.args;
        match args.get(self.position) {
            Some(value) if self.remaining > 0 => Ok(Some(value)),
            _ if required => Err(JErrorType::wrong_argument_count(
                &self.ctx.callee(),
                index + 1,
                self.args.len(),
            )),
            _ => Ok(None),
        }
    }

    /// Advance past the current argument if its coercion succeeded.
    fn settle<T>(&mut self, bound: Result<T, JErrorType>, ty: &str) -> Result<T, JErrorType> {
        let v = bound?;
        tracing::debug!(slot = self.slots - 1, ty, "argument bound");
        self.position += 1;
        self.remaining -= 1;
        Ok(v)
    }
}

impl Drop for ArgUnpack<'_> {
    fn drop(&mut self) {
        if self.mode != ArityMode::Exact
            || self.remaining == 0
            || !self.ctx.config().report_unconsumed_arguments
        {
            return;
        }
        let diagnostic = Diagnostic::UnconsumedArguments {
            callee: self.ctx.callee(),
            remaining: self.remaining,
        };
        tracing::info!("{}", diagnostic);
        self.ctx.report(diagnostic);
    }
}

trait SlotTarget {
    fn bind(&mut self, ctx: &EvalContext, value: &JsValue) -> Result<(), JErrorType>;
    fn apply_default(&mut self);
}

struct Target<'s, T> {
    var: &'s mut T,
    default: Option<T>,
}

impl<T: Coercible> SlotTarget for Target<'_, T> {
    fn bind(&mut self, ctx: &EvalContext, value: &JsValue) -> Result<(), JErrorType> {
        *self.var = T::to_concrete(ctx, value)?;
        Ok(())
    }

    fn apply_default(&mut self) {
        if let Some(default) = self.default.take() {
            *self.var = default;
        }
    }
}

/// One entry of a declared argument list for [`unpack_args`].
pub struct Slot<'s> {
    target: Box<dyn SlotTarget + 's>,
    required: bool,
    ty: &'static str,
}

impl<'s> Slot<'s> {
    pub fn required<T: Coercible + 's>(var: &'s mut T) -> Self {
        Slot {
            target: Box::new(Target { var, default: None }),
            required: true,
            ty: type_name::<T>(),
        }
    }

    pub fn defaulted<T: Coercible + 's>(var: &'s mut T, default: T) -> Self {
        Slot {
            target: Box::new(Target {
                var,
                default: Some(default),
            }),
            required: false,
            ty: type_name::<T>(),
        }
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// Bind `args` to `slots` in order with a single cursor.
///
/// Returns at the first failing slot. The unconsumed-argument diagnostic is
/// recorded before this returns, whether or not a slot failed.
pub fn unpack_args(
    ctx: &EvalContext,
    args: &[JsValue],
    mode: ArityMode,
    slots: Vec<Slot<'_>>,
) -> Result<(), JErrorType> {
    let mut unpack = ArgUnpack::with_mode(ctx, args, mode);
    for slot in slots {
        unpack.slot(slot)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::ds::error::ArgumentErrorKind;
    use crate::runner::plugin::config::RuntimeConfig;

    #[test]
    fn test_required_advances_cursor() {
        let ctx = EvalContext::new();
        let args = [JsValue::Integer(1), JsValue::from("2")];
        let mut a = 0;
        let mut b = 0.0;
        let mut unpack = ArgUnpack::new(&ctx, &args);
        unpack.required(&mut a).unwrap().required(&mut b).unwrap();
        assert_eq!(unpack.remaining(), 0);
        assert_eq!(unpack.consumed(), 2);
        assert_eq!((a, b), (1, 2.0));
    }

    #[test]
    fn test_defaulted_leaves_cursor_alone() {
        let ctx = EvalContext::new();
        let mut flag = false;
        let args: [JsValue; 0] = [];
        let mut unpack = ArgUnpack::new(&ctx, &args);
        unpack.defaulted(&mut flag, true).unwrap();
        assert!(flag);
        assert_eq!(unpack.remaining(), 0);
        assert_eq!(unpack.consumed(), 0);
    }

    #[test]
    fn test_wrong_count_names_failing_slot() {
        let ctx = EvalContext::new();
        ctx.set_callee(Some("Thing.move".to_string()));
        let args = [JsValue::Integer(5)];
        let mut a = 0;
        let mut b = 0;
        let err = ArgUnpack::new(&ctx, &args)
            .required(&mut a)
            .and_then(|u| u.required(&mut b))
            .map(|_| ())
            .unwrap_err();
        assert_eq!(
            err,
            JErrorType::ArgumentError(ArgumentErrorKind::WrongArgumentCount {
                callee: "Thing.move".to_string(),
                expected: 2,
                received: 1,
            })
        );
        assert_eq!(a, 5);
        assert_eq!(b, 0);
    }

    #[test]
    fn test_one_diagnostic_for_many_leftovers() {
        let ctx = EvalContext::new();
        let args = [JsValue::Integer(1), JsValue::Integer(2), JsValue::Integer(3)];
        let mut a = 0;
        ArgUnpack::new(&ctx, &args).required(&mut a).unwrap();
        assert_eq!(
            ctx.take_diagnostics(),
            vec![Diagnostic::UnconsumedArguments {
                callee: "object".to_string(),
                remaining: 2,
            }]
        );
    }

    #[test]
    fn test_diagnostic_can_be_disabled() {
        let ctx = EvalContext::with_config(
            RuntimeConfig::new().with_report_unconsumed_arguments(false),
        );
        let args = [JsValue::Integer(1), JsValue::Integer(2)];
        let mut a = 0;
        ArgUnpack::new(&ctx, &args).required(&mut a).unwrap();
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn test_diagnostic_after_failed_slot() {
        let ctx = EvalContext::new();
        let args = [JsValue::Integer(1), JsValue::Integer(2), JsValue::Integer(3)];
        let mut handle: crate::runner::argconv::handle::NullableRef<
            crate::runner::ds::class::Shape,
        > = None;
        let result = ArgUnpack::new(&ctx, &args).required(&mut handle).map(|_| ());
        assert!(result.is_err());
        // The failing argument was never consumed.
        assert_eq!(
            ctx.take_diagnostics(),
            vec![Diagnostic::UnconsumedArguments {
                callee: "object".to_string(),
                remaining: 3,
            }]
        );
    }

    #[test]
    fn test_wrong_count_leaves_nothing_to_report() {
        let ctx = EvalContext::new();
        let args = [JsValue::Integer(1)];
        let (mut a, mut b) = (0, 0);
        let result = ArgUnpack::new(&ctx, &args)
            .required(&mut a)
            .and_then(|u| u.required(&mut b))
            .map(|_| ());
        assert!(result.is_err());
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn test_finish_reports_extra_arguments() {
        let ctx = EvalContext::new();
        ctx.set_callee(Some("Color.getRGB".to_string()));
        let args = [JsValue::Null];
        ArgUnpack::new(&ctx, &args).finish();
        assert_eq!(
            ctx.take_diagnostics(),
            vec![Diagnostic::UnconsumedArguments {
                callee: "Color.getRGB".to_string(),
                remaining: 1,
            }]
        );

        let none: [JsValue; 0] = [];
        ArgUnpack::new(&ctx, &none).finish();
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn test_slot_list() {
        let ctx = EvalContext::new();
        let args = [JsValue::from("7")];
        let mut n = 0u32;
        let mut s = String::new();
        unpack_args(
            &ctx,
            &args,
            ArityMode::Exact,
            vec![Slot::required(&mut n), Slot::defaulted(&mut s, "none".to_string())],
        )
        .unwrap();
        assert_eq!(n, 7);
        assert_eq!(s, "none");
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn test_slot_list_extra_allowed() {
        let ctx = EvalContext::new();
        let args = [JsValue::Boolean(true), JsValue::Null, JsValue::Null];
        let mut b = false;
        unpack_args(&ctx, &args, ArityMode::ExtraAllowed, vec![Slot::required(&mut b)]).unwrap();
        assert!(b);
        assert!(ctx.diagnostics().is_empty());
    }
}
