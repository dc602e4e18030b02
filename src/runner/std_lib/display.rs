//! Display list built-ins: DisplayObject and MovieClip.

use crate::runner::argconv::{AnyRef, ArgUnpack, Coercible, Ref};
use crate::runner::ds::class::{DisplayObject, MovieClip, NativeClass};
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::value::JsValue;
use crate::runner::plugin::registry::BuiltInRegistry;
use crate::runner::plugin::types::{BuiltInObject, EvalContext};

pub const NAME: &str = "name";
pub const DEPTH: &str = "depth";
pub const DRAGGING: &str = "dragging";
pub const DRAG_LOCK_CENTER: &str = "dragLockCenter";
pub const DRAG_BOUNDS: [&str; 4] = ["dragLeft", "dragTop", "dragRight", "dragBottom"];
pub const AUDIO_SOURCE: &str = "audioSource";

/// Register DisplayObject and MovieClip with the registry.
pub fn register(registry: &mut BuiltInRegistry) {
    let display_object =
        BuiltInObject::new(DisplayObject::QUALIFIED_NAME).add_accessor::<String>(NAME);

    let movie_clip = BuiltInObject::new(MovieClip::QUALIFIED_NAME)
        .add_method("startDrag", movie_clip_start_drag)
        .add_method("stopDrag", movie_clip_stop_drag)
        .add_method("attachAudio", movie_clip_attach_audio)
        .add_method("setDepth", movie_clip_set_depth)
        .add_method("getDepth", movie_clip_get_depth);

    registry.register_object(display_object);
    registry.register_object(movie_clip);
}

/// MovieClip.startDrag(lockCenter = false, left, top, right, bottom)
///
/// Older content passes extra trailing arguments here, so leftovers are
/// not reported.
fn movie_clip_start_drag(
    ctx: &mut EvalContext,
    this: JsValue,
    args: &[JsValue],
) -> Result<JsValue, JErrorType> {
    let clip: Ref<MovieClip> = Ref::to_concrete(ctx, &this)?;
    let mut lock_center = false;
    let mut bounds = [f64::NAN; 4];
    {
        let [left, top, right, bottom] = &mut bounds;
        ArgUnpack::more_allowed(ctx, args)
            .defaulted(&mut lock_center, false)?
            .defaulted(left, f64::NAN)?
            .defaulted(top, f64::NAN)?
            .defaulted(right, f64::NAN)?
            .defaulted(bottom, f64::NAN)?;
    }

    clip.set(DRAGGING, ctx.to_value(&true));
    clip.set(DRAG_LOCK_CENTER, ctx.to_value(&lock_center));
    for (key, bound) in DRAG_BOUNDS.iter().zip(bounds.iter()) {
        if bound.is_nan() {
            clip.delete(key);
        } else {
            clip.set(key, ctx.to_value(bound));
        }
    }
    Ok(JsValue::Undefined)
}

/// MovieClip.stopDrag()
fn movie_clip_stop_drag(
    ctx: &mut EvalContext,
    this: JsValue,
    args: &[JsValue],
) -> Result<JsValue, JErrorType> {
    let clip: Ref<MovieClip> = Ref::to_concrete(ctx, &this)?;
    ArgUnpack::new(ctx, args).finish();

    clip.set(DRAGGING, ctx.to_value(&false));
    Ok(JsValue::Undefined)
}

/// MovieClip.attachAudio(source)
///
/// Any value is accepted as a source; null or undefined detaches.
fn movie_clip_attach_audio(
    ctx: &mut EvalContext,
    this: JsValue,
    args: &[JsValue],
) -> Result<JsValue, JErrorType> {
    let clip: Ref<MovieClip> = Ref::to_concrete(ctx, &this)?;
    let mut source = AnyRef::default();
    ArgUnpack::new(ctx, args).required(&mut source)?;

    match &source {
        AnyRef::Object(o) => tracing::debug!(source = %o.id(), "audio attached"),
        AnyRef::Value(v) => tracing::debug!(source = ?v, "audio attached"),
        AnyRef::Null | AnyRef::Undefined => tracing::debug!("audio detached"),
    }
    clip.set(AUDIO_SOURCE, ctx.to_value(&source));
    Ok(JsValue::Undefined)
}

/// MovieClip.setDepth(depth)
fn movie_clip_set_depth(
    ctx: &mut EvalContext,
    this: JsValue,
    args: &[JsValue],
) -> Result<JsValue, JErrorType> {
    let clip: Ref<MovieClip> = Ref::to_concrete(ctx, &this)?;
    let mut depth = 0i32;
    ArgUnpack::new(ctx, args).required(&mut depth)?;

    clip.set(DEPTH, ctx.to_value(&depth));
    Ok(JsValue::Undefined)
}

/// MovieClip.getDepth()
fn movie_clip_get_depth(
    ctx: &mut EvalContext,
    this: JsValue,
    args: &[JsValue],
) -> Result<JsValue, JErrorType> {
    let clip: Ref<MovieClip> = Ref::to_concrete(ctx, &this)?;
    ArgUnpack::new(ctx, args).finish();

    let depth = match clip.get(DEPTH) {
        Some(stored) => i32::to_concrete(ctx, &stored)?,
        None => 0,
    };
    Ok(ctx.to_value(&depth))
}
