//! Color built-in object.
//!
//! Tints a display object. The target is optional and can be left empty.

use crate::runner::argconv::{ArgUnpack, Coercible, NullableRef, Ref};
use crate::runner::ds::class::{Color, DisplayObject, NativeClass};
use crate::runner::ds::color::Rgb;
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::value::JsValue;
use crate::runner::plugin::registry::BuiltInRegistry;
use crate::runner::plugin::types::{BuiltInObject, EvalContext};

const TARGET: &str = "target";
const RGB: &str = "rgb";

/// Register the Color class with the registry.
pub fn register(registry: &mut BuiltInRegistry) {
    let color = BuiltInObject::new(Color::QUALIFIED_NAME)
        .with_constructor(color_constructor)
        .add_method("setRGB", color_set_rgb)
        .add_method("getRGB", color_get_rgb)
        .add_method("getTarget", color_get_target);

    registry.register_object(color);
}

/// new Color(target = null)
fn color_constructor(
    ctx: &mut EvalContext,
    this: JsValue,
    args: &[JsValue],
) -> Result<JsValue, JErrorType> {
    let color: Ref<Color> = Ref::to_concrete(ctx, &this)?;
    let mut target: NullableRef<DisplayObject> = None;
    ArgUnpack::new(ctx, args).defaulted(&mut target, None)?;

    color.set(TARGET, ctx.to_value(&target));
    color.set(RGB, ctx.to_value(&Rgb::default()));
    Ok(JsValue::Undefined)
}

/// Color.setRGB(rgb)
fn color_set_rgb(
    ctx: &mut EvalContext,
    this: JsValue,
    args: &[JsValue],
) -> Result<JsValue, JErrorType> {
    let color: Ref<Color> = Ref::to_concrete(ctx, &this)?;
    let mut rgb = Rgb::default();
    ArgUnpack::new(ctx, args).required(&mut rgb)?;

    tracing::debug!(color = %rgb, "tint set");
    color.set(RGB, ctx.to_value(&rgb));
    Ok(JsValue::Undefined)
}

/// Color.getRGB()
fn color_get_rgb(
    ctx: &mut EvalContext,
    this: JsValue,
    args: &[JsValue],
) -> Result<JsValue, JErrorType> {
    let color: Ref<Color> = Ref::to_concrete(ctx, &this)?;
    ArgUnpack::new(ctx, args).finish();

    let rgb = match color.get(RGB) {
        Some(stored) => Rgb::to_concrete(ctx, &stored)?,
        None => Rgb::default(),
    };
    Ok(ctx.to_value(&rgb))
}

/// Color.getTarget()
fn color_get_target(
    ctx: &mut EvalContext,
    this: JsValue,
    args: &[JsValue],
) -> Result<JsValue, JErrorType> {
    let color: Ref<Color> = Ref::to_concrete(ctx, &this)?;
    ArgUnpack::new(ctx, args).finish();

    let target: NullableRef<DisplayObject> = match color.get(TARGET) {
        Some(stored) => Coercible::to_concrete(ctx, &stored)?,
        None => None,
    };
    Ok(ctx.to_value(&target))
}
