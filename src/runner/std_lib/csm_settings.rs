//! CSMSettings built-in object.
//!
//! Continuous stroke modulation settings for one font size. All three
//! numbers are mandatory at construction.

use crate::runner::argconv::{unpack_args, ArityMode, Coercible, Ref, Slot};
use crate::runner::ds::class::{CSMSettings, NativeClass};
use crate::runner::ds::error::JErrorType;
use crate::runner::ds::value::JsValue;
use crate::runner::plugin::registry::BuiltInRegistry;
use crate::runner::plugin::types::{BuiltInObject, EvalContext};

pub const FONT_SIZE: &str = "fontSize";
pub const INSIDE_CUTOFF: &str = "insideCutoff";
pub const OUTSIDE_CUTOFF: &str = "outsideCutoff";

/// Register the CSMSettings class with the registry.
pub fn register(registry: &mut BuiltInRegistry) {
    let settings = BuiltInObject::new(CSMSettings::QUALIFIED_NAME)
        .with_constructor(csm_settings_constructor)
        .add_accessor::<f64>(FONT_SIZE)
        .add_accessor::<f64>(INSIDE_CUTOFF)
        .add_accessor::<f64>(OUTSIDE_CUTOFF);

    registry.register_object(settings);
}

/// new CSMSettings(fontSize, insideCutoff, outsideCutoff)
fn csm_settings_constructor(
    ctx: &mut EvalContext,
    this: JsValue,
    args: &[JsValue],
) -> Result<JsValue, JErrorType> {
    let settings: Ref<CSMSettings> = Ref::to_concrete(ctx, &this)?;
    let mut font_size = 0.0;
    let mut inside_cutoff = 0.0;
    let mut outside_cutoff = 0.0;
    unpack_args(
        ctx,
        args,
        ArityMode::Exact,
        vec![
            Slot::required(&mut font_size),
            Slot::required(&mut inside_cutoff),
            Slot::required(&mut outside_cutoff),
        ],
    )?;

    settings.set(FONT_SIZE, ctx.to_value(&font_size));
    settings.set(INSIDE_CUTOFF, ctx.to_value(&inside_cutoff));
    settings.set(OUTSIDE_CUTOFF, ctx.to_value(&outside_cutoff));
    Ok(JsValue::Undefined)
}
