//! Tests for standard library built-in functions.
//!
//! These tests call the built-in natives through the registry, the same way
//! script calls reach them, and check what the argument layer does at that
//! boundary.

extern crate argconv;

use std::rc::Rc;

use argconv::runner::ds::class::{MovieClip, NativeClass, Shape, Sprite};
use argconv::runner::ds::error::JErrorType;
use argconv::runner::ds::object::ref_count;
use argconv::runner::ds::value::JsValue;
use argconv::runner::plugin::registry::BuiltInRegistry;
use argconv::runner::plugin::types::{Diagnostic, EvalContext};

fn setup() -> (BuiltInRegistry, EvalContext) {
    (BuiltInRegistry::with_core(), EvalContext::new())
}

fn new_clip(ctx: &EvalContext) -> JsValue {
    JsValue::Object(ctx.new_object(MovieClip::QUALIFIED_NAME).unwrap())
}

// ============================================================================
// Color tests
// ============================================================================

mod color_tests {
    use super::*;

    #[test]
    fn test_construct_without_target() {
        let (registry, mut ctx) = setup();
        let color = registry.construct(&mut ctx, "Color", &[]).unwrap();
        let target = registry
            .call_method(&mut ctx, color.clone(), "getTarget", &[])
            .unwrap();
        assert_eq!(target, JsValue::Null);
        let rgb = registry.call_method(&mut ctx, color, "getRGB", &[]).unwrap();
        assert_eq!(rgb, JsValue::UnsignedInteger(0));
    }

    #[test]
    fn test_construct_with_target_holds_reference() {
        let (registry, mut ctx) = setup();
        let clip = new_clip(&ctx);
        let clip_object = Rc::clone(clip.as_object().unwrap());
        let color = registry
            .construct(&mut ctx, "Color", &[clip.clone()])
            .unwrap();
        drop(clip);
        // Our copy plus the one stored on the Color.
        assert_eq!(ref_count(&clip_object), 2);

        let target = registry
            .call_method(&mut ctx, color, "getTarget", &[])
            .unwrap();
        assert!(target.is_instance_of(MovieClip::QUALIFIED_NAME));
        assert_eq!(ref_count(&clip_object), 3);
    }

    #[test]
    fn test_construct_with_wrong_target_type() {
        let (registry, mut ctx) = setup();
        let err = registry
            .construct(&mut ctx, "Color", &[JsValue::Integer(7)])
            .unwrap_err();
        assert_eq!(
            err,
            JErrorType::check_type_failed("int", "flash.display::DisplayObject")
        );
    }

    #[test]
    fn test_set_and_get_rgb() {
        let (registry, mut ctx) = setup();
        let color = registry.construct(&mut ctx, "Color", &[]).unwrap();
        registry
            .call_method(&mut ctx, color.clone(), "setRGB", &[JsValue::Number(16711680.0)])
            .unwrap();
        let rgb = registry.call_method(&mut ctx, color, "getRGB", &[]).unwrap();
        assert_eq!(rgb, JsValue::UnsignedInteger(0xff0000));
    }

    #[test]
    fn test_set_rgb_requires_argument() {
        let (registry, mut ctx) = setup();
        let color = registry.construct(&mut ctx, "Color", &[]).unwrap();
        let err = registry
            .call_method(&mut ctx, color, "setRGB", &[])
            .unwrap_err();
        assert_eq!(err, JErrorType::wrong_argument_count("Color.setRGB", 1, 0));
    }

    #[test]
    fn test_extra_argument_is_reported_with_callee() {
        let (registry, mut ctx) = setup();
        let color = registry.construct(&mut ctx, "Color", &[]).unwrap();
        registry
            .call_method(
                &mut ctx,
                color,
                "setRGB",
                &[JsValue::Integer(1), JsValue::Integer(2), JsValue::Integer(3)],
            )
            .unwrap();
        assert_eq!(
            ctx.take_diagnostics(),
            vec![Diagnostic::UnconsumedArguments {
                callee: "Color.setRGB".to_string(),
                remaining: 2,
            }]
        );
    }
}

// ============================================================================
// CSMSettings tests
// ============================================================================

mod csm_settings_tests {
    use super::*;

    #[test]
    fn test_construct_and_read_accessors() {
        let (registry, mut ctx) = setup();
        let settings = registry
            .construct(
                &mut ctx,
                "flash.text::CSMSettings",
                &[JsValue::Integer(12), JsValue::from("0.5"), JsValue::Number(-0.25)],
            )
            .unwrap();
        let font_size = registry
            .get_property(&mut ctx, settings.clone(), "fontSize")
            .unwrap();
        let inside = registry
            .get_property(&mut ctx, settings.clone(), "insideCutoff")
            .unwrap();
        let outside = registry
            .get_property(&mut ctx, settings, "outsideCutoff")
            .unwrap();
        assert_eq!(font_size, JsValue::Number(12.0));
        assert_eq!(inside, JsValue::Number(0.5));
        assert_eq!(outside, JsValue::Number(-0.25));
    }

    #[test]
    fn test_construct_needs_three_numbers() {
        let (registry, mut ctx) = setup();
        let err = registry
            .construct(
                &mut ctx,
                "flash.text::CSMSettings",
                &[JsValue::Integer(12), JsValue::Integer(1)],
            )
            .unwrap_err();
        assert_eq!(
            err,
            JErrorType::wrong_argument_count("CSMSettings", 3, 2)
        );
    }

    #[test]
    fn test_set_accessor_coerces() {
        let (registry, mut ctx) = setup();
        let settings = registry
            .construct(
                &mut ctx,
                "flash.text::CSMSettings",
                &[JsValue::Integer(1), JsValue::Integer(2), JsValue::Integer(3)],
            )
            .unwrap();
        registry
            .set_property(&mut ctx, settings.clone(), "fontSize", JsValue::from("24"))
            .unwrap();
        let font_size = registry
            .get_property(&mut ctx, settings, "fontSize")
            .unwrap();
        assert_eq!(font_size, JsValue::Number(24.0));
    }
}

// ============================================================================
// MovieClip tests
// ============================================================================

mod movie_clip_tests {
    use super::*;

    #[test]
    fn test_depth_round_trip() {
        let (registry, mut ctx) = setup();
        let clip = new_clip(&ctx);
        registry
            .call_method(&mut ctx, clip.clone(), "setDepth", &[JsValue::Number(3.9)])
            .unwrap();
        let depth = registry.call_method(&mut ctx, clip, "getDepth", &[]).unwrap();
        assert_eq!(depth, JsValue::Integer(3));
    }

    #[test]
    fn test_start_drag_ignores_extra_arguments() {
        let (registry, mut ctx) = setup();
        let clip = new_clip(&ctx);
        let mut args: Vec<JsValue> = vec![JsValue::Boolean(true)];
        args.extend((0..4).map(|i| JsValue::Integer(i * 10)));
        args.push(JsValue::from("legacy"));
        registry
            .call_method(&mut ctx, clip.clone(), "startDrag", &args)
            .unwrap();

        let object = clip.as_object().unwrap();
        assert_eq!(object.get("dragging"), Some(JsValue::Boolean(true)));
        assert_eq!(object.get("dragLockCenter"), Some(JsValue::Boolean(true)));
        assert_eq!(object.get("dragBottom"), Some(JsValue::Number(30.0)));
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn test_start_drag_defaults() {
        let (registry, mut ctx) = setup();
        let clip = new_clip(&ctx);
        registry
            .call_method(&mut ctx, clip.clone(), "startDrag", &[])
            .unwrap();
        let object = clip.as_object().unwrap();
        assert_eq!(object.get("dragLockCenter"), Some(JsValue::Boolean(false)));
        assert!(!object.has("dragLeft"));

        registry
            .call_method(&mut ctx, clip.clone(), "stopDrag", &[])
            .unwrap();
        assert_eq!(object.get("dragging"), Some(JsValue::Boolean(false)));
    }

    #[test]
    fn test_stop_drag_reports_arguments() {
        let (registry, mut ctx) = setup();
        let clip = new_clip(&ctx);
        registry
            .call_method(&mut ctx, clip, "stopDrag", &[JsValue::Integer(1)])
            .unwrap();
        assert_eq!(
            ctx.take_diagnostics(),
            vec![Diagnostic::UnconsumedArguments {
                callee: "MovieClip.stopDrag".to_string(),
                remaining: 1,
            }]
        );
    }

    #[test]
    fn test_attach_audio_takes_any_object() {
        let (registry, mut ctx) = setup();
        let clip = new_clip(&ctx);
        let source = ctx.new_object(Shape::QUALIFIED_NAME).unwrap();
        registry
            .call_method(
                &mut ctx,
                clip.clone(),
                "attachAudio",
                &[JsValue::Object(Rc::clone(&source))],
            )
            .unwrap();
        assert_eq!(ref_count(&source), 2);

        registry
            .call_method(&mut ctx, clip.clone(), "attachAudio", &[JsValue::Null])
            .unwrap();
        assert_eq!(ref_count(&source), 1);
        let object = clip.as_object().unwrap();
        assert_eq!(object.get("audioSource"), Some(JsValue::Null));
    }

    #[test]
    fn test_attach_audio_takes_primitive() {
        let (registry, mut ctx) = setup();
        let clip = new_clip(&ctx);
        registry
            .call_method(&mut ctx, clip.clone(), "attachAudio", &[JsValue::from("x")])
            .unwrap();
        let object = clip.as_object().unwrap();
        assert_eq!(object.get("audioSource"), Some(JsValue::from("x")));
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn test_method_on_wrong_receiver() {
        let (registry, mut ctx) = setup();
        let sprite = JsValue::Object(ctx.new_object(Sprite::QUALIFIED_NAME).unwrap());
        // Sprite is not a MovieClip, so the method is not found on its chain.
        let err = registry
            .call_method(&mut ctx, sprite, "getDepth", &[])
            .unwrap_err();
        assert!(matches!(err, JErrorType::TypeError(_)));
    }

    #[test]
    fn test_name_accessor_inherited_from_display_object() {
        let (registry, mut ctx) = setup();
        let clip = new_clip(&ctx);
        registry
            .set_property(&mut ctx, clip.clone(), "name", JsValue::Integer(5))
            .unwrap();
        let name = registry.get_property(&mut ctx, clip, "name").unwrap();
        assert_eq!(name, JsValue::from("5"));
        assert!(ctx.strings().contains("5"));
    }

    #[test]
    fn test_unknown_property() {
        let (registry, mut ctx) = setup();
        let clip = new_clip(&ctx);
        let err = registry
            .get_property(&mut ctx, clip, "alpha")
            .unwrap_err();
        assert!(matches!(err, JErrorType::ReferenceError(_)));
    }
}
