//! End-to-end parameter resolution: transformation first, then constraints.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use param_tests::prelude::*;
use pretty_assertions::assert_eq;

fn moderate() -> AllOf {
    all_of(vec![
        Box::new(not_nil()),
        Box::new(satisfies("Should be moderate", |v| v.lt(&Value::Int(100)))),
    ])
}

mod all_of_scenario {
    use super::*;
    use pretty_assertions::assert_eq;

    fn param1() -> Parameter {
        Parameter::new("param1").constraint(moderate())
    }

    #[test]
    fn test_moderate_value_is_accepted() {
        init_tracing();
        let piece = Piece::new("Piece", params! { "param1" => 50i64 });

        assert_eq!(piece.get(&param1()), Ok(Value::Int(50)));
    }

    #[test]
    fn test_nil_fails_at_not_nil() {
        let piece = Piece::new("Piece", params! { "param1" => Value::Null });

        let err = piece.get(&param1()).unwrap_err();
        assert_eq!(
            err,
            ParameterError::Constraint(ConstraintError::violated_with("param1", "can't be nil"))
        );
    }

    #[test]
    fn test_missing_value_resolves_as_nil() {
        let piece = Piece::new("Piece", params!());

        assert!(piece.get(&param1()).unwrap_err().is_constraint());
    }

    #[test]
    fn test_large_value_fails_at_second_unit_without_reaching_third() {
        // GIVEN - a third unit that counts invocations
        let third_calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&third_calls);
        let param = Parameter::new("param1").constraint(moderate().with(constraint_fn(
            move |_, _, _| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            },
        )));
        let piece = Piece::new("Piece", params! { "param1" => 150i64 });

        // WHEN
        let err = piece.get(&param).unwrap_err();

        // THEN
        assert_eq!(err.to_string(), "Invalid value for parameter param1: Should be moderate");
        assert_eq!(third_calls.load(Ordering::SeqCst), 0);

        // AND - an accepted value reaches the third unit
        let ok = Piece::new("Piece", params! { "param1" => 5i64 });
        assert!(ok.get(&param).is_ok());
        assert_eq!(third_calls.load(Ordering::SeqCst), 1);
    }
}

mod as_float_scenario {
    use super::*;
    use pretty_assertions::assert_eq;

    fn param() -> Parameter {
        Parameter::new("param").transform(as_float())
    }

    #[test]
    fn test_absent_value_stays_nil() {
        let piece = Piece::new("Piece", params!());

        assert_eq!(piece.get(&param()), Ok(Value::Null));
    }

    #[test]
    fn test_numeric_text_becomes_float() {
        let piece = Piece::new("Piece", params! { "param" => "23.0" });

        assert_eq!(piece.get(&param()), Ok(Value::Float(23.0)));
    }

    #[test]
    fn test_garbage_text_is_a_transform_error() {
        let piece = Piece::new("Piece", params! { "param" => "not-a-number" });

        let err = piece.get(&param()).unwrap_err();
        assert!(err.is_transform());
        assert_eq!(
            err,
            ParameterError::Transform(TransformError::coercion(
                "param",
                Value::from("not-a-number"),
                "Float"
            ))
        );
    }

    #[test]
    fn test_declarations_share_one_transformer() {
        let first = Parameter::new("width").transform(as_float());
        let second = Parameter::new("height").transform(as_float());

        let (Some(a), Some(b)) = (first.transformation(), second.transformation()) else {
            panic!("both parameters declare a transformation");
        };
        assert!(Arc::ptr_eq(a, b));
    }
}

mod transform_then_constrain {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_constraint_sees_transformed_value() {
        // GIVEN - a text value that is only below 100 once it is a number
        let param = Parameter::new("ratio").transform(as_float()).constraint(moderate());
        let piece = Piece::new("Piece", params! { "ratio" => "99.5" });

        // THEN
        assert_eq!(piece.get(&param), Ok(Value::Float(99.5)));
    }

    #[test]
    fn test_transform_failure_skips_constraints() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let param = Parameter::new("ratio")
            .transform(as_float())
            .constraint(constraint_fn(move |_, _, _| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }));
        let piece = Piece::new("Piece", params! { "ratio" => true });

        assert!(piece.get(&param).unwrap_err().is_transform());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_units_read_sibling_parameters() {
        // GIVEN - an upper bound taken from a sibling parameter
        let max = Parameter::new("max").transform(as_float());
        let size = Parameter::new("size").transform(as_float()).constraint(
            not_nil().when(guard_fn(|_, _, instance| instance.has_parameter("max"))),
        );
        // Untransformed on purpose: non-numeric sizes must reach the bound check
        let bounded = Parameter::new("size").constraint(constraint_fn(
            |parameter, value, instance| {
                let limit = match instance.parameter("max") {
                    Some(raw) if !raw.is_null() => {
                        as_float().transform("max", raw.clone(), instance).ok()
                    }
                    _ => return Ok(()),
                };
                match limit {
                    Some(limit) if value.lte(&limit) => Ok(()),
                    _ => Err(ConstraintError::violated_with(parameter, "exceeds max")),
                }
            },
        ));

        let piece = Piece::new("Box", params! { "max" => "10", "size" => 12i64 });
        let fits = Piece::new("Box", params! { "max" => "10", "size" => 9.5 });
        let unbounded = Piece::new("Box", params!());

        // THEN
        assert_eq!(piece.get(&max), Ok(Value::Float(10.0)));
        assert!(piece.get(&bounded).is_err());
        assert_eq!(fits.get(&bounded), Ok(Value::Float(9.5)));
        assert_eq!(unbounded.get(&size), Ok(Value::Null));
        assert_eq!(unbounded.get(&bounded), Ok(Value::Null));
        assert!(Piece::new("Box", params! { "max" => 1i64 }).get(&size).is_err());
    }

    #[test]
    fn test_non_numeric_value_fails_sibling_bound() {
        // GIVEN - a bound read straight from a sibling, no transformation
        let size = Parameter::new("size").constraint(Satisfies::with_instance(
            "must not exceed max",
            |v, instance| instance.parameter("max").is_some_and(|max| v.lte(max)),
        ));

        // THEN - text and bools are rejected instead of slipping through
        for raw in [Value::from("small"), Value::Bool(true)] {
            let piece = Piece::new("Box", params! { "max" => 5i64, "size" => raw });
            assert_eq!(
                piece.get(&size),
                Err(ParameterError::Constraint(ConstraintError::violated_with(
                    "size",
                    "must not exceed max"
                )))
            );
        }

        // AND - a missing bound is a violation, not a pass
        let no_max = Piece::new("Box", params! { "size" => 3i64 });
        assert!(no_max.get(&size).unwrap_err().is_constraint());
        let within = Piece::new("Box", params! { "max" => 5i64, "size" => 3i64 });
        assert_eq!(within.get(&size), Ok(Value::Int(3)));
    }

    #[test]
    fn test_chained_transformations() {
        let param = Parameter::new("count")
            .transform(Arc::new(as_chain(vec![Arc::new(as_string()), Arc::new(as_integer())])))
            .constraint(satisfies("must be positive", |v| Value::Int(0).lt(v)));
        let piece = Piece::new("Piece", params! { "count" => 3i64 });

        assert_eq!(piece.get(&param), Ok(Value::Int(3)));
        assert!(Piece::new("Piece", params! { "count" => "-3" }).get(&param).is_err());
    }

    #[test]
    fn test_string_pattern_constraint() {
        let param = Parameter::new("name").constraint(
            AllOf::default()
                .with(not_nil())
                .with(matches("^[A-Z][A-Za-z]+$").unwrap()),
        );

        let ok = Piece::new("Piece", params! { "name" => "Bucket" });
        let bad = Piece::new("Piece", params! { "name" => "bucket" });

        assert_eq!(ok.get(&param), Ok(Value::from("Bucket")));
        assert_eq!(
            bad.get(&param).unwrap_err().to_string(),
            "Invalid value for parameter name: should match /^[A-Z][A-Za-z]+$/"
        );
    }
}
