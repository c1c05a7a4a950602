//! End-to-end scenarios through the public factory surface

use pretty_assertions::assert_eq;
use serde_json::json;
use shapecheck::prelude::*;
use shapecheck::Kind;

#[test]
fn string_with_length_bounds() {
    let name = schema::string().min(3).max(10);

    assert!(name.validate(&json!("Sam")).is_valid);
    assert_eq!(name.parse(&json!("Sam")).unwrap(), "Sam");

    let result = name.validate(&json!("A"));
    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        ValidationErrors::Messages(vec!["String must be at least 3 characters".into()])
    );
}

#[test]
fn number_with_bounds() {
    let age = schema::number().min(18).max(50);

    assert!(age.validate(&json!(30)).is_valid);
    assert_eq!(
        age.validate(&json!(10)).errors,
        ValidationErrors::Messages(vec!["Must be at least 18".into()])
    );
}

#[test]
fn unique_array() {
    let numbers = schema::array().unique();

    let result = numbers.validate(&json!([0, 0, 2, 2]));
    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        ValidationErrors::Messages(vec!["All elements must be unique".into()])
    );
    assert_eq!(
        numbers.parse(&json!([0, 1, 2])).unwrap(),
        vec![json!(0), json!(1), json!(2)]
    );
}

#[test]
fn object_with_field_errors() {
    let person = schema::object::create(Shape::new().field("name", schema::string().min(3)));

    assert!(person.validate(&json!({"name": "Sam"})).is_valid);

    let result = person.validate(&json!({"name": "Xi"}));
    assert!(!result.is_valid);
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"isValid": false, "errors": {"name": ["String must be at least 3 characters"]}})
    );
}

#[test]
fn array_of_objects() {
    let people = schema::array().of(schema::object::create(
        Shape::new().field("name", schema::string().min(3)),
    ));

    assert_eq!(
        people.parse(&json!([{"name": "Sam"}, {"name": "Joe"}])).unwrap(),
        vec![json!({"name": "Sam"}), json!({"name": "Joe"})]
    );

    let err = people.parse(&json!([{"name": "Xi"}])).unwrap_err();
    assert_eq!(err.to_string(), "Elements do not match required type");
}

#[test]
fn chained_object_with_missing_field() {
    let person = schema::object::chain().field("name", schema::string()).build();

    assert_eq!(person.parse(&json!({"name": "Jon"})).unwrap(), json!({"name": "Jon"}));

    let result = person.validate(&json!({"age": 30}));
    assert!(!result.is_valid);
    assert_eq!(
        result.errors.field("name").and_then(|e| e.messages()),
        Some(&["Value must be a string".to_string()][..])
    );
    assert!(person.parse(&json!({"age": 30})).is_err());
}

#[test]
fn object_rejects_non_objects_at_root() {
    let person = schema::object::create(Shape::new().field("name", schema::string()));

    for input in [json!("Sam"), json!(42), json!(["Sam"]), json!(null)] {
        let result = person.validate(&input);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"isValid": false, "errors": {"root": ["Value must be an object"]}})
        );
    }
}

#[test]
fn base_schema_reused_as_template() {
    let base = schema::object::create(
        Shape::new()
            .field("id", schema::string().uuid())
            .field("email", schema::string().email()),
    );
    let customer = base.extend(Shape::new().field("vip", schema::boolean()));
    let employee = base
        .extend(Shape::new().field("badge", schema::number().int().min(1)))
        .field("manager", schema::string().nonempty());

    let id = "123e4567-e89b-12d3-a456-426614174000";
    let input = json!({"id": id, "email": "sam@example.com", "vip": false});

    assert!(base.validate(&input).is_valid);
    assert!(customer.validate(&input).is_valid);
    assert_eq!(
        employee.validate(&input).errors.render(),
        "badge: Value must be a number, Must be an integer, Must be at least 1; \
         manager: Value must be a string, Cannot be empty"
    );
    assert_eq!(base.keys().collect::<Vec<_>>(), vec!["id", "email"]);
    assert_eq!(customer.keys().collect::<Vec<_>>(), vec!["id", "email", "vip"]);
}

#[test]
fn deeply_nested_report_paths() {
    let order = schema::object::create(
        Shape::new()
            .field(
                "customer",
                schema::object::create(
                    Shape::new().field("email", schema::string().email()),
                ),
            )
            .field(
                "lines",
                schema::array_of(schema::object::create(
                    Shape::new()
                        .field("sku", schema::string().alphanumeric())
                        .field("qty", schema::number().int().min(1)),
                ))
                .nonempty(),
            ),
    );

    let result = order.validate(&json!({
        "customer": {"email": "not-an-email"},
        "lines": []
    }));
    assert_eq!(
        result.errors.flatten(),
        vec![
            ("customer.email".to_string(), "Invalid email format".to_string()),
            ("lines".to_string(), "Cannot be empty".to_string()),
        ]
    );

    let err = order
        .parse(&json!({"customer": {"email": "a@b.io"}, "lines": [{"sku": "A-1", "qty": 1}]}))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Validation failed: lines: Elements do not match required type"
    );
}

#[test]
fn element_parse_errors_carry_index() {
    // An element validator whose rules pass but whose own parse is stricter
    // surfaces through the second pass with its index.
    struct EvenOnParse;

    impl Schema for EvenOnParse {
        type Output = f64;

        fn kind(&self) -> Kind {
            Kind::Number
        }

        fn validate(&self, _value: &serde_json::Value) -> ValidationResult {
            ValidationResult::valid()
        }

        fn parse(&self, value: &serde_json::Value) -> Result<f64> {
            match value.as_f64() {
                Some(n) if n % 2.0 == 0.0 => Ok(n),
                _ => Err(Error::Validation(shapecheck::ValidationError::new("Must be even"))),
            }
        }
    }

    let validator = schema::array().of(EvenOnParse);
    assert_eq!(validator.parse(&json!([2, 4])).unwrap(), vec![2.0, 4.0]);

    let err = validator.parse(&json!([2, 3])).unwrap_err();
    assert_eq!(err.to_string(), "Element at index 1: Must be even");
    assert_eq!(
        err.as_validation().and_then(|e| e.path.as_deref()),
        Some("[1]")
    );
}
