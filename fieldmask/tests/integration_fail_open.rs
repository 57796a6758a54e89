//! Fail-open behaviour: directives that cannot be applied leave values as
//! they were instead of failing the whole record.

use fieldmask::{Mask, Masker};

#[derive(Clone, Debug, Default, PartialEq, Mask)]
struct Empty {}

#[derive(Clone, Debug, Default, PartialEq, Mask)]
struct Inner {
    #[mask("regex,^[^@]+", mask_char = "X")]
    email: String,
    child: Option<Box<Empty>>,
}

#[derive(Clone, Debug, Default, PartialEq, Mask)]
struct Awkward {
    #[mask("regex,[A-Z")]
    name: String,
    #[mask("corners")]
    last_name: String,
    #[mask("corners,10-20")]
    nationality: String,
    #[mask("not_registered")]
    unknown: String,
    #[mask("")]
    empty: String,
    #[mask("regex")]
    empty_regex: String,
    #[mask("last,abc")]
    bad_count: String,
    #[mask("between,5")]
    bad_bounds: String,
    nested: Inner,
    #[mask("corners")]
    special_child: Option<Box<Empty>>,
    #[mask("all")]
    pointer_string: Option<String>,
    #[mask("all")]
    absent_string: Option<String>,
}

fn awkward() -> Awkward {
    Awkward {
        name: "Jhon".into(),
        last_name: "Doe".into(),
        nationality: "Ec".into(),
        unknown: "Test".into(),
        empty: "Test".into(),
        empty_regex: "Test".into(),
        bad_count: "Test".into(),
        bad_bounds: "Testing".into(),
        nested: Inner {
            email: "john.doe@example.com".into(),
            child: None,
        },
        special_child: None,
        pointer_string: Some("test".into()),
        absent_string: None,
    }
}

#[test]
fn unusable_directives_leave_values_unchanged() {
    let masked = Masker::new().mask(&awkward()).unwrap();
    assert_eq!(masked.name, "Jhon");
    assert_eq!(masked.unknown, "Test");
    assert_eq!(masked.empty, "Test");
    assert_eq!(masked.empty_regex, "Test");
}

#[test]
fn short_values_follow_method_rules() {
    let masked = Masker::new().mask(&awkward()).unwrap();
    assert_eq!(masked.last_name, "*o*");
    assert_eq!(masked.nationality, "**");
}

#[test]
fn malformed_options_use_defaults() {
    let masked = Masker::new().mask(&awkward()).unwrap();
    assert_eq!(masked.bad_count, "Tes*");
    assert_eq!(masked.bad_bounds, "T*****g");
}

#[test]
fn directives_only_apply_to_owned_strings() {
    let masked = Masker::new().mask(&awkward()).unwrap();
    assert_eq!(masked.pointer_string.as_deref(), Some("test"));
    assert!(masked.absent_string.is_none());
    assert!(masked.special_child.is_none());
}

#[test]
fn nested_records_are_still_walked() {
    let masked = Masker::new().mask(&awkward()).unwrap();
    assert_eq!(masked.nested.email, "XXXXXXXX@example.com");
    assert!(masked.nested.child.is_none());
}

#[test]
fn default_record_masks_to_itself() {
    let value = Awkward::default();
    assert_eq!(Masker::new().mask(&value).unwrap(), value);
}
