use fieldmask::{Mask, MaskExt, Masker, Record};

#[derive(Mask)]
struct Query {
    #[mask("all")]
    r#type: String,
    r#match: Option<String>,
}

fn main() {
    let query = Query {
        r#type: "abc".into(),
        r#match: None,
    };
    let masked = query.masked(&Masker::new());
    assert_eq!(masked.r#type, "***");
    assert!(masked.r#match.is_none());
    assert!(Query::field("type").is_some());
}
