use fieldmask::{Mask, MaskExt, Masker};

#[derive(Clone, Debug, PartialEq)]
struct ForeignHandle(u32);

#[derive(Mask)]
struct Connection {
    #[mask("first,3")]
    host: String,
    #[mask(skip)]
    handle: ForeignHandle,
}

fn main() {
    let conn = Connection {
        host: "db.internal".into(),
        handle: ForeignHandle(9),
    };
    let masked = conn.masked(&Masker::new());
    assert_eq!(masked.host, "***internal");
    assert_eq!(masked.handle, ForeignHandle(9));
}
