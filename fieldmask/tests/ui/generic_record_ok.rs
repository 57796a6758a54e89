use std::marker::PhantomData;

use fieldmask::{Mask, Masker};

#[derive(Clone, Mask)]
struct Secret {
    #[mask("all")]
    value: String,
}

#[derive(Mask)]
struct Envelope<T, M> {
    #[mask("last,2")]
    label: String,
    payload: T,
    items: Vec<T>,
    marker: PhantomData<M>,
}

// Not `Maskable`: only appears inside `PhantomData`.
struct Tag;

fn main() {
    let envelope: Envelope<Secret, Tag> = Envelope {
        label: "label".into(),
        payload: Secret {
            value: "abc".into(),
        },
        items: vec![Secret {
            value: "de".into(),
        }],
        marker: PhantomData,
    };

    let masked = Masker::new().mask(&envelope).unwrap();
    assert_eq!(masked.label, "lab**");
    assert_eq!(masked.payload.value, "***");
    assert_eq!(masked.items[0].value, "**");
}
