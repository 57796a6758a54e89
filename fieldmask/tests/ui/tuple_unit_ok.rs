use fieldmask::{Mask, MaskExt, Masker, Record};

#[derive(Mask)]
struct Pin(#[mask("all", mask_char = "#")] String, u8);

#[derive(Mask)]
struct Marker;

fn main() {
    let masker = Masker::new();
    let pin = Pin("1234".into(), 4).masked(&masker);
    assert_eq!(pin.0, "####");
    assert_eq!(pin.1, 4);
    assert_eq!(Pin::FIELDS[0].name(), "0");

    let _ = Marker.masked(&masker);
    assert!(Marker::FIELDS.is_empty());
}
