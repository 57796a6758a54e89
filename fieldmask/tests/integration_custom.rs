//! Custom strategies registered at runtime.

use fieldmask::{Mask, MaskExt, Masker, Strategy, StrategyRegistry, strategy::MaskAll};

/// Keeps the first and last four characters of a card number.
///
/// Options: an optional `first-last` pair overriding the visible counts.
/// Numbers shorter than eight characters keep only their last character.
struct MaskCard;

impl Strategy for MaskCard {
    fn mask(&self, value: &str, mask_char: &str, options: &[&str]) -> String {
        let chars: Vec<char> = value.chars().collect();
        if chars.len() < 8 {
            let tail: String = chars.last().map(char::to_string).unwrap_or_default();
            return mask_char.repeat(chars.len().saturating_sub(1)) + &tail;
        }
        let (first, last) = fieldmask::parse_bounds(options)
            .filter(|&(first, last)| first > 0 && last > 0)
            .unwrap_or((4, 4));
        if first + last > chars.len() {
            return value.to_owned();
        }
        let head: String = chars[..first].iter().collect();
        let tail: String = chars[chars.len() - last..].iter().collect();
        head + &mask_char.repeat(chars.len() - first - last) + &tail
    }
}

#[derive(Clone, Debug, Mask)]
struct Card {
    #[mask("card")]
    number: String,
    #[mask("card,2-2")]
    backup: String,
    #[mask("card", mask_char = "-")]
    pin: String,
    #[mask("all")]
    holder: String,
}

fn card() -> Card {
    Card {
        number: "1234567890123456".into(),
        backup: "1234567890123456".into(),
        pin: "1234".into(),
        holder: "Ana".into(),
    }
}

#[test]
fn unregistered_custom_method_is_copied() {
    let masked = card().masked(&Masker::new());
    assert_eq!(masked.number, "1234567890123456");
    assert_eq!(masked.holder, "***");
}

#[test]
fn registered_strategy_is_dispatched() {
    let masker = Masker::new();
    masker.register("card", MaskCard);
    let masked = card().masked(&masker);
    assert_eq!(masked.number, "1234********3456");
    assert_eq!(masked.backup, "12************56");
    assert_eq!(masked.pin, "---4");
}

#[test]
fn builder_registers_strategies() {
    let masker = Masker::builder().strategy("card", MaskCard).build();
    assert_eq!(masker.mask_str("1234567890123456", "card", None), "1234********3456");
    assert!(masker.registry().contains("all"));
}

#[test]
fn strategy_receives_raw_option_tokens() {
    let masker = Masker::builder()
        .strategy_fn("echo", |_: &str, _: &str, options: &[&str]| options.join("|"))
        .build();
    assert_eq!(masker.mask_str("x", "echo,a,b-c,,d", None), "a|b-c||d");
    assert_eq!(masker.mask_str("x", "echo", None), "");
}

#[test]
fn registration_overrides_builtin() {
    let masker = Masker::new();
    masker.register("all", |value: &str, _: &str, _: &[&str]| format!("<{}>", value.len()));
    assert_eq!(card().masked(&masker).holder, "<3>");
}

#[test]
fn maskers_can_share_a_registry() {
    let registry = StrategyRegistry::with_builtins();
    let first = Masker::with_registry(registry.clone());
    let second = Masker::with_registry(registry.clone());
    registry.register("card", MaskCard);
    registry.register("hide", MaskAll);

    assert_eq!(first.mask_str("1234567890123456", "card", None), "1234********3456");
    assert_eq!(second.mask_str("ab", "hide", Some("?")), "??");
}
