use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_lookup_covers_whole_table() {
    for (sigil, builtin) in TYPE_HINTS {
        assert_eq!(builtin_for_hint(sigil), Some(builtin));
    }
    assert_eq!(TYPE_HINTS.len(), 6);
}

#[test]
fn test_known_sigils() {
    assert_eq!(builtin_for_hint('%'), Some(BuiltinType::Integer));
    assert_eq!(builtin_for_hint('&'), Some(BuiltinType::Long));
    assert_eq!(builtin_for_hint('@'), Some(BuiltinType::Decimal));
    assert_eq!(builtin_for_hint('!'), Some(BuiltinType::Single));
    assert_eq!(builtin_for_hint('#'), Some(BuiltinType::Double));
    assert_eq!(builtin_for_hint('$'), Some(BuiltinType::String));
}

#[test]
fn test_unknown_sigils() {
    assert_eq!(builtin_for_hint('^'), None);
    assert_eq!(builtin_for_hint('a'), None);
    assert_eq!(builtin_for_hint(' '), None);
}
