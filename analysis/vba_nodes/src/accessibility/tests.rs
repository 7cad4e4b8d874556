use super::*;
use pretty_assertions::assert_eq;
use vba_ir::Span;

fn keyword(text: &str) -> VisibilityClause {
    VisibilityClause::new(Span::new(0, 6), text)
}

#[test]
fn test_local_is_always_private() {
    for text in ["Public", "Global", "Friend", "Private", "Nonsense"] {
        let clause = keyword(text);
        assert_eq!(
            resolve_accessibility(true, Some(&clause), Accessibility::Public),
            Ok(Accessibility::Private),
            "local declaration with `{text}`"
        );
    }
    assert_eq!(
        resolve_accessibility(true, None, Accessibility::Global),
        Ok(Accessibility::Private)
    );
}

#[test]
fn test_module_level_keyword_mapping() {
    let cases = [
        ("Public", Accessibility::Public),
        ("Private", Accessibility::Private),
        ("Friend", Accessibility::Friend),
        ("Global", Accessibility::Global),
        ("PUBLIC", Accessibility::Public),
        ("global", Accessibility::Global),
    ];
    for (text, expected) in cases {
        let clause = keyword(text);
        assert_eq!(
            resolve_accessibility(false, Some(&clause), Accessibility::Private),
            Ok(expected),
            "keyword `{text}`"
        );
    }
}

#[test]
fn test_missing_keyword_uses_default() {
    assert_eq!(
        resolve_accessibility(false, None, Accessibility::Public),
        Ok(Accessibility::Public)
    );
    assert_eq!(
        resolve_accessibility(false, None, Accessibility::Friend),
        Ok(Accessibility::Friend)
    );
}

#[test]
fn test_unknown_keyword_is_error() {
    let clause = keyword("Protected");
    assert_eq!(
        resolve_accessibility(false, Some(&clause), Accessibility::Public),
        Err(BuildError::UnmappedVisibility {
            keyword: "Protected".to_string(),
            span: Span::new(0, 6),
        })
    );
}

#[test]
fn test_display() {
    assert_eq!(Accessibility::Friend.to_string(), "Friend");
    assert_eq!(Accessibility::from_keyword("friend"), Some(Accessibility::Friend));
    assert_eq!(Accessibility::from_keyword("Static"), None);
}
