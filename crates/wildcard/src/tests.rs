use proptest::prelude::*;
use rstest::rstest;

use super::*;

#[rstest]
#[case("", "", Some(true))]
#[case("", "a", Some(false))]
#[case("*", "", Some(true))]
#[case("*", "anything", Some(true))]
#[case("a.b", "a.b", Some(true))]
#[case("abc", "abd", Some(false))]
#[case("abc", "", Some(false))]
#[case("a*", "abc", None)]
#[case("**", "", None)]
fn test_shortcut(#[case] pattern: &str, #[case] subject: &str, #[case] expected: Option<bool>) {
    assert_eq!(shortcut(pattern.as_bytes(), subject.as_bytes()), expected);

    let pattern: Vec<char> = pattern.chars().collect();
    let subject: Vec<char> = subject.chars().collect();
    assert_eq!(shortcut(&pattern, &subject), expected);
}

#[test]
fn test_matches() {
    assert!(matches("", ""));
    assert!(!matches("", "a"));
    assert!(!matches("a", ""));
    assert!(matches("*", "a string thing"));
    assert!(matches("match * with *", "match a string with two words"));
    assert!(!matches("match * with * and", "match a string with two words"));
    assert!(matches("*.ring*", "a string thing"));
}

#[test]
fn test_matches_ignore_case() {
    assert!(matches_ignore_case("THIS", "this"));
    assert!(!matches("THIS", "this"));
    assert!(matches_ignore_case(
        "thIs is A stRINg wITh sOMmE uPpERcAse fRiENds",
        "This IS a StrinG witH soMMe UppeRCase FriendS"
    ));
    assert!(matches_ignore_case("ÉTÉ*", "été 2024"));
}

#[test]
fn test_ignore_case_sigma_before_wildcard() {
    assert!(matches_by_char("ΑΣ.", "ΑΣΒ"));
    assert!(matches_by_char_ignore_case("ΑΣ.", "ΑΣΒ"));
    assert!(matches_by_char_ignore_case("ΑΣ.", "ασβ"));
    assert!(matches_ignore_case("ΑΣ*", "ΑΣΑ"));
    assert!(matches_ignore_case("*ΟΔΟΣ?", "ΟΔΟΣ"));
}

#[rstest]
#[case("ΑΣ", "ασ")]
#[case("ΟΔΟΣ", "οδοσ")]
#[case("ΑΣ*", "ασ*")]
#[case("İ", "i\u{307}")]
fn test_fold_case(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(fold_case(input), expected);
}

#[test]
fn test_fold_case_bytes() {
    assert_eq!(fold_case_bytes(b"AB\xffC"), b"ab\xffc");
    assert_eq!(fold_case_bytes("Ä\u{0}".as_bytes()), "ä\u{0}".as_bytes());
    assert_eq!(fold_case_bytes(b"\xc3\x84\xff"), b"\xc3\xa4\xff");
    assert_eq!(fold_case_bytes(b""), b"");
}

#[test]
fn test_matches_by_char() {
    assert!(matches_by_char("?", "🦀"));
    assert!(matches_by_char(".", "é"));
    assert!(!matches(".", "é"));
    assert!(matches_by_char("caf.", "café"));
    assert!(!matches_by_char("caf.", "cafe!!"));
    assert!(matches_by_char_ignore_case("CAF.", "café"));
    assert!(!matches_by_char("CAF.", "café"));
}

#[test]
fn test_matches_bytes() {
    assert!(matches_bytes(b"\x00\x01*", b"\x00\x01\xff\xfe"));
    assert!(matches_bytes(b"\xff?", b"\xff"));
    assert!(!matches_bytes(b"\x00.", b"\x00"));
    assert!(matches_bytes_ignore_case(b"GET /*", b"get /index.html"));
    assert!(!matches_bytes(b"GET /*", b"get /index.html"));
}

#[test]
fn test_matches_chars() {
    assert!(matches_chars(&['*'], &['🦀', '🎉']));
    assert!(matches_chars(&['.', '.'], &['🦀', '🎉']));
    assert!(!matches_chars(&['.'], &['🦀', '🎉']));
    assert!(matches_chars(&[], &[]));
}

#[test]
fn test_star_over_emoji_sequences() {
    let subject = "👨‍👩‍👧‍👦🏋️‍♀️🚴‍♂️";
    assert!(matches("*", subject));
    assert!(matches_by_char("*", subject));
    assert!(matches(subject, subject));
    assert!(matches_by_char(subject, subject));
    assert!(matches_by_char("*🏋️‍♀️*", subject));
}

proptest! {
    #[test]
    fn everything_matches_itself(s in any::<String>()) {
        prop_assert!(matches(&s, &s));
        prop_assert!(matches_by_char(&s, &s));
        prop_assert!(matches_ignore_case(&s, &s));
    }

    #[test]
    fn shortcuts_agree_with_matcher(pattern in "[ab.?*]{0,10}", subject in "[ab]{0,10}") {
        prop_assert_eq!(
            matches(&pattern, &subject),
            matcher::matches(pattern.as_bytes(), subject.as_bytes())
        );
    }

    #[test]
    fn ignore_case_is_lowercase_then_match(pattern in "[aAbBσΣ.?*]{0,10}", subject in "[aAbBσςΣ]{0,10}") {
        let fold = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<String>();
        prop_assert_eq!(
            matches_ignore_case(&pattern, &subject),
            matches(&fold(&pattern), &fold(&subject))
        );
        prop_assert_eq!(
            matches_by_char_ignore_case(&pattern, &subject),
            matches_by_char(&fold(&pattern), &fold(&subject))
        );
    }
}
