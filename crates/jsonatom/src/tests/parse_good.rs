use alloc::format;

use rstest::rstest;

use crate::{Value, parse};

fn assert_number(input: &str, expected: f64) {
    match parse(input) {
        Ok(Value::Number(n)) => {
            assert!(n == expected, "parsed {input:?} to {n:e}, wanted {expected:e}");
        }
        other => panic!("parsed {input:?} to {other:?}, wanted a number"),
    }
}

fn assert_string(input: &str, expected: &str) {
    match parse(input) {
        Ok(Value::String(s)) => assert_eq!(s, expected, "content mismatch for {input:?}"),
        other => panic!("parsed {input:?} to {other:?}, wanted a string"),
    }
}

#[rstest]
#[case("null", Value::Null)]
#[case("true", Value::Boolean(true))]
#[case("false", Value::Boolean(false))]
fn literal_values(#[case] input: &str, #[case] expected: Value) {
    assert_eq!(parse(input), Ok(expected));
}

#[rstest]
#[case("")]
#[case(" ")]
#[case("\t")]
#[case("\n")]
#[case("\r")]
#[case(" \t\n\r ")]
fn whitespace_around_values_is_ignored(#[case] pad: &str) {
    for body in ["null", "true", "-1.5", "\"s\""] {
        let padded = format!("{pad}{body}{pad}");
        assert_eq!(parse(&padded), parse(body), "padding {padded:?} changed the result");
    }
}

// Accuracy table: every expectation is the correctly rounded double for the
// input text, so exact comparison is the right check.
#[rstest]
#[case("0", 0.0)]
#[case("-0", 0.0)]
#[case("-0.0", 0.0)]
#[case("1", 1.0)]
#[case("-1", -1.0)]
#[case("1.5", 1.5)]
#[case("-1.5", -1.5)]
#[case("3.1416", 3.1416)]
#[case("1E10", 1E10)]
#[case("1e10", 1e10)]
#[case("1E+10", 1E10)]
#[case("1E-10", 1E-10)]
#[case("-1E10", -1E10)]
#[case("-1e10", -1e10)]
#[case("-1E+10", -1E10)]
#[case("-1E-10", -1E-10)]
#[case("1.234E+10", 1.234E10)]
#[case("1.234E-10", 1.234E-10)]
#[case("1e-10000", 0.0)] // underflows to zero, not an error
#[case("1.0000000000000002", 1.000_000_000_000_000_2)] // smallest double above 1
#[case("4.9406564584124654e-324", 5e-324)] // minimum subnormal
#[case("-4.9406564584124654e-324", -5e-324)]
#[case("2.2250738585072009e-308", 2.225_073_858_507_200_9e-308)] // max subnormal
#[case("-2.2250738585072009e-308", -2.225_073_858_507_200_9e-308)]
#[case("2.2250738585072014e-308", 2.225_073_858_507_201_4e-308)] // min normal
#[case("-2.2250738585072014e-308", -2.225_073_858_507_201_4e-308)]
#[case("1.7976931348623157e+308", f64::MAX)]
#[case("-1.7976931348623157e+308", f64::MIN)]
fn number_values(#[case] input: &str, #[case] expected: f64) {
    assert_number(input, expected);
}

#[test]
fn negative_zero_keeps_its_sign() {
    match parse("-0.0") {
        Ok(Value::Number(n)) => assert!(n == 0.0 && n.is_sign_negative()),
        other => panic!("parsed -0.0 to {other:?}"),
    }
}

#[rstest]
#[case(r#""""#, "")]
#[case(r#""Hello""#, "Hello")]
#[case(r#""Hello\nWorld""#, "Hello\nWorld")]
#[case(r#""\" \\ \/ \b \f \n \r \t""#, "\" \\ / \u{8} \u{c} \n \r \t")]
#[case(r#""héllo, 世界 🦀""#, "héllo, 世界 🦀")] // raw multi-byte passthrough
#[case(r#""Hello\u0000World""#, "Hello\u{0}World")]
#[case(r#""\u0024""#, "$")] // one UTF-8 byte
#[case(r#""\u00A2""#, "¢")] // two bytes
#[case(r#""\u20AC""#, "€")] // three bytes
#[case(r#""\uD834\uDD1E""#, "\u{1D11E}")] // four bytes, via surrogate pair
#[case(r#""\ud834\udd1e""#, "\u{1D11E}")] // lowercase hex
#[case(r#""\uFFFF""#, "\u{FFFF}")] // top of the basic plane
#[case(r#""\uDBFF\uDFFF""#, "\u{10FFFF}")] // highest pairable code point
fn string_values(#[case] input: &str, #[case] expected: &str) {
    assert_string(input, expected);
}

#[test]
fn surrogate_pair_decodes_to_utf8_bytes() {
    let v = parse(r#""\uD834\uDD1E""#).unwrap();
    let s = v.as_str().unwrap();
    assert_eq!(s.as_bytes(), [0xF0, 0x9D, 0x84, 0x9E]);
}

#[test]
fn escapes_mixed_with_verbatim_runs() {
    assert_string(
        r#""tab:\there \"quoted\" and raw é""#,
        "tab:\there \"quoted\" and raw é",
    );
}
