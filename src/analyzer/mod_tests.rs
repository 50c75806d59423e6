use super::*;

// End-to-end scenario from the reference corpus: a mutating function, a
// predicate, and an absent name.
#[test]
fn test_bit_utils_scenario() {
    let header = r"
constexpr void setBit(uint8_t& value, uint8_t n);
constexpr bool isBitSet(uint8_t value, uint8_t n);
";
    let parser = FunctionParser::new(header);
    let patterns = PatternMap::default();

    let set_bit = parser.extract_signature("setBit").unwrap();
    assert_eq!(set_bit.category, Category::ModifiesReference);
    assert_eq!(patterns.get(set_bit.category), "test_set_bit_runtime.cpp");

    let is_bit_set = parser.extract_signature("isBitSet").unwrap();
    assert_eq!(is_bit_set.category, Category::ReturnsBool);
    assert_eq!(
        patterns.get(is_bit_set.category),
        "test_is_bit_set_runtime.cpp"
    );

    assert!(matches!(
        parser.extract_signature("clearBit"),
        Err(crate::error::TestgapError::FunctionNotFound { .. })
    ));
}

#[test]
fn test_repeated_extraction_is_referentially_transparent() {
    let header = "constexpr bool isBitSet(uint8_t value, uint8_t n);";
    let parser = FunctionParser::new(header);

    let first = parser.extract_signature("isBitSet").unwrap();
    let second = parser.extract_signature("isBitSet").unwrap();

    assert_eq!(first.name, second.name);
    assert_eq!(first.return_type, second.return_type);
    assert_eq!(first.parameters, second.parameters);
    assert_eq!(first.category, second.category);
}
