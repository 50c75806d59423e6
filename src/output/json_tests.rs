use super::*;
use crate::analyzer::{Category, FunctionSignature};
use crate::output::{DiscoverReport, SignatureReport, UntestedFunction};

#[test]
fn test_signature_report_json() {
    let report = Report::Signature(SignatureReport {
        header: "bit_utils.hpp".into(),
        function: "isBitSet".to_string(),
        signature: Some(FunctionSignature {
            name: "isBitSet".to_string(),
            return_type: "bool".to_string(),
            parameters: Vec::new(),
            category: Category::ReturnsBool,
            is_template: false,
            template_parameters: Vec::new(),
        }),
        pattern: Some("test_is_bit_set_runtime.cpp".to_string()),
    });

    let out = JsonFormatter.format(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["kind"], "signature");
    assert_eq!(value["function"], "isBitSet");
    assert_eq!(value["signature"]["category"], "returns_bool");
    assert_eq!(value["pattern"], "test_is_bit_set_runtime.cpp");
}

#[test]
fn test_discover_report_json() {
    let report = Report::Discover {
        headers: vec![DiscoverReport {
            header: "bit_utils.hpp".into(),
            declared: 2,
            tested: 1,
            untested: vec![UntestedFunction {
                name: "isBitSet".to_string(),
                expected_file: "test_is_bit_set_runtime.cpp".to_string(),
            }],
        }],
    };

    let out = JsonFormatter.format(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["kind"], "discover");
    assert_eq!(value["headers"][0]["declared"], 2);
    assert_eq!(value["headers"][0]["untested"][0]["name"], "isBitSet");
}

#[test]
fn test_validate_miss_serializes_null_signature() {
    let report = Report::Signature(SignatureReport {
        header: "h.hpp".into(),
        function: "clearBit".to_string(),
        signature: None,
        pattern: None,
    });

    let out = JsonFormatter.format(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert!(value["signature"].is_null());
}
