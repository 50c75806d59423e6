use serde::Serialize;

/// One formal argument of a declaration, in call-site order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Parameter {
    /// Declared type text, whitespace-collapsed but otherwise as written.
    pub type_text: String,
    /// Parameter name (`None` for unnamed parameters).
    pub name: Option<String>,
    /// Non-`const` lvalue reference.
    pub by_mutable_reference: bool,
    /// `const` lvalue reference, either `const T&` or `T const&` ordering.
    pub by_const_reference: bool,
    /// Pointer-to-function form, detected by `(*` at the parameter's top level.
    pub is_function_pointer: bool,
}

/// Behavioral classification of a declaration.
///
/// Evaluated in fixed priority order: a mutable-reference parameter wins over
/// a `bool` return type.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// At least one parameter is passed by mutable reference; the function's
    /// effect is observed through that argument.
    ModifiesReference,
    /// No mutable-reference parameter and the return type is exactly `bool`.
    ReturnsBool,
    /// A computed, non-boolean value is returned.
    ReturnsValue,
}

impl Category {
    /// Reference test source exemplifying the expected test shape for this
    /// category.
    #[must_use]
    pub const fn default_pattern(self) -> &'static str {
        match self {
            Self::ModifiesReference => "test_set_bit_runtime.cpp",
            Self::ReturnsBool => "test_is_bit_set_runtime.cpp",
            Self::ReturnsValue => "test_read_bit_runtime.cpp",
        }
    }

    /// Display name for text output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ModifiesReference => "modifies-reference",
            Self::ReturnsBool => "returns-bool",
            Self::ReturnsValue => "returns-value",
        }
    }
}

/// Total mapping from [`Category`] to pattern identifier.
///
/// Every category has exactly one entry; overrides replace entries, never
/// remove them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMap {
    modifies_reference: String,
    returns_bool: String,
    returns_value: String,
}

impl Default for PatternMap {
    fn default() -> Self {
        Self {
            modifies_reference: Category::ModifiesReference.default_pattern().to_string(),
            returns_bool: Category::ReturnsBool.default_pattern().to_string(),
            returns_value: Category::ReturnsValue.default_pattern().to_string(),
        }
    }
}

impl PatternMap {
    /// Build a map from per-category overrides, falling back to the defaults.
    #[must_use]
    pub fn with_overrides(
        modifies_reference: Option<String>,
        returns_bool: Option<String>,
        returns_value: Option<String>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            modifies_reference: modifies_reference.unwrap_or(defaults.modifies_reference),
            returns_bool: returns_bool.unwrap_or(defaults.returns_bool),
            returns_value: returns_value.unwrap_or(defaults.returns_value),
        }
    }

    #[must_use]
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::ModifiesReference => &self.modifies_reference,
            Category::ReturnsBool => &self.returns_bool,
            Category::ReturnsValue => &self.returns_value,
        }
    }
}

/// A parsed declaration. Produced fresh on every lookup, immutable once
/// constructed, owned solely by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionSignature {
    /// Function name.
    pub name: String,
    /// Return-type text, whitespace-collapsed, qualifiers excluded.
    pub return_type: String,
    /// Parameters in call-site order.
    pub parameters: Vec<Parameter>,
    /// Derived behavioral category.
    pub category: Category,
    /// True if the declaration carries a `template<...>` header.
    pub is_template: bool,
    /// Raw template parameter texts, empty for non-templates.
    pub template_parameters: Vec<String>,
}

impl FunctionSignature {
    /// Classify a return type and parameter set.
    ///
    /// Priority order is fixed: any mutable-reference parameter makes the
    /// function `ModifiesReference` even when it also returns `bool`.
    #[must_use]
    pub fn classify(return_type: &str, parameters: &[Parameter]) -> Category {
        if parameters.iter().any(|p| p.by_mutable_reference) {
            return Category::ModifiesReference;
        }
        if normalize_return_type(return_type) == "bool" {
            return Category::ReturnsBool;
        }
        Category::ReturnsValue
    }
}

/// Collapse whitespace and drop leading qualifiers for return-type comparison.
fn normalize_return_type(return_type: &str) -> String {
    return_type
        .split_whitespace()
        .filter(|tok| {
            !matches!(
                *tok,
                "const" | "constexpr" | "inline" | "static" | "volatile"
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
