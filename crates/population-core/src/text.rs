// crates/population-core/src/text.rs

/// Normalize a country code for map lookups.
///
/// Upper-cases the input and leaves everything else alone: no trimming,
/// digits, whitespace and punctuation keep their positions. Map keys are
/// stored in this form, so every query key must pass through here.
///
/// # Examples
///
/// ```rust
/// use population_core::text::normalize;
///
/// assert_eq!(normalize("deu"), "DEU");
/// assert_eq!(normalize("dE"), "DE");
/// assert_eq!(normalize(" a1-"), " A1-");
/// ```
pub fn normalize(code: &str) -> String {
    code.to_uppercase()
}
