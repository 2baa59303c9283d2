//! Fixed inputs of the brand story rewrite.

/// File rewritten by the binary, relative to the working directory.
pub const TARGET_PATH: &str = "src/components/sections/BrandStorySection.tsx";

/// Printed once on stdout after the file has been written.
pub const SUCCESS_MESSAGE: &str = "✅ Updated BrandStorySection.tsx";

/// Spans the old story, from its opening sentence to its closing tagline.
/// `(?s)` lets `.` cross the paragraph breaks in between; `.*?` keeps the
/// match to the shortest such span.
pub const PATTERN: &str = r"(?s)Whole Lot of Nature grew from a single spark.*?Whole Lot of Nature — bringing soil, soul, and sustainability together\.";

/// New story. The `</p><p>` breaks are indented to sit inside the section's
/// existing JSX.
pub const REPLACEMENT: &str = r#"At Whole Lot of Nature, we believe that every plant has a story, and every garden is a sanctuary. We're on a mission to connect people with nature through thoughtfully curated plants, premium growing essentials, and sustainable practices.
              </p>
              <p>
                Our carefully selected collection includes vibrant indoor and outdoor plants, premium organic soil mixes, eco-friendly fertilizers, aquatic ecosystems, and handcrafted herbal products. Each item is chosen with care to ensure it meets our high standards for quality and sustainability.
              </p>
              <p>
                We're committed to making plant parenthood accessible, enjoyable, and rewarding for everyone – whether you're starting your first green space or tending an entire garden. Our expert team is always here to guide you on your botanical journey.
              </p>
              <p>
                When you shop with us, you're not just getting plants and products – you're joining a community dedicated to greener living, mindful consumption, and nurturing the Earth.
              </p>
              <p className="font-medium text-[#66BB6A]">
                Welcome to Whole Lot of Nature – where every root matters."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacement_does_not_reopen_the_pattern() {
        assert!(!REPLACEMENT.contains("grew from a single spark"));
        assert!(REPLACEMENT.starts_with("At Whole Lot of Nature, we believe"));
        assert!(REPLACEMENT.ends_with("where every root matters."));
    }

    #[test]
    fn test_target_path_is_relative() {
        assert!(std::path::Path::new(TARGET_PATH).is_relative());
        assert!(TARGET_PATH.ends_with("BrandStorySection.tsx"));
    }
}
