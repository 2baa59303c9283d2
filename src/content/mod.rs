pub mod brand_story;

pub use brand_story::{PATTERN, REPLACEMENT, SUCCESS_MESSAGE, TARGET_PATH};
