use regex::{NoExpand, Regex};
use similar::{ChangeTag, TextDiff};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::content::{PATTERN, REPLACEMENT};
use crate::error::RewriteResult;
use crate::file::{read_text, write_text};

/// A compiled pattern paired with the literal text that replaces its matches
#[derive(Debug, Clone)]
pub struct ContentPatch {
    pattern: Regex,
    replacement: &'static str,
}

/// What a call to [`rewrite_file`] did to the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub path: PathBuf,
    /// Number of non-overlapping matches replaced
    pub replacements: usize,
    /// Whether the written contents differ from what was read
    pub changed: bool,
}

impl ContentPatch {
    /// The brand story patch: old story out, new story in
    pub fn brand_story() -> RewriteResult<Self> {
        Ok(Self {
            pattern: Regex::new(PATTERN)?,
            replacement: REPLACEMENT,
        })
    }

    /// Replace every match in `input`, returning the new text and the match count.
    ///
    /// The replacement is inserted verbatim; `$name` sequences in it are not
    /// treated as capture references.
    pub fn apply(&self, input: &str) -> (String, usize) {
        let replacements = self.pattern.find_iter(input).count();
        if replacements == 0 {
            return (input.to_string(), 0);
        }

        let output = self
            .pattern
            .replace_all(input, NoExpand(self.replacement))
            .into_owned();
        (output, replacements)
    }
}

/// Read `path`, apply the brand story patch and write the result back.
///
/// The file is written even when nothing matched, so a missing story leaves
/// the contents as they were and still returns `Ok`.
pub fn rewrite_file(path: &Path) -> RewriteResult<RewriteOutcome> {
    let patch = ContentPatch::brand_story()?;
    rewrite_file_with(&patch, path)
}

fn rewrite_file_with(patch: &ContentPatch, path: &Path) -> RewriteResult<RewriteOutcome> {
    let original = read_text(path)?;
    let (updated, replacements) = patch.apply(&original);

    if replacements == 0 {
        warn!(
            "Brand story not found in {}; writing contents back unchanged",
            path.display()
        );
    } else {
        info!("Replaced {} brand story span(s) in {}", replacements, path.display());
        log_change_summary(&original, &updated);
    }

    write_text(path, &updated)?;

    Ok(RewriteOutcome {
        path: path.to_path_buf(),
        replacements,
        changed: original != updated,
    })
}

fn log_change_summary(old: &str, new: &str) {
    let diff = TextDiff::from_lines(old, new);
    let (mut inserted, mut deleted) = (0usize, 0usize);

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => inserted += 1,
            ChangeTag::Delete => deleted += 1,
            ChangeTag::Equal => {}
        }
    }

    debug!(
        "Line changes: +{} -{} (similarity {:.2})",
        inserted,
        deleted,
        diff.ratio()
    );
}
