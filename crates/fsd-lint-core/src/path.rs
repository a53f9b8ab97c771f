//! Path classification: decomposes file paths and import specifiers into
//! `{layer, slice, segments}` tuples.
//!
//! All three rules share this module. Nothing here fails: a path that cannot
//! be placed inside the layer vocabulary classifies as "absent" and the rules
//! treat that as out of scope.

use crate::layer::Layer;

/// Directory name that marks the project source root.
pub const ROOT_MARKER: &str = "src";

/// Rewrites `\` separators to `/`.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Whether an import specifier is relative (`.`, `./…` or `../…`).
#[must_use]
pub fn is_relative(specifier: &str) -> bool {
    specifier == "." || specifier.starts_with("./") || specifier.starts_with("../")
}

/// Strips a literal `"<alias>/"` prefix from an import specifier.
///
/// Returns the specifier unchanged when the alias is empty or the specifier
/// does not start with the prefix.
#[must_use]
pub fn strip_alias<'a>(specifier: &'a str, alias: &str) -> &'a str {
    if alias.is_empty() {
        return specifier;
    }
    specifier
        .strip_prefix(alias)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(specifier)
}

/// A source file location decomposed relative to the project root marker.
///
/// ```text
/// C:\project\src\entities\Article\ui\Article.tsx
///                ^layer   ^slice  ^remainder....
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPath {
    segments: Vec<String>,
}

impl ProjectPath {
    /// Classifies a host path against `root_marker`.
    ///
    /// Accepts either separator style. The first segment equal to
    /// `root_marker` is taken as the source root, so a slice may keep its own
    /// `src` directory. Returns `None` when the marker does not occur as a
    /// whole segment.
    #[must_use]
    pub fn classify(raw_path: &str, root_marker: &str) -> Option<Self> {
        let normalized = normalize_separators(raw_path);
        let parts: Vec<&str> = normalized.split('/').collect();
        let root = parts.iter().position(|p| *p == root_marker)?;

        let segments = parts[root + 1..]
            .iter()
            .filter(|p| !p.is_empty() && **p != ".")
            .map(|p| (*p).to_string())
            .collect();

        Some(Self { segments })
    }

    /// Classifies a host path against [`ROOT_MARKER`].
    #[must_use]
    pub fn from_file(raw_path: &str) -> Option<Self> {
        Self::classify(raw_path, ROOT_MARKER)
    }

    /// All segments below the root marker, file name included.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The recognized layer, if the first segment names one.
    #[must_use]
    pub fn layer(&self) -> Option<Layer> {
        self.segments.first().and_then(|s| Layer::from_segment(s))
    }

    /// The slice directory, if present.
    #[must_use]
    pub fn slice(&self) -> Option<&str> {
        self.segments.get(1).map(String::as_str)
    }

    /// Segments beneath the slice.
    #[must_use]
    pub fn remainder(&self) -> &[String] {
        self.segments.get(2..).unwrap_or_default()
    }

    /// Segments of the containing directory (the final segment dropped).
    #[must_use]
    pub fn parent_dir(&self) -> &[String] {
        match self.segments.split_last() {
            Some((_, dir)) => dir,
            None => &[],
        }
    }
}

/// An import specifier decomposed after alias stripping.
///
/// Missing pieces are `None`; an empty segment (as in `entities/`) is
/// `Some("")`, so "no slice" stays distinguishable from "empty slice".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportTarget {
    is_relative: bool,
    segments: Vec<String>,
}

impl ImportTarget {
    /// Classifies a raw specifier, stripping `alias` first.
    #[must_use]
    pub fn classify(raw_specifier: &str, alias: &str) -> Self {
        let path = strip_alias(raw_specifier, alias);
        let segments = if path.is_empty() {
            Vec::new()
        } else {
            path.split('/').map(str::to_string).collect()
        };

        Self {
            is_relative: is_relative(raw_specifier),
            segments,
        }
    }

    /// Whether the specifier is relative.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.is_relative
    }

    /// Segments of the alias-stripped specifier.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of `/`-separated segments after alias stripping.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The first segment, recognized or not.
    #[must_use]
    pub fn layer_segment(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    /// The recognized layer, if the first segment names one.
    #[must_use]
    pub fn layer(&self) -> Option<Layer> {
        self.layer_segment().and_then(Layer::from_segment)
    }

    /// The slice segment, if present.
    #[must_use]
    pub fn slice(&self) -> Option<&str> {
        self.segments.get(1).map(String::as_str)
    }

    /// Segments beneath the slice.
    #[must_use]
    pub fn remainder(&self) -> &[String] {
        self.segments.get(2..).unwrap_or_default()
    }
}

/// Computes a `/`-separated relative path from directory `from_dir` to `to`.
///
/// Both inputs are segment lists rooted at the same directory. `.` and `..`
/// segments are resolved lexically first. The result always starts with `.`:
/// a same-directory target yields `./`, a direct parent yields `../`.
#[must_use]
pub fn relative_path<S, T>(from_dir: &[S], to: &[T]) -> String
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let from = resolve_dots(from_dir);
    let to = resolve_dots(to);

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = vec![".."; from.len() - common];
    parts.extend(to[common..].iter().copied());
    let joined = parts.join("/");

    if joined == ".." {
        return "../".to_string();
    }
    if joined.starts_with('.') {
        joined
    } else {
        format!("./{joined}")
    }
}

fn resolve_dots<S: AsRef<str>>(segments: &[S]) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::with_capacity(segments.len());
    for seg in segments {
        match seg.as_ref() {
            "" | "." => {}
            ".." => {
                out.pop();
            }
            s => out.push(s),
        }
    }
    out
}
