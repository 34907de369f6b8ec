//! Header-based splitting of concatenated source listings.
//!
//! A listing is one block of text holding several files, each introduced by
//! a header comment naming its path:
//!
//! ```text
//! // src/main.rs
//! fn main() {}
//!
//! // src/lib.rs
//! pub mod split;
//! ```
//!
//! Header detection is a plain textual scan. A `//`-prefixed `name.ext`
//! token counts as a header wherever it appears, including inside string
//! literals of the embedded code.
//!
//! # Usage
//!
//! ```
//! use codesplit::splitter::split;
//!
//! let files = split(Some("// a.txt\nhello\n// b/c.txt\nworld"));
//!
//! assert_eq!(files.len(), 2);
//! assert_eq!(files[1].path, "b/c.txt");
//! assert_eq!(files[1].content, "// b/c.txt\nworld");
//! ```

pub mod span;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub use span::{Location, Span};

/// Header pattern: two slashes, whitespace, then a non-whitespace run with a dot.
pub const HEADER_PATTERN: &str = r"//\s+(\S+\.\S+)";

static HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(HEADER_PATTERN).expect("header pattern is a valid regex"));

/// A single file recovered from a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedFile {
    /// Path as written in the header, `/` separators included.
    pub path: String,
    /// Trimmed text from the header up to the next header or end of input.
    pub content: String,
}

impl ParsedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// A parsed file together with the input span it was cut from.
///
/// The span covers the untrimmed slice, so consecutive sections tile the
/// input from the first header to the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSection {
    pub file: ParsedFile,
    pub span: Span,
}

/// Split a listing into files.
///
/// Absent or empty input, and input without any header, both yield an empty
/// vector. Text before the first header is dropped.
pub fn split(text: Option<&str>) -> Vec<ParsedFile> {
    split_sections(text)
        .into_iter()
        .map(|section| section.file)
        .collect()
}

/// Split a listing into files, keeping the source span of each one.
pub fn split_sections(text: Option<&str>) -> Vec<SplitSection> {
    let source = match text {
        Some(s) if !s.is_empty() => s,
        _ => return Vec::new(),
    };

    let headers: Vec<(usize, &str)> = HEADER_RE
        .captures_iter(source)
        .filter_map(|caps| {
            let start = caps.get(0)?.start();
            let path = caps.get(1)?.as_str();
            Some((start, path))
        })
        .collect();

    let mut sections = Vec::with_capacity(headers.len());

    for (i, &(start, path)) in headers.iter().enumerate() {
        let end = headers
            .get(i + 1)
            .map(|&(next, _)| next)
            .unwrap_or(source.len());

        sections.push(SplitSection {
            file: ParsedFile::new(path, source[start..end].trim()),
            span: Span::from_offsets(source, start, end),
        });
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input() {
        assert!(split(None).is_empty());
        assert!(split(Some("")).is_empty());
    }

    #[test]
    fn test_whitespace_only_input() {
        assert!(split(Some("  \n\t\n")).is_empty());
    }

    #[test]
    fn test_no_headers() {
        let source = r#"
            use std::io;

            fn main() {
                println!("Hello, World!");
            }
        "#;

        assert!(split(Some(source)).is_empty());
    }

    #[test]
    fn test_comment_without_dot_is_not_a_header() {
        let source = "// just a comment\nlet x = 1;";
        assert!(split(Some(source)).is_empty());
    }

    #[test]
    fn test_slashes_need_whitespace() {
        assert!(split(Some("//main.rs\nfn main() {}")).is_empty());
    }

    #[test]
    fn test_dot_needs_a_character_on_each_side() {
        assert!(split(Some("// .gitignore\ntarget/\n")).is_empty());
        assert!(split(Some("// notes.\nsee above\n")).is_empty());
    }

    #[test]
    fn test_header_whitespace_may_cross_a_newline() {
        let files = split(Some("//\n a.b\nbody"));

        assert_eq!(files, vec![ParsedFile::new("a.b", "//\n a.b\nbody")]);
    }

    #[test]
    fn test_single_file() {
        let source = r#"// test.cs
            using System;

            class Program
            {
                static void Main() {}
            }"#;

        let files = split(Some(source));

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "test.cs");
        assert!(files[0].content.starts_with("// test.cs"));
        assert!(files[0].content.contains("class Program"));
        assert!(files[0].content.ends_with('}'));
    }

    #[test]
    fn test_multiple_files_in_order() {
        let source = r#"// file1.cs
namespace Test1
{
    public class Class1 {}
}

// file2.cs
namespace Test2
{
    public class Class2 {}
}

// subfolder/file3.cs
namespace Test3
{
    public class Class3 {}
}
"#;

        let files = split(Some(source));
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();

        assert_eq!(paths, vec!["file1.cs", "file2.cs", "subfolder/file3.cs"]);

        assert!(files[0].content.contains("namespace Test1"));
        assert!(!files[0].content.contains("file2.cs"));
        assert!(files[1].content.contains("namespace Test2"));
        assert!(!files[1].content.contains("Test3"));
        assert!(files[2].content.contains("namespace Test3"));
    }

    #[test]
    fn test_content_is_trimmed() {
        let files = split(Some("// a.txt\n\n  alpha  \n\n\n// b.txt\nbeta\n\n"));

        assert_eq!(
            files,
            vec![
                ParsedFile::new("a.txt", "// a.txt\n\n  alpha"),
                ParsedFile::new("b.txt", "// b.txt\nbeta"),
            ]
        );
    }

    #[test]
    fn test_special_characters_in_path() {
        let files = split(Some("// @special-file_name.with.dots.js\nfunction test(){}"));

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "@special-file_name.with.dots.js");
    }

    #[test]
    fn test_preamble_is_discarded() {
        let source = "Here are the files you asked for:\n\n// main.rs\nfn main() {}";

        let files = split(Some(source));

        assert_eq!(files, vec![ParsedFile::new("main.rs", "// main.rs\nfn main() {}")]);
    }

    #[test]
    fn test_header_inside_string_literal_is_a_boundary() {
        let source = "// a.js\nconst url = \"see // b.js for details\";\n";

        let files = split(Some(source));
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();

        assert_eq!(paths, vec!["a.js", "b.js"]);
        assert_eq!(files[0].content, "// a.js\nconst url = \"see");
    }

    #[test]
    fn test_path_stops_at_whitespace() {
        let files = split(Some("// notes.md (generated)\ntext"));
        assert_eq!(files[0].path, "notes.md");
    }

    #[test]
    fn test_adjacent_header_without_own_slashes_is_swallowed() {
        // The path run continues through the second "//" since there is no
        // whitespace, and " c.d" alone has no slashes.
        let files = split(Some("// a.b// c.d\nbody"));

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "a.b//");
    }

    #[test]
    fn test_back_to_back_headers_are_not_deduplicated() {
        let files = split(Some("// a.txt // a.txt\n// a.txt"));

        assert_eq!(
            files,
            vec![
                ParsedFile::new("a.txt", "// a.txt"),
                ParsedFile::new("a.txt", "// a.txt"),
                ParsedFile::new("a.txt", "// a.txt"),
            ]
        );
    }

    #[test]
    fn test_deterministic() {
        let source = "// x.rs\n1\n// y.rs\n2";
        assert_eq!(split(Some(source)), split(Some(source)));
    }

    #[test]
    fn test_sections_tile_input_from_first_header() {
        let source = "intro\n// one.txt\n  first  \n// dir/two.txt\nsecond\n";

        let sections = split_sections(Some(source));
        let first_header = source.find("//").unwrap();

        let rebuilt: String = sections
            .iter()
            .map(|s| &source[s.span.start.offset..s.span.end.offset])
            .collect();
        assert_eq!(rebuilt, &source[first_header..]);

        for section in &sections {
            let slice = &source[section.span.start.offset..section.span.end.offset];
            assert_eq!(slice.trim(), section.file.content);
        }
    }

    #[test]
    fn test_section_spans_report_header_lines() {
        let source = "// one.txt\na\nb\n// two.txt\nc";

        let sections = split_sections(Some(source));

        assert_eq!(sections[0].span.start, Location::new(0, 1, 1));
        assert_eq!(sections[1].span.start.line, 4);
        assert_eq!(sections[1].span.end.offset, source.len());
    }
}
