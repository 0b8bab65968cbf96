//! PHP source scanning.
//!
//! Parses PHP text with the mago_syntax parser and extracts, for every
//! function and method, the inputs annotation resolution needs: parameter
//! names and native hints, the preceding docblock, and the namespace and
//! `use` imports in effect at the declaration.
//!
//! Sub-modules:
//! - [`routines`]: walking statements and class-like members
//! - [`use_statements`]: `use` imports into a [`NamingContext`]

mod routines;
mod use_statements;

use std::path::{Path, PathBuf};

use mago_span::HasSpan;
use mago_syntax::ast::*;

use crate::names::NamingContext;
use crate::types::{DocBlock, SourceRoutine};

/// Failure to read a source file.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Trivia and source text needed to find the docblock preceding a node.
pub(crate) struct DocblockCtx<'a> {
    pub trivias: &'a [Trivia<'a>],
    pub content: &'a str,
}

impl DocblockCtx<'_> {
    /// The parsed `/** ... */` comment directly preceding `node`, if any.
    pub(crate) fn docblock_for(&self, node: &impl HasSpan) -> Option<DocBlock> {
        docblock_text_for_node(self.trivias, self.content, node).map(DocBlock::parse)
    }
}

/// Extract every function and method declared in `content`.
///
/// Parser panics are contained and reported as an empty result.
pub fn scan_source(content: &str) -> Vec<SourceRoutine> {
    // Every routine declaration has a parameter list.
    if memchr::memchr(b'(', content.as_bytes()).is_none() {
        return Vec::new();
    }

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let arena = bumpalo::Bump::new();
        let file_id = mago_database::file::FileId::new("input.php");
        let program = mago_syntax::parser::parse_file_content(&arena, file_id, content);

        let doc_ctx = DocblockCtx {
            trivias: program.trivia.as_slice(),
            content,
        };

        let mut found = Vec::new();
        routines::collect_routines(
            program.statements.iter(),
            &NamingContext::new(),
            &doc_ctx,
            &mut found,
        );
        found
    }));

    match result {
        Ok(found) => {
            tracing::debug!(routines = found.len(), "scanned PHP source");
            found
        }
        Err(_) => {
            tracing::error!("parser panicked while scanning PHP source");
            Vec::new()
        }
    }
}

/// Read `path` and [`scan_source`] its contents.
pub fn scan_file(path: &Path) -> Result<Vec<SourceRoutine>, ScanError> {
    let content = std::fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(scan_source(&content))
}

/// Find the docblock comment that directly precedes `node`.
///
/// Walks backwards through the trivia before the node.  Whitespace and
/// ordinary comments may sit between the docblock and the node; any other
/// source text in between means the docblock belongs to something else.
fn docblock_text_for_node<'a>(
    trivia: &'a [Trivia<'a>],
    content: &str,
    node: &impl HasSpan,
) -> Option<&'a str> {
    let node_start = node.span().start.offset;
    let candidate_idx = trivia.partition_point(|t| t.span.start.offset < node_start);

    let bytes = content.as_bytes();
    let mut covered_from = node_start;

    for t in trivia[..candidate_idx].iter().rev() {
        let gap = bytes
            .get(t.span.end.offset as usize..covered_from as usize)
            .unwrap_or(&[]);
        if !gap.iter().all(u8::is_ascii_whitespace) {
            return None;
        }

        match t.kind {
            TriviaKind::DocBlockComment => return Some(t.value),
            TriviaKind::WhiteSpace
            | TriviaKind::SingleLineComment
            | TriviaKind::MultiLineComment
            | TriviaKind::HashComment => covered_from = t.span.start.offset,
        }
    }

    None
}
