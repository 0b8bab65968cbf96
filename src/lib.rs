//! Resolve PHPDoc type annotations into type masks for flow analysis.
//!
//! An annotation such as `int`, `string[]`, `array[Foo]` or `\Some\Class`
//! becomes a [`TypeMask`]: a mergeable bit set whose class and typed-array
//! bits are interned by a per-routine [`TypeContext`].
//!
//! ```
//! use phpdoc_typemask::{AnnotationParser, NamingContext, TypeContext};
//!
//! let mut naming = NamingContext::with_namespace(Some("App"));
//! naming.add_import("Carbon\\Carbon");
//!
//! let mut ctx = TypeContext::new();
//! let parser = AnnotationParser::new(Some(&naming));
//! let mask = parser.parse_text(&mut ctx, "Carbon[]|int");
//! assert_eq!(ctx.describe(&mask), "int|(\\Carbon\\Carbon|null)[]");
//! ```
//!
//! # Modules
//!
//! - [`mask`]: the [`TypeMask`] value and primitive categories
//! - [`context`]: the per-scope descriptor arena
//! - [`known_types`]: the case-insensitive pseudo-type vocabulary
//! - [`names`]: namespace / import resolution
//! - [`annotation`]: the recursive annotation parser
//! - [`translate`]: moving masks between contexts
//! - [`docblock`]: docblock tags and `@param` lookup
//! - [`source`]: extracting routines and docblocks from PHP source
//! - [`signature`]: resolving a routine's parameter and return masks
//! - [`config`]: configuration file support

pub mod annotation;
pub mod config;
pub mod context;
pub mod docblock;
pub mod known_types;
pub mod mask;
pub mod names;
pub mod signature;
pub mod source;
pub mod translate;
pub mod types;

// ─── Re-exports ─────────────────────────────────────────────────────────────

pub use annotation::AnnotationParser;
pub use config::{Config, ConfigError};
pub use context::{ContextSnapshot, TypeContext, TypeDescriptor};
pub use docblock::{find_param_tag, split_alternatives};
pub use known_types::{KnownType, get_known_mask, is_known};
pub use mask::{PrimitiveKind, TypeMask};
pub use names::{NamingContext, QualifiedName, resolve};
pub use signature::{resolve_signature, translate_signature};
pub use source::{ScanError, scan_file, scan_source};
pub use translate::{resolve_and_translate, translate};
pub use types::{
    DocBlock, DocTag, GenericTag, ParamTag, ParameterInfo, ResolvedParameter, RoutineSignature,
    SourceRoutine, TypeSource,
};
