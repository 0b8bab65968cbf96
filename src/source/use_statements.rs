//! `use` imports → [`NamingContext`] aliases.
//!
//! Only class imports matter for annotations; `use function` and
//! `use const` are skipped.

use mago_syntax::ast::*;

use crate::names::NamingContext;

/// Register every class import of a `use` statement.
pub(super) fn register_use_items(items: &UseItems, naming: &mut NamingContext) {
    match items {
        // `use Foo\Bar;` or `use Foo\Bar, Baz\Qux as Q;`
        UseItems::Sequence(seq) => {
            for item in seq.items.iter() {
                register_use_item(item, None, naming);
            }
        }
        // `use function Foo\bar;` / `use const Foo\BAR;`
        UseItems::TypedSequence(seq) => {
            if seq.r#type.is_function() || seq.r#type.is_const() {
                return;
            }
            for item in seq.items.iter() {
                register_use_item(item, None, naming);
            }
        }
        // `use function Foo\{bar, baz};`
        UseItems::TypedList(list) => {
            if list.r#type.is_function() || list.r#type.is_const() {
                return;
            }
            let prefix = list.namespace.value();
            for item in list.items.iter() {
                register_use_item(item, Some(prefix), naming);
            }
        }
        // `use Foo\{Bar, function baz, const QUX};`
        UseItems::MixedList(list) => {
            let prefix = list.namespace.value();
            for maybe_typed in list.items.iter() {
                if let Some(ref t) = maybe_typed.r#type
                    && (t.is_function() || t.is_const())
                {
                    continue;
                }
                register_use_item(&maybe_typed.item, Some(prefix), naming);
            }
        }
    }
}

/// `group_prefix` is the `Foo` of `use Foo\{Bar}`.
fn register_use_item(item: &UseItem, group_prefix: Option<&str>, naming: &mut NamingContext) {
    let item_name = item.name.value();
    let target = match group_prefix {
        Some(prefix) => format!("{}\\{}", prefix.trim_end_matches('\\'), item_name),
        None => item_name.to_string(),
    };

    match &item.alias {
        Some(alias) => naming.add_alias(alias.identifier.value, &target),
        None => naming.add_import(&target),
    }
}
