//! Generated unit naming.
//!
//! The unit name is the last segment of the source type's qualified name plus
//! a fixed suffix. Two separator conventions are recognized, tried in order:
//!
//! 1. `_` (PEAR-style legacy names such as `Legacy_Db_Connection`)
//! 2. `\` (namespaced names such as `App\Service\Mailer`)
//!
//! No collision detection: two sources with the same base name map to the same
//! unit name and only the target namespace tells them apart.

/// Suffix identifying the generated artifact kind.
pub const UNIT_SUFFIX: &str = "Trait";

/// Separator conventions in the order they are tried.
const SEPARATORS: &[char] = &['_', '\\'];

/// Base name of a qualified type name: the final segment under the first
/// separator convention present, or the whole name when none is.
pub fn base_name(qualified_name: &str) -> &str {
    let name = qualified_name.trim_start_matches('\\');
    SEPARATORS
        .iter()
        .find(|sep| name.contains(**sep))
        .and_then(|sep| name.rsplit(*sep).next())
        .unwrap_or(name)
}

/// Derives the generated unit name, e.g. `App\Service\Mailer` -> `MailerTrait`.
pub fn derive_unit_name(qualified_name: &str) -> String {
    format!("{}{}", base_name(qualified_name), UNIT_SUFFIX)
}
