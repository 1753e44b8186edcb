//! Render the page-side search script from a template.
//!
//! The site ships a script whose two table literals are left as comment
//! placeholders:
//!
//! ```text
//! const schemaIndex = [/*__SCHEMA_INDEX__*/];
//! const keywordIndex = {/*__KEYWORD_INDEX__*/};
//! ```
//!
//! Rendering fills each with the body of the matching JSON value, without its
//! outer brackets, since the template already supplies them.

use crate::error::{Error, Result};
use crate::types::SearchPayload;

pub const SCHEMA_INDEX_PLACEHOLDER: &str = "/*__SCHEMA_INDEX__*/";
pub const KEYWORD_INDEX_PLACEHOLDER: &str = "/*__KEYWORD_INDEX__*/";

/// Substitute the payload tables into `template`.
pub fn render_search_module(template: &str, payload: &SearchPayload) -> Result<String> {
    for placeholder in [SCHEMA_INDEX_PLACEHOLDER, KEYWORD_INDEX_PLACEHOLDER] {
        if !template.contains(placeholder) {
            return Err(Error::MissingPlaceholder(placeholder));
        }
    }

    let schemas = serde_json::to_string(&payload.schema_index)?;
    let keywords = serde_json::to_string(&payload.keyword_index)?;
    let fills = [
        (SCHEMA_INDEX_PLACEHOLDER, strip_delimiters(&schemas)),
        (KEYWORD_INDEX_PLACEHOLDER, strip_delimiters(&keywords)),
    ];

    // Single pass over the template; substituted text is never rescanned.
    let mut rendered = String::with_capacity(template.len() + schemas.len() + keywords.len());
    let mut rest = template;
    while let Some((at, placeholder, fill)) = fills
        .iter()
        .filter_map(move |&(placeholder, fill)| {
            rest.find(placeholder).map(|at| (at, placeholder, fill))
        })
        .min_by_key(|&(at, _, _)| at)
    {
        rendered.push_str(&rest[..at]);
        rendered.push_str(fill);
        rest = &rest[at + placeholder.len()..];
    }
    rendered.push_str(rest);

    Ok(rendered)
}

/// `[a,b]` → `a,b`, `{"k":[0]}` → `"k":[0]`.
fn strip_delimiters(json: &str) -> &str {
    json.get(1..json.len().saturating_sub(1)).unwrap_or_default()
}
