use crate::catalog::schema::CatalogDef;
use crate::catalog::Catalog;
use crate::error::FiredoorError;

const REMEDIAL_ACTIONS_JSON: &str = include_str!("../../../../catalog/remedial-actions.json");

/// The builtin catalog definition, as shipped.
pub fn builtin_def() -> Result<CatalogDef, FiredoorError> {
    let def: CatalogDef = serde_json::from_str(REMEDIAL_ACTIONS_JSON)?;
    Ok(def)
}

/// Compile the builtin remedial-action catalog.
pub fn load_builtin() -> Result<Catalog, FiredoorError> {
    Catalog::compile(&builtin_def()?)
}
