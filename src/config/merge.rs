//! Precedence merging of normalized sources
//!
//! For each canonical field the first present, non-empty value wins:
//! `--env` pair, then environment variable, then built-in default.

use serde::Serialize;
use std::collections::BTreeMap;

use super::aliases::{Field, Normalized};
use super::sources::Source;

/// Default listening port.
pub const DEFAULT_PORT: &str = "3231";

/// Built-in raw default for a field. `None` means the field has no default
/// and resolves to an empty value.
pub fn default_raw(field: Field) -> Option<&'static str> {
    match field {
        Field::ApiKey | Field::TeamId | Field::DisabledTools => None,
        Field::SponsorMessage => Some("true"),
        Field::DocumentSupport => Some("false"),
        Field::LogLevel => Some("ERROR"),
        Field::EnableSse | Field::EnableOauth => Some("false"),
        Field::Port => Some(DEFAULT_PORT),
    }
}

/// Which source and variable supplied a field. Carries no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldOrigin {
    pub field: Field,
    pub source: Source,
    /// Variable name that supplied the value; `None` for defaults.
    pub name: Option<&'static str>,
}

/// The winning raw value for one field.
#[derive(Clone, PartialEq, Eq)]
pub struct MergedField {
    pub origin: FieldOrigin,
    pub value: Option<String>,
}

impl std::fmt::Debug for MergedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MergedField").field("origin", &self.origin).finish_non_exhaustive()
    }
}

/// One merged raw value per canonical field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merged {
    fields: BTreeMap<Field, MergedField>,
}

impl Merged {
    /// Raw winning value, `None` when nothing was supplied and there is no default.
    pub fn raw(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).and_then(|m| m.value.as_deref())
    }

    /// Origins in canonical field order.
    pub fn origins(&self) -> impl Iterator<Item = FieldOrigin> + '_ {
        self.fields.values().map(|m| m.origin)
    }
}

/// Merge CLI and environment layers over the defaults.
///
/// Both layers are expected to come out of the alias normalizer, which
/// already treats empty values as absent.
pub fn merge(cli: &Normalized, env: &Normalized) -> Merged {
    let fields = Field::ALL
        .into_iter()
        .map(|field| {
            let layered = [(Source::Cli, cli.get(&field)), (Source::Env, env.get(&field))]
                .into_iter()
                .find_map(|(source, hit)| {
                    hit.filter(|named| !named.value.is_empty()).map(|named| MergedField {
                        origin: FieldOrigin { field, source, name: Some(named.name) },
                        value: Some(named.value.clone()),
                    })
                });
            let merged = layered.unwrap_or_else(|| MergedField {
                origin: FieldOrigin { field, source: Source::Default, name: None },
                value: default_raw(field).map(str::to_string),
            });
            (field, merged)
        })
        .collect();

    Merged { fields }
}
