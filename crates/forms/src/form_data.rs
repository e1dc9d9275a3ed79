//! Read-only view over submitted form data.
//!
//! The presentation layer submits a nested JSON mapping. `FormData` walks it
//! section by section and converts recognized leaves into typed values, doing
//! the loose conversions browsers and form widgets rely on (`"1"` for `true`,
//! numeric strings for integers).
//!
//! `null` leaves are treated exactly like missing keys.

use core::str::FromStr;

use chrono::NaiveDate;
use serde_json::{Map, Value};

use backoffice_core::{DomainError, LanguageId};
use backoffice_products::LocalizedStrings;

use crate::error::{FormDataError, FormResult};

/// Which command a submitted field value is routed to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FieldScope {
    /// The shop the form was submitted for.
    SingleShop,
    /// Every shop of the installation.
    AllShops,
}

/// A submitted value along with the scope it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedValue<T> {
    pub value: T,
    pub scope: FieldScope,
}

impl<T> ScopedValue<T> {
    pub fn single_shop(value: T) -> Self {
        Self {
            value,
            scope: FieldScope::SingleShop,
        }
    }

    pub fn all_shops(value: T) -> Self {
        Self {
            value,
            scope: FieldScope::AllShops,
        }
    }
}

/// A section of the submitted form, remembering where it sits in the document.
#[derive(Debug, Clone)]
pub struct FormData<'a> {
    fields: Option<&'a Map<String, Value>>,
    path: String,
}

impl<'a> FormData<'a> {
    /// Wrap a submitted document. Anything but an object is an empty form.
    pub fn new(value: &'a Value) -> Self {
        Self {
            fields: value.as_object(),
            path: String::new(),
        }
    }

    /// Dotted path of this section from the document root, `""` at the root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// True when the section has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_none_or(|fields| fields.is_empty())
    }

    /// Submitted keys of this section, `null` ones included.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.fields
            .into_iter()
            .flat_map(|fields| fields.keys().map(String::as_str))
    }

    /// Nested section, if present and a mapping.
    pub fn section(&self, key: &str) -> Option<FormData<'a>> {
        let fields = self.get(key)?.as_object()?;
        Some(FormData {
            fields: Some(fields),
            path: self.field_path(key),
        })
    }

    /// Raw value of a field; `None` when missing or `null`.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields?.get(key).filter(|value| !value.is_null())
    }

    /// True when `key` holds a non-`null` value.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Dotted path of `key` inside this section, as reported in errors.
    pub fn field_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    /// Keys of this section that are not in `known`.
    pub fn unknown_keys<'k>(&'k self, known: &'k [String]) -> impl Iterator<Item = &'a str> + 'k {
        self.keys().filter(move |key| !known.iter().any(|k| k.as_str() == *key))
    }

    /// Boolean field: JSON booleans, numbers (non-zero is `true`) and the
    /// strings `1/0`, `true/false`, `on/off`, `yes/no` or `""` (`false`).
    pub fn bool(&self, key: &str) -> FormResult<Option<bool>> {
        self.get(key)
            .map(|value| coerce_bool(value).map_err(|reason| self.invalid(key, reason)))
            .transpose()
    }

    /// Integer field: a JSON number with no fractional part, or a decimal
    /// string. Values outside the `i64` range are rejected.
    pub fn integer(&self, key: &str) -> FormResult<Option<i64>> {
        self.get(key)
            .map(|value| coerce_integer(value).map_err(|reason| self.invalid(key, reason)))
            .transpose()
    }

    /// Text field. Numbers are accepted and rendered as written.
    pub fn string(&self, key: &str) -> FormResult<Option<String>> {
        self.get(key)
            .map(|value| match value {
                Value::String(s) => Ok(s.clone()),
                Value::Number(n) => Ok(n.to_string()),
                other => Err(self.invalid(key, format!("expected a string, got {}", kind(other)))),
            })
            .transpose()
    }

    /// Calendar date in `YYYY-MM-DD` form. An empty string counts as absent.
    pub fn date(&self, key: &str) -> FormResult<Option<NaiveDate>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(Value::String(s)) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                .map(Some)
                .map_err(|e| self.invalid(key, format!("expected a YYYY-MM-DD date: {e}"))),
            Some(other) => Err(self.invalid(key, format!("expected a date string, got {}", kind(other)))),
        }
    }

    /// Enumerated value parsed from its wire string.
    pub fn parse<T>(&self, key: &str) -> FormResult<Option<T>>
    where
        T: FromStr<Err = DomainError>,
    {
        self.get(key)
            .map(|value| match value {
                Value::String(s) => s.parse::<T>().map_err(|e| self.invalid(key, e.to_string())),
                other => Err(self.invalid(key, format!("expected a string, got {}", kind(other)))),
            })
            .transpose()
    }

    /// Translations keyed by language id, passed through verbatim.
    ///
    /// A `null` translation is dropped from the map, like any other `null`
    /// leaf; the remaining languages are kept.
    pub fn localized(&self, key: &str) -> FormResult<Option<LocalizedStrings>> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let Value::Object(entries) = value else {
            return Err(self.invalid(
                key,
                format!("expected an object keyed by language id, got {}", kind(value)),
            ));
        };

        let mut localized = LocalizedStrings::new();
        for (language, text) in entries {
            let language_id = language
                .parse::<LanguageId>()
                .map_err(|e| self.invalid(key, e.to_string()))?;
            let text = match text {
                Value::String(s) => s.clone(),
                Value::Null => continue,
                other => {
                    return Err(self.invalid(
                        key,
                        format!("translation for language {language_id} must be a string, got {}", kind(other)),
                    ));
                }
            };
            localized.insert(language_id, text);
        }
        Ok(Some(localized))
    }

    /// Scope selected for `key` through its `<prefix><key>` flag.
    ///
    /// A missing, false or unreadable flag keeps the value on the single shop.
    pub fn scope_of(&self, prefix: &str, key: &str) -> FieldScope {
        let flag = format!("{prefix}{key}");
        match self.get(&flag).map(coerce_bool) {
            Some(Ok(true)) => FieldScope::AllShops,
            Some(Err(reason)) => {
                tracing::trace!(field = %self.field_path(&flag), %reason, "ignoring unreadable modify-all-shops flag");
                FieldScope::SingleShop
            }
            _ => FieldScope::SingleShop,
        }
    }

    /// Read `key` with `read` and attach the scope chosen by its flag.
    pub fn scoped<T>(
        &self,
        prefix: &str,
        key: &str,
        read: impl FnOnce(&Self, &str) -> FormResult<Option<T>>,
    ) -> FormResult<Option<ScopedValue<T>>> {
        Ok(read(self, key)?.map(|value| ScopedValue {
            value,
            scope: self.scope_of(prefix, key),
        }))
    }

    fn invalid(&self, key: &str, reason: impl Into<String>) -> FormDataError {
        FormDataError::invalid_field(self.field_path(key), reason)
    }
}

fn coerce_bool(value: &Value) -> Result<bool, String> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Ok(i != 0),
            (None, Some(f)) => Ok(f != 0.0),
            _ => Err(format!("expected a boolean, got {n}")),
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "on" | "yes" => Ok(true),
            "0" | "false" | "off" | "no" | "" => Ok(false),
            other => Err(format!("expected a boolean, got '{other}'")),
        },
        other => Err(format!("expected a boolean, got {}", kind(other))),
    }
}

fn coerce_integer(value: &Value) -> Result<i64, String> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            match n.as_f64() {
                // `i64::MAX as f64` rounds up to 2^63, which is already out of range.
                Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
                _ => Err(format!("expected an integer, got {n}")),
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("expected an integer, got '{s}'")),
        other => Err(format!("expected an integer, got {}", kind(other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PREFIX: &str = "modify_all_shops_";

    #[test]
    fn non_object_documents_are_empty() {
        let value = json!(["useless value"]);
        let form = FormData::new(&value);
        assert!(form.is_empty());
        assert!(form.section("header").is_none());
    }

    #[test]
    fn null_values_are_absent() {
        let value = json!({ "specifications": { "condition": null } });
        let form = FormData::new(&value);
        let specs = form.section("specifications").unwrap();
        assert!(!specs.contains("condition"));
        assert_eq!(specs.parse::<backoffice_products::ProductCondition>("condition").unwrap(), None);
    }

    #[test]
    fn sections_track_their_path() {
        let value = json!({ "options": { "visibility": { "show_price": "maybe" } } });
        let form = FormData::new(&value);
        let visibility = form.section("options").unwrap().section("visibility").unwrap();
        assert_eq!(visibility.path(), "options.visibility");

        let err = visibility.bool("show_price").unwrap_err();
        assert_eq!(err.path(), "options.visibility.show_price");
    }

    #[test]
    fn booleans_accept_form_encodings() {
        let value = json!({ "a": true, "b": 0, "c": "1", "d": "false", "e": "", "f": 2 });
        let form = FormData::new(&value);
        assert_eq!(form.bool("a").unwrap(), Some(true));
        assert_eq!(form.bool("b").unwrap(), Some(false));
        assert_eq!(form.bool("c").unwrap(), Some(true));
        assert_eq!(form.bool("d").unwrap(), Some(false));
        assert_eq!(form.bool("e").unwrap(), Some(false));
        assert_eq!(form.bool("f").unwrap(), Some(true));
        assert_eq!(form.bool("missing").unwrap(), None);
    }

    #[test]
    fn integers_accept_numeric_strings() {
        let value = json!({ "a": "1", "b": -3, "c": " 12 ", "d": "1.5", "e": 4.0 });
        let form = FormData::new(&value);
        assert_eq!(form.integer("a").unwrap(), Some(1));
        assert_eq!(form.integer("b").unwrap(), Some(-3));
        assert_eq!(form.integer("c").unwrap(), Some(12));
        assert!(form.integer("d").is_err());
        assert_eq!(form.integer("e").unwrap(), Some(4));
    }

    #[test]
    fn integers_out_of_range_are_rejected() {
        let value: Value = serde_json::from_str(
            r#"{ "a": 9223372036854775808, "b": 9223372036854776000, "c": -9223372036854775808, "d": "9223372036854775808" }"#,
        )
        .unwrap();
        let form = FormData::new(&value);
        assert!(form.integer("a").is_err());
        assert!(form.integer("b").is_err());
        assert_eq!(form.integer("c").unwrap(), Some(i64::MIN));
        assert!(form.integer("d").is_err());
    }

    #[test]
    fn localized_maps_are_keyed_by_language() {
        let value = json!({ "name": { "1": "Nom français", "2": "French name" } });
        let form = FormData::new(&value);
        let names = form.localized("name").unwrap().unwrap();
        assert_eq!(names.len(), 2);
        assert_eq!(names[&LanguageId::new(1).unwrap()], "Nom français");
        assert_eq!(names[&LanguageId::new(2).unwrap()], "French name");
    }

    #[test]
    fn localized_maps_reject_bad_language_keys() {
        let value = json!({ "name": { "fr": "Nom" } });
        let form = FormData::new(&value);
        assert!(form.localized("name").is_err());

        let value = json!({ "name": "plain string" });
        let form = FormData::new(&value);
        assert!(form.localized("name").is_err());
    }

    #[test]
    fn null_translations_are_dropped() {
        let value = json!({ "name": { "1": null, "2": "French name" } });
        let form = FormData::new(&value);
        let names = form.localized("name").unwrap().unwrap();
        assert_eq!(names.len(), 1);
        assert!(!names.contains_key(&LanguageId::new(1).unwrap()));
        assert_eq!(names[&LanguageId::new(2).unwrap()], "French name");
    }

    #[test]
    fn dates_parse_iso_days() {
        let value = json!({ "a": "2024-02-29", "b": "", "c": "29/02/2024" });
        let form = FormData::new(&value);
        assert_eq!(form.date("a").unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(form.date("b").unwrap(), None);
        assert!(form.date("c").is_err());
    }

    #[test]
    fn scope_follows_the_prefixed_flag() {
        let value = json!({
            "name": "x",
            "modify_all_shops_name": true,
            "description": "y",
            "modify_all_shops_description": false,
            "other": "z",
            "modify_all_shops_other": "garbage",
        });
        let form = FormData::new(&value);
        assert_eq!(form.scope_of(PREFIX, "name"), FieldScope::AllShops);
        assert_eq!(form.scope_of(PREFIX, "description"), FieldScope::SingleShop);
        assert_eq!(form.scope_of(PREFIX, "other"), FieldScope::SingleShop);
        assert_eq!(form.scope_of(PREFIX, "missing"), FieldScope::SingleShop);
    }

    #[test]
    fn scoped_is_absent_when_the_value_is_absent() {
        let value = json!({ "modify_all_shops_show_price": true });
        let form = FormData::new(&value);
        assert_eq!(form.scoped(PREFIX, "show_price", FormData::bool).unwrap(), None);
    }

    #[test]
    fn unknown_keys_are_listed() {
        let value = json!({ "name": 1, "not_handled": 0 });
        let form = FormData::new(&value);
        let known = vec!["name".to_string()];
        let unknown: Vec<_> = form.unknown_keys(&known).collect();
        assert_eq!(unknown, vec!["not_handled"]);
    }
}
