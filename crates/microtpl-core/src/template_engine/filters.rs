//! Case conversion filters (`{{ title | kebab_case }}`).

use std::collections::HashMap;

use heck::{ToKebabCase, ToLowerCamelCase, ToPascalCase, ToSnakeCase};
use tera::{Result, Tera, Value};

type Converter = fn(&str) -> String;

const CASE_FILTERS: [(&str, Converter); 4] = [
    ("snake_case", |s| s.to_snake_case()),
    ("pascal_case", |s| s.to_pascal_case()),
    ("camel_case", |s| s.to_lower_camel_case()),
    ("kebab_case", |s| s.to_kebab_case()),
];

/// Register every case filter on `tera`.
pub(crate) fn register(tera: &mut Tera) {
    for (name, convert) in CASE_FILTERS {
        tera.register_filter(
            name,
            move |value: &Value, _args: &HashMap<String, Value>| apply(name, convert, value),
        );
    }
}

fn apply(name: &str, convert: Converter, value: &Value) -> Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("{name} filter expects a string")))?;
    Ok(Value::String(convert(s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(filter: &str, input: &str) -> String {
        let (_, f) = CASE_FILTERS
            .iter()
            .find(|(name, _)| *name == filter)
            .unwrap();
        apply(filter, *f, &Value::String(input.to_string()))
            .unwrap()
            .as_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_case_filters() {
        assert_eq!(convert("snake_case", "Weekly Review"), "weekly_review");
        assert_eq!(convert("pascal_case", "weekly review"), "WeeklyReview");
        assert_eq!(convert("camel_case", "Weekly Review"), "weeklyReview");
        assert_eq!(convert("kebab_case", "Weekly Review"), "weekly-review");
    }

    #[test]
    fn test_filter_rejects_non_string() {
        let err = apply("snake_case", |s| s.to_snake_case(), &Value::Number(42.into()));
        assert!(err.is_err());
    }

    #[test]
    fn test_register_makes_filters_available() {
        let mut tera = Tera::default();
        register(&mut tera);
        let out = tera
            .render_str("{{ 'Daily Note' | kebab_case }}", &tera::Context::new())
            .unwrap();
        assert_eq!(out, "daily-note");
    }
}
