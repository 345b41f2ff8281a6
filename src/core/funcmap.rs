//! Name → function lookup handed to the host template engine.
//!
//! Every entry takes its arguments as [`serde_json::Value`]s. The argument
//! shapes are checked once, at the call boundary, and the typed helper in
//! `core` does the work. A wrong arity or argument type is an error; bad
//! *content* (an unparseable date, an empty string) never is.

use crate::core::time::{TimeFormatter, TimeInput};
use crate::core::{math, number, text, values};
use crate::domain::model::Pagination;
use crate::utils::error::{DsError, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

pub type TemplateFn = Arc<dyn Fn(&[Value]) -> Result<Value> + Send + Sync>;

#[derive(Clone, Default)]
pub struct FuncMap {
    funcs: BTreeMap<String, TemplateFn>,
}

impl fmt::Debug for FuncMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.funcs.keys()).finish()
    }
}

impl FuncMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `func` under `name`, returning the entry it replaced.
    pub fn insert<F>(&mut self, name: impl Into<String>, func: F) -> Option<TemplateFn>
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        self.funcs.insert(name.into(), Arc::new(func))
    }

    pub fn insert_shared(&mut self, name: impl Into<String>, func: TemplateFn) -> Option<TemplateFn> {
        self.funcs.insert(name.into(), func)
    }

    pub fn get(&self, name: &str) -> Option<&TemplateFn> {
        self.funcs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.funcs.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.funcs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }

    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let func = self.get(name).ok_or_else(|| DsError::UnknownFunction {
            name: name.to_string(),
        })?;
        func(args)
    }

    /// New map holding every entry of `self` and `extra`; `extra` wins on collisions.
    pub fn merge(&self, extra: &FuncMap) -> FuncMap {
        let mut merged = self.clone();
        for (name, func) in &extra.funcs {
            if merged.insert_shared(name.clone(), Arc::clone(func)).is_some() {
                tracing::trace!("func map entry '{}' overridden", name);
            }
        }
        merged
    }
}

/// Combines two maps without touching either; entries from `extra` take precedence.
pub fn merge_func_map(base: &FuncMap, extra: &FuncMap) -> FuncMap {
    base.merge(extra)
}

/// Positional argument access with errors naming the called function.
struct Args<'a> {
    name: &'static str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    fn exact(name: &'static str, values: &'a [Value], count: usize) -> Result<Self> {
        Self::between(name, values, count, count)
    }

    fn between(name: &'static str, values: &'a [Value], min: usize, max: usize) -> Result<Self> {
        if values.len() < min || values.len() > max {
            let expected = if min == max {
                min.to_string()
            } else {
                format!("{min} to {max}")
            };
            return Err(DsError::invalid_argument(
                name,
                format!("expected {expected} arguments, got {}", values.len()),
            ));
        }
        Ok(Self { name, values })
    }

    fn value(&self, index: usize) -> &'a Value {
        &self.values[index]
    }

    fn str(&self, index: usize) -> Result<&'a str> {
        self.values[index]
            .as_str()
            .ok_or_else(|| self.type_error(index, "a string"))
    }

    fn int(&self, index: usize) -> Result<i64> {
        self.values[index]
            .as_i64()
            .ok_or_else(|| self.type_error(index, "an integer"))
    }

    fn bool(&self, index: usize) -> Result<bool> {
        self.values[index]
            .as_bool()
            .ok_or_else(|| self.type_error(index, "a boolean"))
    }

    fn strings(&self, index: usize) -> Result<Vec<&'a str>> {
        self.values[index]
            .as_array()
            .and_then(|items| items.iter().map(Value::as_str).collect::<Option<Vec<_>>>())
            .ok_or_else(|| self.type_error(index, "an array of strings"))
    }

    fn type_error(&self, index: usize, expected: &str) -> DsError {
        DsError::invalid_argument(
            self.name,
            format!(
                "argument {} must be {expected}, got {}",
                index + 1,
                self.values[index]
            ),
        )
    }
}

fn insert_string_fn(map: &mut FuncMap, name: &'static str, f: fn(&str) -> String) {
    map.insert(name, move |args| {
        let args = Args::exact(name, args, 1)?;
        Ok(Value::from(f(args.str(0)?)))
    });
}

fn insert_str_predicate(map: &mut FuncMap, name: &'static str, f: fn(&str, &str) -> bool) {
    map.insert(name, move |args| {
        let args = Args::exact(name, args, 2)?;
        Ok(Value::from(f(args.str(0)?, args.str(1)?)))
    });
}

fn insert_int_fn<T: Into<Value> + 'static>(map: &mut FuncMap, name: &'static str, f: fn(i64, i64) -> T) {
    map.insert(name, move |args| {
        let args = Args::exact(name, args, 2)?;
        Ok(f(args.int(0)?, args.int(1)?).into())
    });
}

fn insert_time_fn(
    map: &mut FuncMap,
    name: &'static str,
    formatter: &TimeFormatter,
    f: fn(&TimeFormatter, TimeInput) -> String,
) {
    let formatter = formatter.clone();
    map.insert(name, move |args| {
        let args = Args::exact(name, args, 1)?;
        Ok(Value::from(f(&formatter, TimeInput::from(args.value(0)))))
    });
}

/// The standard map, with time helpers running against the system clock in UTC.
pub fn func_map() -> FuncMap {
    func_map_with(&TimeFormatter::new())
}

/// The standard map, with time helpers bound to `formatter`.
pub fn func_map_with(formatter: &TimeFormatter) -> FuncMap {
    let mut map = FuncMap::new();

    // HTML trust markers: escaping is the host engine's call.
    for name in ["safe", "safeHTML", "safeAttr", "safeURL", "safeJS", "safeCSS"] {
        map.insert(name, move |args| {
            let args = Args::exact(name, args, 1)?;
            Ok(Value::from(args.str(0)?))
        });
    }

    map.insert("dict", |args| {
        Ok(values::dict(args).map_or(Value::Null, Value::Object))
    });

    insert_int_fn(&mut map, "add", math::add);
    insert_int_fn(&mut map, "sub", math::sub);
    insert_int_fn(&mut map, "mul", math::mul);
    insert_int_fn(&mut map, "div", math::div);
    insert_int_fn(&mut map, "mod", math::modulo);
    insert_int_fn(&mut map, "seq", math::seq);

    map.insert("eq", |args| {
        let args = Args::exact("eq", args, 2)?;
        Ok(Value::from(args.value(0) == args.value(1)))
    });
    map.insert("ne", |args| {
        let args = Args::exact("ne", args, 2)?;
        Ok(Value::from(args.value(0) != args.value(1)))
    });
    insert_int_fn(&mut map, "lt", |a, b| a < b);
    insert_int_fn(&mut map, "le", |a, b| a <= b);
    insert_int_fn(&mut map, "gt", |a, b| a > b);
    insert_int_fn(&mut map, "ge", |a, b| a >= b);

    map.insert("truncate", |args| {
        let args = Args::exact("truncate", args, 2)?;
        let max_len = usize::try_from(args.int(1)?).unwrap_or(0);
        Ok(Value::from(text::truncate(args.str(0)?, max_len)))
    });
    insert_string_fn(&mut map, "lower", str::to_lowercase);
    insert_string_fn(&mut map, "upper", str::to_uppercase);
    insert_string_fn(&mut map, "title", text::title);
    insert_string_fn(&mut map, "trim", |s| s.trim().to_string());
    insert_str_predicate(&mut map, "contains", |s, sub| s.contains(sub));
    insert_str_predicate(&mut map, "hasPrefix", |s, prefix| s.starts_with(prefix));
    insert_str_predicate(&mut map, "hasSuffix", |s, suffix| s.ends_with(suffix));
    map.insert("replace", |args| {
        let args = Args::exact("replace", args, 3)?;
        Ok(Value::from(text::replace(args.str(0)?, args.str(1)?, args.str(2)?)))
    });
    map.insert("split", |args| {
        let args = Args::exact("split", args, 2)?;
        Ok(Value::from(text::split(args.str(0)?, args.str(1)?)))
    });
    map.insert("join", |args| {
        let args = Args::exact("join", args, 2)?;
        Ok(Value::from(text::join(&args.strings(0)?, args.str(1)?)))
    });

    insert_time_fn(&mut map, "formatTime", formatter, |f, t| f.format_time(t));
    insert_time_fn(&mut map, "formatDate", formatter, |f, t| f.format_date(t));
    insert_time_fn(&mut map, "formatDateTime", formatter, |f, t| f.format_date_time(t));
    insert_time_fn(&mut map, "timeAgo", formatter, |f, t| f.time_ago(t));
    let now_formatter = formatter.clone();
    map.insert("now", move |args| {
        Args::exact("now", args, 0)?;
        Ok(Value::from(now_formatter.now().to_rfc3339()))
    });

    map.insert("formatNumber", |args| {
        let args = Args::exact("formatNumber", args, 1)?;
        Ok(Value::from(number::format_number(args.int(0)?)))
    });

    map.insert("default", |args| {
        let args = Args::exact("default", args, 2)?;
        Ok(values::default_value(args.value(0), args.value(1)).clone())
    });
    map.insert("coalesce", |args| {
        Ok(values::coalesce(args).cloned().unwrap_or(Value::Null))
    });

    map.insert("first", |args| {
        let args = Args::exact("first", args, 1)?;
        Ok(values::first(args.value(0)).cloned().unwrap_or(Value::Null))
    });
    map.insert("last", |args| {
        let args = Args::exact("last", args, 1)?;
        Ok(values::last(args.value(0)).cloned().unwrap_or(Value::Null))
    });
    map.insert("length", |args| {
        let args = Args::exact("length", args, 1)?;
        Ok(Value::from(values::length(args.value(0))))
    });

    map.insert("boolState", |args| {
        let args = Args::between("boolState", args, 1, 2)?;
        let fallback = if args.values.len() == 2 {
            Some(args.str(1)?)
        } else {
            None
        };
        Ok(Value::from(text::bool_state(args.bool(0)?, fallback)))
    });
    map.insert("boolYesNo", |args| {
        let args = Args::exact("boolYesNo", args, 1)?;
        Ok(Value::from(text::bool_yes_no(args.bool(0)?)))
    });

    map.insert("pagination", |args| {
        let args = Args::exact("pagination", args, 2)?;
        Ok(serde_json::to_value(Pagination::new(args.int(0)?, args.int(1)?))?)
    });

    tracing::trace!("built template func map with {} entries", map.len());
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn fixed_map() -> FuncMap {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        func_map_with(&TimeFormatter::new().with_clock(FixedClock(now)))
    }

    #[test]
    fn test_call_dispatches_by_name() {
        let map = fixed_map();
        assert_eq!(map.call("add", &[json!(2), json!(3)]).unwrap(), json!(5));
        assert_eq!(map.call("formatNumber", &[json!(1234567)]).unwrap(), json!("1,234,567"));
        assert_eq!(map.call("now", &[]).unwrap(), json!("2024-06-15T12:00:00+00:00"));
        assert_eq!(
            map.call("timeAgo", &[json!("2024-06-15T11:55:00Z")]).unwrap(),
            json!("5 minutes ago")
        );
    }

    #[test]
    fn test_call_boundary_errors() {
        let map = fixed_map();
        assert!(matches!(
            map.call("nope", &[]),
            Err(DsError::UnknownFunction { .. })
        ));
        assert!(matches!(
            map.call("add", &[json!(1)]),
            Err(DsError::InvalidArgument { .. })
        ));
        assert!(matches!(
            map.call("truncate", &[json!(5), json!(1)]),
            Err(DsError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_bad_content_is_not_an_error() {
        let map = fixed_map();
        assert_eq!(map.call("formatDate", &[json!("soon")]).unwrap(), json!("soon"));
        assert_eq!(map.call("formatDate", &[Value::Null]).unwrap(), json!(""));
        assert_eq!(map.call("dict", &[json!("a")]).unwrap(), Value::Null);
        assert_eq!(map.call("first", &[json!(3)]).unwrap(), Value::Null);
        assert_eq!(map.call("div", &[json!(3), json!(0)]).unwrap(), json!(0));
        assert_eq!(map.call("truncate", &[json!("hello"), json!(-1)]).unwrap(), json!(""));
        assert_eq!(map.call("seq", &[json!(0), json!(i64::MAX)]).unwrap(), json!([]));
        assert_eq!(map.call("seq", &[json!(i64::MIN), json!(i64::MAX)]).unwrap(), json!([]));
    }

    #[test]
    fn test_merge_prefers_extra() {
        let mut base = FuncMap::new();
        base.insert("a", |_| Ok(json!("base")));
        let mut extra = FuncMap::new();
        extra.insert("a", |_| Ok(json!("overridden")));
        extra.insert("b", |_| Ok(json!("extra")));

        let merged = merge_func_map(&base, &extra);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.call("a", &[]).unwrap(), json!("overridden"));
        assert_eq!(merged.call("b", &[]).unwrap(), json!("extra"));
        assert_eq!(base.call("a", &[]).unwrap(), json!("base"));
    }
}
