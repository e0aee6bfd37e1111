use crate::{Error, Result, Value};

/// Positional arguments of a verb dispatched by name.
pub(crate) struct Args<'a> {
    verb: &'a str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    pub(crate) fn new(verb: &'a str, values: &'a [Value]) -> Self {
        Self { verb, values }
    }

    /// Fails unless between `min` and `max` arguments were passed.
    pub(crate) fn expect_len(&self, min: usize, max: usize) -> Result<()> {
        let len = self.values.len();
        if len < min || len > max {
            let expected = if min == max {
                format!("{min}")
            } else {
                format!("{min} to {max}")
            };
            return Err(Error::invalid_argument(format!(
                "`{}` expects {expected} argument(s), got {len}",
                self.verb
            )));
        }
        Ok(())
    }

    pub(crate) fn value(&self, i: usize) -> Result<&'a Value> {
        self.values.get(i).ok_or_else(|| {
            Error::invalid_argument(format!("`{}` is missing argument {i}", self.verb))
        })
    }

    pub(crate) fn str(&self, i: usize) -> Result<&'a str> {
        let value = self.value(i)?;
        value.as_str().ok_or_else(|| self.mismatch(i, "a string", value))
    }

    pub(crate) fn opt_str(&self, i: usize) -> Result<Option<&'a str>> {
        match self.values.get(i) {
            None | Some(Value::Null) => Ok(None),
            Some(_) => self.str(i).map(Some),
        }
    }

    pub(crate) fn u32(&self, i: usize) -> Result<u32> {
        let value = self.value(i)?;
        value
            .as_u32()
            .ok_or_else(|| self.mismatch(i, "a non-negative integer", value))
    }

    /// A trailing flag that defaults to `true` when omitted.
    pub(crate) fn flag(&self, i: usize) -> Result<bool> {
        match self.values.get(i) {
            None => Ok(true),
            Some(value) => value
                .as_bool()
                .ok_or_else(|| self.mismatch(i, "a bool", value)),
        }
    }

    /// Collects string arguments from position `from` onwards. Each argument
    /// may be a string or a list of strings.
    pub(crate) fn strings(&self, from: usize) -> Result<Vec<String>> {
        let mut out = vec![];

        for (i, value) in self.values.iter().enumerate().skip(from) {
            match value {
                Value::String(value) => out.push(value.clone()),
                Value::List(values) => {
                    for value in values {
                        let value = value
                            .as_str()
                            .ok_or_else(|| self.mismatch(i, "a list of strings", value))?;
                        out.push(value.to_string());
                    }
                }
                _ => return Err(self.mismatch(i, "a string or list of strings", value)),
            }
        }

        Ok(out)
    }

    fn mismatch(&self, i: usize, expected: &str, actual: &Value) -> Error {
        Error::invalid_argument(format!(
            "`{}` expects {expected} at position {i}, got {}",
            self.verb,
            actual.kind_name()
        ))
    }
}
