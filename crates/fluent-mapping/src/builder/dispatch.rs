use super::fields::SHORTHAND_VERBS;
use super::Builder;
use crate::args::Args;
use crate::{Error, Result, Value};

/// Verbs [`Builder::call`] understands besides the field shorthands.
const VERBS: &[&str] = &[
    "field",
    "increments",
    "small_increments",
    "big_increments",
    "timestamps",
    "soft_deletes",
    "remember_token",
    "one_to_one",
    "many_to_one",
    "one_to_many",
    "many_to_many",
    "has_one",
    "belongs_to",
    "has_many",
    "belongs_to_many",
    "embed",
    "table",
    "entity",
    "index",
    "unique",
    "primary",
    "events",
];

/// Returns `true` if `verb` is handled by the builder itself.
pub(crate) fn is_builtin_verb(verb: &str) -> bool {
    VERBS.contains(&verb) || SHORTHAND_VERBS.contains(&verb)
}

impl Builder {
    /// Invokes a verb by name.
    ///
    /// Registered macros are tried first and receive the builder followed by
    /// `args`. Otherwise the call is routed to the built-in verb of the same
    /// name; the descriptor it creates is queued as usual. Unknown verbs fail
    /// with a method-not-found error.
    pub fn call(&mut self, verb: &str, args: &[Value]) -> Result<()> {
        if let Some(makro) = self.macros.get(verb).cloned() {
            tracing::debug!(class = %self.class, verb, "dispatching macro");
            return makro.call(verb, self, args);
        }

        let args = Args::new(verb, args);

        if SHORTHAND_VERBS.contains(&verb) {
            args.expect_len(1, 1)?;
            self.call_shorthand(verb, args.str(0)?.to_string());
            return Ok(());
        }

        match verb {
            "field" => {
                args.expect_len(2, 2)?;
                self.field(args.str(0)?, args.str(1)?)?;
            }
            "increments" => {
                args.expect_len(1, 1)?;
                self.increments(args.str(0)?)?;
            }
            "small_increments" => {
                args.expect_len(1, 1)?;
                self.small_increments(args.str(0)?)?;
            }
            "big_increments" => {
                args.expect_len(1, 1)?;
                self.big_increments(args.str(0)?)?;
            }
            "timestamps" => {
                args.expect_len(0, 0)?;
                self.timestamps();
            }
            "soft_deletes" => {
                args.expect_len(0, 1)?;
                self.soft_deletes(args.opt_str(0)?.unwrap_or("deleted_at"));
            }
            "remember_token" => {
                args.expect_len(0, 0)?;
                self.remember_token();
            }
            "one_to_one" | "has_one" => {
                args.expect_len(2, 2)?;
                self.one_to_one(args.str(0)?, args.str(1)?);
            }
            "many_to_one" | "belongs_to" => {
                args.expect_len(2, 2)?;
                self.many_to_one(args.str(0)?, args.str(1)?);
            }
            "one_to_many" | "has_many" => {
                args.expect_len(2, 2)?;
                self.one_to_many(args.str(0)?, args.str(1)?);
            }
            "many_to_many" | "belongs_to_many" => {
                args.expect_len(2, 2)?;
                self.many_to_many(args.str(0)?, args.str(1)?);
            }
            "embed" => {
                args.expect_len(2, 2)?;
                self.embed(args.str(0)?, args.str(1)?);
            }
            "table" => {
                args.expect_len(0, 1)?;
                match args.opt_str(0)? {
                    Some(name) => self.table(name)?,
                    None => self.table_with(|_| {})?,
                };
            }
            "entity" => {
                args.expect_len(0, 0)?;
                self.entity()?;
            }
            "index" => {
                args.expect_len(1, usize::MAX)?;
                self.index(args.strings(0)?);
            }
            "unique" => {
                args.expect_len(1, usize::MAX)?;
                self.unique(args.strings(0)?);
            }
            "primary" => {
                args.expect_len(1, usize::MAX)?;
                self.primary(args.strings(0)?);
            }
            "events" => {
                args.expect_len(0, 0)?;
                self.events();
            }
            _ => return Err(Error::method_not_found("builder", verb)),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_verbs() {
        assert!(is_builtin_verb("string"));
        assert!(is_builtin_verb("belongs_to_many"));
        assert!(is_builtin_verb("timestamps"));
        assert!(!is_builtin_verb("money"));
    }
}
