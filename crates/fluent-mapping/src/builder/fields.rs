use super::Builder;
use crate::{Field, Result};
use fluent_mapping_core::schema::Type;

/// Generates the typed field shorthands. Each verb maps to one logical type
/// and may apply default configuration to the new field.
macro_rules! shorthands {
    (
        $(
            $(#[$attr:meta])*
            $verb:ident => $ty:ident $({ $($defaults:tt)* })?;
        )*
    ) => {
        impl Builder {
            $(
                $(#[$attr])*
                pub fn $verb(&mut self, name: impl Into<String>) -> &mut Field {
                    let field = self.field_of(Type::$ty, name);
                    $( field.$($defaults)*; )?
                    field
                }
            )*

            /// Calls the shorthand named `verb`, if there is one.
            pub(crate) fn call_shorthand(&mut self, verb: &str, name: String) -> Option<&mut Field> {
                $(
                    if verb == stringify!($verb) {
                        return Some(self.$verb(name));
                    }
                )*
                None
            }
        }

        pub(crate) const SHORTHAND_VERBS: &[&str] = &[$(stringify!($verb)),*];
    };
}

shorthands! {
    string => String;
    text => Text;
    guid => Guid;
    blob => Blob;

    /// Binary columns are nullable unless configured otherwise.
    binary => Binary { nullable() };

    boolean => Boolean;
    integer => Integer;
    small_integer => SmallInteger;
    big_integer => BigInteger;
    unsigned_integer => Integer { unsigned() };
    unsigned_small_integer => SmallInteger { unsigned() };
    unsigned_big_integer => BigInteger { unsigned() };

    /// Floats default to precision 8, scale 2.
    float => Float { precision(8).scale(2) };

    /// Decimals default to precision 8, scale 2.
    decimal => Decimal { precision(8).scale(2) };

    date => Date;
    date_immutable => DateImmutable;
    date_time => DateTime;
    date_time_immutable => DateTimeImmutable;
    date_time_tz => DateTimeTz;
    date_time_tz_immutable => DateTimeTzImmutable;
    time => Time;
    time_immutable => TimeImmutable;
    date_interval => DateInterval;
    json => Json;
    simple_array => SimpleArray;
    array => Array;
    object => Object;
}

impl Builder {
    /// Declares a field whose type is given by its registry token.
    ///
    /// Unknown tokens are rejected immediately.
    pub fn field(&mut self, ty: &str, name: impl Into<String>) -> Result<&mut Field> {
        let ty = self.types.resolve(ty)?;
        Ok(self.field_of(ty, name))
    }

    /// Declares a field of an already resolved type.
    pub fn field_of(&mut self, ty: Type, name: impl Into<String>) -> &mut Field {
        self.push_field(Field::new(name, ty))
    }

    /// Declares an auto-generated, unsigned integer primary key.
    pub fn increments(&mut self, name: impl Into<String>) -> Result<&mut Field> {
        self.identity("increments", Type::Integer, name)
    }

    pub fn small_increments(&mut self, name: impl Into<String>) -> Result<&mut Field> {
        self.identity("small_increments", Type::SmallInteger, name)
    }

    pub fn big_increments(&mut self, name: impl Into<String>) -> Result<&mut Field> {
        self.identity("big_increments", Type::BigInteger, name)
    }

    /// Declares nullable `created_at` and `updated_at` datetime fields.
    pub fn timestamps(&mut self) {
        self.date_time("created_at").nullable();
        self.date_time("updated_at").nullable();
    }

    /// Declares the nullable datetime marking a soft-deleted row.
    pub fn soft_deletes(&mut self, name: impl Into<String>) -> &mut Field {
        self.date_time(name).nullable()
    }

    pub fn remember_token(&mut self) -> &mut Field {
        self.string("remember_token").nullable().length(100)
    }

    fn identity(&mut self, verb: &str, ty: Type, name: impl Into<String>) -> Result<&mut Field> {
        self.assert_not_embedded(verb)?;
        Ok(self.field_of(ty, name).primary().unsigned().auto_increment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_mapping_core::schema::ClassKind;

    #[test]
    fn every_shorthand_dispatches() {
        let mut builder = Builder::new("Sample", ClassKind::Entity);

        for verb in SHORTHAND_VERBS {
            assert!(builder.call_shorthand(verb, format!("{verb}_field")).is_some());
        }

        assert!(builder.call_shorthand("money", "price".to_string()).is_none());
        assert_eq!(builder.queued().len(), SHORTHAND_VERBS.len());
    }
}
