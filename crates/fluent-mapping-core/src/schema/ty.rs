use std::fmt;

/// Logical column types a field can be declared with.
///
/// Each variant has a stable token (see [`Type::name`]) that the
/// [`TypeRegistry`](super::TypeRegistry) resolves back to the variant.
/// Extension types registered at runtime are carried as [`Type::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Bounded character data.
    String,
    /// Unbounded character data.
    Text,
    /// Globally unique identifier.
    Guid,
    Integer,
    SmallInteger,
    BigInteger,
    Boolean,
    Float,
    /// Fixed-point number with precision and scale.
    Decimal,
    Date,
    DateImmutable,
    DateTime,
    DateTimeImmutable,
    /// Date and time with a time zone offset.
    DateTimeTz,
    DateTimeTzImmutable,
    Time,
    TimeImmutable,
    DateInterval,
    Json,
    /// A flat list stored as a comma separated string.
    SimpleArray,
    /// An arbitrary serialized list.
    Array,
    /// An arbitrary serialized object.
    Object,
    /// Bounded binary data.
    Binary,
    /// Unbounded binary data.
    Blob,
    /// A type registered at runtime under the given token.
    Custom(String),
}

impl Type {
    /// Every built-in type, in registration order.
    pub const BUILTIN: &'static [Type] = &[
        Type::String,
        Type::Text,
        Type::Guid,
        Type::Integer,
        Type::SmallInteger,
        Type::BigInteger,
        Type::Boolean,
        Type::Float,
        Type::Decimal,
        Type::Date,
        Type::DateImmutable,
        Type::DateTime,
        Type::DateTimeImmutable,
        Type::DateTimeTz,
        Type::DateTimeTzImmutable,
        Type::Time,
        Type::TimeImmutable,
        Type::DateInterval,
        Type::Json,
        Type::SimpleArray,
        Type::Array,
        Type::Object,
        Type::Binary,
        Type::Blob,
    ];

    /// The type's token.
    pub fn name(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::Guid => "guid",
            Self::Integer => "integer",
            Self::SmallInteger => "smallint",
            Self::BigInteger => "bigint",
            Self::Boolean => "boolean",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Date => "date",
            Self::DateImmutable => "date_immutable",
            Self::DateTime => "datetime",
            Self::DateTimeImmutable => "datetime_immutable",
            Self::DateTimeTz => "datetimetz",
            Self::DateTimeTzImmutable => "datetimetz_immutable",
            Self::Time => "time",
            Self::TimeImmutable => "time_immutable",
            Self::DateInterval => "dateinterval",
            Self::Json => "json",
            Self::SimpleArray => "simple_array",
            Self::Array => "array",
            Self::Object => "object",
            Self::Binary => "binary",
            Self::Blob => "blob",
            Self::Custom(name) => name,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer | Self::SmallInteger | Self::BigInteger)
    }

    pub fn is_numeric(&self) -> bool {
        self.is_integer() || matches!(self, Self::Float | Self::Decimal)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String | Self::Text | Self::Guid)
    }

    /// Returns `true` if the type can back an optimistic-locking version
    /// column.
    pub fn is_versionable(&self) -> bool {
        self.is_integer() || matches!(self, Self::DateTime | Self::DateTimeImmutable)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
