//! Column declarations.

mod generated_value;
pub use generated_value::GeneratedValue;

use crate::args::Args;
use crate::{Build, BuildContext, Configure, Error, Result, Value};
use fluent_mapping_core::schema::{FieldMapping, NamingStrategy, Type};
use indexmap::IndexMap;

/// A pending column declaration.
///
/// Every verb mutates the descriptor in place and returns it, so
/// `builder.string("name").nullable().unique()` configures a single column.
/// The declaration only reaches the store when it is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Property name on the mapped class
    name: String,

    ty: Type,

    /// Explicit column name; derived from the naming strategy when unset
    column: Option<String>,

    nullable: bool,

    unique: bool,

    length: Option<u32>,

    precision: Option<u32>,

    scale: Option<u32>,

    column_definition: Option<String>,

    /// Column options (`unsigned`, `default`, `comment`, ...)
    options: IndexMap<String, Value>,

    primary: bool,

    version: bool,

    generated: Option<GeneratedValue>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            column: None,
            nullable: false,
            unique: false,
            length: None,
            precision: None,
            scale: None,
            column_definition: None,
            options: IndexMap::new(),
            primary: false,
            version: false,
            generated: None,
        }
    }

    /// Gets the property name.
    pub fn field_name(&self) -> &str {
        &self.name
    }

    /// Gets the logical type.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn is_primary(&self) -> bool {
        self.primary
    }

    pub fn is_version(&self) -> bool {
        self.version
    }

    pub fn is_unsigned(&self) -> bool {
        matches!(self.options.get("unsigned"), Some(Value::Bool(true)))
    }

    pub fn generated(&self) -> Option<&GeneratedValue> {
        self.generated.as_ref()
    }

    /// Sets the column name.
    pub fn name(&mut self, column: impl Into<String>) -> &mut Self {
        self.column = Some(column.into());
        self
    }

    /// Alias of [`Field::name`].
    pub fn column_name(&mut self, column: impl Into<String>) -> &mut Self {
        self.name(column)
    }

    pub fn nullable(&mut self) -> &mut Self {
        self.nullable = true;
        self
    }

    pub fn unique(&mut self) -> &mut Self {
        self.unique = true;
        self
    }

    pub fn length(&mut self, length: u32) -> &mut Self {
        self.length = Some(length);
        self
    }

    pub fn precision(&mut self, precision: u32) -> &mut Self {
        self.precision = Some(precision);
        self
    }

    pub fn scale(&mut self, scale: u32) -> &mut Self {
        self.scale = Some(scale);
        self
    }

    pub fn unsigned(&mut self) -> &mut Self {
        self.option("unsigned", true)
    }

    pub fn fixed(&mut self, fixed: bool) -> &mut Self {
        self.option("fixed", fixed)
    }

    /// Sets the column default. Dispatched by name as `default`.
    pub fn set_default(&mut self, value: impl Into<Value>) -> &mut Self {
        self.option("default", value)
    }

    pub fn comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.option("comment", comment.into())
    }

    pub fn collation(&mut self, collation: impl Into<String>) -> &mut Self {
        self.option("collation", collation.into())
    }

    /// Replaces the generated column DDL with a raw fragment.
    pub fn column_definition(&mut self, definition: impl Into<String>) -> &mut Self {
        self.column_definition = Some(definition.into());
        self
    }

    pub fn option(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.options.insert(name.into(), value.into());
        self
    }

    /// Marks the column as (part of) the primary key.
    pub fn primary(&mut self) -> &mut Self {
        self.primary = true;
        self
    }

    /// Marks the column as the optimistic-locking version.
    pub fn use_for_versioning(&mut self) -> &mut Self {
        self.version = true;
        self
    }

    /// Shorthand for [`Field::generated_value`] with the default strategy.
    pub fn auto_increment(&mut self) -> &mut Self {
        self.generated_value(|_| {})
    }

    /// Attaches a key generation strategy, configured by `f`.
    pub fn generated_value(&mut self, f: impl FnOnce(&mut GeneratedValue)) -> &mut Self {
        let mut generated = GeneratedValue::default();
        f(&mut generated);
        self.generated = Some(generated);
        self
    }

    /// Invokes a configuration verb by name.
    ///
    /// `default` is routed to [`Field::set_default`]. Unknown verbs fail with
    /// a method-not-found error and arguments of the wrong shape with an
    /// invalid-argument error.
    pub fn call(&mut self, verb: &str, args: &[Value]) -> Result<&mut Self> {
        let args = Args::new(verb, args);

        match verb {
            "name" | "column_name" => {
                args.expect_len(1, 1)?;
                self.name(args.str(0)?);
            }
            "nullable" => {
                args.expect_len(0, 1)?;
                self.nullable = args.flag(0)?;
            }
            "unique" => {
                args.expect_len(0, 1)?;
                self.unique = args.flag(0)?;
            }
            "length" => {
                args.expect_len(1, 1)?;
                self.length(args.u32(0)?);
            }
            "precision" => {
                args.expect_len(1, 1)?;
                self.precision(args.u32(0)?);
            }
            "scale" => {
                args.expect_len(1, 1)?;
                self.scale(args.u32(0)?);
            }
            "unsigned" => {
                args.expect_len(0, 0)?;
                self.unsigned();
            }
            "fixed" => {
                args.expect_len(0, 1)?;
                self.fixed(args.flag(0)?);
            }
            "default" | "set_default" => {
                args.expect_len(1, 1)?;
                self.set_default(args.value(0)?.clone());
            }
            "comment" => {
                args.expect_len(1, 1)?;
                self.comment(args.str(0)?);
            }
            "collation" => {
                args.expect_len(1, 1)?;
                self.collation(args.str(0)?);
            }
            "column_definition" => {
                args.expect_len(1, 1)?;
                self.column_definition(args.str(0)?);
            }
            "option" => {
                args.expect_len(2, 2)?;
                self.option(args.str(0)?, args.value(1)?.clone());
            }
            "primary" => {
                args.expect_len(0, 0)?;
                self.primary();
            }
            "use_for_versioning" => {
                args.expect_len(0, 0)?;
                self.use_for_versioning();
            }
            "auto_increment" => {
                args.expect_len(0, 0)?;
                self.auto_increment();
            }
            _ => return Err(Error::method_not_found("field", verb)),
        }

        Ok(self)
    }

    /// The store representation of this declaration.
    pub fn to_mapping(&self, naming: &dyn NamingStrategy) -> FieldMapping {
        let column = match &self.column {
            Some(column) => column.clone(),
            None => naming.property_to_column_name(&self.name),
        };

        let mut mapping = FieldMapping::new(&self.name, column, self.ty.clone());
        mapping.nullable = self.nullable;
        mapping.unique = self.unique;
        mapping.length = self.length;
        mapping.precision = self.precision;
        mapping.scale = self.scale;
        mapping.column_definition = self.column_definition.clone();
        mapping.options = self.options.clone();
        mapping.id = self.primary;
        mapping.version = self.version;
        mapping
    }
}

impl Build for Field {
    fn build(&self, cx: &mut BuildContext<'_>) -> Result<()> {
        let mapping = self.to_mapping(cx.naming());
        let column = mapping.column_name.clone();

        cx.class_mut()?.map_field(mapping)?;

        if let Some(generated) = &self.generated {
            let table = cx.class_table_name()?;
            let generator = generated.to_generator(&table, &column)?;
            cx.class_mut()?.set_id_generator(&self.name, generator)?;
        }

        Ok(())
    }
}

impl Configure for Field {}
