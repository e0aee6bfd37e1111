use crate::{Configure, Error, Result};
use fluent_mapping_core::schema::{GeneratorStrategy, IdGenerator, SequenceGenerator};

/// Key generation strategy attached to a primary key field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedValue {
    strategy: GeneratorStrategy,

    sequence_name: Option<String>,

    initial_value: Option<u32>,

    allocation_size: Option<u32>,

    /// Generator name for the custom strategy
    custom: Option<String>,
}

impl GeneratedValue {
    pub fn strategy(&self) -> GeneratorStrategy {
        self.strategy
    }

    pub fn auto(&mut self) -> &mut Self {
        self.strategy = GeneratorStrategy::Auto;
        self
    }

    pub fn identity(&mut self) -> &mut Self {
        self.strategy = GeneratorStrategy::Identity;
        self
    }

    pub fn sequence(&mut self) -> &mut Self {
        self.strategy = GeneratorStrategy::Sequence;
        self
    }

    /// Uses a named sequence. Implies the sequence strategy.
    pub fn sequence_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.strategy = GeneratorStrategy::Sequence;
        self.sequence_name = Some(name.into());
        self
    }

    pub fn initial_value(&mut self, value: u32) -> &mut Self {
        self.initial_value = Some(value);
        self
    }

    pub fn allocation_size(&mut self, size: u32) -> &mut Self {
        self.allocation_size = Some(size);
        self
    }

    pub fn uuid(&mut self) -> &mut Self {
        self.strategy = GeneratorStrategy::Uuid;
        self
    }

    pub fn table(&mut self) -> &mut Self {
        self.strategy = GeneratorStrategy::Table;
        self
    }

    pub fn custom(&mut self, generator: impl Into<String>) -> &mut Self {
        self.strategy = GeneratorStrategy::Custom;
        self.custom = Some(generator.into());
        self
    }

    pub fn none(&mut self) -> &mut Self {
        self.strategy = GeneratorStrategy::None;
        self
    }

    /// Resolves the store representation for the column `column` of `table`.
    pub(crate) fn to_generator(&self, table: &str, column: &str) -> Result<IdGenerator> {
        let mut generator = IdGenerator {
            strategy: self.strategy,
            sequence: None,
            custom: None,
        };

        match self.strategy {
            GeneratorStrategy::Sequence => {
                let name = match &self.sequence_name {
                    Some(name) => name.clone(),
                    None => format!("{table}_{column}_seq"),
                };

                generator.sequence = Some(SequenceGenerator {
                    name,
                    initial_value: self.initial_value.unwrap_or(1),
                    allocation_size: self.allocation_size.unwrap_or(1),
                });
            }
            GeneratorStrategy::Custom => {
                let Some(custom) = &self.custom else {
                    return Err(Error::invalid_schema(format!(
                        "custom generator on `{table}.{column}` has no generator name"
                    )));
                };
                generator.custom = Some(custom.clone());
            }
            _ => {}
        }

        Ok(generator)
    }
}

impl Configure for GeneratedValue {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sequence_name() {
        let mut generated = GeneratedValue::default();
        generated.sequence().allocation_size(50);

        let generator = generated.to_generator("posts", "id").unwrap();
        assert_eq!(
            generator.sequence,
            Some(SequenceGenerator {
                name: "posts_id_seq".to_string(),
                initial_value: 1,
                allocation_size: 50,
            })
        );
    }

    #[test]
    fn auto_has_no_sequence() {
        let generator = GeneratedValue::default().to_generator("posts", "id").unwrap();
        assert_eq!(generator.strategy, GeneratorStrategy::Auto);
        assert!(generator.sequence.is_none());
        assert!(generator.is_post_insert());
    }
}
