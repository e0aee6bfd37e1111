/// How identifier values are produced for new rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GeneratorStrategy {
    /// Let the platform pick identity or sequence.
    #[default]
    Auto,
    Sequence,
    Identity,
    Uuid,
    Table,
    Custom,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceGenerator {
    pub name: String,
    pub initial_value: u32,
    pub allocation_size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdGenerator {
    pub strategy: GeneratorStrategy,

    /// Set for the sequence strategy.
    pub sequence: Option<SequenceGenerator>,

    /// Generator name for the custom strategy.
    pub custom: Option<String>,
}

impl GeneratorStrategy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "auto" => Some(Self::Auto),
            "sequence" => Some(Self::Sequence),
            "identity" => Some(Self::Identity),
            "uuid" => Some(Self::Uuid),
            "table" => Some(Self::Table),
            "custom" => Some(Self::Custom),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

impl IdGenerator {
    /// Returns `true` if the database assigns the value on insert.
    pub fn is_post_insert(&self) -> bool {
        matches!(
            self.strategy,
            GeneratorStrategy::Auto | GeneratorStrategy::Identity
        )
    }
}
