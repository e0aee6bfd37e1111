use std::fmt;

/// The four association kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssociationKind {
    OneToOne,
    ManyToOne,
    OneToMany,
    ManyToMany,
}

/// A finalized association mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationMapping {
    /// Property name on the declaring class.
    pub field_name: String,

    /// Class the association points at.
    pub target_entity: String,

    pub kind: AssociationKind,

    /// True if this side holds the foreign key(s) or join table.
    pub owning_side: bool,

    /// On an inverse side, the owning side's field on the target.
    pub mapped_by: Option<String>,

    /// On an owning side, the inverse side's field on the target.
    pub inversed_by: Option<String>,

    /// Foreign-key columns of a to-one owning side.
    pub join_columns: Vec<JoinColumn>,

    /// Join table of a many-to-many owning side.
    pub join_table: Option<JoinTable>,

    pub cascade: Vec<Cascade>,

    pub fetch: Fetch,

    pub orphan_removal: bool,

    /// Collection ordering of a to-many side.
    pub order_by: Vec<OrderBy>,

    /// Field used to key a to-many collection.
    pub index_by: Option<String>,

    /// True if the association is part of the class identifier.
    pub id: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoinColumn {
    pub name: String,
    pub referenced_column_name: String,
    pub nullable: bool,
    pub unique: bool,
    pub on_delete: Option<OnDelete>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoinTable {
    pub name: String,

    /// Columns referencing the owning class.
    pub join_columns: Vec<JoinColumn>,

    /// Columns referencing the target class.
    pub inverse_join_columns: Vec<JoinColumn>,
}

/// Operations propagated from an entity to its associated entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cascade {
    Persist,
    Remove,
    Merge,
    Detach,
    Refresh,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Fetch {
    #[default]
    Lazy,
    Eager,
    ExtraLazy,
}

/// Database-level action on the referenced row's deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnDelete {
    Cascade,
    SetNull,
    Restrict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
    pub descending: bool,
}

impl AssociationKind {
    pub fn is_to_one(self) -> bool {
        matches!(self, Self::OneToOne | Self::ManyToOne)
    }

    pub fn is_to_many(self) -> bool {
        !self.is_to_one()
    }

    /// The kind declared on the other side of a bidirectional association.
    pub fn inverse(self) -> AssociationKind {
        match self {
            Self::OneToOne => Self::OneToOne,
            Self::ManyToOne => Self::OneToMany,
            Self::OneToMany => Self::ManyToOne,
            Self::ManyToMany => Self::ManyToMany,
        }
    }
}

impl fmt::Display for AssociationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OneToOne => "one-to-one",
            Self::ManyToOne => "many-to-one",
            Self::OneToMany => "one-to-many",
            Self::ManyToMany => "many-to-many",
        })
    }
}

impl Cascade {
    pub const ALL: [Cascade; 5] = [
        Cascade::Persist,
        Cascade::Remove,
        Cascade::Merge,
        Cascade::Detach,
        Cascade::Refresh,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "persist" => Some(Self::Persist),
            "remove" => Some(Self::Remove),
            "merge" => Some(Self::Merge),
            "detach" => Some(Self::Detach),
            "refresh" => Some(Self::Refresh),
            _ => None,
        }
    }
}

impl Fetch {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "lazy" => Some(Self::Lazy),
            "eager" => Some(Self::Eager),
            "extra_lazy" => Some(Self::ExtraLazy),
            _ => None,
        }
    }
}

impl OnDelete {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "cascade" => Some(Self::Cascade),
            "set_null" => Some(Self::SetNull),
            "restrict" => Some(Self::Restrict),
            _ => None,
        }
    }
}

impl AssociationMapping {
    pub fn is_owning_side(&self) -> bool {
        self.owning_side
    }

    /// Names of the foreign-key columns this association adds to the
    /// declaring class's table.
    pub fn join_column_names(&self) -> impl Iterator<Item = &str> {
        self.join_columns.iter().map(|column| column.name.as_str())
    }
}
