use super::Builder;
use crate::{Build, Buildable, Relation};
use fluent_mapping_core::schema::AssociationKind;
use std::any::Any;

impl Builder {
    pub fn one_to_one(
        &mut self,
        field: impl Into<String>,
        target: impl Into<String>,
    ) -> &mut Relation {
        self.relation(AssociationKind::OneToOne, field, target)
    }

    pub fn many_to_one(
        &mut self,
        field: impl Into<String>,
        target: impl Into<String>,
    ) -> &mut Relation {
        self.relation(AssociationKind::ManyToOne, field, target)
    }

    pub fn one_to_many(
        &mut self,
        field: impl Into<String>,
        target: impl Into<String>,
    ) -> &mut Relation {
        self.relation(AssociationKind::OneToMany, field, target)
    }

    pub fn many_to_many(
        &mut self,
        field: impl Into<String>,
        target: impl Into<String>,
    ) -> &mut Relation {
        self.relation(AssociationKind::ManyToMany, field, target)
    }

    /// Alias of [`Builder::one_to_one`].
    pub fn has_one(
        &mut self,
        field: impl Into<String>,
        target: impl Into<String>,
    ) -> &mut Relation {
        self.one_to_one(field, target)
    }

    /// Alias of [`Builder::many_to_one`].
    pub fn belongs_to(
        &mut self,
        field: impl Into<String>,
        target: impl Into<String>,
    ) -> &mut Relation {
        self.many_to_one(field, target)
    }

    /// Alias of [`Builder::one_to_many`].
    pub fn has_many(
        &mut self,
        field: impl Into<String>,
        target: impl Into<String>,
    ) -> &mut Relation {
        self.one_to_many(field, target)
    }

    /// Alias of [`Builder::many_to_many`].
    pub fn belongs_to_many(
        &mut self,
        field: impl Into<String>,
        target: impl Into<String>,
    ) -> &mut Relation {
        self.many_to_many(field, target)
    }

    /// Queues a caller supplied declaration and hands it back for further
    /// configuration. It is finalized in queue order like the built-in ones.
    pub fn add_relation<R: Build>(&mut self, relation: R) -> &mut R {
        let Buildable::Custom(custom) = self.push(Buildable::Custom(Box::new(relation))) else {
            unreachable!()
        };

        let custom: &mut dyn Any = custom.as_mut();
        match custom.downcast_mut::<R>() {
            Some(relation) => relation,
            None => unreachable!(),
        }
    }

    fn relation(
        &mut self,
        kind: AssociationKind,
        field: impl Into<String>,
        target: impl Into<String>,
    ) -> &mut Relation {
        let relation = Relation::new(kind, self.naming.clone(), field, target);
        self.push_relation(relation)
    }
}
