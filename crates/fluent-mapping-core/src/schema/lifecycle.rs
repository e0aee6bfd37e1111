use std::fmt;

/// Points in an entity's life at which mapped callbacks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    PrePersist,
    PostPersist,
    PreUpdate,
    PostUpdate,
    PreRemove,
    PostRemove,
    PostLoad,
    PreFlush,
}

impl LifecycleEvent {
    pub fn name(self) -> &'static str {
        match self {
            Self::PrePersist => "pre_persist",
            Self::PostPersist => "post_persist",
            Self::PreUpdate => "pre_update",
            Self::PostUpdate => "post_update",
            Self::PreRemove => "pre_remove",
            Self::PostRemove => "post_remove",
            Self::PostLoad => "post_load",
            Self::PreFlush => "pre_flush",
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
