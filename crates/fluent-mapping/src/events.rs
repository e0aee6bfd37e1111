use crate::{Build, BuildContext, Configure, Result};
use fluent_mapping_core::schema::LifecycleEvent;

/// Lifecycle callbacks of an entity, as event → method name pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifecycleEvents {
    callbacks: Vec<(LifecycleEvent, String)>,
}

impl LifecycleEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn callbacks(&self) -> &[(LifecycleEvent, String)] {
        &self.callbacks
    }

    pub fn on(&mut self, event: LifecycleEvent, method: impl Into<String>) -> &mut Self {
        self.callbacks.push((event, method.into()));
        self
    }

    pub fn pre_persist(&mut self, method: impl Into<String>) -> &mut Self {
        self.on(LifecycleEvent::PrePersist, method)
    }

    pub fn post_persist(&mut self, method: impl Into<String>) -> &mut Self {
        self.on(LifecycleEvent::PostPersist, method)
    }

    pub fn pre_update(&mut self, method: impl Into<String>) -> &mut Self {
        self.on(LifecycleEvent::PreUpdate, method)
    }

    pub fn post_update(&mut self, method: impl Into<String>) -> &mut Self {
        self.on(LifecycleEvent::PostUpdate, method)
    }

    pub fn pre_remove(&mut self, method: impl Into<String>) -> &mut Self {
        self.on(LifecycleEvent::PreRemove, method)
    }

    pub fn post_remove(&mut self, method: impl Into<String>) -> &mut Self {
        self.on(LifecycleEvent::PostRemove, method)
    }

    pub fn post_load(&mut self, method: impl Into<String>) -> &mut Self {
        self.on(LifecycleEvent::PostLoad, method)
    }

    pub fn pre_flush(&mut self, method: impl Into<String>) -> &mut Self {
        self.on(LifecycleEvent::PreFlush, method)
    }
}

impl Build for LifecycleEvents {
    fn build(&self, cx: &mut BuildContext<'_>) -> Result<()> {
        let class = cx.class_mut()?;

        for (event, method) in &self.callbacks {
            class.add_lifecycle_callback(*event, method);
        }

        Ok(())
    }
}

impl Configure for LifecycleEvents {}
