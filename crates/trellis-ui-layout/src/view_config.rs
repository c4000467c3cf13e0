//! How a layout node turns into a view during materialization.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use trellis_core::{ContainerView, ReuseId, View};

/// A concrete view type plus a factory for it, resolved when the node is built.
#[derive(Clone, Copy)]
pub struct ViewKind {
    type_id: TypeId,
    type_name: &'static str,
    make: fn() -> Box<dyn View>,
}

impl ViewKind {
    pub fn of<V: View + Default>() -> Self {
        fn make<V: View + Default>() -> Box<dyn View> {
            Box::new(V::default())
        }
        Self {
            type_id: TypeId::of::<V>(),
            type_name: std::any::type_name::<V>(),
            make: make::<V>,
        }
    }

    pub fn make(&self) -> Box<dyn View> {
        (self.make)()
    }

    /// True when `view` is an instance of this kind.
    pub fn matches(&self, view: &dyn View) -> bool {
        Any::type_id(view.as_any()) == self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl PartialEq for ViewKind {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ViewKind {}

impl fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ViewKind").field(&self.type_name).finish()
    }
}

type ConfigureFn = dyn Fn(&mut dyn View) + Send + Sync;

/// View-producing configuration of a layout node.
///
/// A node needs a view when it has a reuse id, a configuration callback, or
/// was explicitly marked as requiring one.
#[derive(Clone)]
pub struct ViewConfig {
    kind: ViewKind,
    reuse_id: Option<ReuseId>,
    reuse_group: Option<ReuseId>,
    configure: Option<Arc<ConfigureFn>>,
    required: bool,
}

impl ViewConfig {
    pub fn of<V: View + Default>() -> Self {
        Self {
            kind: ViewKind::of::<V>(),
            reuse_id: None,
            reuse_group: None,
            configure: None,
            required: false,
        }
    }

    /// A plain container view for composite layouts.
    pub fn container() -> Self {
        Self::of::<ContainerView>()
    }

    pub fn with_reuse_id(mut self, reuse_id: impl Into<ReuseId>) -> Self {
        self.reuse_id = Some(reuse_id.into());
        self
    }

    pub fn with_reuse_group(mut self, group: impl Into<ReuseId>) -> Self {
        self.reuse_group = Some(group.into());
        self
    }

    /// Sets the callback applied to the view after it is made or recycled.
    ///
    /// `V` must be the kind this config was created with.
    pub fn configure<V: View>(mut self, configure: impl Fn(&mut V) + Send + Sync + 'static) -> Self {
        debug_assert_eq!(
            TypeId::of::<V>(),
            self.kind.type_id,
            "configure callback for {} on a {} config",
            std::any::type_name::<V>(),
            self.kind.type_name
        );
        self.configure = Some(Arc::new(move |view: &mut dyn View| {
            match view.downcast_mut::<V>() {
                Some(typed) => configure(typed),
                None => {
                    log::error!(
                        "cannot configure {} as {}",
                        view.type_name(),
                        std::any::type_name::<V>()
                    );
                    debug_assert!(false, "view kind does not match its configuration");
                }
            }
        }));
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn reuse_id(&self) -> Option<&ReuseId> {
        self.reuse_id.as_ref()
    }

    pub fn reuse_group(&self) -> Option<&ReuseId> {
        self.reuse_group.as_ref()
    }

    pub fn needs_view(&self) -> bool {
        self.required || self.reuse_id.is_some() || self.configure.is_some()
    }

    pub fn make_view(&self) -> Box<dyn View> {
        self.kind.make()
    }

    pub fn apply(&self, view: &mut dyn View) {
        if let Some(configure) = &self.configure {
            configure(view);
        }
    }
}

impl fmt::Debug for ViewConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewConfig")
            .field("kind", &self.kind)
            .field("reuse_id", &self.reuse_id)
            .field("reuse_group", &self.reuse_group)
            .field("configure", &self.configure.is_some())
            .field("required", &self.required)
            .finish()
    }
}
