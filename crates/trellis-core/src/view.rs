use std::any::Any;
use std::fmt;
use std::sync::Arc;

pub type ViewId = usize;

/// A materialized view object.
///
/// The host owns hierarchy and geometry, so a view only has to expose itself
/// for downcasting during configuration and recycling.
pub trait View: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<'a> dyn View + 'a {
    pub fn is<V: View>(&self) -> bool {
        self.as_any().is::<V>()
    }

    pub fn downcast_ref<V: View>(&self) -> Option<&V> {
        self.as_any().downcast_ref::<V>()
    }

    pub fn downcast_mut<V: View>(&mut self) -> Option<&mut V> {
        self.as_any_mut().downcast_mut::<V>()
    }
}

/// Caller-assigned identity for "the same logical element" across passes.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReuseId(Arc<str>);

impl ReuseId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ReuseId {
    fn from(value: &str) -> Self {
        Self(Arc::from(value))
    }
}

impl From<String> for ReuseId {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl fmt::Debug for ReuseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl fmt::Display for ReuseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reuse metadata the host keeps beside each view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewTag {
    pub reuse_id: Option<ReuseId>,
    pub reuse_group: Option<ReuseId>,
}

impl ViewTag {
    pub fn new(reuse_id: Option<ReuseId>, reuse_group: Option<ReuseId>) -> Self {
        Self {
            reuse_id,
            reuse_group,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}
