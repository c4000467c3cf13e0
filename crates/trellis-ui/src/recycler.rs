//! Reuse of existing views across materialization passes.
//!
//! A [`ViewRecycler`] is built from the subtree below a root view and owned
//! by exactly one materialization pass. Reuse follows a two-phase lookup:
//! views held under the requested reuse id are preferred, then any held view
//! of the requested reuse group. Either way the view must be of the requested
//! kind. Whatever is still held when the pass ends is purged.

use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;
use trellis_core::collections::map::HashMap;
use trellis_core::{ReuseId, View, ViewError, ViewHost, ViewId, ViewTag};
use trellis_ui_layout::ViewKind;

#[derive(Debug, Default)]
pub struct ViewRecycler {
    /// Tag of every held view, recorded when the subtree was walked.
    held: HashMap<ViewId, ViewTag>,
    keyed: Buckets,
    unkeyed: IndexSet<ViewId>,
    groups: Buckets,
}

impl ViewRecycler {
    /// Holds every view below `root`, excluding `root` itself.
    pub fn new<H: ViewHost + ?Sized>(host: &H, root: Option<ViewId>) -> Result<Self, ViewError> {
        let mut recycler = Self::default();
        if let Some(root) = root {
            let mut pending: Vec<ViewId> = host.children(root)?.into_iter().rev().collect();
            while let Some(id) = pending.pop() {
                recycler.hold(id, host.tag(id)?.clone());
                pending.extend(host.children(id)?.into_iter().rev());
            }
        }
        log::debug!("recycler holding {} views", recycler.len());
        Ok(recycler)
    }

    fn hold(&mut self, id: ViewId, tag: ViewTag) {
        match &tag.reuse_id {
            Some(reuse_id) => self.keyed.entry(reuse_id.clone()).or_default().push(id),
            None => {
                self.unkeyed.insert(id);
            }
        }
        if let Some(group) = &tag.reuse_group {
            self.groups.entry(group.clone()).or_default().push(id);
        }
        self.held.insert(id, tag);
    }

    /// Number of views still held.
    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    pub fn is_held(&self, id: ViewId) -> bool {
        self.held.contains_key(&id)
    }

    /// Returns a held view of `kind` for `reuse_id`, falling back to
    /// `reuse_group`, or creates a fresh one. The returned view is tagged
    /// with the requested id and group, detached from its old parent and no
    /// longer held.
    pub fn make_view<H: ViewHost + ?Sized>(
        &mut self,
        host: &mut H,
        reuse_id: Option<&ReuseId>,
        reuse_group: Option<&ReuseId>,
        kind: ViewKind,
    ) -> Result<ViewId, ViewError> {
        let recycled = match reuse_id {
            Some(reuse_id) => self.take_keyed(host, reuse_id, kind)?,
            None => None,
        };
        let recycled = match (recycled, reuse_group) {
            (None, Some(group)) => self.take_grouped(host, group, kind)?,
            (recycled, _) => recycled,
        };
        let id = match recycled {
            Some(id) => {
                log::trace!("recycled view {id} for {reuse_id:?}");
                host.remove_from_parent(id)?;
                id
            }
            None => host.create(kind.make()),
        };
        host.set_tag(id, ViewTag::new(reuse_id.cloned(), reuse_group.cloned()))?;
        Ok(id)
    }

    /// [`make_view`](Self::make_view) for a statically known view type.
    pub fn make_view_of<V: View + Default, H: ViewHost + ?Sized>(
        &mut self,
        host: &mut H,
        reuse_id: Option<&ReuseId>,
    ) -> Result<ViewId, ViewError> {
        self.make_view(host, reuse_id, None, ViewKind::of::<V>())
    }

    /// Stops holding a view that was reused without going through
    /// [`make_view`](Self::make_view), so that purging leaves it alone.
    pub fn mark_as_recycled(&mut self, id: ViewId) {
        self.release(id);
    }

    /// Detaches and disposes every view that is still held.
    pub fn purge_views<H: ViewHost + ?Sized>(&mut self, host: &mut H) -> Result<(), ViewError> {
        let held: Vec<ViewId> = self
            .keyed
            .values()
            .flatten()
            .chain(self.unkeyed.iter())
            .copied()
            .collect();
        let mut purged = 0usize;
        for id in held {
            // Descendants of an already purged view are gone with it.
            if host.get(id).is_err() {
                continue;
            }
            host.dispose(id)?;
            purged += 1;
        }
        log::debug!("recycler purged {purged} views");
        self.held.clear();
        self.keyed.clear();
        self.unkeyed.clear();
        self.groups.clear();
        Ok(())
    }

    fn take_keyed<H: ViewHost + ?Sized>(
        &mut self,
        host: &H,
        reuse_id: &ReuseId,
        kind: ViewKind,
    ) -> Result<Option<ViewId>, ViewError> {
        let Some(candidates) = self.keyed.get(reuse_id) else {
            return Ok(None);
        };
        let found = Self::first_of_kind(host, candidates, kind)?;
        match found {
            Some(id) => self.release(id),
            None => log::warn!(
                "view held for {reuse_id} is not a {}; creating a new one",
                kind.type_name()
            ),
        }
        Ok(found)
    }

    fn take_grouped<H: ViewHost + ?Sized>(
        &mut self,
        host: &H,
        group: &ReuseId,
        kind: ViewKind,
    ) -> Result<Option<ViewId>, ViewError> {
        let Some(candidates) = self.groups.get(group) else {
            return Ok(None);
        };
        let found = Self::first_of_kind(host, candidates, kind)?;
        if let Some(id) = found {
            self.release(id);
        }
        Ok(found)
    }

    fn first_of_kind<H: ViewHost + ?Sized>(
        host: &H,
        candidates: &[ViewId],
        kind: ViewKind,
    ) -> Result<Option<ViewId>, ViewError> {
        for &id in candidates {
            if kind.matches(host.get(id)?) {
                return Ok(Some(id));
            }
        }
        Ok(None)
    }

    fn release(&mut self, id: ViewId) {
        let Some(tag) = self.held.remove(&id) else {
            return;
        };
        if let Some(reuse_id) = &tag.reuse_id {
            remove_from_bucket(&mut self.keyed, reuse_id, id);
        } else {
            self.unkeyed.shift_remove(&id);
        }
        if let Some(group) = &tag.reuse_group {
            remove_from_bucket(&mut self.groups, group, id);
        }
    }
}

type Buckets = IndexMap<ReuseId, SmallVec<[ViewId; 2]>>;

fn remove_from_bucket(buckets: &mut Buckets, key: &ReuseId, id: ViewId) {
    if let Some(bucket) = buckets.get_mut(key) {
        bucket.retain(|candidate| *candidate != id);
        if bucket.is_empty() {
            buckets.shift_remove(key);
        }
    }
}
