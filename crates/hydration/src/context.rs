use crate::anchors::{AnchorPolicy, VaporAnchors};
use crate::config::HydrationConfig;
use crate::counters::HydrationCounters;
use crate::diagnostics::{Diagnostics, Mismatch};
use crate::error::HydrationError;
use crate::fragment::FragmentMatchCache;
use crate::insertion::{InsertionAnchor, InsertionState};
use crate::position::PositionCache;
use dom::{Dom, DomError, NodeId};

/// Saved cursor and insertion state of one nesting level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HydrationCursor {
    pub insertion: Option<InsertionState>,
    pub current: Option<NodeId>,
    pub parent: Option<NodeId>,
}

/// All state of a hydration pass over one tree.
///
/// The tree is borrowed immutably for the context's lifetime; hydration only
/// claims nodes, it never restructures them.
pub struct HydrationContext<'d> {
    pub(crate) dom: &'d Dom,
    pub(crate) anchors: Box<dyn AnchorPolicy>,
    pub(crate) insertion: Option<InsertionState>,
    pub(crate) current: Option<NodeId>,
    /// Parent of the node most recently located or adopted; named in
    /// missing-node reports once the insertion state has been consumed.
    pub(crate) ambient_parent: Option<NodeId>,
    pub(crate) hydrating_depth: u32,
    pub(crate) lookup_depth: u32,
    pub(crate) positions: PositionCache,
    pub(crate) fragments: FragmentMatchCache,
    pub(crate) diagnostics: Diagnostics,
    pub(crate) counters: HydrationCounters,
}

impl<'d> HydrationContext<'d> {
    pub fn new(dom: &'d Dom, config: HydrationConfig) -> Self {
        Self {
            dom,
            anchors: Box::new(VaporAnchors),
            insertion: None,
            current: None,
            ambient_parent: None,
            hydrating_depth: 0,
            lookup_depth: 0,
            positions: PositionCache::new(),
            fragments: FragmentMatchCache::new(config.cache_fragment_matches),
            diagnostics: Diagnostics::new(config.dev_diagnostics),
            counters: HydrationCounters::default(),
        }
    }

    pub fn with_anchors(mut self, anchors: impl AnchorPolicy + 'static) -> Self {
        self.anchors = Box::new(anchors);
        self
    }

    pub fn dom(&self) -> &'d Dom {
        self.dom
    }

    pub fn anchors(&self) -> &dyn AnchorPolicy {
        self.anchors.as_ref()
    }

    pub fn is_hydrating(&self) -> bool {
        self.hydrating_depth > 0
    }

    /// Whether hydration-aware sibling lookup is active (see [`Self::next`]).
    pub fn lookup_enabled(&self) -> bool {
        self.lookup_depth > 0
    }

    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    pub fn set_current(&mut self, node: Option<NodeId>) {
        self.current = node;
    }

    /// Parent under which hydration is currently claiming nodes, if known.
    pub fn ambient_parent(&self) -> Option<NodeId> {
        self.ambient_parent
    }

    /// Publish where the next `locate` should look. Overwrites any unconsumed state.
    pub fn set_insertion_state(&mut self, parent: NodeId, anchor: InsertionAnchor) {
        self.insertion = Some(InsertionState { parent, anchor });
    }

    pub fn reset_insertion_state(&mut self) {
        self.insertion = None;
    }

    pub fn insertion_state(&self) -> Option<InsertionState> {
        self.insertion
    }

    pub fn snapshot(&self) -> HydrationCursor {
        HydrationCursor {
            insertion: self.insertion,
            current: self.current,
            parent: self.ambient_parent,
        }
    }

    pub fn restore(&mut self, cursor: HydrationCursor) {
        self.insertion = cursor.insertion;
        self.current = cursor.current;
        self.ambient_parent = cursor.parent;
    }

    /// Run `f` and put the cursor and insertion state back afterwards.
    ///
    /// For callers that recurse into a child (e.g. mounting a nested component)
    /// without opening a new hydration scope.
    pub fn with_saved_cursor<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.snapshot();
        let out = f(self);
        self.restore(saved);
        out
    }

    pub fn mismatches(&self) -> &[Mismatch] {
        self.diagnostics.recorded()
    }

    pub fn take_mismatches(&mut self) -> Vec<Mismatch> {
        self.diagnostics.take()
    }

    pub fn counters(&self) -> HydrationCounters {
        self.counters
    }

    pub fn reset_counters(&mut self) {
        self.counters = HydrationCounters::default();
    }

    pub fn positions(&self) -> &PositionCache {
        &self.positions
    }

    /// Drop the append-mode resume point of a parent that is being torn down.
    pub fn forget_parent(&mut self, parent: NodeId) {
        self.positions.forget(parent);
    }

    pub fn fragment_cache(&self) -> &FragmentMatchCache {
        &self.fragments
    }

    /// Forget memoized marker matches, e.g. after markers were moved.
    pub fn invalidate_fragment_cache(&mut self) {
        self.fragments.clear();
    }

    /// Reject ids that do not belong to this context's tree before any lookup
    /// indexes with them.
    pub(crate) fn ensure_node(&self, id: NodeId) -> Result<(), HydrationError> {
        if self.dom.contains(id) {
            Ok(())
        } else {
            Err(DomError::UnknownNode(id).into())
        }
    }

    pub(crate) fn report_missing(&mut self, parent: Option<NodeId>) {
        if !self.diagnostics.enabled() {
            return;
        }
        let context = parent.map(|p| dom::describe(self.dom, p));
        self.diagnostics
            .report(Mismatch::Missing { parent, context });
    }

    pub(crate) fn report(&mut self, mismatch: Mismatch) {
        self.diagnostics.report(mismatch);
    }

    pub(crate) fn diagnostics_enabled(&self) -> bool {
        self.diagnostics.enabled()
    }
}
