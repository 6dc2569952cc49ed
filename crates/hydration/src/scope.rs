//! Hydration scope entry and exit.

use crate::context::HydrationContext;
use crate::error::HydrationError;
use crate::insertion::InsertionAnchor;
use dom::NodeId;

impl<'d> HydrationContext<'d> {
    /// Hydrate the children of `container`, starting from its first child.
    ///
    /// The body's first `locate` resolves to the container's first child. Any
    /// insertion state published before entry is replaced, and the scope exits
    /// with no insertion state pending.
    pub fn with_hydration<T>(
        &mut self,
        container: NodeId,
        body: impl FnOnce(&mut Self) -> Result<T, HydrationError>,
    ) -> Result<T, HydrationError> {
        self.ensure_node(container)?;
        self.perform_hydration(
            |ctx| {
                ctx.set_insertion_state(container, InsertionAnchor::Prepend);
                ctx.ambient_parent = Some(container);
            },
            body,
            |ctx| ctx.reset_insertion_state(),
        )
    }

    /// Hydrate starting at `node` itself. Insertion state is left untouched:
    /// whatever the body consumes stays consumed.
    pub fn hydrate_node<T>(
        &mut self,
        node: NodeId,
        body: impl FnOnce(&mut Self) -> Result<T, HydrationError>,
    ) -> Result<T, HydrationError> {
        self.ensure_node(node)?;
        self.perform_hydration(
            |ctx| {
                ctx.current = Some(node);
                ctx.ambient_parent = ctx.dom.parent(node);
            },
            body,
            |_| {},
        )
    }

    fn perform_hydration<T>(
        &mut self,
        setup: impl FnOnce(&mut Self),
        body: impl FnOnce(&mut Self) -> Result<T, HydrationError>,
        cleanup: impl FnOnce(&mut Self),
    ) -> Result<T, HydrationError> {
        let saved_current = self.current;
        let saved_parent = self.ambient_parent;
        self.lookup_depth += 1;
        self.hydrating_depth += 1;
        log::trace!(target: "hydration.scope", "enter depth={}", self.hydrating_depth);

        setup(self);
        let res = body(self);
        cleanup(self);

        self.hydrating_depth -= 1;
        self.lookup_depth -= 1;
        // Outermost exit leaves no cursor behind; inner exits hand the caller's back.
        self.current = saved_current;
        self.ambient_parent = saved_parent;
        if self.lookup_depth == 0 {
            self.positions.clear();
        }
        log::trace!(target: "hydration.scope", "exit depth={}", self.hydrating_depth);
        res
    }
}

#[cfg(test)]
mod tests {
    use crate::{HydrationConfig, HydrationContext, HydrationError, InsertionAnchor};
    use dom::{DomError, NodeId};

    #[test]
    fn nested_scope_exit_keeps_outer_scope_active() {
        let dom = markup::parse("<div><p></p></div>");
        let div = dom.first_child(dom.root()).unwrap();
        let p = dom.first_child(div).unwrap();
        let mut ctx = HydrationContext::new(&dom, HydrationConfig::default());
        assert!(!ctx.is_hydrating());

        ctx.with_hydration(dom.root(), |ctx| {
            ctx.locate(false)?;
            assert_eq!(ctx.current(), Some(div));
            ctx.hydrate_node(p, |inner| {
                assert_eq!(inner.current(), Some(p));
                Ok(())
            })?;
            assert!(ctx.is_hydrating());
            assert!(ctx.lookup_enabled());
            assert_eq!(ctx.current(), Some(div));
            Ok(())
        })
        .unwrap();

        assert!(!ctx.is_hydrating());
        assert!(!ctx.lookup_enabled());
        assert_eq!(ctx.current(), None);
        assert_eq!(ctx.insertion_state(), None);
    }

    #[test]
    fn cleanup_runs_when_body_fails() {
        let dom = markup::parse("<div></div>");
        let mut ctx = HydrationContext::new(&dom, HydrationConfig::default());
        let err = ctx
            .with_hydration(dom.root(), |_| -> Result<(), _> {
                Err(HydrationError::DetachedBlock)
            })
            .unwrap_err();
        assert_eq!(err, HydrationError::DetachedBlock);
        assert!(!ctx.is_hydrating());
        assert_eq!(ctx.insertion_state(), None);
    }

    #[test]
    fn nested_node_scope_does_not_revive_consumed_insertion_state() {
        let dom = markup::parse("<div><a></a><p></p></div>");
        let div = dom.first_child(dom.root()).unwrap();
        let a = dom.first_child(div).unwrap();
        let p = dom.last_child(div).unwrap();
        let mut ctx = HydrationContext::new(&dom, HydrationConfig::default());

        let located = ctx
            .with_hydration(dom.root(), |ctx| {
                ctx.set_insertion_state(div, InsertionAnchor::Append);
                let inner = ctx.hydrate_node(p, |child| child.locate(false))?;
                assert_eq!(ctx.insertion_state(), None);
                let after = ctx.locate(false)?;
                Ok((inner, after))
            })
            .unwrap();

        assert_eq!(located.0, Some(p));
        // With no state pending the outer locate falls back to its own (empty)
        // cursor instead of re-reading (div, Append) and handing out <a>.
        assert_eq!(located.1, None);
        assert_ne!(located.1, Some(a));
    }

    #[test]
    fn container_scope_exits_with_no_pending_insertion_state() {
        let dom = markup::parse("<div><p></p></div>");
        let div = dom.first_child(dom.root()).unwrap();
        let mut ctx = HydrationContext::new(&dom, HydrationConfig::default());
        ctx.set_insertion_state(dom.root(), InsertionAnchor::Append);
        ctx.with_hydration(div, |ctx| {
            assert_eq!(ctx.locate(false)?, dom.first_child(div));
            Ok(())
        })
        .unwrap();
        assert_eq!(ctx.insertion_state(), None);
    }

    #[test]
    fn scopes_reject_nodes_from_another_tree() {
        let dom = markup::parse("<div></div>");
        let mut ctx = HydrationContext::new(&dom, HydrationConfig::default());
        let foreign = NodeId(dom.len() as u32 + 7);
        let err = ctx.hydrate_node(foreign, |_| Ok(())).unwrap_err();
        assert_eq!(err, HydrationError::Dom(DomError::UnknownNode(foreign)));
        let err = ctx.with_hydration(foreign, |_| Ok(())).unwrap_err();
        assert_eq!(err, HydrationError::Dom(DomError::UnknownNode(foreign)));
        assert!(!ctx.is_hydrating());
    }
}
