#![no_main]

use hydration::{HydrationConfig, HydrationContext, InsertionAnchor};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let dom = markup::parse(input);
    let config = HydrationConfig {
        dev_diagnostics: true,
        cache_fragment_matches: data.len() % 2 == 0,
    };
    let containers: Vec<dom::NodeId> = (0..dom.len() as u32)
        .map(dom::NodeId)
        .filter(|&id| dom.kind(id).allows_children())
        .collect();

    for &container in &containers {
        let mut ctx = HydrationContext::new(&dom, config.clone());

        // Sequential walk: each adoption moves strictly forward.
        let _ = ctx.with_hydration(container, |ctx| {
            ctx.locate(false)?;
            let mut steps = 0;
            while ctx.adopt_current("<x>").is_some() {
                steps += 1;
                assert!(steps <= dom.len(), "sequential walk revisited a node");
            }
            Ok(())
        });
        assert!(!ctx.is_hydrating());

        // Append walk: no node is handed out twice.
        let mut seen = HashSet::new();
        let _ = ctx.hydrate_node(container, |ctx| {
            for _ in 0..=dom.len() {
                ctx.set_insertion_state(container, InsertionAnchor::Append);
                match ctx.locate(true)? {
                    Some(node) => assert!(seen.insert(node), "append walk repeated {node}"),
                    None => break,
                }
            }
            Ok(())
        });
        assert!(!ctx.is_hydrating());
        assert_eq!(ctx.current(), None);
        assert!(ctx.positions().is_empty());
    }
});
