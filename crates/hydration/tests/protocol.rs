use hydration::{HydrationConfig, HydrationContext, InsertionAnchor, Mismatch};

fn dev_config() -> HydrationConfig {
    HydrationConfig {
        dev_diagnostics: true,
        ..HydrationConfig::default()
    }
}

fn sibling_fragments(count: usize) -> String {
    let mut markup = String::from("<div>");
    for i in 0..count {
        markup.push_str(&format!("<!--[--><span>{i}</span><!--]-->"));
    }
    markup.push_str("</div>");
    markup
}

#[test]
fn append_walk_over_sibling_fragments_is_linear() {
    const FRAGMENTS: usize = 64;
    let dom = markup::parse(&sibling_fragments(FRAGMENTS));
    let div = dom.first_child(dom.root()).unwrap();
    let mut ctx = HydrationContext::new(&dom, dev_config());

    let located = ctx
        .hydrate_node(div, |ctx| {
            let mut located = Vec::new();
            for _ in 0..FRAGMENTS {
                ctx.set_insertion_state(div, InsertionAnchor::Append);
                located.extend(ctx.locate(false)?);
            }
            Ok(located)
        })
        .unwrap();

    assert_eq!(located.len(), FRAGMENTS);
    assert!(located.iter().all(|&id| dom.is_comment(id, "[")));
    let counters = ctx.counters();
    assert!(
        counters.backward_steps <= 2 * FRAGMENTS as u64,
        "backward steps {} exceed 2 per fragment",
        counters.backward_steps
    );
    assert_eq!(counters.locates, FRAGMENTS as u64);
    assert!(ctx.mismatches().is_empty());
}

#[test]
fn disabling_the_match_cache_keeps_results_but_rescans() {
    let markup = "<div><!--[--><!--[-->a<!--]--><!--[-->b<!--]--><!--]--></div>";
    let dom = markup::parse(markup);
    let div = dom.first_child(dom.root()).unwrap();
    let outer_close = dom.last_child(div).unwrap();
    let inner_close = dom.previous_sibling(outer_close).unwrap();

    let resolve_twice = |cache: bool| {
        let mut ctx = HydrationContext::new(
            &dom,
            HydrationConfig {
                cache_fragment_matches: cache,
                ..dev_config()
            },
        );
        let first = ctx.hydrate_node(outer_close, |ctx| ctx.locate(false)).unwrap();
        let second = ctx.hydrate_node(inner_close, |ctx| ctx.locate(false)).unwrap();
        (first, second, ctx.counters())
    };

    let (cached_outer, cached_inner, cached) = resolve_twice(true);
    let (plain_outer, plain_inner, plain) = resolve_twice(false);
    assert_eq!(cached_outer, plain_outer);
    assert_eq!(cached_inner, plain_inner);
    assert_eq!(cached_outer, dom.first_child(div));
    assert_eq!(cached.match_cache_hits, 1);
    assert_eq!(plain.match_cache_hits, 0);
    assert!(plain.backward_steps > cached.backward_steps);
}

#[test]
fn nested_fragment_matched_by_outer_scan_costs_nothing_later() {
    let dom = markup::parse("<div><!--[--><!--[-->x<!--]--><!--]--></div>");
    let div = dom.first_child(dom.root()).unwrap();
    let outer_open = dom.first_child(div).unwrap();
    let inner_open = dom.next_sibling(outer_open).unwrap();
    let inner_close = dom.previous_sibling(dom.last_child(div).unwrap()).unwrap();
    let mut ctx = HydrationContext::new(&dom, dev_config());

    let outer = ctx
        .hydrate_node(div, |ctx| {
            ctx.set_insertion_state(div, InsertionAnchor::Append);
            ctx.locate(false)
        })
        .unwrap();
    assert_eq!(outer, Some(outer_open));
    assert_eq!(ctx.counters().backward_steps, 4);
    assert_eq!(ctx.fragment_cache().len(), 2);

    ctx.reset_counters();
    let inner = ctx.hydrate_node(inner_close, |ctx| ctx.locate(false)).unwrap();
    assert_eq!(inner, Some(inner_open));
    assert_eq!(ctx.counters().backward_steps, 0);
    assert_eq!(ctx.counters().match_cache_hits, 1);

    ctx.invalidate_fragment_cache();
    assert!(ctx.fragment_cache().is_empty());
}

#[test]
fn nested_component_scopes_hand_the_cursor_back() {
    let dom = markup::parse(concat!(
        "<div id=\"app\"><header></header>",
        "<!--[--><p>child</p><!--]-->",
        "<footer></footer></div>",
    ));
    let app = dom.first_child(dom.root()).unwrap();
    let header = dom.first_child(app).unwrap();
    let open = dom.next_sibling(header).unwrap();
    let p = dom.next_sibling(open).unwrap();
    let footer = dom.last_child(app).unwrap();
    let mut ctx = HydrationContext::new(&dom, dev_config());

    ctx.with_hydration(dom.root(), |ctx| {
        ctx.locate(false)?;
        assert_eq!(ctx.adopt_current("<div id=\"app\">"), Some(app));

        ctx.with_hydration(app, |ctx| {
            ctx.locate(false)?;
            assert_eq!(ctx.adopt_current("<header></header>"), Some(header));
            assert_eq!(ctx.current(), Some(open));

            // Child component rendering the fragment's content.
            ctx.hydrate_node(p, |child| {
                assert_eq!(child.adopt_current("<p>child</p>"), Some(p));
                Ok(())
            })?;

            assert_eq!(ctx.current(), Some(open));
            assert_eq!(ctx.adopt_current("<!--[-->"), Some(open));
            assert_eq!(ctx.adopt_current("<footer></footer>"), Some(footer));
            Ok(())
        })?;

        assert!(ctx.is_hydrating());
        assert_eq!(ctx.current(), None);
        Ok(())
    })
    .unwrap();

    assert!(!ctx.is_hydrating());
    assert!(!ctx.lookup_enabled());
    assert_eq!(ctx.current(), None);
    assert!(ctx.positions().is_empty());
    assert!(ctx.mismatches().is_empty());
    assert_eq!(ctx.counters().adoptions, 5);
}

#[test]
fn fragment_anchor_resolves_to_the_fragment_before_it() {
    let dom = markup::parse("<div><span></span><!--[-->a<!--]--><!--if--></div>");
    let div = dom.first_child(dom.root()).unwrap();
    let span = dom.first_child(div).unwrap();
    let open = dom.next_sibling(span).unwrap();
    let mut ctx = HydrationContext::new(&dom, dev_config());

    ctx.hydrate_node(div, |ctx| {
        ctx.set_insertion_state(div, InsertionAnchor::Append);
        assert_eq!(ctx.locate(true)?, Some(open));
        ctx.set_insertion_state(div, InsertionAnchor::Append);
        assert_eq!(ctx.locate(true)?, Some(span));
        ctx.set_insertion_state(div, InsertionAnchor::Append);
        assert_eq!(ctx.locate(true)?, None);
        Ok(())
    })
    .unwrap();

    assert!(matches!(
        ctx.take_mismatches().as_slice(),
        [Mismatch::Missing { parent: Some(p), .. }] if *p == div
    ));
}

#[test]
fn mismatches_are_silent_without_dev_diagnostics() {
    let dom = markup::parse("<span></span>");
    let mut ctx = HydrationContext::new(
        &dom,
        HydrationConfig {
            dev_diagnostics: false,
            ..HydrationConfig::default()
        },
    );
    ctx.with_hydration(dom.root(), |ctx| {
        ctx.locate(false)?;
        ctx.adopt_current("<div></div>");
        ctx.adopt_current("<div></div>");
        Ok(())
    })
    .unwrap();
    assert!(ctx.mismatches().is_empty());
}
