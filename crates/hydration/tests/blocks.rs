use hydration::block::{block_range, normalize_block, replace_block};
use hydration::{Block, HydrationConfig, HydrationContext, InsertionAnchor};

#[test]
fn hydrated_fragment_can_be_rerendered_in_place() {
    let mut dom = markup::parse("<ul><li>a</li><!--[--><li>b</li><li>c</li><!--]--><li>d</li></ul>");
    let ul = dom.first_child(dom.root()).unwrap();

    // Claim the fragment the way a list component would.
    let block = {
        let mut ctx = HydrationContext::new(&dom, HydrationConfig::default());
        ctx.with_hydration(ul, |ctx| {
            ctx.locate(false)?;
            let first = ctx.adopt_current("<li>a</li>").unwrap();
            let open = ctx.current().unwrap();
            let tree = ctx.dom();
            let close = hydration::locate_end_anchor(tree, open, "[", "]").unwrap();
            let items: Vec<Block> =
                std::iter::successors(tree.next_sibling(open), |&id| tree.next_sibling(id))
                    .take_while(|&id| id != close)
                    .map(Block::Node)
                    .collect();
            assert_eq!(tree.next_sibling(first), Some(open));
            Ok(Block::List(vec![
                Block::Node(open),
                Block::Fragment {
                    nodes: items,
                    anchor: Some(close),
                },
            ]))
        })
        .unwrap()
    };
    assert_eq!(normalize_block(&block).len(), 4);
    let range = block_range(&dom, &block).unwrap();
    assert_eq!(range.parent, ul);

    let fresh = replace_block(&mut dom, &block, |dom| {
        let holder = dom.create_element("template");
        let nodes = markup::parse_fragment(dom, holder, "<!--[--><li>x</li><!--]-->")?;
        Ok(Block::Fragment {
            nodes: nodes[..2].iter().copied().map(Block::Node).collect(),
            anchor: nodes.last().copied(),
        })
    })
    .unwrap();
    assert_eq!(block_range(&dom, &fresh), Some(range));

    let outline: Vec<String> = dom.children(ul).map(|id| dom::describe(&dom, id)).collect();
    assert_eq!(
        outline,
        vec!["<li>", "<!-- [ -->", "<li>", "<!-- ] -->", "<li>"]
    );

    // A fresh pass over the edited tree sees the new fragment.
    let mut ctx = HydrationContext::new(&dom, HydrationConfig::default());
    let last_fragment = ctx
        .hydrate_node(ul, |ctx| {
            ctx.set_insertion_state(ul, InsertionAnchor::Append);
            ctx.locate(false)?;
            ctx.set_insertion_state(ul, InsertionAnchor::Append);
            ctx.locate(false)
        })
        .unwrap();
    assert_eq!(last_fragment, normalize_block(&fresh).first().copied());
}
