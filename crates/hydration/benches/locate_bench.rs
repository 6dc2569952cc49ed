use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hydration::{HydrationConfig, HydrationContext, InsertionAnchor};

const SMALL_FRAGMENTS: usize = 64;
const LARGE_FRAGMENTS: usize = 5_000;

fn make_fragments(count: usize) -> String {
    let mut markup = String::with_capacity(count * 48 + 16);
    markup.push_str("<div>");
    for i in 0..count {
        // Every fourth fragment nests another one, so matching has to skip it.
        if i % 4 == 0 {
            markup.push_str("<!--[--><i>n</i><!--[--><b>x</b><!--]--><!--]-->");
        } else {
            markup.push_str("<!--[--><span>x</span><!--]-->");
        }
    }
    markup.push_str("</div>");
    markup
}

fn append_walk(dom: &dom::Dom, config: HydrationConfig, count: usize) -> u64 {
    let container = dom.first_child(dom.root()).unwrap_or(dom.root());
    let mut ctx = HydrationContext::new(dom, config);
    let _ = ctx.hydrate_node(container, |ctx| {
        for _ in 0..count {
            ctx.set_insertion_state(container, InsertionAnchor::Append);
            black_box(ctx.locate(false)?);
        }
        Ok(())
    });
    ctx.counters().backward_steps
}

fn bench_config(dev: bool, cache: bool) -> HydrationConfig {
    HydrationConfig {
        dev_diagnostics: dev,
        cache_fragment_matches: cache,
    }
}

fn bench_append_small(c: &mut Criterion) {
    let dom = markup::parse(&make_fragments(SMALL_FRAGMENTS));
    c.bench_function("bench_append_locate_small", |b| {
        b.iter(|| black_box(append_walk(&dom, bench_config(false, true), SMALL_FRAGMENTS)));
    });
}

fn bench_append_large(c: &mut Criterion) {
    let dom = markup::parse(&make_fragments(LARGE_FRAGMENTS));
    c.bench_function("bench_append_locate_large", |b| {
        b.iter(|| black_box(append_walk(&dom, bench_config(false, true), LARGE_FRAGMENTS)));
    });
}

fn bench_append_large_uncached(c: &mut Criterion) {
    let dom = markup::parse(&make_fragments(LARGE_FRAGMENTS));
    c.bench_function("bench_append_locate_large_uncached", |b| {
        b.iter(|| black_box(append_walk(&dom, bench_config(false, false), LARGE_FRAGMENTS)));
    });
}

fn bench_sequential_adopt(c: &mut Criterion) {
    let dom = markup::parse(&make_fragments(LARGE_FRAGMENTS));
    let container = dom.first_child(dom.root()).unwrap_or(dom.root());
    c.bench_function("bench_sequential_adopt_large", |b| {
        b.iter(|| {
            let mut ctx = HydrationContext::new(&dom, bench_config(false, true));
            let _ = ctx.with_hydration(container, |ctx| {
                ctx.locate(false)?;
                while ctx.adopt_current("<!--[-->").is_some() {}
                Ok(())
            });
            black_box(ctx.counters().adoptions)
        });
    });
}

criterion_group!(
    benches,
    bench_append_small,
    bench_append_large,
    bench_append_large_uncached,
    bench_sequential_adopt
);
criterion_main!(benches);
