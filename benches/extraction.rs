//! Benchmarks for parsing and content extraction.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use pagespeak::{ChromeMarkers, describe_with_type, extract_all, extract_from, parse_html};

/// Build a synthetic article-heavy page: `sections` sections of `paragraphs`
/// paragraphs each, plus toolbar chrome and a sprinkling of scripts.
fn synthetic_page(sections: usize, paragraphs: usize) -> String {
    let mut html = String::from(
        r#"<html><body>
        <div class="accessibility-toolbar"><button>Zoom in</button><button>Zoom out</button></div>
        <script>window.analytics = {};</script>
        <main>"#,
    );
    for s in 0..sections {
        html.push_str(&format!("<section id=\"s{s}\">"));
        for p in 0..paragraphs {
            html.push_str(&format!(
                "<p id=\"s{s}p{p}\">Paragraph {p} of section {s} carries a full \
                 sentence of narratable text, long enough to count as content.</p>"
            ));
        }
        html.push_str("</section>");
    }
    html.push_str("</main></body></html>");
    html
}

// ============================================================================
// Parsing
// ============================================================================

fn bench_parse_page(c: &mut Criterion) {
    let html = synthetic_page(20, 30);

    c.bench_function("parse_page", |b| {
        b.iter(|| parse_html(html.as_bytes()));
    });
}

// ============================================================================
// Extraction
// ============================================================================

fn bench_extract_from_midpage(c: &mut Criterion) {
    let html = synthetic_page(20, 30);
    let dom = parse_html(html.as_bytes());
    let chrome = ChromeMarkers::default();
    let start = dom.get_by_id("s10p0").unwrap();

    c.bench_function("extract_from_midpage", |b| {
        b.iter(|| extract_from(&dom, &chrome, start));
    });
}

fn bench_extract_all(c: &mut Criterion) {
    let html = synthetic_page(20, 30);
    let dom = parse_html(html.as_bytes());
    let chrome = ChromeMarkers::default();

    c.bench_function("extract_all", |b| {
        b.iter(|| extract_all(&dom, &chrome));
    });
}

fn bench_describe(c: &mut Criterion) {
    let html = synthetic_page(5, 5);
    let dom = parse_html(html.as_bytes());
    let target = dom.get_by_id("s2p2").unwrap();

    c.bench_function("describe_with_type", |b| {
        b.iter(|| describe_with_type(&dom, target));
    });
}

criterion_group!(
    benches,
    bench_parse_page,
    bench_extract_from_midpage,
    bench_extract_all,
    bench_describe,
);
criterion_main!(benches);
