use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use summarify_core::{Article, Document, ExtractConfig, SentimentAnalyzer, SummaryConfig, extract_text};

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)).unwrap()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for name in ["bare.html", "neutral.html", "article.html"] {
        let html = fixture(name);
        group.bench_with_input(BenchmarkId::new("document", name), &html, |b, html| {
            b.iter(|| Document::parse(black_box(html)))
        });
    }

    group.finish();
}

fn bench_extraction(c: &mut Criterion) {
    let html = fixture("article.html");
    let doc = Document::parse(&html);
    let config = ExtractConfig::default();

    c.bench_function("body_extraction", |b| b.iter(|| extract_text(black_box(&doc), black_box(&config))));
}

fn bench_full_article(c: &mut Criterion) {
    let html = fixture("article.html");
    let extract = ExtractConfig::default();
    let summary = SummaryConfig::default();
    let analyzer = SentimentAnalyzer::new();

    c.bench_function("parse_nlp_sentiment", |b| {
        b.iter(|| {
            let mut article = Article::parse("https://example.com/article", black_box(&html), &extract);
            article.nlp(&summary);
            analyzer.analyze(&article.text)
        })
    });
}

criterion_group!(benches, bench_parse, bench_extraction, bench_full_article);
criterion_main!(benches);
