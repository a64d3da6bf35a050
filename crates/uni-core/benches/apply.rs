use criterion::{Criterion, black_box, criterion_group, criterion_main};
use uni_core::{Engine, Style};

fn bench_styles(c: &mut Criterion) {
    let Ok(engine) = Engine::new() else {
        return;
    };
    let text = "The quick brown fox jumps over the lazy dog 0123456789 (x+y)=z! ".repeat(64);

    for style in [Style::Bold, Style::Superscript, Style::UpsideDown, Style::Strikethrough] {
        c.bench_function(&format!("transform_{}", style.name()), |b| {
            b.iter(|| engine.transform(style, black_box(&text)));
        });
    }
}

criterion_group!(benches, bench_styles);
criterion_main!(benches);
