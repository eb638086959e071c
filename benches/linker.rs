// benches/linker.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use medlink::registry::PhysicianRecord;
use medlink::tasks::link::autolink_page;
use medlink::variants;

fn sample_registry() -> Vec<PhysicianRecord> {
    let json = r#"{"physicians":[
        {"slug":"mario-rossi","name":"Mario Rossi","full_name":"Dott. Mario Rossi","family_name":"Rossi","job_title":"Cardiologo"},
        {"slug":"sara-uras","name":"Sara Uras","full_name":"Dott.ssa Sara Uras","family_name":"Uras","title":"Dott.ssa","job_title":"Ginecologa"},
        {"slug":"luca-bianchi","name":"Luca Bianchi","full_name":"Dott. Luca Bianchi","family_name":"Bianchi","job_title":"Ortopedico"}
    ]}"#;
    #[derive(serde::Deserialize)]
    struct F {
        physicians: Vec<PhysicianRecord>,
    }
    serde_json::from_str::<F>(json).unwrap().physicians
}

fn sample_page() -> String {
    let mut page = String::from(
        "<!DOCTYPE html><html><head><title>Dott. Mario Rossi</title>\
         <script type=\"application/ld+json\">{\"founder\":\"Dott. Mario Rossi\"}</script></head><body>",
    );
    for i in 0..200 {
        page.push_str(&format!(
            "<p>Paragrafo {i} con testo di riempimento per la pagina della clinica.</p>"
        ));
    }
    page.push_str("<p>Il Dott. Mario Rossi e la Dott.ssa Sara Uras ricevono su appuntamento.</p>");
    page.push_str("</body></html>");
    page
}

fn bench_linker(c: &mut Criterion) {
    let regs = sample_registry();
    let vars = variants::build(&regs);
    let page = sample_page();

    c.bench_function("autolink_page", |b| {
        b.iter(|| {
            let out = autolink_page(
                black_box(&page),
                "pages/cardiologia.html",
                1,
                black_box(&regs),
                black_box(&vars),
            );
            black_box(out.links_added)
        })
    });

    c.bench_function("build_variants", |b| {
        b.iter(|| black_box(variants::build(black_box(&regs))).len())
    });
}

criterion_group!(benches, bench_linker);
criterion_main!(benches);
