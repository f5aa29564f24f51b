use course_catalog::{CatalogParser, DepartmentList, Time};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const DEPARTMENTS: usize = 40;
const COURSES_PER_DEPARTMENT: usize = 50;

fn generate_catalog() -> (DepartmentList, String) {
    let names: Vec<String> = (0..DEPARTMENTS).map(|d| format!("DEPARTMENT {:02}", d)).collect();
    let mut text = String::from("SCHEDULE OF CLASSES\n");
    for name in &names {
        text.push_str(name);
        text.push('\n');
        for c in 0..COURSES_PER_DEPARTMENT {
            text.push_str(&format!(
                "{} COURSE TITLE {} Y ---- LEC 1 MWF {}:00-{}:50 BOELTER 3400 SMITH, J. 120 1 LG 4.\n",
                c + 1,
                c,
                8 + c % 4,
                8 + c % 4
            ));
            text.push_str("   N 187-030-201 LEC 2 TR 2:00-3:15 DODD 147 JONES, A. 150 4 LG 4.\n");
            text.push_str("      ---- DIS 2A F 12:00-12:50 ROYCE 190 LEE, K. 30 4 LG 0.\n");
            text.push_str("  RESTRICT: MAJORS ONLY\n\n");
        }
    }
    (DepartmentList::new(names), text)
}

fn bench_parse_catalog(c: &mut Criterion) {
    let (departments, text) = generate_catalog();
    let parser = CatalogParser::new(departments);

    c.bench_function("parse_catalog", |b| b.iter(|| parser.parse_str(black_box(&text))));
}

fn bench_normalize_time(c: &mut Criterion) {
    c.bench_function("normalize_time", |b| {
        b.iter(|| {
            for token in ["7:00", "10:50", "3:15p", "11:00a"] {
                let _ = Time::normalize(black_box(token));
            }
        })
    });
}

criterion_group!(benches, bench_parse_catalog, bench_normalize_time);
criterion_main!(benches);
