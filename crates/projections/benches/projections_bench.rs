use criterion::{Criterion, criterion_group, criterion_main};

use common::RecordFields;
use domain::{OrderLineItem, PricedLineItem};
use projections::{CustomerInvoicesView, Projection, report};

fn priced_items(count: u32) -> Vec<PricedLineItem> {
    (0..count)
        .map(|i| {
            let order_id = format!("ORD{i:05}");
            let customer = format!("Customer {}", i % 50);
            let record = RecordFields::from_parts(&[
                order_id.as_str(),
                customer.as_str(),
                "Widget",
                "3",
                "19.99",
                "2024-03-15",
            ])
            .unwrap();
            PricedLineItem::price(OrderLineItem::from_record(&record).unwrap())
        })
        .collect()
}

fn bench_absorb(c: &mut Criterion) {
    let items = priced_items(1_000);

    c.bench_function("projections/absorb_1000", |b| {
        b.iter(|| {
            let mut view = CustomerInvoicesView::new();
            for item in &items {
                view.absorb(item);
            }
            view
        });
    });
}

fn bench_finalize_and_render(c: &mut Criterion) {
    let items = priced_items(1_000);
    let mut view = CustomerInvoicesView::new();
    for item in &items {
        view.absorb(item);
    }

    c.bench_function("projections/finalize_and_render", |b| {
        b.iter(|| report::render(&view.finalize()));
    });
}

criterion_group!(benches, bench_absorb, bench_finalize_and_render);
criterion_main!(benches);
