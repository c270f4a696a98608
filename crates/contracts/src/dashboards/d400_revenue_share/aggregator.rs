//! Агрегация выручки по заказам для круговой диаграммы
//!
//! Pure functions over an order snapshot. The caller owns the orders and
//! passes them in; nothing here keeps state between calls.

use super::dto::{
    CategoryRevenue, ChartBucket, ChartMode, ChartSegment, RevenueEntry, RevenueLine, PALETTE,
    TOP_N,
};
use crate::domain::a003_order::Order;
use std::collections::HashMap;

/// Revenue per product id across all orders, in order of first appearance.
///
/// The first line item seen for a product id fixes its category and title.
pub fn aggregate(orders: &[Order]) -> Vec<RevenueEntry> {
    let mut entries: Vec<RevenueEntry> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in orders.iter().flat_map(|o| o.products.iter()) {
        match index.get(item.id.as_str()) {
            Some(&i) => entries[i].total_price += item.amount(),
            None => {
                index.insert(item.id.as_str(), entries.len());
                entries.push(RevenueEntry {
                    product_id: item.id.clone(),
                    category: item.category.clone(),
                    title: item.title.clone(),
                    total_price: item.amount(),
                });
            }
        }
    }

    entries
}

/// Revenue per category, in order of first appearance
pub fn aggregate_by_category(orders: &[Order]) -> Vec<CategoryRevenue> {
    let mut totals: Vec<CategoryRevenue> = Vec::new();

    for item in orders.iter().flat_map(|o| o.products.iter()) {
        match totals.iter_mut().find(|c| c.category == item.category) {
            Some(c) => c.total_price += item.amount(),
            None => totals.push(CategoryRevenue {
                category: item.category.clone(),
                total_price: item.amount(),
            }),
        }
    }

    totals
}

/// Top `n` lines by revenue, descending, plus one "其他" bucket holding the
/// rest when there are more than `n` lines.
///
/// Ties keep their input order. The bucket totals always add up to the
/// input total.
pub fn bucket_top_n<T: RevenueLine>(entries: &[T], n: usize) -> Vec<ChartBucket> {
    let mut sorted: Vec<&T> = entries.iter().collect();
    // sort_by is stable
    sorted.sort_by(|a, b| b.total_price().total_cmp(&a.total_price()));

    if sorted.len() <= n {
        return sorted
            .into_iter()
            .map(|e| ChartBucket::new(e.title(), e.total_price()))
            .collect();
    }

    let rest = sorted.split_off(n);
    let mut buckets: Vec<ChartBucket> = sorted
        .into_iter()
        .map(|e| ChartBucket::new(e.title(), e.total_price()))
        .collect();
    buckets.push(ChartBucket::others(
        rest.iter().map(|e| e.total_price()).sum(),
    ));
    buckets
}

pub fn total_revenue<T: RevenueLine>(lines: &[T]) -> f64 {
    lines.iter().map(|l| l.total_price()).sum()
}

/// Buckets for the selected chart mode
pub fn revenue_buckets(orders: &[Order], mode: ChartMode) -> Vec<ChartBucket> {
    match mode {
        ChartMode::Product => bucket_top_n(&aggregate(orders), TOP_N),
        ChartMode::Category => bucket_top_n(&aggregate_by_category(orders), TOP_N),
    }
}

/// Assign palette colours by position and compute each slice's share.
///
/// The others bucket always takes the last palette colour.
pub fn chart_segments(buckets: &[ChartBucket]) -> Vec<ChartSegment> {
    let total: f64 = buckets.iter().map(|b| b.total_price).sum();
    let last = PALETTE.len() - 1;

    buckets
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let color = if b.is_others { PALETTE[last] } else { PALETTE[i.min(last)] };
            ChartSegment {
                title: b.title.clone(),
                total_price: b.total_price,
                color: color.to_string(),
                share: if total > 0.0 { b.total_price / total } else { 0.0 },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_revenue_share::dto::OTHERS_TITLE;
    use crate::domain::a003_order::{OrderLineItem, OrderUser};
    use proptest::prelude::*;

    fn line(id: &str, title: &str, category: &str, price: f64, quantity: u32) -> OrderLineItem {
        OrderLineItem {
            id: id.to_string(),
            category: category.to_string(),
            title: title.to_string(),
            price,
            quantity,
            origin_price: 0.0,
            description: String::new(),
            images: String::new(),
        }
    }

    fn order(id: &str, products: Vec<OrderLineItem>) -> Order {
        Order {
            id: id.to_string(),
            user: OrderUser::default(),
            products,
            paid: false,
            total: 0.0,
            created_at: 1_700_000_000,
            updated_at: 1_700_000_000,
        }
    }

    fn entry(id: &str, total: f64) -> RevenueEntry {
        RevenueEntry {
            product_id: id.to_string(),
            category: "x".to_string(),
            title: format!("P{}", id),
            total_price: total,
        }
    }

    fn totals(buckets: &[ChartBucket]) -> Vec<f64> {
        buckets.iter().map(|b| b.total_price).collect()
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate(&[]).is_empty());
        assert!(aggregate(&[order("o1", vec![])]).is_empty());
        assert!(bucket_top_n::<RevenueEntry>(&[], TOP_N).is_empty());
    }

    #[test]
    fn test_same_product_accumulates_across_orders() {
        let orders = vec![
            order("a", vec![line("p", "P", "x", 100.0, 2)]),
            order("b", vec![line("p", "P", "x", 100.0, 1)]),
        ];
        let entries = aggregate(&orders);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].total_price, 300.0);
    }

    #[test]
    fn test_two_products_scenario() {
        let orders = vec![
            order("a", vec![line("1", "A", "x", 100.0, 2)]),
            order("b", vec![line("2", "B", "x", 50.0, 1)]),
        ];
        let entries = aggregate(&orders);
        let ids: Vec<(&str, f64)> = entries
            .iter()
            .map(|e| (e.product_id.as_str(), e.total_price))
            .collect();
        assert_eq!(ids, vec![("1", 200.0), ("2", 50.0)]);

        let buckets = bucket_top_n(&entries, TOP_N);
        assert_eq!(totals(&buckets), vec![200.0, 50.0]);
        assert!(buckets.iter().all(|b| !b.is_others));
    }

    #[test]
    fn test_first_occurrence_fixes_title_and_category() {
        let orders = vec![
            order("a", vec![line("p", "Louvre", "床架", 10.0, 1)]),
            order("b", vec![line("p", "Renamed", "收納", 10.0, 1)]),
        ];
        let entries = aggregate(&orders);
        assert_eq!(entries[0].title, "Louvre");
        assert_eq!(entries[0].category, "床架");
        assert_eq!(entries[0].total_price, 20.0);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let orders = vec![order(
            "a",
            vec![
                line("small", "S", "x", 1.0, 1),
                line("big", "B", "x", 1000.0, 1),
            ],
        )];
        let entries = aggregate(&orders);
        assert_eq!(entries[0].product_id, "small");
        assert_eq!(entries[1].product_id, "big");
    }

    #[test]
    fn test_five_products_get_others_bucket() {
        let entries: Vec<RevenueEntry> = [100.0, 300.0, 500.0, 200.0, 400.0]
            .iter()
            .enumerate()
            .map(|(i, t)| entry(&i.to_string(), *t))
            .collect();
        let buckets = bucket_top_n(&entries, TOP_N);
        assert_eq!(buckets.len(), 4);
        assert_eq!(totals(&buckets), vec![500.0, 400.0, 300.0, 300.0]);
        assert_eq!(buckets[3].title, OTHERS_TITLE);
        assert!(buckets[3].is_others);
    }

    #[test]
    fn test_others_is_last_even_when_largest() {
        let entries = vec![
            entry("1", 10.0),
            entry("2", 9.0),
            entry("3", 8.0),
            entry("4", 7.0),
            entry("5", 7.0),
            entry("6", 7.0),
        ];
        let buckets = bucket_top_n(&entries, TOP_N);
        assert_eq!(totals(&buckets), vec![10.0, 9.0, 8.0, 21.0]);
        assert_eq!(buckets.last().map(|b| b.title.as_str()), Some(OTHERS_TITLE));
    }

    #[test]
    fn test_small_input_has_no_others() {
        for len in 0..=TOP_N {
            let entries: Vec<RevenueEntry> =
                (0..len).map(|i| entry(&i.to_string(), i as f64)).collect();
            let buckets = bucket_top_n(&entries, TOP_N);
            assert_eq!(buckets.len(), len);
            assert!(buckets.iter().all(|b| b.title != OTHERS_TITLE));
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let entries = vec![entry("a", 50.0), entry("b", 80.0), entry("c", 50.0)];
        let buckets = bucket_top_n(&entries, TOP_N);
        let titles: Vec<&str> = buckets.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Pb", "Pa", "Pc"]);
    }

    #[test]
    fn test_conservation() {
        let orders = vec![
            order(
                "a",
                vec![
                    line("1", "A", "床架", 1200.0, 3),
                    line("2", "B", "床架", 900.0, 1),
                    line("3", "C", "收納", 450.0, 2),
                ],
            ),
            order(
                "b",
                vec![
                    line("4", "D", "窗簾", 300.0, 5),
                    line("1", "A", "床架", 1200.0, 1),
                    line("5", "E", "收納", 80.0, 7),
                ],
            ),
        ];
        let entries = aggregate(&orders);
        let buckets = bucket_top_n(&entries, TOP_N);
        let bucket_sum: f64 = buckets.iter().map(|b| b.total_price).sum();
        assert_eq!(bucket_sum, total_revenue(&entries));
        assert_eq!(buckets.len(), 4);
    }

    #[test]
    fn test_aggregate_by_category() {
        let orders = vec![
            order("a", vec![line("1", "A", "床架", 100.0, 2), line("2", "B", "收納", 50.0, 1)]),
            order("b", vec![line("3", "C", "床架", 30.0, 1)]),
        ];
        let categories = aggregate_by_category(&orders);
        assert_eq!(
            categories,
            vec![
                CategoryRevenue {
                    category: "床架".into(),
                    total_price: 230.0
                },
                CategoryRevenue {
                    category: "收納".into(),
                    total_price: 50.0
                },
            ]
        );
        let buckets = revenue_buckets(&orders, ChartMode::Category);
        assert_eq!(buckets[0].title, "床架");
    }

    #[test]
    fn test_chart_segments_palette_and_share() {
        let buckets = vec![
            ChartBucket::new("A", 500.0),
            ChartBucket::new("B", 300.0),
            ChartBucket::others(200.0),
        ];
        let segments = chart_segments(&buckets);
        assert_eq!(segments[0].color, PALETTE[0]);
        assert_eq!(segments[1].color, PALETTE[1]);
        // others always gets the last colour
        assert_eq!(segments[2].color, PALETTE[3]);
        assert_eq!(segments[0].share, 0.5);
        assert_eq!(segments[2].share, 0.2);
    }

    #[test]
    fn test_chart_segments_zero_total() {
        let segments = chart_segments(&[ChartBucket::new("A", 0.0)]);
        assert_eq!(segments[0].share, 0.0);
    }

    fn arb_line() -> impl Strategy<Value = OrderLineItem> {
        // few ids so products repeat across orders
        (0u8..8, 0u32..5_000, 1u32..10).prop_map(|(id, price, quantity)| {
            let category = format!("c{}", id % 3);
            let id = format!("p{}", id);
            line(&id, &id.to_uppercase(), &category, f64::from(price), quantity)
        })
    }

    fn arb_orders() -> impl Strategy<Value = Vec<Order>> {
        prop::collection::vec(prop::collection::vec(arb_line(), 0..20), 0..6).prop_map(|orders| {
            orders
                .into_iter()
                .enumerate()
                .map(|(i, products)| order(&format!("o{}", i), products))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_buckets_conserve_revenue(orders in arb_orders()) {
            let entries = aggregate(&orders);
            let buckets = bucket_top_n(&entries, TOP_N);
            let order_sum: f64 = orders
                .iter()
                .flat_map(|o| o.products.iter())
                .map(|item| item.amount())
                .sum();
            let bucket_sum: f64 = buckets.iter().map(|b| b.total_price).sum();
            prop_assert_eq!(bucket_sum, order_sum);
            prop_assert_eq!(total_revenue(&entries), order_sum);
        }

        #[test]
        fn prop_bucket_shape(orders in arb_orders()) {
            let entries = aggregate(&orders);
            let buckets = bucket_top_n(&entries, TOP_N);

            prop_assert!(buckets.len() <= TOP_N + 1);
            let others: Vec<usize> = buckets
                .iter()
                .enumerate()
                .filter(|(_, b)| b.is_others)
                .map(|(i, _)| i)
                .collect();
            if entries.len() > TOP_N {
                prop_assert_eq!(buckets.len(), TOP_N + 1);
                prop_assert_eq!(others, vec![TOP_N]);
                prop_assert_eq!(buckets[TOP_N].title.as_str(), OTHERS_TITLE);
            } else {
                prop_assert_eq!(buckets.len(), entries.len());
                prop_assert!(others.is_empty());
            }

            let top: Vec<f64> = buckets.iter().filter(|b| !b.is_others).map(|b| b.total_price).collect();
            prop_assert!(top.windows(2).all(|w| w[0] >= w[1]));
        }
    }
}
