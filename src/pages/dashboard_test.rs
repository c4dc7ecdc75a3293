use super::*;

#[test]
fn metrics_cover_the_four_dashboard_cards() {
    let titles: Vec<_> = zeroed_metrics().iter().map(|(title, _, _)| *title).collect();
    assert_eq!(titles, ["Properties", "Courts", "Bookings", "Revenue"]);
}

#[test]
fn all_metrics_start_at_zero() {
    for (title, value, label) in zeroed_metrics() {
        assert!(value.ends_with('0'), "{title} should be zeroed, got {value}");
        assert!(label.starts_with("Total"), "{title} caption should be a total, got {label}");
    }
}

#[test]
fn revenue_is_reported_in_rupees() {
    let (_, value, _) = zeroed_metrics()[3];
    assert_eq!(value, "₹0");
}
