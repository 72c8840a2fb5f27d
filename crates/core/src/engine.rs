use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::LifecycleConfig;
use crate::domain::bundle::{CustomerBundle, CustomerTotals};
use crate::domain::cart::{CartId, CartStatus};
use crate::recovery::roadmap::{build_roadmap, RoadmapStep};
use crate::recovery::urgency::{urgency, UrgencyLevel};
use crate::segment::tiers::{progress_all, TierProgress};
use crate::segment::{classify, Segment};
use crate::theme::Theme;
use crate::timeline::{build_timeline, TimelineEntry};

/// Everything one admin view renders for one customer, derived in a single
/// pass. Value object only: recomputed per render, never cached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LifecycleSnapshot {
    pub totals: CustomerTotals,
    pub segment: Segment,
    pub segment_label: String,
    pub tiers: Vec<TierProgress>,
    pub timeline: Vec<TimelineEntry>,
    pub carts: Vec<CartInsight>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartInsight {
    pub cart_id: CartId,
    pub status: CartStatus,
    pub urgency: UrgencyLevel,
    pub roadmap: Vec<RoadmapStep>,
}

pub trait LifecycleEngine: Send + Sync {
    fn snapshot(&self, bundle: &CustomerBundle, now: DateTime<Utc>) -> LifecycleSnapshot;
}

/// Pure composition of the five derivations. `now` is injected so roadmap
/// and urgency output is reproducible in tests and snapshots.
#[derive(Clone, Debug, Default)]
pub struct DeterministicLifecycleEngine {
    config: LifecycleConfig,
    theme: Theme,
}

impl DeterministicLifecycleEngine {
    pub fn new(config: LifecycleConfig, theme: Theme) -> Self {
        Self { config, theme }
    }

    pub fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

impl LifecycleEngine for DeterministicLifecycleEngine {
    fn snapshot(&self, bundle: &CustomerBundle, now: DateTime<Utc>) -> LifecycleSnapshot {
        let totals = CustomerTotals::from_bundle(bundle);
        let segment = classify(totals.total_spent, totals.total_orders, &self.config.segment);
        let tiers = progress_all(totals.total_orders, totals.total_spent, &self.config.segment);
        let timeline = build_timeline(bundle, &self.theme);
        let carts = bundle
            .carts
            .iter()
            .map(|cart| CartInsight {
                cart_id: cart.id,
                status: cart.status,
                urgency: urgency(cart, now, &self.config.urgency),
                roadmap: build_roadmap(cart, now, &self.config.roadmap, &self.theme.roadmap),
            })
            .collect();

        LifecycleSnapshot {
            totals,
            segment,
            segment_label: self.theme.segment_name(segment).to_string(),
            tiers,
            timeline,
            carts,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone, Utc};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use crate::config::LifecycleConfig;
    use crate::domain::bundle::CustomerBundle;
    use crate::domain::cart::{AbandonedCart, CartId, CartStatus};
    use crate::domain::customer::{Customer, CustomerId};
    use crate::domain::order::{Order, OrderId, OrderStatus};
    use crate::recovery::urgency::UrgencyLevel;
    use crate::segment::Segment;
    use crate::theme::Theme;

    use super::{DeterministicLifecycleEngine, LifecycleEngine};

    fn bundle() -> CustomerBundle {
        let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        CustomerBundle {
            customer: Customer {
                id: CustomerId(Uuid::nil()),
                email: "sam@example.com".to_string(),
                first_name: "Sam".to_string(),
                last_name: "Reyes".to_string(),
                nickname: None,
                phone: None,
                city: None,
                country: None,
                created_at,
                first_order_at: Some(created_at + TimeDelta::hours(2)),
                last_order_at: Some(created_at + TimeDelta::hours(2)),
                total_orders: 1,
                marketing_consent: Some(true),
                source: None,
                notes: None,
            },
            orders: vec![Order {
                id: OrderId(Uuid::new_v4()),
                number: "SP-1001".to_string(),
                status: OrderStatus::Completed,
                total: Decimal::from(250),
                currency: "EUR".to_string(),
                payment_method: "card".to_string(),
                created_at: created_at + TimeDelta::hours(2),
                email_audit: None,
                event: None,
                items: Vec::new(),
            }],
            tickets: Vec::new(),
            carts: vec![AbandonedCart {
                id: CartId(Uuid::new_v4()),
                status: CartStatus::Abandoned,
                created_at: created_at + TimeDelta::days(3),
                recovered_at: None,
                subtotal: Decimal::from(40),
                notification_count: 1,
                notified_at: None,
                items: Vec::new(),
                event: None,
            }],
        }
    }

    #[test]
    fn single_high_spend_order_snapshots_as_superfan() {
        let engine = DeterministicLifecycleEngine::default();
        let bundle = bundle();
        let now = bundle.customer.created_at + TimeDelta::days(3) + TimeDelta::hours(2);

        let snapshot = engine.snapshot(&bundle, now);

        assert_eq!(snapshot.segment, Segment::Superfan);
        assert_eq!(snapshot.segment_label, "Superfan");
        assert_eq!(snapshot.totals.total_spent, Decimal::from(250));

        let superfan = snapshot.tiers.iter().find(|t| t.tier == Segment::Superfan).expect("tier");
        assert!(superfan.unlocked);
        assert_eq!(superfan.items[0].current, Decimal::from(200));
        assert_eq!(superfan.items[1].current, Decimal::ONE);

        assert_eq!(snapshot.carts.len(), 1);
        assert_eq!(snapshot.carts[0].urgency, UrgencyLevel::Warm);
        assert_eq!(snapshot.carts[0].roadmap.len(), 5);
    }

    #[test]
    fn crm_theme_changes_labels_not_classification() {
        let engine =
            DeterministicLifecycleEngine::new(LifecycleConfig::default(), Theme::crm());
        let bundle = bundle();
        let now = bundle.customer.created_at + TimeDelta::days(4);

        let snapshot = engine.snapshot(&bundle, now);
        assert_eq!(snapshot.segment, Segment::Superfan);
        assert_eq!(snapshot.segment_label, "VIP");
    }

    #[test]
    fn snapshot_is_referentially_transparent() {
        let engine = DeterministicLifecycleEngine::default();
        let bundle = bundle();
        let now = bundle.customer.created_at + TimeDelta::days(5);

        assert_eq!(engine.snapshot(&bundle, now), engine.snapshot(&bundle, now));
    }
}
