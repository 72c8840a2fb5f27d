use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SegmentThresholds;
use crate::segment::Segment;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressItem {
    pub label: String,
    pub current: Decimal,
    pub target: Decimal,
    pub unit: ProgressUnit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressUnit {
    Orders,
    Currency,
}

impl ProgressItem {
    /// Completion ratio clamped to [0, 1].
    pub fn ratio(&self) -> f64 {
        if self.target.is_zero() {
            return 1.0;
        }
        let ratio = (self.current / self.target).to_f64().unwrap_or(0.0);
        ratio.clamp(0.0, 1.0)
    }

    pub fn percent(&self) -> f64 {
        self.ratio() * 100.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierProgress {
    pub tier: Segment,
    pub unlocked: bool,
    pub items: Vec<ProgressItem>,
}

/// Unlock state and progress metrics for one tier of the journey ladder.
/// Superfan reports both paths independently even though either one alone
/// unlocks the tier.
pub fn progress(
    tier: Segment,
    total_orders: u32,
    total_spent: Decimal,
    thresholds: &SegmentThresholds,
) -> TierProgress {
    let spent = total_spent.max(Decimal::ZERO);
    let orders = Decimal::from(total_orders);

    match tier {
        Segment::Discoverer => TierProgress { tier, unlocked: true, items: Vec::new() },
        Segment::NewFan => TierProgress {
            tier,
            unlocked: total_orders >= 1,
            items: vec![ProgressItem {
                label: "orders placed".to_string(),
                current: orders.min(Decimal::ONE),
                target: Decimal::ONE,
                unit: ProgressUnit::Orders,
            }],
        },
        Segment::Fan => {
            let target = Decimal::from(thresholds.fan_orders);
            TierProgress {
                tier,
                unlocked: total_orders >= thresholds.fan_orders,
                items: vec![ProgressItem {
                    label: "orders placed".to_string(),
                    current: orders.min(target),
                    target,
                    unit: ProgressUnit::Orders,
                }],
            }
        }
        Segment::Superfan => {
            let spend_target = thresholds.superfan_spend;
            let order_target = Decimal::from(thresholds.superfan_orders);
            TierProgress {
                tier,
                unlocked: spent >= spend_target || total_orders >= thresholds.superfan_orders,
                items: vec![
                    ProgressItem {
                        label: "lifetime spend".to_string(),
                        current: spent.min(spend_target),
                        target: spend_target,
                        unit: ProgressUnit::Currency,
                    },
                    ProgressItem {
                        label: "orders placed".to_string(),
                        current: orders.min(order_target),
                        target: order_target,
                        unit: ProgressUnit::Orders,
                    },
                ],
            }
        }
    }
}

/// The full ladder in journey order, entry tier first.
pub fn progress_all(
    total_orders: u32,
    total_spent: Decimal,
    thresholds: &SegmentThresholds,
) -> Vec<TierProgress> {
    Segment::ALL
        .into_iter()
        .map(|tier| progress(tier, total_orders, total_spent, thresholds))
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::config::LifecycleConfig;
    use crate::segment::Segment;

    use super::{progress, progress_all, ProgressUnit};

    fn thresholds() -> crate::config::SegmentThresholds {
        LifecycleConfig::default().segment
    }

    #[test]
    fn discoverer_is_always_unlocked_with_no_items() {
        let tier = progress(Segment::Discoverer, 0, Decimal::ZERO, &thresholds());
        assert!(tier.unlocked);
        assert!(tier.items.is_empty());
    }

    #[test]
    fn new_fan_unlocks_on_the_first_order() {
        assert!(!progress(Segment::NewFan, 0, Decimal::ZERO, &thresholds()).unlocked);

        let tier = progress(Segment::NewFan, 3, Decimal::ZERO, &thresholds());
        assert!(tier.unlocked);
        // Current is clamped to the target for rendering.
        assert_eq!(tier.items[0].current, Decimal::ONE);
        assert_eq!(tier.items[0].target, Decimal::ONE);
    }

    #[test]
    fn fan_requires_two_orders() {
        assert!(!progress(Segment::Fan, 1, Decimal::from(500), &thresholds()).unlocked);
        assert!(progress(Segment::Fan, 2, Decimal::ZERO, &thresholds()).unlocked);
    }

    #[test]
    fn superfan_unlocks_via_orders_alone() {
        let tier = progress(Segment::Superfan, 5, Decimal::ZERO, &thresholds());
        assert!(tier.unlocked);
    }

    #[test]
    fn superfan_unlocks_via_spend_alone() {
        let tier = progress(Segment::Superfan, 0, Decimal::from(200), &thresholds());
        assert!(tier.unlocked);
    }

    #[test]
    fn superfan_always_reports_both_items() {
        let tier = progress(Segment::Superfan, 1, Decimal::from(250), &thresholds());
        assert!(tier.unlocked);
        assert_eq!(tier.items.len(), 2);

        let spend = &tier.items[0];
        assert_eq!(spend.unit, ProgressUnit::Currency);
        assert_eq!(spend.current, Decimal::from(200));
        assert_eq!(spend.target, Decimal::from(200));
        assert_eq!(spend.percent(), 100.0);

        let orders = &tier.items[1];
        assert_eq!(orders.unit, ProgressUnit::Orders);
        assert_eq!(orders.current, Decimal::ONE);
        assert_eq!(orders.target, Decimal::from(5));
        assert_eq!(orders.percent(), 20.0);
    }

    #[test]
    fn ladder_comes_back_in_journey_order() {
        let ladder = progress_all(2, Decimal::from(80), &thresholds());
        let tiers: Vec<Segment> = ladder.iter().map(|tier| tier.tier).collect();
        assert_eq!(tiers, Segment::ALL.to_vec());
        assert!(ladder[0].unlocked && ladder[1].unlocked && ladder[2].unlocked);
        assert!(!ladder[3].unlocked);
    }

    #[test]
    fn percent_clamps_above_the_target() {
        let tier = progress(Segment::Fan, 9, Decimal::ZERO, &thresholds());
        assert_eq!(tier.items[0].percent(), 100.0);
    }
}
