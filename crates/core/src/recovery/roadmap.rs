use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::config::RoadmapSchedule;
use crate::domain::cart::{AbandonedCart, CartStatus};
use crate::theme::RoadmapWording;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Active,
    Upcoming,
    Skipped,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub label: String,
    pub detail: String,
    pub status: StepStatus,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Human countdown used in upcoming-step details: `Xd Yh`, `Xh Ym`, or `Xm`,
/// and `now` once the moment has passed.
pub fn format_countdown(remaining: TimeDelta) -> String {
    if remaining <= TimeDelta::zero() {
        return "now".to_string();
    }
    let days = remaining.num_days();
    let hours = remaining.num_hours();
    let minutes = remaining.num_minutes();
    if days > 0 {
        format!("{}d {}h", days, hours - days * 24)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes - hours * 60)
    } else {
        format!("{}m", minutes)
    }
}

/// Where a cart sits in the automated win-back funnel, as a fixed 5-step
/// display sequence: abandoned, three reminder emails, outcome. Pure
/// derivation for rendering; the scheduled reminder job owns the actual
/// sends and the notification counter.
pub fn build_roadmap(
    cart: &AbandonedCart,
    now: DateTime<Utc>,
    schedule: &RoadmapSchedule,
    wording: &RoadmapWording,
) -> Vec<RoadmapStep> {
    let elapsed = now - cart.created_at;

    vec![
        RoadmapStep {
            label: wording.abandoned.clone(),
            detail: format!("{} item(s) left in cart", cart.item_count()),
            status: StepStatus::Completed,
            timestamp: Some(cart.created_at),
        },
        email_step(cart, elapsed, 1, schedule.first_email(), wording.first_email.clone()),
        email_step(cart, elapsed, 2, schedule.second_email(), wording.second_email.clone()),
        email_step(cart, elapsed, 3, schedule.final_reminder(), wording.final_reminder.clone()),
        outcome_step(cart, elapsed, schedule.expiry(), wording.outcome.clone()),
    ]
}

fn email_step(
    cart: &AbandonedCart,
    elapsed: TimeDelta,
    n: u32,
    threshold: TimeDelta,
    label: String,
) -> RoadmapStep {
    let sent = cart.notification_count >= n;

    if cart.is_recovered() && !sent {
        return RoadmapStep {
            label,
            detail: "No longer needed".to_string(),
            status: StepStatus::Skipped,
            timestamp: None,
        };
    }

    if sent {
        // Only the final notified_at survives in storage; it is displayed on
        // the first email step and the later sends carry no timestamp.
        let timestamp = (n == 1).then_some(cart.notified_at).flatten();
        return RoadmapStep {
            label,
            detail: "Sent".to_string(),
            status: StepStatus::Completed,
            timestamp,
        };
    }

    if elapsed >= threshold {
        // Due but the reminder job has not caught up yet. Display hint only.
        return RoadmapStep {
            label,
            detail: "Ready to send".to_string(),
            status: StepStatus::Active,
            timestamp: None,
        };
    }

    RoadmapStep {
        label,
        detail: format!("in {}", format_countdown(threshold - elapsed)),
        status: StepStatus::Upcoming,
        timestamp: None,
    }
}

fn outcome_step(
    cart: &AbandonedCart,
    elapsed: TimeDelta,
    expiry: TimeDelta,
    label: String,
) -> RoadmapStep {
    match cart.status {
        CartStatus::Recovered => RoadmapStep {
            label,
            detail: "Cart recovered".to_string(),
            status: StepStatus::Completed,
            timestamp: cart.recovered_at,
        },
        CartStatus::Expired => RoadmapStep {
            label,
            detail: "Cart expired".to_string(),
            status: StepStatus::Completed,
            timestamp: None,
        },
        CartStatus::Abandoned => {
            let remaining = expiry - elapsed;
            // Past the horizon but the expiry job has not run yet.
            let detail = if remaining <= TimeDelta::zero() {
                "expires now".to_string()
            } else {
                format!("expires in {}", format_countdown(remaining))
            };
            RoadmapStep { label, detail, status: StepStatus::Upcoming, timestamp: None }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone, Utc};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use crate::config::LifecycleConfig;
    use crate::domain::cart::{AbandonedCart, CartId, CartStatus};
    use crate::theme::Theme;

    use super::{build_roadmap, format_countdown, StepStatus};

    fn cart(status: CartStatus, notification_count: u32) -> AbandonedCart {
        AbandonedCart {
            id: CartId(Uuid::nil()),
            status,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            recovered_at: None,
            subtotal: Decimal::new(5400, 2),
            notification_count,
            notified_at: None,
            items: Vec::new(),
            event: None,
        }
    }

    fn steps(cart: &AbandonedCart, age: TimeDelta) -> Vec<super::RoadmapStep> {
        let config = LifecycleConfig::default();
        build_roadmap(cart, cart.created_at + age, &config.roadmap, &Theme::journey().roadmap)
    }

    #[test]
    fn always_five_steps_in_fixed_order() {
        for status in [CartStatus::Abandoned, CartStatus::Recovered, CartStatus::Expired] {
            let mut cart = cart(status, 0);
            if status == CartStatus::Recovered {
                cart.recovered_at = Some(cart.created_at + TimeDelta::hours(2));
            }
            let roadmap = steps(&cart, TimeDelta::hours(3));
            assert_eq!(roadmap.len(), 5);
            assert_eq!(roadmap[0].label, "Cart abandoned");
            assert_eq!(roadmap[1].label, "Reminder email #1");
            assert_eq!(roadmap[2].label, "Reminder email #2");
            assert_eq!(roadmap[3].label, "Final reminder");
            assert_eq!(roadmap[4].label, "Outcome");
        }
    }

    #[test]
    fn fresh_cart_counts_down_to_every_email() {
        let roadmap = steps(&cart(CartStatus::Abandoned, 0), TimeDelta::minutes(5));
        assert_eq!(roadmap[0].status, StepStatus::Completed);
        assert_eq!(roadmap[1].status, StepStatus::Upcoming);
        assert_eq!(roadmap[1].detail, "in 25m");
        assert_eq!(roadmap[2].status, StepStatus::Upcoming);
        assert_eq!(roadmap[3].status, StepStatus::Upcoming);
        assert_eq!(roadmap[4].status, StepStatus::Upcoming);
    }

    #[test]
    fn day_old_cart_with_one_send_matches_the_funnel_position() {
        let mut cart = cart(CartStatus::Abandoned, 1);
        cart.notified_at = Some(cart.created_at + TimeDelta::minutes(31));
        let roadmap = steps(&cart, TimeDelta::hours(25));

        assert_eq!(roadmap[1].status, StepStatus::Completed);
        assert_eq!(roadmap[1].timestamp, cart.notified_at);
        assert_eq!(roadmap[2].status, StepStatus::Active);
        assert_eq!(roadmap[2].detail, "Ready to send");
        assert_eq!(roadmap[3].status, StepStatus::Upcoming);
    }

    #[test]
    fn recovered_before_any_send_skips_all_three_emails() {
        let mut cart = cart(CartStatus::Recovered, 0);
        cart.recovered_at = Some(cart.created_at + TimeDelta::minutes(10));
        let roadmap = steps(&cart, TimeDelta::days(2));

        for step in &roadmap[1..4] {
            assert_eq!(step.status, StepStatus::Skipped);
        }
        assert_eq!(roadmap[4].status, StepStatus::Completed);
        assert_eq!(roadmap[4].timestamp, cart.recovered_at);
    }

    #[test]
    fn recovered_after_one_send_keeps_the_sent_step_completed() {
        let mut cart = cart(CartStatus::Recovered, 1);
        cart.recovered_at = Some(cart.created_at + TimeDelta::hours(1));
        let roadmap = steps(&cart, TimeDelta::days(1));

        assert_eq!(roadmap[1].status, StepStatus::Completed);
        assert_eq!(roadmap[2].status, StepStatus::Skipped);
        assert_eq!(roadmap[3].status, StepStatus::Skipped);
    }

    #[test]
    fn notification_count_may_skip_ahead() {
        // Count jumped straight to 3; every email step reads as sent even
        // though no per-send timestamps exist.
        let roadmap = steps(&cart(CartStatus::Abandoned, 3), TimeDelta::days(3));
        assert_eq!(roadmap[1].status, StepStatus::Completed);
        assert_eq!(roadmap[2].status, StepStatus::Completed);
        assert_eq!(roadmap[3].status, StepStatus::Completed);
        assert_eq!(roadmap[2].timestamp, None);
        assert_eq!(roadmap[3].timestamp, None);
    }

    #[test]
    fn expired_outcome_is_terminal_without_timestamp() {
        let roadmap = steps(&cart(CartStatus::Expired, 2), TimeDelta::days(8));
        assert_eq!(roadmap[4].status, StepStatus::Completed);
        assert_eq!(roadmap[4].timestamp, None);
        assert_eq!(roadmap[4].detail, "Cart expired");
    }

    #[test]
    fn open_outcome_counts_down_to_the_expiry_horizon() {
        let roadmap = steps(&cart(CartStatus::Abandoned, 0), TimeDelta::days(6));
        assert_eq!(roadmap[4].status, StepStatus::Upcoming);
        assert_eq!(roadmap[4].detail, "expires in 1d 0h");
    }

    #[test]
    fn abandoned_cart_past_the_horizon_reads_expires_now() {
        let roadmap = steps(&cart(CartStatus::Abandoned, 3), TimeDelta::days(8));
        assert_eq!(roadmap[4].status, StepStatus::Upcoming);
        assert_eq!(roadmap[4].detail, "expires now");
    }

    #[test]
    fn countdown_formats_by_magnitude() {
        assert_eq!(format_countdown(TimeDelta::minutes(-5)), "now");
        assert_eq!(format_countdown(TimeDelta::zero()), "now");
        assert_eq!(format_countdown(TimeDelta::minutes(12)), "12m");
        assert_eq!(format_countdown(TimeDelta::minutes(95)), "1h 35m");
        assert_eq!(format_countdown(TimeDelta::hours(50)), "2d 2h");
    }
}
