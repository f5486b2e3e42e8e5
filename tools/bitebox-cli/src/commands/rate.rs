//! Rating the experience after an order.

use anyhow::{anyhow, Result};
use bitebox_commerce::prelude::*;

use super::RateArgs;
use crate::context::Context;
use crate::output::Output;

/// Run the rate command.
pub async fn run(args: RateArgs, ctx: &Context) -> Result<()> {
    let log = ctx.feedback_log();

    if args.list {
        let records = log.list()?;
        print_feedback(&records, &ctx.output);
        return Ok(());
    }

    let feedback = build_feedback(&args)?;
    let saved = log.append(feedback)?;

    if ctx.output.is_json() {
        ctx.output.json(&saved);
    } else {
        ctx.output.success("Thank you for your feedback!");
        ctx.output.kv("Saved to", &log.path().display().to_string());
    }
    Ok(())
}

fn build_feedback(args: &RateArgs) -> Result<Feedback> {
    let stars = args
        .stars
        .ok_or_else(|| anyhow!("--stars is required when adding feedback"))?;
    let speed = DeliverySpeed::from_str(&args.delivery).ok_or_else(|| {
        anyhow!(
            "Unknown delivery speed: {} (use fast, average or slow)",
            args.delivery
        )
    })?;

    Ok(Feedback::new(
        stars,
        args.comment.trim(),
        args.recommend,
        speed,
    )?)
}

fn print_feedback(records: &[Feedback], output: &Output) {
    if output.is_json() {
        output.json(&records);
        return;
    }

    output.header("Saved Feedback");
    if records.is_empty() {
        output.info("No feedback yet. Add one with: bitebox rate --stars 5");
        return;
    }

    for feedback in records {
        let comment = if feedback.comment.is_empty() {
            "(no comment)"
        } else {
            feedback.comment.as_str()
        };
        output.info(&format!("{} {}", feedback.stars(), comment));
        output.kv(
            "Recommend",
            if feedback.recommend { "Yes" } else { "No" },
        );
        output.kv("Delivery", feedback.delivery_speed.display_name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(stars: Option<u8>, delivery: &str) -> RateArgs {
        RateArgs {
            stars,
            comment: "  Great pizza ".to_string(),
            recommend: true,
            delivery: delivery.to_string(),
            list: false,
        }
    }

    #[test]
    fn test_build_feedback() {
        let feedback = build_feedback(&args(Some(4), "Average")).unwrap();
        assert_eq!(feedback.rating, 4);
        assert_eq!(feedback.comment, "Great pizza");
        assert!(feedback.recommend);
        assert_eq!(feedback.delivery_speed, DeliverySpeed::Average);
    }

    #[test]
    fn test_build_feedback_rejects_bad_input() {
        assert!(build_feedback(&args(None, "fast")).is_err());
        assert!(build_feedback(&args(Some(0), "fast")).is_err());
        assert!(build_feedback(&args(Some(6), "fast")).is_err());
        assert!(build_feedback(&args(Some(3), "teleport")).is_err());
    }

    #[test]
    fn test_saved_feedback_lists_back() {
        let dir = tempfile::tempdir().unwrap();
        let log = FeedbackLog::open(dir.path().join("bitebox-feedback.json"));

        log.append(build_feedback(&args(Some(5), "fast")).unwrap())
            .unwrap();
        log.append(build_feedback(&args(Some(2), "slow")).unwrap())
            .unwrap();

        let ratings: Vec<u8> = log.list().unwrap().iter().map(|f| f.rating).collect();
        assert_eq!(ratings, [5, 2]);
    }
}
