use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use snoo_client::{Client, Context};
use snoo_core::output::{transform_subscription, SubscriptionOutput};
use snoo_core::subreddit::SubscribeAction;

use super::get::strip_prefix;

#[derive(Debug, clap::Args, Clone)]
pub struct SubscriptionOptions {
    /// Subreddit names, or fullnames (t5_...) with --id
    #[arg(value_name = "SUBREDDIT", required = true)]
    pub subreddits: Vec<String>,

    /// Treat the arguments as fullnames
    #[arg(long)]
    pub id: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(
    action: SubscribeAction,
    options: SubscriptionOptions,
    global: crate::Global,
) -> Result<()> {
    let targets = targets(&options);

    if global.verbose {
        eprintln!("{} {}...", describe(action), targets.join(", "));
    }

    let client = global.client()?;
    let ctx = crate::interruptible();
    let output = subscription_data(&client, &ctx, action, &targets, options.id).await?;

    if options.json {
        println!("{}", to_json(&output)?);
    } else {
        println!("{}", format_subscription_text(&output));
    }

    Ok(())
}

/// Names lose any r/ prefix; fullnames are passed as given.
fn targets(options: &SubscriptionOptions) -> Vec<String> {
    options
        .subreddits
        .iter()
        .map(|s| {
            if options.id {
                s.trim().to_string()
            } else {
                strip_prefix(s).to_string()
            }
        })
        .collect()
}

fn describe(action: SubscribeAction) -> &'static str {
    match action {
        SubscribeAction::Subscribe => "Subscribing to",
        SubscribeAction::Unsubscribe => "Unsubscribing from",
    }
}

/// Applies a subscription change and reports what was sent
pub async fn subscription_data(
    client: &Client,
    ctx: &Context,
    action: SubscribeAction,
    targets: &[String],
    by_id: bool,
) -> Result<SubscriptionOutput> {
    let subreddits = client.subreddits();
    let response = match (action, by_id) {
        (SubscribeAction::Subscribe, false) => subreddits.subscribe(ctx, targets).await,
        (SubscribeAction::Subscribe, true) => subreddits.subscribe_by_id(ctx, targets).await,
        (SubscribeAction::Unsubscribe, false) => subreddits.unsubscribe(ctx, targets).await,
        (SubscribeAction::Unsubscribe, true) => subreddits.unsubscribe_by_id(ctx, targets).await,
    }
    .wrap_err("Subscription request failed")?;

    Ok(transform_subscription(
        action,
        targets,
        by_id,
        response.status.as_u16(),
    ))
}

fn format_subscription_text(output: &SubscriptionOutput) -> String {
    let verb = if output.action == SubscribeAction::Subscribe.as_str() {
        "Subscribed to"
    } else {
        "Unsubscribed from"
    };

    let targets = output
        .subreddits
        .iter()
        .map(|s| {
            if output.by_id {
                s.clone()
            } else {
                format!("r/{s}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!("{} {}", verb.green().bold(), targets.bright_white())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(subreddits: &[&str], id: bool) -> SubscriptionOptions {
        SubscriptionOptions {
            subreddits: subreddits.iter().map(|s| s.to_string()).collect(),
            id,
            json: false,
        }
    }

    #[test]
    fn test_targets_strip_prefix_for_names() {
        assert_eq!(
            targets(&options(&["r/golang", "rust"], false)),
            vec!["golang", "rust"]
        );
    }

    #[test]
    fn test_targets_keep_fullnames() {
        assert_eq!(targets(&options(&[" t5_a", "t5_b"], true)), vec!["t5_a", "t5_b"]);
    }

    #[test]
    fn test_format_subscription_text() {
        let names = vec!["golang".to_string(), "rust".to_string()];
        let output = transform_subscription(SubscribeAction::Subscribe, &names, false, 200);

        let formatted = format_subscription_text(&output);

        assert!(formatted.contains("Subscribed to"));
        assert!(formatted.contains("r/golang, r/rust"));
    }

    #[test]
    fn test_format_unsubscription_by_id() {
        let ids = vec!["t5_a".to_string()];
        let output = transform_subscription(SubscribeAction::Unsubscribe, &ids, true, 200);

        let formatted = format_subscription_text(&output);

        assert!(formatted.contains("Unsubscribed from"));
        assert!(formatted.contains("t5_a"));
        assert!(!formatted.contains("r/t5_a"));
    }
}
