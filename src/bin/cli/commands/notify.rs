use std::io::BufRead;
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use motivation_lib::notifications::{DesktopNotifier, NotificationScheduler, NotificationTime};

use crate::app::App;
use crate::OutputFormat;

/// Validate and persist the daily notification time
pub fn run_set_time(app: &App, time: &str, format: &OutputFormat) -> Result<()> {
    let time: NotificationTime = time
        .parse()
        .context("Please enter time in HH:MM format")?;

    let mut settings = app.settings()?;
    settings.notification_time = time;
    settings.notifications_enabled = true;
    app.save_settings(&settings)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&settings)?),
        OutputFormat::Plain => println!("Notification time set to {}", time),
    }

    Ok(())
}

/// Disable the daily notification without forgetting the time
pub fn run_disable(app: &App, format: &OutputFormat) -> Result<()> {
    let mut settings = app.settings()?;
    settings.notifications_enabled = false;
    app.save_settings(&settings)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&settings)?),
        OutputFormat::Plain => println!("Daily notification disabled"),
    }

    Ok(())
}

pub fn run_status(app: &App, format: &OutputFormat) -> Result<()> {
    let settings = app.settings()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&settings)?),
        OutputFormat::Plain => {
            let state = if settings.notifications_enabled { "enabled" } else { "disabled" };
            println!("Daily notification at {} ({})", settings.notification_time, state);
        }
    }

    Ok(())
}

/// Run the scheduler in the foreground until stdin is closed or a line is entered
pub fn run_foreground(app: &App) -> Result<()> {
    let settings = app.settings()?;
    if !settings.notifications_enabled {
        bail!("Daily notification is disabled. Run `motivation-cli notify set-time HH:MM` first.");
    }

    let mut scheduler = NotificationScheduler::new(
        Arc::new(app.catalog.clone()),
        Arc::new(DesktopNotifier::new()),
    );
    scheduler.set_notification_time(settings.notification_time);
    scheduler
        .start()
        .context("Failed to start notification scheduler")?;

    println!(
        "Waiting to notify daily at {}. Press Enter to stop.",
        settings.notification_time
    );
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;

    scheduler.stop();
    Ok(())
}

/// Fire one notification immediately
pub fn run_test(app: &App, format: &OutputFormat) -> Result<()> {
    let scheduler = NotificationScheduler::new(
        Arc::new(app.catalog.clone()),
        Arc::new(DesktopNotifier::new()),
    );

    let Some(notification) = scheduler.fire_now().context("Failed to show notification")? else {
        bail!("No quote available");
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&notification)?),
        OutputFormat::Plain => println!("Notification sent: {}", notification.message),
    }

    Ok(())
}
